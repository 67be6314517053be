use log::info;
use rayon::prelude::*;

use crate::cnf::cnf::Cnf;
use crate::cnf::random::random_assignment;
use crate::error::CnfError;
use crate::rng::restart_rng;
use crate::sat::schoening::walk;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Flips per walk. `None` means three per variable.
    pub tries_per_walk: Option<usize>,
    pub max_restarts: usize,
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tries_per_walk: None,
            max_restarts: 1,
            seed: 0,
        }
    }
}

impl SearchConfig {
    pub fn tries_for(&self, cnf: &Cnf) -> usize {
        self.tries_per_walk
            .unwrap_or_else(|| 3 * cnf.num_vars as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Satisfying assignment, if any restart found one.
    pub assignment: Option<Vec<bool>>,
    /// Restarts run, counting the successful one.
    pub restarts: usize,
    pub total_flips: usize,
    /// Assignment the final restart ended on.
    pub last: Vec<bool>,
}

impl SolveReport {
    pub fn is_satisfied(&self) -> bool {
        self.assignment.is_some()
    }
}

struct RestartRun {
    index: usize,
    assignment: Vec<bool>,
    flips: usize,
    satisfied: bool,
}

fn run_restart(cnf: &Cnf, cfg: &SearchConfig, index: usize) -> Result<RestartRun, CnfError> {
    let mut rng = restart_rng(cfg.seed, index);
    let mut assignment = random_assignment(cnf.num_vars, &mut rng);
    let report = walk(cnf, &mut assignment, cfg.tries_for(cnf), &mut rng)?;
    info!(
        "restart {}: {:?} after {} flips",
        index, report.outcome, report.flips
    );
    Ok(RestartRun {
        index,
        assignment,
        flips: report.flips,
        satisfied: report.is_satisfied(),
    })
}

/// Restarts the walk from fresh random assignments until one satisfies the
/// formula or `max_restarts` runs have failed.
pub fn solve(cnf: &Cnf, cfg: &SearchConfig) -> Result<SolveReport, CnfError> {
    cnf.check_literals()?;
    let mut total_flips = 0usize;
    let mut last = vec![false; cnf.num_vars as usize];
    for index in 0..cfg.max_restarts {
        let run = run_restart(cnf, cfg, index)?;
        total_flips += run.flips;
        if run.satisfied {
            return Ok(SolveReport {
                assignment: Some(run.assignment.clone()),
                restarts: index + 1,
                total_flips,
                last: run.assignment,
            });
        }
        last = run.assignment;
    }
    Ok(SolveReport {
        assignment: None,
        restarts: cfg.max_restarts,
        total_flips,
        last,
    })
}

/// Same result as [`solve`] for the same config, with restarts spread over
/// the rayon pool.
pub fn solve_parallel(cnf: &Cnf, cfg: &SearchConfig) -> Result<SolveReport, CnfError> {
    cnf.check_literals()?;
    let tries = cfg.tries_for(cnf);
    let Some(final_index) = cfg.max_restarts.checked_sub(1) else {
        return Ok(SolveReport {
            assignment: None,
            restarts: 0,
            total_flips: 0,
            last: vec![false; cnf.num_vars as usize],
        });
    };
    // the final restart is kept even when it fails, so its assignment can be
    // reported without running it again
    let run = (0..cfg.max_restarts)
        .into_par_iter()
        .map(|index| run_restart(cnf, cfg, index))
        .find_first(|run| match run {
            Ok(r) => r.satisfied || r.index == final_index,
            Err(_) => true,
        })
        .transpose()?;
    let Some(run) = run else {
        unreachable!("restart {} always matches", final_index);
    };

    // a failed walk always spends its whole budget
    let total_flips = run.index * tries + run.flips;
    if run.satisfied {
        Ok(SolveReport {
            assignment: Some(run.assignment.clone()),
            restarts: run.index + 1,
            total_flips,
            last: run.assignment,
        })
    } else {
        Ok(SolveReport {
            assignment: None,
            restarts: cfg.max_restarts,
            total_flips,
            last: run.assignment,
        })
    }
}
