//! Schöning's random walk for k-SAT.
//!
//! Each step picks a clause uniformly among those the current assignment
//! violates, picks one of its literals uniformly, and flips that variable.
//! The walk stops once the formula is satisfied or the try budget is spent.

use log::{debug, trace};
use rand::Rng;

use crate::cnf::cnf::Cnf;
use crate::error::CnfError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    Satisfied,
    BudgetExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkReport {
    pub remaining: usize,
    pub flips: usize,
    pub outcome: WalkOutcome,
}

impl WalkReport {
    pub fn is_satisfied(&self) -> bool {
        self.outcome == WalkOutcome::Satisfied
    }
}

/// Runs the walk on `assignment` in place and returns the unused budget.
pub fn schoening_walk<R: Rng + ?Sized>(
    cnf: &Cnf,
    assignment: &mut [bool],
    tries: usize,
    rng: &mut R,
) -> Result<usize, CnfError> {
    walk(cnf, assignment, tries, rng).map(|report| report.remaining)
}

pub fn walk<R: Rng + ?Sized>(
    cnf: &Cnf,
    assignment: &mut [bool],
    tries: usize,
    rng: &mut R,
) -> Result<WalkReport, CnfError> {
    check_inputs(cnf, assignment, tries)?;
    debug!(
        "walk start: vars={} clauses={} tries={} unsat={}",
        cnf.num_vars,
        cnf.clauses.len(),
        tries,
        cnf.count_unsatisfied(assignment)
    );

    let mut remaining = tries;
    while remaining > 0 {
        if cnf.eval_formula(assignment) {
            break;
        }

        let Some(ci) = pick_unsatisfied(cnf, assignment, rng) else {
            panic!(
                "formula reported unsatisfied but no clause is violated (clauses={}, remaining={})",
                cnf.clauses.len(),
                remaining
            );
        };
        let clause = &cnf.clauses[ci];
        let lit = clause[rng.random_range(0..clause.len())];
        let idx = lit.index();
        assignment[idx] = !assignment[idx];
        trace!("flip var={} clause={} now={}", lit.var, ci, assignment[idx]);

        remaining -= 1;
    }

    // the last flip may have satisfied the formula while spending the budget
    let outcome = if cnf.eval_formula(assignment) {
        WalkOutcome::Satisfied
    } else {
        WalkOutcome::BudgetExhausted
    };
    debug!(
        "walk end: outcome={:?} flips={} remaining={}",
        outcome,
        tries - remaining,
        remaining
    );
    Ok(WalkReport {
        remaining,
        flips: tries - remaining,
        outcome,
    })
}

fn check_inputs(cnf: &Cnf, assignment: &[bool], tries: usize) -> Result<(), CnfError> {
    if assignment.len() != cnf.num_vars as usize {
        return Err(CnfError::AssignmentLength {
            expected: cnf.num_vars as usize,
            actual: assignment.len(),
        });
    }
    cnf.check_literals()?;
    // with no budget the walk never picks a literal
    if tries > 0 {
        cnf.check_no_empty_clause()?;
    }
    Ok(())
}

/// Reservoir sample over the clauses violated right now. Every violated
/// clause is kept with probability 1/n where n is the final count.
fn pick_unsatisfied<R: Rng + ?Sized>(cnf: &Cnf, assignment: &[bool], rng: &mut R) -> Option<usize> {
    let mut picked = None;
    for (seen, ci) in cnf.unsatisfied_clauses(assignment).enumerate() {
        if rng.random_range(0..=seen) == 0 {
            picked = Some(ci);
        }
    }
    picked
}
