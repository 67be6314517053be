use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use log::info;

use kwalk::cnf::cnf::Cnf;
use kwalk::cnf::dimacs::{to_dimacs, write_result};
use kwalk::cnf::random::random_kcnf;
use kwalk::rng::{fresh_seed, seeded};
use kwalk::sat::oracle::is_satisfiable;
use kwalk::sat::restart::{SearchConfig, solve, solve_parallel};

#[derive(Debug, Parser)]
#[command(name = "kwalk")]
#[command(about = "Schöning random walk on random k-SAT instances")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Args)]
struct InstanceArgs {
    #[arg(long, default_value_t = 10)]
    vars: u32,
    #[arg(long, default_value_t = 43)]
    clauses: usize,
    #[arg(long, default_value_t = 3)]
    k: usize,
    /// Drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print a random k-CNF in DIMACS form.
    Gen {
        #[command(flatten)]
        instance: InstanceArgs,
        #[arg(long)]
        emit: Option<String>,
    },
    /// Generate an instance and run the walk on it.
    Solve {
        #[command(flatten)]
        instance: InstanceArgs,
        /// Flips per walk; three per variable when omitted.
        #[arg(long)]
        tries: Option<usize>,
        #[arg(long, default_value_t = 1)]
        restarts: usize,
        #[arg(long, default_value_t = false)]
        parallel: bool,
        /// Ask varisat whether the instance is satisfiable at all.
        #[arg(long, default_value_t = false)]
        check: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Gen { instance, emit } => gen_cmd(&instance, emit.as_deref())?,
        Cmd::Solve {
            instance,
            tries,
            restarts,
            parallel,
            check,
        } => solve_cmd(&instance, tries, restarts, parallel, check)?,
    }
    Ok(())
}

fn build_instance(args: &InstanceArgs) -> Result<(Cnf, u64)> {
    if args.vars == 0 {
        bail!("--vars must be >= 1");
    }
    let seed = args.seed.unwrap_or_else(fresh_seed);
    info!("seed={}", seed);
    let mut rng = seeded(seed);
    let cnf = random_kcnf(args.clauses, args.k, args.vars, &mut rng)?;
    Ok((cnf, seed))
}

fn gen_cmd(args: &InstanceArgs, emit: Option<&str>) -> Result<()> {
    let (cnf, seed) = build_instance(args)?;
    let text = to_dimacs(&cnf);
    match emit {
        Some(path) => {
            std::fs::write(path, text)?;
            println!(
                "vars={} clauses={} k={} seed={} emit={}",
                cnf.num_vars,
                cnf.clauses.len(),
                args.k,
                seed,
                path
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn solve_cmd(
    args: &InstanceArgs,
    tries: Option<usize>,
    restarts: usize,
    parallel: bool,
    check: bool,
) -> Result<()> {
    if restarts == 0 {
        bail!("--restarts must be >= 1");
    }
    let (cnf, seed) = build_instance(args)?;
    let cfg = SearchConfig {
        tries_per_walk: tries,
        max_restarts: restarts,
        seed,
    };
    let report = if parallel {
        solve_parallel(&cnf, &cfg)?
    } else {
        solve(&cnf, &cfg)?
    };

    let assignment = report.assignment.as_deref().unwrap_or(report.last.as_slice());
    print!("{}", write_result(&cnf, assignment));
    println!(
        "c seed={} tries={} restarts={} flips={}",
        seed,
        cfg.tries_for(&cnf),
        report.restarts,
        report.total_flips
    );

    if check && !report.is_satisfied() {
        let verdict = match is_satisfiable(&cnf)? {
            Some(_) => "satisfiable",
            None => "unsatisfiable",
        };
        println!("c oracle={}", verdict);
    }
    Ok(())
}
