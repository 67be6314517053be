use kwalk::cnf::cnf::Cnf;
use kwalk::cnf::random::{random_assignment, random_kcnf};
use kwalk::rng::{restart_rng, seeded};
use kwalk::sat::oracle::is_satisfiable;
use kwalk::sat::restart::{SearchConfig, solve, solve_parallel};

#[test]
fn restarts_find_model_for_easy_instance() {
    let cnf = random_kcnf(25, 3, 12, &mut seeded(21)).expect("cnf");
    let cfg = SearchConfig {
        tries_per_walk: None,
        max_restarts: 200,
        seed: 5,
    };
    let report = solve(&cnf, &cfg).expect("solve");
    let model = report.assignment.as_ref().expect("model");
    assert!(cnf.eval_formula(model));
    assert!(report.restarts >= 1 && report.restarts <= 200);
    assert!(report.total_flips <= report.restarts * cfg.tries_for(&cnf));
}

#[test]
fn parallel_matches_sequential() {
    for seed in 0..5 {
        let cnf = random_kcnf(43, 3, 10, &mut seeded(100 + seed)).expect("cnf");
        let cfg = SearchConfig {
            tries_per_walk: Some(30),
            max_restarts: 40,
            seed,
        };
        let seq = solve(&cnf, &cfg).expect("solve");
        let par = solve_parallel(&cnf, &cfg).expect("solve");
        assert_eq!(seq, par);
    }
}

#[test]
fn unsatisfiable_formula_spends_every_restart() {
    let cnf = Cnf::from_dimacs_clauses(1, &[vec![1], vec![-1]]).expect("cnf");
    let cfg = SearchConfig {
        tries_per_walk: Some(4),
        max_restarts: 6,
        seed: 1,
    };
    let report = solve(&cnf, &cfg).expect("solve");
    assert!(!report.is_satisfied());
    assert_eq!(report.restarts, 6);
    assert_eq!(report.total_flips, 24);
    assert_eq!(solve_parallel(&cnf, &cfg).expect("solve"), report);
}

#[test]
fn default_budget_is_three_per_variable() {
    let cnf = Cnf::new(10);
    assert_eq!(SearchConfig::default().tries_for(&cnf), 30);
}

#[test]
fn oracle_agrees_with_walk_models() {
    for seed in 0..10 {
        let cnf = random_kcnf(43, 3, 10, &mut seeded(seed)).expect("cnf");
        let cfg = SearchConfig {
            tries_per_walk: Some(100),
            max_restarts: 100,
            seed,
        };
        let report = solve(&cnf, &cfg).expect("solve");
        let oracle = is_satisfiable(&cnf).expect("oracle");
        if let Some(model) = &oracle {
            assert!(cnf.eval_formula(model));
        }
        if report.is_satisfied() {
            assert!(oracle.is_some());
        }
    }
}

#[test]
fn oracle_detects_contradiction() {
    let cnf = Cnf::from_dimacs_clauses(2, &[vec![1], vec![-1], vec![2]]).expect("cnf");
    assert_eq!(is_satisfiable(&cnf).expect("oracle"), None);
}

#[test]
fn first_restart_start_is_independent_of_instance() {
    // a 3-literal clause is satisfied by 7 of 8 uniform assignments
    let seeds = 4000u64;
    let mut hits = 0usize;
    for seed in 0..seeds {
        let cnf = random_kcnf(43, 3, 10, &mut seeded(seed)).expect("cnf");
        let start = random_assignment(10, &mut restart_rng(seed, 0));
        if Cnf::eval_clause(&cnf.clauses[0], &start) {
            hits += 1;
        }
    }
    let rate = hits as f64 / seeds as f64;
    assert!((0.855..0.895).contains(&rate), "rate={}", rate);
}

#[test]
fn failed_parallel_search_reports_final_restart_assignment() {
    let cnf = Cnf::from_dimacs_clauses(2, &[vec![1], vec![-1], vec![2]]).expect("cnf");
    let cfg = SearchConfig {
        tries_per_walk: Some(5),
        max_restarts: 3,
        seed: 11,
    };
    let report = solve_parallel(&cnf, &cfg).expect("solve");
    assert!(!report.is_satisfied());
    assert_eq!(report.restarts, 3);
    assert_eq!(report.total_flips, 15);

    let mut rng = restart_rng(11, 2);
    let mut expected = random_assignment(2, &mut rng);
    kwalk::sat::schoening::walk(&cnf, &mut expected, 5, &mut rng).expect("walk");
    assert_eq!(report.last, expected);
}

#[test]
fn zero_restarts_reports_nothing_run() {
    let cnf = Cnf::from_dimacs_clauses(2, &[vec![1, 2]]).expect("cnf");
    let cfg = SearchConfig {
        tries_per_walk: None,
        max_restarts: 0,
        seed: 0,
    };
    let report = solve_parallel(&cnf, &cfg).expect("solve");
    assert_eq!(report.restarts, 0);
    assert_eq!(report.total_flips, 0);
    assert_eq!(report, solve(&cnf, &cfg).expect("solve"));
}
