use rand::Rng;
use rand::seq::index::sample;

use super::cnf::{Cnf, Lit};
use crate::error::CnfError;

/// Uniform random k-CNF: every clause draws `k` distinct variables without
/// replacement and an independent fair polarity per literal. Clauses may
/// repeat.
pub fn random_kcnf<R: Rng + ?Sized>(
    num_clauses: usize,
    k: usize,
    num_vars: u32,
    rng: &mut R,
) -> Result<Cnf, CnfError> {
    if k > num_vars as usize {
        return Err(CnfError::ClauseWiderThanVars { k, num_vars });
    }
    let mut cnf = Cnf::new(num_vars);
    for _ in 0..num_clauses {
        let clause = sample(rng, num_vars as usize, k)
            .into_iter()
            .map(|idx| Lit::new(idx as u32 + 1, rng.random::<bool>()))
            .collect::<Vec<_>>();
        cnf.add_clause(clause);
    }
    Ok(cnf)
}

pub fn random_assignment<R: Rng + ?Sized>(num_vars: u32, rng: &mut R) -> Vec<bool> {
    (0..num_vars).map(|_| rng.random::<bool>()).collect()
}
