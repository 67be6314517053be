use varisat::ExtendFormula;

use crate::cnf::cnf::Cnf;
use crate::error::CnfError;

/// Complete check with varisat. Returns a model when one exists, `None`
/// when the formula is unsatisfiable.
pub fn is_satisfiable(cnf: &Cnf) -> Result<Option<Vec<bool>>, CnfError> {
    cnf.validate()?;
    let mut solver = varisat::Solver::new();
    let vars = (0..cnf.num_vars)
        .map(|_| solver.new_var())
        .collect::<Vec<_>>();
    for clause in &cnf.clauses {
        let lits = clause
            .iter()
            .map(|lit| varisat::Lit::from_var(vars[lit.index()], lit.sign))
            .collect::<Vec<_>>();
        solver.add_clause(&lits);
    }

    match solver.solve() {
        Ok(true) => {
            let model = solver.model().unwrap_or_default();
            // vars missing from the model are free; false is as good as any
            let values = vars
                .iter()
                .map(|v| model.contains(&v.lit(true)))
                .collect();
            Ok(Some(values))
        }
        Ok(false) => Ok(None),
        Err(e) => Err(CnfError::Oracle(e.to_string())),
    }
}
