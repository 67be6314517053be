use crate::error::CnfError;

/// A literal over a 1-indexed variable. `sign == true` is the positive
/// polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    pub fn from_dimacs(value: i64) -> Result<Self, CnfError> {
        if value == 0 {
            return Err(CnfError::ZeroLiteral);
        }
        let var =
            u32::try_from(value.unsigned_abs()).map_err(|_| CnfError::LiteralTooWide(value))?;
        Ok(Self::new(var, value > 0))
    }

    pub fn to_dimacs(self) -> i64 {
        let v = self.var as i64;
        if self.sign { v } else { -v }
    }

    /// Index of the variable inside an assignment slice.
    pub fn index(self) -> usize {
        self.var as usize - 1
    }
}

pub type Clause = Vec<Lit>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    pub num_vars: u32,
    pub clauses: Vec<Clause>,
}

impl Cnf {
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn from_dimacs_clauses(num_vars: u32, clauses: &[Vec<i64>]) -> Result<Self, CnfError> {
        let mut cnf = Self::new(num_vars);
        for raw in clauses {
            let clause = raw
                .iter()
                .map(|&v| Lit::from_dimacs(v))
                .collect::<Result<Clause, _>>()?;
            if let Some(bad) = clause.iter().find(|l| l.var > num_vars) {
                return Err(CnfError::VarOutOfRange {
                    var: bad.var,
                    num_vars,
                });
            }
            cnf.add_clause(clause);
        }
        Ok(cnf)
    }

    pub fn max_clause_width(&self) -> usize {
        self.clauses.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Checks the shape a random walk needs: literals in range and no empty
    /// clause.
    pub fn validate(&self) -> Result<(), CnfError> {
        self.check_literals()?;
        self.check_no_empty_clause()
    }

    pub fn check_no_empty_clause(&self) -> Result<(), CnfError> {
        match self.clauses.iter().position(Vec::is_empty) {
            Some(index) => Err(CnfError::EmptyClause { index }),
            None => Ok(()),
        }
    }

    /// Every literal names a variable in `1..=num_vars`.
    pub fn check_literals(&self) -> Result<(), CnfError> {
        for clause in &self.clauses {
            for lit in clause {
                if lit.var == 0 {
                    return Err(CnfError::ZeroLiteral);
                }
                if lit.var > self.num_vars {
                    return Err(CnfError::VarOutOfRange {
                        var: lit.var,
                        num_vars: self.num_vars,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn eval_lit(lit: Lit, assignment: &[bool]) -> bool {
        assignment[lit.index()] == lit.sign
    }

    /// An empty clause is never satisfied.
    pub fn eval_clause(clause: &[Lit], assignment: &[bool]) -> bool {
        clause.iter().any(|&lit| Self::eval_lit(lit, assignment))
    }

    pub fn eval_formula(&self, assignment: &[bool]) -> bool {
        self.clauses
            .iter()
            .all(|clause| Self::eval_clause(clause, assignment))
    }

    pub fn unsatisfied_clauses<'a>(
        &'a self,
        assignment: &'a [bool],
    ) -> impl Iterator<Item = usize> + 'a {
        self.clauses
            .iter()
            .enumerate()
            .filter(move |(_, clause)| !Self::eval_clause(clause, assignment))
            .map(|(i, _)| i)
    }

    pub fn count_unsatisfied(&self, assignment: &[bool]) -> usize {
        self.unsatisfied_clauses(assignment).count()
    }
}
