use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CnfError {
    #[error("literal 0 is not a variable")]
    ZeroLiteral,
    #[error("literal {0} does not fit a 32-bit variable")]
    LiteralTooWide(i64),
    #[error("variable {var} is out of range 1..={num_vars}")]
    VarOutOfRange { var: u32, num_vars: u32 },
    #[error("cannot draw {k} distinct variables from {num_vars}")]
    ClauseWiderThanVars { k: usize, num_vars: u32 },
    #[error("clause {index} is empty")]
    EmptyClause { index: usize },
    #[error("assignment has {actual} values, formula has {expected} variables")]
    AssignmentLength { expected: usize, actual: usize },
    #[error("oracle failed: {0}")]
    Oracle(String),
}
