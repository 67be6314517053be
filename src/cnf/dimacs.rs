use super::cnf::Cnf;

pub fn to_dimacs(cnf: &Cnf) -> String {
    let mut out = String::new();
    out.push_str(&format!("p cnf {} {}\n", cnf.num_vars, cnf.clauses.len()));
    for clause in &cnf.clauses {
        for &lit in clause {
            out.push_str(&format!("{:3} ", lit.to_dimacs()));
        }
        out.push_str("0\n");
    }
    out
}

/// DIMACS listing of `cnf` followed by a comment trailer holding the
/// satisfaction flag and the assignment as a bit string.
pub fn write_result(cnf: &Cnf, assignment: &[bool]) -> String {
    let mut out = String::from("c cnf (num variables) (num clauses) (num literals)\n");
    out.push_str(&to_dimacs(cnf));
    out.push_str("c (satisfied: 0/1) (cfg: v_1 ... v_N)\n");
    out.push_str(&format!(
        "c {} {}\n",
        u8::from(cnf.eval_formula(assignment)),
        assignment_bits(assignment)
    ));
    out
}

pub fn assignment_bits(assignment: &[bool]) -> String {
    assignment
        .iter()
        .map(|&v| if v { '1' } else { '0' })
        .collect()
}
