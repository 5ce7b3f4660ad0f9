use super::cost_matrix::CostMatrix;

/// Solves the minimum-cost bipartite assignment over a [`CostMatrix`].
///
/// Implementations are expected to return a complete assignment over
/// the smaller of the two dimensions — including pairs that land on a
/// forbidden cell, since a valid assignment may have no better option.
/// Callers must check `CostMatrix::is_forbidden` on every returned pair
/// before trusting it as a real correspondence.
pub trait AssignmentSolver {
    fn assign(&self, cost: &CostMatrix) -> Vec<(usize, usize)>;
}
