use pathfinding::prelude::{kuhn_munkres_min, Matrix};

use crate::assignment::domain::cost_matrix::CostMatrix;
use crate::assignment::domain::solver::AssignmentSolver;

/// Scales floating-point costs into the bounded integer domain the
/// Kuhn-Munkres implementation requires.
const COST_SCALE: f64 = 1_000_000.0;

/// Minimum-cost assignment backed by `pathfinding`'s Kuhn-Munkres
/// (Hungarian algorithm) implementation.
///
/// `kuhn_munkres_min` only accepts matrices with `rows <= columns`, so
/// a matrix with more rows than columns is transposed before solving
/// and the resulting pairs are flipped back.
#[derive(Debug, Default, Clone, Copy)]
pub struct KuhnMunkresSolver;

impl KuhnMunkresSolver {
    pub fn new() -> Self {
        Self
    }
}

impl AssignmentSolver for KuhnMunkresSolver {
    fn assign(&self, cost: &CostMatrix) -> Vec<(usize, usize)> {
        let rows = cost.rows();
        let cols = cost.cols();
        if rows == 0 || cols == 0 {
            return Vec::new();
        }

        // Any cost at or beyond `forbidden` is clamped to a shared
        // ceiling. `kuhn_munkres_min` sums up to `min(rows, cols)` cell
        // costs into its total, so the ceiling must shrink with the
        // matrix's own dimensions to keep that sum from overflowing
        // i64, regardless of how large a caller-chosen forbidden cost
        // is.
        let clamped_forbidden = i64::MAX / (2 * rows.max(cols).max(1) as i64);
        let scale = |value: f64| -> i64 {
            if value >= cost.forbidden() {
                clamped_forbidden
            } else {
                (value * COST_SCALE).round() as i64
            }
        };

        let transpose = rows > cols;
        let (weight_rows, weight_cols) = if transpose { (cols, rows) } else { (rows, cols) };

        let mut weights = Matrix::new(weight_rows, weight_cols, 0i64);
        for r in 0..rows {
            for c in 0..cols {
                let (wr, wc) = if transpose { (c, r) } else { (r, c) };
                weights[(wr, wc)] = scale(cost.get(r, c));
            }
        }

        let (_, assignment) = kuhn_munkres_min(&weights);

        assignment
            .into_iter()
            .enumerate()
            .map(|(i, j)| if transpose { (j, i) } else { (i, j) })
            .collect()
    }
}
