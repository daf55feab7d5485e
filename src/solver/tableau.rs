// Dense simplex tableau with an implicit slack-variable basis
//
// Layout: row 0 is the reduced-cost (objective) row, rows 1..=m are the
// constraints. Columns 0..n are decision variables, columns n..n+m are the
// slacks, column n+m is the right-hand side.

/// Terminal state of the pivoting loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotOutcome {
    /// No negative reduced cost remains
    Optimal,
    /// The entering variable is unbounded below the ratio test
    Unbounded,
}

/// The (m+1) × (n+m+1) simplex tableau, mutated in place across pivots.
pub struct Tableau {
    rows: Vec<Vec<f64>>,
    /// basis[i] = column currently basic in constraint row i
    basis: Vec<usize>,
    num_vars: usize,
    num_constraints: usize,
}

impl Tableau {
    /// Build the initial tableau for: optimize c^T x s.t. A x <= b, x >= 0.
    ///
    /// Minimization is run as maximization of the negated objective, so the
    /// objective row holds -c for maximization and +c for minimization and the
    /// same "drive reduced costs non-negative" loop serves both directions.
    ///
    /// Each constraint row gets a slack column as its initial basic variable,
    /// unless some decision column j already has a coefficient of exactly 1 in
    /// that row and a zero objective coefficient. Such a unit column is reused
    /// as the row's starting basis instead of a slack. This is a documented
    /// heuristic standing in for a two-phase method; it is only sound for
    /// problems with b >= 0, which the caller must guarantee.
    pub fn new(c: &[f64], a: &[Vec<f64>], b: &[f64], maximize: bool) -> Self {
        let n = c.len();
        let m = b.len();

        let mut rows = vec![vec![0.0; n + m + 1]; m + 1];
        let mut basis = vec![0usize; m];

        for (j, &cj) in c.iter().enumerate() {
            rows[0][j] = if maximize { -cj } else { cj };
        }

        for i in 0..m {
            rows[i + 1][..n].copy_from_slice(&a[i]);
            match reusable_unit_column(&a[i], c) {
                Some(j) => basis[i] = j,
                None => {
                    rows[i + 1][n + i] = 1.0;
                    basis[i] = n + i;
                }
            }
            rows[i + 1][n + m] = b[i];
        }

        Self {
            rows,
            basis,
            num_vars: n,
            num_constraints: m,
        }
    }

    /// Run the pivoting loop to termination, returning the outcome and the
    /// number of pivots performed.
    ///
    /// `eps` is the minimum pivot-column magnitude admitted by the ratio test;
    /// with eps = 0 the test degrades to a plain "entry > 0" check. There is
    /// no anti-cycling rule beyond first-index tie-breaking, so degenerate
    /// inputs can in principle cycle.
    pub fn run(&mut self, eps: f64) -> (PivotOutcome, u64) {
        let mut iterations = 0u64;
        loop {
            let pivot_col = match self.entering_column() {
                Some(col) => col,
                None => return (PivotOutcome::Optimal, iterations),
            };

            let pivot_row = match self.leaving_row(pivot_col, eps) {
                Some(row) => row,
                None => return (PivotOutcome::Unbounded, iterations),
            };

            self.pivot(pivot_row, pivot_col);
            iterations += 1;
        }
    }

    /// Column with the most negative reduced cost, scanning left to right so
    /// the first column achieving the minimum wins ties. None once no entry is
    /// negative (optimum reached).
    fn entering_column(&self) -> Option<usize> {
        let width = self.num_vars + self.num_constraints;
        let mut pivot_col = None;
        let mut min_val = 0.0;
        for j in 0..width {
            if self.rows[0][j] < min_val {
                min_val = self.rows[0][j];
                pivot_col = Some(j);
            }
        }
        pivot_col
    }

    /// Minimum-ratio test over constraint rows. Rows whose pivot-column entry
    /// does not exceed `eps` cannot bound the entering variable and are
    /// skipped; ties go to the first row in index order. None when every row
    /// is skipped, meaning the problem is unbounded.
    fn leaving_row(&self, pivot_col: usize, eps: f64) -> Option<usize> {
        let rhs = self.num_vars + self.num_constraints;
        let mut pivot_row = None;
        let mut min_ratio = f64::INFINITY;
        for i in 1..=self.num_constraints {
            let entry = self.rows[i][pivot_col];
            if entry > eps {
                let ratio = self.rows[i][rhs] / entry;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    pivot_row = Some(i);
                }
            }
        }
        pivot_row
    }

    /// Normalize the pivot row, eliminate the pivot column from every other
    /// row (the objective row included, which keeps it the reduced-cost row),
    /// and mark the entering column basic in the pivot row.
    fn pivot(&mut self, pivot_row: usize, pivot_col: usize) {
        let width = self.num_vars + self.num_constraints + 1;

        let pivot_value = self.rows[pivot_row][pivot_col];
        for j in 0..width {
            self.rows[pivot_row][j] /= pivot_value;
        }

        for i in 0..=self.num_constraints {
            if i == pivot_row {
                continue;
            }
            let factor = self.rows[i][pivot_col];
            for j in 0..width {
                self.rows[i][j] -= factor * self.rows[pivot_row][j];
            }
        }

        self.basis[pivot_row - 1] = pivot_col;
    }

    /// Read the decision-variable values off the final tableau: for each row
    /// whose basic variable is a decision column, the row's RHS rounded to two
    /// decimals; every other variable stays at its default of zero.
    pub fn solution(&self) -> Vec<f64> {
        let rhs = self.num_vars + self.num_constraints;
        let mut x = vec![0.0; self.num_vars];
        for (i, &col) in self.basis.iter().enumerate() {
            if col < self.num_vars {
                x[col] = round_to(self.rows[i + 1][rhs], 2);
            }
        }
        x
    }

    /// Objective value from the final tableau, negated back for minimization
    /// problems, rounded to two decimals.
    pub fn objective_value(&self, maximize: bool) -> f64 {
        let rhs = self.num_vars + self.num_constraints;
        let z = self.rows[0][rhs];
        round_to(if maximize { z } else { -z }, 2)
    }

    #[cfg(test)]
    pub(crate) fn basis(&self) -> &[usize] {
        &self.basis
    }
}

/// Decision column usable as row's initial basic variable: coefficient of
/// exactly 1 in this row and a zero objective coefficient.
fn reusable_unit_column(row: &[f64], c: &[f64]) -> Option<usize> {
    row.iter()
        .zip(c.iter())
        .position(|(&a, &c)| a == 1.0 && c == 0.0)
}

fn round_to(val: f64, precision: u32) -> f64 {
    let ratio = 10f64.powi(precision as i32);
    (val * ratio).round() / ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slack_basis_when_no_unit_column_exists() {
        let c = vec![2.0, 3.0];
        let a = vec![vec![1.0, 2.0], vec![3.0, 1.0]];
        let b = vec![10.0, 15.0];

        let tableau = Tableau::new(&c, &a, &b, true);
        // Both rows fall back to their slack columns (n + i)
        assert_eq!(tableau.basis(), &[2, 3]);
    }

    #[test]
    fn unit_column_with_zero_cost_is_reused() {
        // Column 2 has cost 0 and a 1 in row 0, so it seeds row 0's basis and
        // that row gets no slack.
        let c = vec![2.0, 3.0, 0.0];
        let a = vec![vec![1.0, 2.0, 1.0], vec![3.0, 1.0, 0.0]];
        let b = vec![10.0, 15.0];

        let tableau = Tableau::new(&c, &a, &b, true);
        assert_eq!(tableau.basis(), &[2, 3 + 1]);
        assert_eq!(tableau.rows[1][3], 0.0); // slack column left empty
    }

    #[test]
    fn unit_column_with_nonzero_cost_is_not_reused() {
        let c = vec![2.0, 3.0];
        let a = vec![vec![1.0, 2.0]];
        let b = vec![10.0];

        let tableau = Tableau::new(&c, &a, &b, true);
        assert_eq!(tableau.basis(), &[2]);
    }

    #[test]
    fn minimization_keeps_objective_row_sign() {
        let c = vec![1.0, -2.0];
        let a = vec![vec![1.0, 1.0]];
        let b = vec![4.0];

        let max = Tableau::new(&c, &a, &b, true);
        let min = Tableau::new(&c, &a, &b, false);
        assert_eq!(max.rows[0][0], -1.0);
        assert_eq!(max.rows[0][1], 2.0);
        assert_eq!(min.rows[0][0], 1.0);
        assert_eq!(min.rows[0][1], -2.0);
    }

    #[test]
    fn zero_tolerance_still_admits_positive_pivots() {
        // max x s.t. x <= 5: one pivot, bounded, must not loop or panic
        let c = vec![1.0];
        let a = vec![vec![1.0]];
        let b = vec![5.0];

        let mut tableau = Tableau::new(&c, &a, &b, true);
        let (outcome, iterations) = tableau.run(0.0);
        assert_eq!(outcome, PivotOutcome::Optimal);
        assert_eq!(iterations, 1);
        assert_eq!(tableau.solution(), vec![5.0]);
        assert_eq!(tableau.objective_value(true), 5.0);
    }

    #[test]
    fn unbounded_when_no_row_survives_ratio_test() {
        // max x + y s.t. -x + y <= 1: x can grow forever
        let c = vec![1.0, 1.0];
        let a = vec![vec![-1.0, 1.0]];
        let b = vec![1.0];

        let mut tableau = Tableau::new(&c, &a, &b, true);
        let (outcome, _) = tableau.run(1e-9);
        assert_eq!(outcome, PivotOutcome::Unbounded);
    }

    #[test]
    fn ratio_test_ties_go_to_first_row() {
        // Both rows give ratio 4 for the entering column; row 1 must leave.
        let c = vec![1.0];
        let a = vec![vec![1.0], vec![1.0]];
        let b = vec![4.0, 4.0];

        let mut tableau = Tableau::new(&c, &a, &b, true);
        let (outcome, _) = tableau.run(1e-9);
        assert_eq!(outcome, PivotOutcome::Optimal);
        assert_eq!(tableau.basis()[0], 0);
        assert_eq!(tableau.basis()[1], 2);
    }
}
