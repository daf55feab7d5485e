// Dense Tableau Simplex Solver
// Implements the SolverService interface for the in-crate tableau method
// This is an adapter pattern - translates our domain models to the tableau core

use crate::domain::{
    models::{OptimizationProblem, Solution, SolutionQuality, SolverStatistics},
    solver_service::{validate_shapes, Result, SolverError, SolverService},
    value_objects::{ConstraintType, SolutionStatus},
};
use crate::solver::tableau::{PivotOutcome, Tableau};
use std::time::Instant;

pub struct TableauSolver;

impl TableauSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableauSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for TableauSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution> {
        // Validate first
        self.validate(problem)?;

        let start_time = Instant::now();
        let maximize = problem.objective.is_maximization();
        let eps = problem.solver_config.tolerance;

        let c = problem.objective.coefficients.as_slice();
        let a: Vec<Vec<f64>> = problem
            .constraints
            .iter()
            .map(|constraint| constraint.coefficients.clone())
            .collect();
        let b: Vec<f64> = problem
            .constraints
            .iter()
            .map(|constraint| constraint.bound)
            .collect();

        let mut tableau = Tableau::new(c, &a, &b, maximize);
        let (outcome, iterations) = tableau.run(eps);
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;

        let statistics = SolverStatistics {
            simplex_iterations: iterations,
            solve_time_ms: solve_time,
            num_variables: problem.num_variables() as u32,
            num_constraints: problem.num_constraints() as u32,
        };

        match outcome {
            PivotOutcome::Optimal => {
                let variable_values = tableau.solution();
                let objective_value = tableau.objective_value(maximize);

                let quality = SolutionQuality {
                    max_constraint_violation: max_violation(&a, &b, &variable_values),
                };

                let mut solution = Solution::optimal(objective_value, variable_values);
                solution.statistics = statistics;
                solution.quality = quality;
                if !problem.name.is_empty() {
                    solution.message = format!("Optimal solution found for '{}'", problem.name);
                }

                Ok(solution)
            }
            PivotOutcome::Unbounded => {
                let mut solution = Solution::new(
                    SolutionStatus::Unbounded,
                    "Problem is unbounded: objective can be improved infinitely",
                );
                solution.statistics = statistics;
                Ok(solution)
            }
        }
    }

    fn validate(&self, problem: &OptimizationProblem) -> Result<Vec<String>> {
        // Shape checks shared by all backends
        let warnings = validate_shapes(problem)?;

        // The slack-only start basis is feasible only for <= rows with b >= 0,
        // so reject anything else up front instead of producing garbage.
        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.constraint_type != ConstraintType::LessThanOrEqual {
                return Err(SolverError::UnsupportedConstraint(format!(
                    "Constraint {} is '{}'; the tableau method only accepts '<=' rows",
                    i, constraint.constraint_type
                )));
            }
            if constraint.bound < 0.0 {
                return Err(SolverError::InvalidProblem(format!(
                    "Constraint {} has negative right-hand side {}; the all-slack start basis would be infeasible",
                    i, constraint.bound
                )));
            }
        }

        Ok(warnings)
    }

    fn name(&self) -> &str {
        "Dense Tableau Simplex"
    }
}

/// max_i(A[i]·x − b[i], 0) for the reported point
fn max_violation(a: &[Vec<f64>], b: &[f64], x: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(row, &bound)| {
            let lhs: f64 = row.iter().zip(x.iter()).map(|(&aij, &xj)| aij * xj).sum();
            (lhs - bound).max(0.0)
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, ObjectiveFunction, SolverConfig};
    use crate::domain::value_objects::OptimizationType;

    fn problem(
        optimization_type: OptimizationType,
        c: Vec<f64>,
        a: Vec<Vec<f64>>,
        b: Vec<f64>,
        eps: f64,
    ) -> OptimizationProblem {
        let mut problem =
            OptimizationProblem::new(ObjectiveFunction::new(optimization_type, c));
        for (row, bound) in a.into_iter().zip(b) {
            problem = problem.add_constraint(Constraint::less_equal(row, bound));
        }
        problem.with_config(SolverConfig::default().with_tolerance(eps))
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!(
                (a - e).abs() < 1e-6,
                "component {}: expected {}, got {}",
                i,
                e,
                a
            );
        }
    }

    #[test]
    fn maximization_with_reused_unit_columns() {
        let problem = problem(
            OptimizationType::Maximize,
            vec![2.0, 3.0, 0.0, -1.0, 0.0, 0.0],
            vec![
                vec![2.0, -1.0, 0.0, -2.0, 1.0, 0.0],
                vec![3.0, 2.0, 1.0, -3.0, 0.0, 0.0],
                vec![-1.0, 3.0, 0.0, 4.0, 0.0, 1.0],
            ],
            vec![16.0, 18.0, 24.0],
            0.01,
        );

        let solution = TableauSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert_close(
            &solution.variable_values,
            &[0.55, 8.18, 0.0, 0.0, 23.09, 0.0],
        );
        assert!((solution.optimal_value.unwrap() - 25.64).abs() < 1e-6);
    }

    #[test]
    fn minimization_runs_as_negated_maximization() {
        let problem = problem(
            OptimizationType::Minimize,
            vec![-2.0, 2.0, -6.0],
            vec![
                vec![2.0, 1.0, -2.0],
                vec![1.0, 2.0, 4.0],
                vec![1.0, -1.0, 2.0],
            ],
            vec![24.0, 23.0, 10.0],
            0.01,
        );

        let solution = TableauSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert_close(&solution.variable_values, &[0.0, 0.75, 5.38]);
        assert!((solution.optimal_value.unwrap() - (-30.75)).abs() < 1e-6);
    }

    #[test]
    fn maximization_production_mix() {
        let problem = problem(
            OptimizationType::Maximize,
            vec![9.0, 10.0, 16.0],
            vec![
                vec![18.0, 15.0, 12.0],
                vec![6.0, 4.0, 8.0],
                vec![5.0, 3.0, 3.0],
            ],
            vec![360.0, 192.0, 180.0],
            0.01,
        );

        let solution = TableauSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert_close(&solution.variable_values, &[0.0, 8.0, 20.0]);
        assert!((solution.optimal_value.unwrap() - 400.0).abs() < 1e-6);
    }

    #[test]
    fn unbounded_problem_reports_no_values() {
        let problem = problem(
            OptimizationType::Maximize,
            vec![5.0, 4.0],
            vec![vec![1.0, 0.0], vec![1.0, -1.0]],
            vec![7.0, 8.0],
            0.01,
        );

        let solution = TableauSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Unbounded);
        assert!(solution.optimal_value.is_none());
        assert!(solution.variable_values.is_empty());
    }

    #[test]
    fn minimization_with_mixed_signs() {
        let problem = problem(
            OptimizationType::Minimize,
            vec![-3.0, 4.0, -5.0],
            vec![
                vec![4.0, 3.0, 1.0],
                vec![2.0, 5.0, -2.0],
                vec![1.0, -1.0, 3.0],
            ],
            vec![15.0, 20.0, 10.0],
            0.01,
        );

        let solution = TableauSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert_close(&solution.variable_values, &[3.18, 0.0, 2.27]);
        assert!((solution.optimal_value.unwrap() - (-20.91)).abs() < 0.01);
    }

    #[test]
    fn resolving_is_deterministic() {
        let problem = problem(
            OptimizationType::Maximize,
            vec![9.0, 10.0, 16.0],
            vec![
                vec![18.0, 15.0, 12.0],
                vec![6.0, 4.0, 8.0],
                vec![5.0, 3.0, 3.0],
            ],
            vec![360.0, 192.0, 180.0],
            0.01,
        );

        let solver = TableauSolver::new();
        let first = solver.solve(&problem).unwrap();
        let second = solver.solve(&problem).unwrap();
        assert_eq!(first.status, second.status);
        assert_eq!(first.variable_values, second.variable_values);
        assert_eq!(first.optimal_value, second.optimal_value);
    }

    #[test]
    fn negated_objective_flips_sense() {
        // maximize c^T x and minimize (-c)^T x must agree on x and negate z
        let a = vec![
            vec![18.0, 15.0, 12.0],
            vec![6.0, 4.0, 8.0],
            vec![5.0, 3.0, 3.0],
        ];
        let b = vec![360.0, 192.0, 180.0];

        let max_problem = problem(
            OptimizationType::Maximize,
            vec![9.0, 10.0, 16.0],
            a.clone(),
            b.clone(),
            0.01,
        );
        let min_problem = problem(
            OptimizationType::Minimize,
            vec![-9.0, -10.0, -16.0],
            a,
            b,
            0.01,
        );

        let solver = TableauSolver::new();
        let max_solution = solver.solve(&max_problem).unwrap();
        let min_solution = solver.solve(&min_problem).unwrap();
        assert_eq!(max_solution.variable_values, min_solution.variable_values);
        assert!(
            (max_solution.optimal_value.unwrap() + min_solution.optimal_value.unwrap()).abs()
                < 1e-9
        );
    }

    #[test]
    fn optimal_point_is_feasible() {
        let a = vec![
            vec![2.0, -1.0, 0.0, -2.0, 1.0, 0.0],
            vec![3.0, 2.0, 1.0, -3.0, 0.0, 0.0],
            vec![-1.0, 3.0, 0.0, 4.0, 0.0, 1.0],
        ];
        let b = vec![16.0, 18.0, 24.0];
        let eps = 0.01;

        let problem = problem(
            OptimizationType::Maximize,
            vec![2.0, 3.0, 0.0, -1.0, 0.0, 0.0],
            a.clone(),
            b.clone(),
            eps,
        );

        let solution = TableauSolver::new().solve(&problem).unwrap();
        for &value in &solution.variable_values {
            assert!(value >= -eps);
        }
        for (row, bound) in a.iter().zip(b.iter()) {
            let lhs: f64 = row
                .iter()
                .zip(solution.variable_values.iter())
                .map(|(&aij, &xj)| aij * xj)
                .sum();
            assert!(lhs <= bound + eps);
        }
        assert!(solution.quality.max_constraint_violation <= eps);
    }

    #[test]
    fn rejects_greater_equal_constraints() {
        let problem = OptimizationProblem::new(ObjectiveFunction::maximize(vec![1.0]))
            .add_constraint(Constraint::new(
                ConstraintType::GreaterThanOrEqual,
                vec![1.0],
                2.0,
            ));

        let err = TableauSolver::new().solve(&problem).unwrap_err();
        assert!(matches!(err, SolverError::UnsupportedConstraint(_)));
    }

    #[test]
    fn rejects_negative_right_hand_side() {
        let problem = OptimizationProblem::new(ObjectiveFunction::maximize(vec![1.0]))
            .add_constraint(Constraint::less_equal(vec![1.0], -3.0));

        let err = TableauSolver::new().solve(&problem).unwrap_err();
        assert!(matches!(err, SolverError::InvalidProblem(_)));
    }

    #[test]
    fn statistics_reflect_the_solve() {
        let problem = problem(
            OptimizationType::Maximize,
            vec![9.0, 10.0, 16.0],
            vec![
                vec![18.0, 15.0, 12.0],
                vec![6.0, 4.0, 8.0],
                vec![5.0, 3.0, 3.0],
            ],
            vec![360.0, 192.0, 180.0],
            0.01,
        );

        let solution = TableauSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.statistics.num_variables, 3);
        assert_eq!(solution.statistics.num_constraints, 3);
        assert!(solution.statistics.simplex_iterations > 0);
    }
}
