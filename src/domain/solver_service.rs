// Domain service interface for solving optimization problems
// Defines the contract that any solver implementation must follow (Dependency Inversion Principle)

use super::models::{OptimizationProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Unsupported constraint: {0}")]
    UnsupportedConstraint(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for optimization solvers
///
/// This trait defines the contract that all solver implementations must follow.
/// It allows us to swap solver backends without changing business logic (Open/Closed Principle).
pub trait SolverService: Send + Sync {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &OptimizationProblem) -> Result<Vec<String>> {
        validate_shapes(problem)
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;
}

/// Shape checks shared by every backend: non-empty objective, constraint
/// widths matching the variable count, and a usable pivot tolerance.
/// Backends layer their own precondition checks on top of this.
pub fn validate_shapes(problem: &OptimizationProblem) -> Result<Vec<String>> {
    let mut errors = Vec::new();

    // Check objective has coefficients
    if problem.objective.coefficients.is_empty() {
        errors.push("Objective must have at least one coefficient".to_string());
    }

    let num_vars = problem.num_variables();

    // Check constraints
    for (i, constraint) in problem.constraints.iter().enumerate() {
        if constraint.num_variables() != num_vars {
            errors.push(format!(
                "Constraint {} has {} coefficients but problem has {} variables",
                i,
                constraint.num_variables(),
                num_vars
            ));
        }
    }

    // Check the pivot tolerance
    let tolerance = problem.solver_config.tolerance;
    if !tolerance.is_finite() || tolerance < 0.0 {
        errors.push(format!(
            "Pivot tolerance must be finite and non-negative, got {}",
            tolerance
        ));
    }

    if errors.is_empty() {
        Ok(Vec::new())
    } else {
        Err(SolverError::InvalidProblem(errors.join("; ")))
    }
}
