use crate::domain::{
    models::OptimizationProblem,
    solver_service::SolverService,
    value_objects::SolverBackend,
};
use crate::solver::TableauSolver;
use std::sync::Arc;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver based on the problem configuration
    pub fn create_solver(problem: &OptimizationProblem) -> Arc<dyn SolverService> {
        Self::create_from_backend(problem.solver_config.backend)
    }

    /// Create a solver for a specific backend
    pub fn create_from_backend(backend: SolverBackend) -> Arc<dyn SolverService> {
        match backend {
            SolverBackend::Auto => Arc::new(TableauSolver::new()),
            SolverBackend::Tableau => Arc::new(TableauSolver::new()),
        }
    }

    /// Get the default solver
    pub fn default_solver() -> Arc<dyn SolverService> {
        Arc::new(TableauSolver::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ObjectiveFunction;

    #[test]
    fn auto_backend_resolves_to_tableau() {
        let problem = OptimizationProblem::new(ObjectiveFunction::maximize(vec![1.0]));
        let solver = SolverFactory::create_solver(&problem);
        assert_eq!(solver.name(), "Dense Tableau Simplex");
    }
}
