// Domain layer: Business logic and rules
pub mod domain;

// Application layer: Use cases and service orchestration
#[cfg(feature = "server")]
pub mod application;

// Infrastructure layer: External concerns (gRPC, server)
#[cfg(feature = "server")]
pub mod infrastructure;

// Solver adapters: Concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Constraint, ConstraintType, ObjectiveFunction, OptimizationProblem, OptimizationType, Solution,
    SolutionStatus, SolverConfig, SolverError, SolverService, SolverStatistics,
};

pub use solver::{SolverFactory, TableauSolver};

#[cfg(feature = "server")]
pub use application::GrpcLpSolverService;

#[cfg(feature = "server")]
pub use infrastructure::{start_server, ServerConfig};
