// Solver adapters module

pub mod factory;
pub mod tableau;
pub mod tableau_solver;

pub use factory::SolverFactory;
pub use tableau_solver::TableauSolver;
