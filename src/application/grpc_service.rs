use tonic::{Request, Response, Status};

use super::mappers::{self, lp_solver};
use crate::domain::solver_service::SolverService;
use crate::solver::SolverFactory;
use std::sync::Arc;

/// gRPC service implementation
pub struct GrpcLpSolverService {
    solver: Arc<dyn SolverService>,
}

impl GrpcLpSolverService {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self { solver }
    }
}

impl Default for GrpcLpSolverService {
    fn default() -> Self {
        Self::new(SolverFactory::default_solver())
    }
}

#[tonic::async_trait]
impl lp_solver::linear_programming_solver_server::LinearProgrammingSolver
    for GrpcLpSolverService
{
    async fn solve_problem(
        &self,
        request: Request<lp_solver::OptimizationProblem>,
    ) -> Result<Response<lp_solver::OptimizationResult>, Status> {
        let proto_problem = request.into_inner();

        println!("📊 Solving problem: {}", proto_problem.problem_name);
        if !proto_problem.description.is_empty() {
            println!("   Description: {}", proto_problem.description);
        }

        // Convert protobuf to domain model
        let domain_problem = mappers::proto_to_domain_problem(proto_problem).map_err(|e| *e)?;

        println!("   Using solver: {}", self.solver.name());

        // Solve using domain service
        let solution = self
            .solver
            .solve(&domain_problem)
            .map_err(|e| Status::invalid_argument(format!("Solver error: {}", e)))?;

        println!("✓ Status: {}", solution.status);

        // Convert domain solution to protobuf
        let proto_result = mappers::domain_to_proto_solution(solution, self.solver.name());

        Ok(Response::new(proto_result))
    }

    async fn validate_problem(
        &self,
        request: Request<lp_solver::OptimizationProblem>,
    ) -> Result<Response<lp_solver::ValidationResult>, Status> {
        let proto_problem = request.into_inner();
        let domain_problem = mappers::proto_to_domain_problem(proto_problem).map_err(|e| *e)?;

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // Use domain service validation
        match self.solver.validate(&domain_problem) {
            Ok(validation_warnings) => {
                warnings.extend(validation_warnings);

                // Additional warnings
                if domain_problem.constraints.is_empty() {
                    warnings.push("Problem has no constraints (may be unbounded)".to_string());
                }
            }
            Err(e) => {
                errors.push(e.to_string());
            }
        }

        Ok(Response::new(lp_solver::ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            num_variables: domain_problem.num_variables() as u32,
            num_constraints: domain_problem.num_constraints() as u32,
        }))
    }

    async fn get_available_solvers(
        &self,
        _request: Request<lp_solver::Empty>,
    ) -> Result<Response<lp_solver::AvailableSolvers>, Status> {
        let solvers = vec![lp_solver::SolverInfo {
            name: "Dense Tableau Simplex".to_string(),
            supports_lp: true,
            capabilities: vec![
                "Linear Programming".to_string(),
                "Primal Simplex (dense tableau)".to_string(),
                "Maximization and Minimization".to_string(),
            ],
        }];

        Ok(Response::new(lp_solver::AvailableSolvers { solvers }))
    }
}
