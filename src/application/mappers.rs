// Mappers: Convert between gRPC protobuf types and domain models
// This keeps protobuf dependencies isolated from business logic (Dependency Inversion)

use crate::domain::{
    models::{Constraint, ObjectiveFunction, OptimizationProblem, Solution, SolverConfig},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus, SolverBackend},
};
use tonic::Status;

pub mod lp_solver {
    tonic::include_proto!("lp_solver");
}

use lp_solver as proto;

/// Convert protobuf Constraint to domain Constraint
pub fn proto_to_domain_constraint(
    proto_constr: &proto::Constraint,
) -> std::result::Result<Constraint, Box<Status>> {
    let constraint_type = match proto::constraint::ConstraintType::try_from(proto_constr.r#type) {
        Ok(proto::constraint::ConstraintType::LessThanOrEqual) => ConstraintType::LessThanOrEqual,
        Ok(proto::constraint::ConstraintType::Equal) => ConstraintType::Equal,
        Ok(proto::constraint::ConstraintType::GreaterThanOrEqual) => {
            ConstraintType::GreaterThanOrEqual
        }
        Err(_) => {
            return Err(Box::new(Status::invalid_argument(
                "Invalid constraint type",
            )))
        }
    };

    Ok(Constraint {
        constraint_type,
        coefficients: proto_constr.coefficients.clone(),
        bound: proto_constr.bound,
        name: proto_constr.name.clone(),
    })
}

/// Convert protobuf ObjectiveFunction to domain ObjectiveFunction
pub fn proto_to_domain_objective(
    proto_obj: &proto::ObjectiveFunction,
) -> std::result::Result<ObjectiveFunction, Box<Status>> {
    let optimization_type =
        match proto::objective_function::OptimizationType::try_from(proto_obj.r#type) {
            Ok(proto::objective_function::OptimizationType::Minimize) => OptimizationType::Minimize,
            Ok(proto::objective_function::OptimizationType::Maximize) => OptimizationType::Maximize,
            Err(_) => {
                return Err(Box::new(Status::invalid_argument(
                    "Invalid optimization type",
                )))
            }
        };

    Ok(ObjectiveFunction {
        optimization_type,
        coefficients: proto_obj.coefficients.clone(),
        variable_names: proto_obj.variable_names.clone(),
    })
}

/// Convert protobuf OptimizationProblem to domain OptimizationProblem
pub fn proto_to_domain_problem(
    proto_prob: proto::OptimizationProblem,
) -> std::result::Result<OptimizationProblem, Box<Status>> {
    let objective = proto_prob
        .objective
        .ok_or_else(|| Box::new(Status::invalid_argument("Objective is required")))?;
    let objective = proto_to_domain_objective(&objective)?;

    let constraints = proto_prob
        .constraints
        .iter()
        .map(proto_to_domain_constraint)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let solver_config = if let Some(cfg) = proto_prob.solver_config {
        let backend = match proto::solver_config::SolverBackend::try_from(cfg.solver) {
            Ok(proto::solver_config::SolverBackend::Auto) => SolverBackend::Auto,
            Ok(proto::solver_config::SolverBackend::Tableau) => SolverBackend::Tableau,
            Err(_) => SolverBackend::Auto,
        };

        let defaults = SolverConfig::default();
        SolverConfig {
            backend,
            tolerance: if cfg.tolerance > 0.0 {
                cfg.tolerance
            } else {
                defaults.tolerance
            },
            verbose: cfg.verbose,
        }
    } else {
        SolverConfig::default()
    };

    Ok(OptimizationProblem {
        name: proto_prob.problem_name,
        description: proto_prob.description,
        objective,
        constraints,
        solver_config,
    })
}

/// Convert domain Solution to protobuf OptimizationResult
pub fn domain_to_proto_solution(
    solution: Solution,
    solver_name: &str,
) -> proto::OptimizationResult {
    let status = match solution.status {
        SolutionStatus::Optimal => proto::SolutionStatus::Optimal as i32,
        SolutionStatus::Unbounded => proto::SolutionStatus::Unbounded as i32,
    };

    proto::OptimizationResult {
        status,
        optimal_value: solution.optimal_value,
        solution_values: solution.variable_values,
        message: solution.message,
        statistics: Some(proto::SolverStatistics {
            simplex_iterations: solution.statistics.simplex_iterations,
            solve_time_ms: solution.statistics.solve_time_ms,
            num_variables: solution.statistics.num_variables,
            num_constraints: solution.statistics.num_constraints,
            solver_backend: solver_name.to_string(),
        }),
        quality: Some(proto::SolutionQuality {
            max_constraint_violation: solution.quality.max_constraint_violation,
        }),
    }
}
