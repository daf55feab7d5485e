use super::value_objects::{ConstraintType, OptimizationType, SolutionStatus, SolverBackend};

/// Objective function to minimize or maximize
#[derive(Debug, Clone)]
pub struct ObjectiveFunction {
    pub optimization_type: OptimizationType,
    pub coefficients: Vec<f64>,
    pub variable_names: Vec<String>,
}

impl ObjectiveFunction {
    pub fn new(optimization_type: OptimizationType, coefficients: Vec<f64>) -> Self {
        let variable_names = (0..coefficients.len()).map(|i| format!("x{}", i)).collect();

        Self {
            optimization_type,
            coefficients,
            variable_names,
        }
    }

    pub fn maximize(coefficients: Vec<f64>) -> Self {
        Self::new(OptimizationType::Maximize, coefficients)
    }

    pub fn minimize(coefficients: Vec<f64>) -> Self {
        Self::new(OptimizationType::Minimize, coefficients)
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.variable_names = names;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_maximization(&self) -> bool {
        self.optimization_type == OptimizationType::Maximize
    }
}

/// Linear constraint on variables
#[derive(Debug, Clone)]
pub struct Constraint {
    pub constraint_type: ConstraintType,
    pub coefficients: Vec<f64>,
    pub bound: f64,
    pub name: String,
}

impl Constraint {
    pub fn new(constraint_type: ConstraintType, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            constraint_type,
            coefficients,
            bound,
            name: String::new(),
        }
    }

    /// ≤ constraint, the only kind the tableau backend accepts
    pub fn less_equal(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::LessThanOrEqual, coefficients, bound)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub backend: SolverBackend,
    /// Minimum pivot-column magnitude admitted by the ratio test
    pub tolerance: f64,
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: SolverBackend::Auto,
            tolerance: 1e-6,
            verbose: false,
        }
    }
}

impl SolverConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Complete optimization problem
#[derive(Debug, Clone)]
pub struct OptimizationProblem {
    pub name: String,
    pub description: String,
    pub objective: ObjectiveFunction,
    pub constraints: Vec<Constraint>,
    pub solver_config: SolverConfig,
}

impl OptimizationProblem {
    pub fn new(objective: ObjectiveFunction) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            objective,
            constraints: Vec::new(),
            solver_config: SolverConfig::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn add_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    pub simplex_iterations: u64,
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
}

/// Quality metrics for the solution
#[derive(Debug, Clone, Default)]
pub struct SolutionQuality {
    /// Largest amount by which the reported point violates a constraint
    pub max_constraint_violation: f64,
}

/// Solution to an optimization problem
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub optimal_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
    pub quality: SolutionQuality,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            optimal_value: None,
            variable_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
            quality: SolutionQuality::default(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            optimal_value: Some(value),
            variable_values,
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
            quality: SolutionQuality::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn with_quality(mut self, quality: SolutionQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}
