// Application layer: use cases and service orchestration

pub mod grpc_service;
pub mod mappers;

pub use grpc_service::GrpcLpSolverService;
