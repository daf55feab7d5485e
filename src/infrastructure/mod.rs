// Infrastructure layer: server setup and lifecycle

pub mod server;

pub use server::{start_server, ServerConfig};
