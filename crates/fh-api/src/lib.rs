pub mod config;
pub mod course;
pub mod error;
pub mod pagination;
pub mod reply;
pub mod router;
pub mod state;
pub mod stats;
pub mod topic;
pub mod tracing;
pub mod user;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
