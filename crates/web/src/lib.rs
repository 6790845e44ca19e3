pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
