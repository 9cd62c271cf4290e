#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;
pub mod test_support;
pub mod ws;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{Mark, Phase, Player, PlayerId, Role};
pub use error::AppError;
pub use services::game_flow::GameFlow;
pub use ws::hub::{ConnectionRegistry, GameHub};
pub use ws::protocol::GameEvent;

// Prelude for test convenience
pub mod prelude {
    pub use super::ai::*;
    pub use super::config::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::services::game_flow::*;
    pub use super::ws::hub::*;
    pub use super::ws::protocol::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
