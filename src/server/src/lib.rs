/* src/server/src/lib.rs */

pub mod config;
mod error;
mod handler;

pub use config::EkushConfig;
pub use handler::{AppState, build_router};
