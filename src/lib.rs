mod cache;
mod commands;
mod config;
mod controller;
mod error;
mod handlers;
mod keyboard;
mod provider;
mod state;
mod types;

pub use cache::*;
pub use commands::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use handlers::*;
pub use keyboard::*;
pub use provider::*;
pub use state::*;
pub use types::*;
