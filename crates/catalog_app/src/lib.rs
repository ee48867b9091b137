//! Terminal front end for the product catalog.
pub mod app;
pub mod cli;
pub mod config;
pub mod effects;
pub mod logging;
pub mod render;
pub mod session;

pub use app::run_command;
pub use cli::{Cli, Command, CreateArgs, EditArgs};
pub use config::{AppConfig, ConfigError};
pub use effects::{EffectRunner, UiEffect};
pub use session::{Session, SessionError};
