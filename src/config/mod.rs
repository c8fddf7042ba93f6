//! Configuration of the action-type allow-list.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::MapStateConfig;
