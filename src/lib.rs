pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::RosterConfig;
pub use crate::core::demo::{species_facts, Demo, DemoReport};
pub use crate::core::{Animal, Bulldog, Canine, Creature, Dog, Mammal, WarmBlooded};
pub use utils::error::{BestiaryError, Result};
