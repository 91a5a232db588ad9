pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Command, CliConfig};

pub use adapters::random::SeededRandom;
pub use app::{report::Outcome, toolkit::Toolkit};
pub use config::toml_config::ToolkitConfig;
pub use core::decomposition::{factorial, factors, gcd};
pub use core::finance::compound_interest;
pub use core::predicates::{is_leap_year, is_prime};
pub use core::simulation::simulate_dice_rolls;
pub use core::summary::{fahrenheit_to_celsius, summarize};
pub use domain::model::{DiceTable, NumberSummary};
pub use domain::ports::RandomSource;
pub use utils::error::{Result, ToolkitError};
