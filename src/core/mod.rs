pub mod decomposition;
pub mod finance;
pub mod predicates;
pub mod simulation;
pub mod summary;

pub use crate::domain::model::{DiceTable, NumberSummary};
pub use crate::domain::ports::{ConfigProvider, RandomSource};
pub use crate::utils::error::Result;
