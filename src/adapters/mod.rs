// Adapters layer: concrete implementations of the domain ports and of terminal input.

pub mod prompt;
pub mod random;
