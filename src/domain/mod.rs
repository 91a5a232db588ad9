// Domain layer: result models and ports. Nothing here depends on config, IO or rand.

pub mod model;
pub mod ports;
