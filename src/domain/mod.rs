// Domain layer: search models and the ports the pipeline is driven through.

pub mod model;
pub mod ports;
