// Domain layer: the portfolio aggregate and the ports the core talks through.

pub mod model;
pub mod ports;
