// Domain layer: guest model, validation errors and ports (interfaces).

pub mod model;
pub mod ports;
pub mod violation;
