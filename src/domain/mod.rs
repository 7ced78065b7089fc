// Domain layer: records, the rendered view and the ports the component talks through.

pub mod model;
pub mod ports;
