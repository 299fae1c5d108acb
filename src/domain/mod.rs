// Domain layer: commuting records, scenario results and the ports the pipeline runs against.

pub mod model;
pub mod ports;
