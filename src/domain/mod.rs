// Domain layer: the contract record and the ports the pipeline is written against.

pub mod model;
pub mod ports;
