pub mod ports;
pub mod seed;
