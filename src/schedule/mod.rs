pub mod lane;
pub mod plan;
pub mod sample;
