pub mod input;
pub mod normalize;
