pub mod galaxy;
pub mod node;
pub mod rng;
pub mod time;
