pub mod collision;
pub mod hierarchy;
pub mod integrator;
pub mod layout;
pub mod ratio;
pub mod weight;
