pub mod api;
pub mod core;
pub mod render;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::GalaxyConfig;
pub use api::snapshot::{ChainEntity, MarketSnapshot, RootMetrics, TokenEntity};
pub use api::types::{MetricMode, NodeId};
pub use core::galaxy::GalaxyState;
pub use core::node::{Node, NodeKind};
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use render::{build_instance_buffer, BodyInstance, InstanceBuffer};
pub use systems::hierarchy::build_galaxy;
pub use systems::integrator::tick_galaxy;
