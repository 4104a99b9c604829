//! Runtime orchestration and lifecycle management.
//!
//! - [`RestaurantSystem`] - Starts the table router and owns its task handle
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::{RestaurantSystem, SystemConfig};
pub use self::tracing::setup_tracing;
