//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Category, Contact, ContactOutcome, gather_contacts, resolve_contact};
pub use geometry::Aabb;
pub use spawn::{gap_center, run_spawner, spawn_pair};
pub use state::{Boat, GameEvent, GamePhase, GameState, MoveTask, ObstaclePair};
pub use tick::{TickInput, tick};
