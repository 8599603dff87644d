//! Bounded 3D physics containment.
//!
//! An [`Arena`] describes a walled rectangular region. Once validated, [`build`] derives
//! four overlapping wall boxes and registers them as fixed bodies with a physics world,
//! after which no dynamic body in that world can leave the interior.
//!
//! ```text
//! Arena --validate--> ValidArena --build--> PhysicsWorldHandle (RapierWorld)
//! ```

pub mod boundary;
pub mod closure;
pub mod constants;
pub mod definition;
pub mod error;
pub mod rapier;
pub mod rapier_world;
pub mod wall;

use nalgebra as na;

/// Common math alias, shared with Rapier's `Vector<f32>`.
pub type Vec3 = na::Vector3<f32>;

pub use boundary::{BoundsState, PhysicsWorldHandle, build, enclose};
pub use closure::{ClosureGap, corner_overlap, verify_closure};
pub use definition::{Arena, ArenaField, ValidArena, validate};
pub use error::{BuildError, ConfigError, RegistrationError, WorldError};
pub use rapier::{ColliderShapeDef, WorldStaticDef, collider_from_def};
pub use rapier_world::{RapierWorld, WorldSettings};
pub use wall::{BoundaryWall, WallSide, derive_walls};
