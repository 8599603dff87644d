//! Boundary builder: encloses a physics world with the walls of a [`ValidArena`].
//!
//! # Lifecycle
//! A world starts `Unbounded`. [`build`] registers all four walls as fixed bodies and
//! moves it to `Bounded`. There is no way back: walls live until the world is dropped.
//! Resizing means building a new world from the new arena, never patching walls.
//!
//! # Failure
//! Registration is all-or-nothing from the caller's side. If the world rejects any wall,
//! the walls this call already registered are removed again and the world stays
//! `Unbounded`.
//!
//! # Repeat calls
//! `build` is not idempotent. A second call on the same world registers a second,
//! overlapping set of walls. Call it exactly once per world.

use crate::{
    BuildError, RegistrationError, WorldStaticDef,
    closure::verify_closure,
    constants::WALL_COUNT,
    definition::{Arena, ValidArena},
    wall::{BoundaryWall, derive_walls},
};

/// Whether a world has been enclosed yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsState {
    /// No walls registered. Stepping is not allowed.
    #[default]
    Unbounded,
    /// All four walls registered and closed.
    Bounded,
}

/// Registration interface a physics world exposes to the boundary builder.
pub trait PhysicsWorldHandle {
    /// Engine handle of a registered fixed body.
    type Handle: Copy;

    /// Register `def` as a fixed (infinite-mass, never integrated) body.
    fn register_fixed(&mut self, def: &WorldStaticDef) -> Result<Self::Handle, RegistrationError>;

    /// Remove a body registered by [`PhysicsWorldHandle::register_fixed`].
    ///
    /// Only used to roll back a failed [`build`].
    fn unregister(&mut self, handle: Self::Handle);

    /// Record that the world is now fully enclosed.
    fn mark_bounded(&mut self);
}

/// Derive the walls of `arena` and register them with `world` as fixed colliders.
///
/// Returns the placements that were registered. The world owns the bodies afterwards;
/// no handles are retained.
pub fn build<W>(arena: &ValidArena, world: &mut W) -> Result<[BoundaryWall; WALL_COUNT], BuildError>
where
    W: PhysicsWorldHandle + ?Sized,
{
    let walls = derive_walls(arena);

    // A gap here is a derivation bug; refuse before touching the world.
    verify_closure(arena, &walls).map_err(|gap| {
        log::error!("Derived boundary is not closed: {gap}");
        BuildError::RegistrationFailed(gap.to_string())
    })?;

    let mut registered: Vec<W::Handle> = Vec::with_capacity(WALL_COUNT);
    for wall in &walls {
        let def = wall.to_static_def(u32::from(wall.side.ordinal()));
        match world.register_fixed(&def) {
            Ok(handle) => {
                log::debug!(
                    "Registered {:?} wall at {:?} with half-extents {:?}",
                    wall.side,
                    wall.position,
                    wall.half_extents
                );
                registered.push(handle);
            }
            Err(err) => {
                log::error!(
                    "Physics world rejected the {:?} wall ({err}); rolling back {} wall(s)",
                    wall.side,
                    registered.len()
                );
                for handle in registered.into_iter().rev() {
                    world.unregister(handle);
                }
                return Err(BuildError::RegistrationFailed(err.to_string()));
            }
        }
    }

    world.mark_bounded();
    log::info!(
        "Arena bounded: {} x {} m interior, walls {} m high",
        2.0 * arena.half_extent_x(),
        2.0 * arena.half_extent_z(),
        arena.wall_height()
    );

    Ok(walls)
}

/// Validate `arena`, then [`build`] its boundary.
///
/// On a configuration error the world is left untouched.
pub fn enclose<W>(arena: Arena, world: &mut W) -> Result<[BoundaryWall; WALL_COUNT], BuildError>
where
    W: PhysicsWorldHandle + ?Sized,
{
    let valid = arena.validate()?;
    build(&valid, world)
}
