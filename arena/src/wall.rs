//! Boundary wall placement.
//!
//! Walls are pure functions of a [`ValidArena`]. Nothing here touches a physics world;
//! see [`crate::boundary`] for registration.
//!
//! # Layout (top-down, -Z = North)
//!
//! ```text
//!              North (z = c.z - hz)
//!          +--------------------------+
//!          |                          |
//!   West   |         interior         |   East
//! (x = c.x |                          | (x = c.x
//!    - hx) |                          |    + hx)
//!          +--------------------------+
//!              South (z = c.z + hz)
//! ```
//!
//! Each wall box uses the arena thickness as its half-extent along the wall normal and
//! the *full* interior half-extent along the tangent. The tangent span therefore reaches
//! the neighbor's center plane, so adjacent boxes overlap in a `t x t` square at every
//! corner instead of meeting edge to edge, where fast bodies can thread the seam.

use nalgebra as na;

use crate::{
    ColliderShapeDef, Vec3, WorldStaticDef, constants::WALL_COUNT, definition::ValidArena,
};

/// Which side of the arena a wall closes.
///
/// The ordinal is stable (it feeds collider ids), so polygonal arenas can extend the
/// numbering without renumbering the rectangular case.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSide {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl WallSide {
    /// All sides in ordinal (clockwise from North) order.
    pub const ALL: [WallSide; WALL_COUNT] = [
        WallSide::North,
        WallSide::East,
        WallSide::South,
        WallSide::West,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Unit vector pointing out of the arena through this wall.
    pub fn outward_normal(self) -> Vec3 {
        match self {
            WallSide::North => Vec3::new(0.0, 0.0, -1.0),
            WallSide::East => Vec3::new(1.0, 0.0, 0.0),
            WallSide::South => Vec3::new(0.0, 0.0, 1.0),
            WallSide::West => Vec3::new(-1.0, 0.0, 0.0),
        }
    }

    /// The next side clockwise. Adjacent sides share a corner.
    #[inline]
    pub const fn next(self) -> WallSide {
        WallSide::ALL[(self as usize + 1) % WALL_COUNT]
    }

    /// Whether the wall runs along X (its normal is along Z).
    #[inline]
    pub const fn spans_x(self) -> bool {
        matches!(self, WallSide::North | WallSide::South)
    }
}

/// One static collision box closing one side of the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryWall {
    pub side: WallSide,
    /// World-space center of the box.
    pub position: Vec3,
    /// Half-extents of the box.
    pub half_extents: Vec3,
}

impl BoundaryWall {
    /// Derive the wall for `side`.
    pub fn derive(arena: &ValidArena, side: WallSide) -> Self {
        let c = arena.center();
        let hx = arena.half_extent_x();
        let hz = arena.half_extent_z();
        let h = arena.wall_height();
        let t = arena.wall_thickness();
        let y = h * 0.5;

        let (position, half_extents) = match side {
            WallSide::North => (Vec3::new(c.x, y, c.z - hz), Vec3::new(hx, h, t)),
            WallSide::South => (Vec3::new(c.x, y, c.z + hz), Vec3::new(hx, h, t)),
            WallSide::West => (Vec3::new(c.x - hx, y, c.z), Vec3::new(t, h, hz)),
            WallSide::East => (Vec3::new(c.x + hx, y, c.z), Vec3::new(t, h, hz)),
        };

        Self {
            side,
            position,
            half_extents,
        }
    }

    /// Minimum corner of the box.
    #[inline]
    pub fn mins(&self) -> Vec3 {
        self.position - self.half_extents
    }

    /// Maximum corner of the box.
    #[inline]
    pub fn maxs(&self) -> Vec3 {
        self.position + self.half_extents
    }

    /// Axis-aligned static collider definition for this wall.
    pub fn to_static_def(&self, id: u32) -> WorldStaticDef {
        WorldStaticDef {
            id,
            translation: self.position,
            rotation: na::UnitQuaternion::identity(),
            shape: ColliderShapeDef::Cuboid {
                half_extents: self.half_extents,
            },
        }
    }
}

/// Derive the four walls in [`WallSide::ALL`] order.
pub fn derive_walls(arena: &ValidArena) -> [BoundaryWall; WALL_COUNT] {
    WallSide::ALL.map(|side| BoundaryWall::derive(arena, side))
}
