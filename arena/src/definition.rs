//! Declarative bounds of the world.
//!
//! An [`Arena`] is plain data, usually loaded from config. It has to go through
//! [`validate`] to become a [`ValidArena`], which is the only form the boundary builder
//! accepts. Invalid input is reported, never clamped: a silently shrunk arena hides
//! the authoring error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    ConfigError, Vec3,
    constants::{
        DEFAULT_HALF_EXTENT_X, DEFAULT_HALF_EXTENT_Z, DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS,
    },
};

/// The logical bounded region of the world, as authored.
///
/// Units are meters. `center` is the world-space reference point of the interior;
/// walls stand on the `y = 0` plane regardless of `center.y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arena {
    pub center: Vec3,
    /// Half-width of the playable interior along X.
    pub half_extent_x: f32,
    /// Half-depth of the playable interior along Z.
    pub half_extent_z: f32,
    /// Vertical extent of each wall.
    pub wall_height: f32,
    /// Collision thickness of each wall, applied along the wall normal.
    pub wall_thickness: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            center: Vec3::zeros(),
            half_extent_x: DEFAULT_HALF_EXTENT_X,
            half_extent_z: DEFAULT_HALF_EXTENT_Z,
            wall_height: DEFAULT_WALL_HEIGHT,
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

/// Names a field of [`Arena`] in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArenaField {
    Center,
    HalfExtentX,
    HalfExtentZ,
    WallHeight,
    WallThickness,
}

impl ArenaField {
    pub const fn name(self) -> &'static str {
        match self {
            ArenaField::Center => "center",
            ArenaField::HalfExtentX => "half_extent_x",
            ArenaField::HalfExtentZ => "half_extent_z",
            ArenaField::WallHeight => "wall_height",
            ArenaField::WallThickness => "wall_thickness",
        }
    }
}

impl fmt::Display for ArenaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Arena {
    /// Parse an arena from a JSON document. Missing fields take their defaults.
    ///
    /// The result still has to be validated.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Size fields in the order they are checked.
    fn extents(&self) -> [(ArenaField, f32); 4] {
        [
            (ArenaField::HalfExtentX, self.half_extent_x),
            (ArenaField::HalfExtentZ, self.half_extent_z),
            (ArenaField::WallHeight, self.wall_height),
            (ArenaField::WallThickness, self.wall_thickness),
        ]
    }

    /// See [`validate`].
    pub fn validate(self) -> Result<ValidArena, ConfigError> {
        if !self.center.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NonFiniteValue(ArenaField::Center));
        }

        for (field, value) in self.extents() {
            // -inf lands here too.
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveExtent(field));
            }
            // NaN compares false above, so it is caught with +inf.
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue(field));
            }
        }

        Ok(ValidArena(self))
    }
}

/// Check the positivity invariants of `arena`.
///
/// Fields are checked in declaration order and the first offending one is reported.
/// This must succeed before any wall is derived.
pub fn validate(arena: Arena) -> Result<ValidArena, ConfigError> {
    arena.validate()
}

/// An [`Arena`] whose extents are all finite and strictly positive.
///
/// Immutable once constructed. The only way to get one is [`validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidArena(Arena);

impl ValidArena {
    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.0
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.0.center
    }

    #[inline]
    pub fn half_extent_x(&self) -> f32 {
        self.0.half_extent_x
    }

    #[inline]
    pub fn half_extent_z(&self) -> f32 {
        self.0.half_extent_z
    }

    #[inline]
    pub fn wall_height(&self) -> f32 {
        self.0.wall_height
    }

    #[inline]
    pub fn wall_thickness(&self) -> f32 {
        self.0.wall_thickness
    }

    /// Whether `point` lies over the interior rectangle (XZ only, edges inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        let c = self.0.center;
        (point.x - c.x).abs() <= self.0.half_extent_x
            && (point.z - c.z).abs() <= self.0.half_extent_z
    }
}

impl From<ValidArena> for Arena {
    fn from(valid: ValidArena) -> Self {
        valid.0
    }
}
