/// Default half-width of the playable interior along X (meters).
pub const DEFAULT_HALF_EXTENT_X: f32 = 400.0;

/// Default half-depth of the playable interior along Z (meters).
pub const DEFAULT_HALF_EXTENT_Z: f32 = 400.0;

/// Default vertical extent of each boundary wall (meters).
///
/// Must stay above the highest point any dynamic body can reach (jump apex, bounce),
/// otherwise bodies can leave over the top.
pub const DEFAULT_WALL_HEIGHT: f32 = 15.0;

/// Default collision thickness of each wall (meters).
///
/// Used as the wall box half-extent along its normal axis. Zero-volume boxes are
/// silently skipped by some narrow phases, so this must stay strictly positive.
pub const DEFAULT_WALL_THICKNESS: f32 = 0.5;

/// Fixed simulation timestep in seconds (60 Hz).
pub const FIXED_TIMESTEP_SECS: f32 = 1.0 / 60.0;

/// Gravity magnitude in meters per second squared (positive value).
/// Applied along -Y.
pub const GRAVITY_MPS2: f32 = 9.81;

/// Number of walls enclosing a rectangular arena.
pub const WALL_COUNT: usize = 4;
