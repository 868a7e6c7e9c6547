//! Shared types module - plain data used by the registry and every game system
//!
//! Everything here is pure data with no behavior beyond conversions, so the
//! types can flow unchanged between the registry, the system crates and any
//! JSON consumer.
//!
//! # Slot vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`SlotKind`] | `pure` computation, `policy` decision or side-effecting `hook` |
//! | [`SlotContract`] | Declared name, kind and description of one extension point |
//! | [`SlotOwner`] | The `(system_id, slot_name)` pair an implementation is bound to |
//!
//! # Falling-block vocabulary
//!
//! [`PieceKind`] and [`Rotation`] describe tetrominoes. Rotation states are
//! numbered 0-3 on the wire (0 = spawn orientation, then clockwise).
//!
//! # Examples
//!
//! ```
//! use game_slots_types::{PieceKind, Rotation};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let rotated = Rotation::North.rotate_cw();
//! assert_eq!(rotated, Rotation::East);
//! assert_eq!(rotated.index(), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Frame rate used to convert between frames and wall-clock time (60 fps)
pub const FRAMES_PER_SECOND: u32 = 60;

/// Gravity interval by level (milliseconds per row)
///
/// Index 0 = Level 0, Index 8 = Level 8
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Gravity interval for every level beyond the table (120ms)
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// What a slot does with its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Deterministic computation from input to output
    Pure,
    /// A decision about whether or how something may happen
    Policy,
    /// Describes effects for the caller to apply
    Hook,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Pure => "pure",
            SlotKind::Policy => "policy",
            SlotKind::Hook => "hook",
        }
    }
}

/// Static description of an extension point exposed by a game system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotContract {
    pub name: &'static str,
    pub kind: SlotKind,
    pub description: &'static str,
}

impl SlotContract {
    pub const fn new(name: &'static str, kind: SlotKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
        }
    }
}

/// The slot an implementation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotOwner {
    pub system_id: &'static str,
    pub slot_name: &'static str,
}

impl SlotOwner {
    pub const fn new(system_id: &'static str, slot_name: &'static str) -> Self {
        Self {
            system_id,
            slot_name,
        }
    }

    /// Whether this owner is the given `(system_id, slot_name)` pair
    pub fn is(&self, system_id: &str, slot_name: &str) -> bool {
        self.system_id == system_id && self.slot_name == slot_name
    }
}

impl fmt::Display for SlotOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.system_id, self.slot_name)
    }
}

/// A `(row, col)` cell coordinate on a grid board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: i32,
    pub col: i32,
}

impl CellPos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells
    ///
    /// Widened to `u64`: two `i32` axis distances can sum past `u32::MAX`.
    pub fn manhattan(&self, other: &CellPos) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }
}

/// The seven tetromino piece kinds
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every piece kind in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use game_slots_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase single-letter name, as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation state outside `0..4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rotation state {0} is outside 0..4")]
pub struct InvalidRotation(pub u8);

/// Rotation states, numbered 0-3 clockwise from spawn
///
/// - **North** (0): Spawn orientation
/// - **East** (1): Rotated 90° clockwise
/// - **South** (2): Rotated 180°
/// - **West** (3): Rotated 90° counter-clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use game_slots_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use game_slots_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Numeric rotation state (0-3)
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for a numeric state (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rotation::North),
            1 => Some(Rotation::East),
            2 => Some(Rotation::South),
            3 => Some(Rotation::West),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rotation::from_index(value).ok_or(InvalidRotation(value))
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.index()
    }
}

/// Direction of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    Clockwise,
    Counterclockwise,
}

impl RotationDirection {
    /// Target rotation state for a piece currently at `from`
    pub fn apply(&self, from: Rotation) -> Rotation {
        match self {
            RotationDirection::Clockwise => from.rotate_cw(),
            RotationDirection::Counterclockwise => from.rotate_ccw(),
        }
    }
}
