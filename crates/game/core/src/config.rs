/// Game configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of disks stacked on peg A when the board is (re)built.
    pub disks: u8,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of disks a board can hold. Bounds the per-peg stacks.
    pub const MAX_DISKS: usize = 16;

    /// Largest disk count the solver enumerates step by step. Beyond this
    /// the solver responds with a move count only and the puzzle is not
    /// playable.
    pub const SOLVER_STEP_LIMIT_DISKS: u8 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DISKS: u8 = 3;

    pub fn new() -> Self {
        Self {
            disks: Self::DEFAULT_DISKS,
        }
    }

    pub fn with_disks(disks: u8) -> Self {
        Self { disks }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
