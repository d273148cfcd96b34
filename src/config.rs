/// Default board width.
pub const BOARD_WIDTH: usize = 10;
/// Default board height.
pub const BOARD_HEIGHT: usize = 10;

/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = 10;

/// Standard fleet: one 4-decker, two 3-deckers, three 2-deckers, four 1-deckers.
/// Largest first, which is the order fleet generation places them in.
pub const STANDARD_FLEET: [ShipClass; 4] = [
    ShipClass::new(4, 1),
    ShipClass::new(3, 2),
    ShipClass::new(2, 3),
    ShipClass::new(1, 4),
];

/// Random free-cell draws allowed per ship before a fleet attempt is abandoned.
pub const PLACEMENT_ATTEMPTS: usize = 1_000;

/// Whole-fleet attempts made by `reset_and_fill`.
pub const FLEET_RETRIES: usize = 16;

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "SEABATTLE_LOG";

/// Board geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl BoardConfig {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// A ship size and how many ships of that size a fleet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipClass {
    size: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(size: usize, count: usize) -> Self {
        Self { size, count }
    }

    /// Number of cells each ship of this class occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of ships of this class.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Total ship count of a fleet description.
pub fn fleet_ship_count(fleet: &[ShipClass]) -> usize {
    fleet.iter().map(ShipClass::count).sum()
}
