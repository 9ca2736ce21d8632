//! Ship classes and per-ship damage tracking.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The five classes of the classic fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipClass {
    /// Display name of the class.
    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
        }
    }

    /// Number of cells the class occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship with its orientation and accumulated damage.
///
/// Invariant: `hits` never exceeds the class length. The board enforces this
/// upstream by refusing repeated shots at a resolved cell; `hit` asserts it
/// in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    hits: u8,
}

impl Ship {
    /// Create an undamaged ship.
    pub fn new(class: ShipClass, orientation: Orientation) -> Self {
        Ship {
            class,
            orientation,
            hits: 0,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells hit so far.
    pub fn hits(&self) -> u8 {
        self.hits
    }

    /// Register one hit. Calling this on a sunk ship is a caller error; the
    /// damage count is never pushed past the class length.
    pub fn hit(&mut self) {
        debug_assert!(!self.is_sunk(), "hit on a sunk ship");
        if (self.hits as usize) < self.class.length() {
            self.hits += 1;
        }
    }

    /// True once every cell of the ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits as usize == self.class.length()
    }
}
