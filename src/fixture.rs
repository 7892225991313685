use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Id;

/// A single pairing within a gameweek.
///
/// The (home, away) order is meaningful: in doubled mode the second half
/// replays every pairing with the order swapped. Fixtures are immutable once
/// created and are owned by the schedule that produced them.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Fixture {
    pub id: Id,
    pub gameweek: u32,
    pub home: Id,
    pub away: Id,
}

impl Fixture {
    #[must_use]
    pub fn involves(&self, id: Id) -> bool {
        self.home == id || self.away == id
    }

    /// The same pairing with home and away swapped, placed in the mirrored
    /// gameweek of the second half.
    #[must_use]
    pub fn mirrored(&self, id: Id, round_count: u32) -> Self {
        Self {
            id,
            gameweek: self.gameweek + round_count,
            home: self.away,
            away: self.home,
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gameweek {}: {} v {}", self.gameweek, self.home, self.away)
    }
}
