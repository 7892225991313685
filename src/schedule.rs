use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{Id, doubled::Doubled, fixture::Fixture};

/// A complete set of fixtures partitioned into gameweeks.
///
/// A schedule is derived state: it is recomputed wholesale from a roster
/// snapshot and cleared whenever the roster mutates. Within a single half
/// every unordered pair of participants appears in exactly one fixture, and
/// no participant appears in more than one fixture per gameweek.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Schedule {
    fixtures: Vec<Fixture>,
}

impl Schedule {
    /// Builds a schedule for the given participants with the circle method.
    ///
    /// The first participant is the anchor and never moves; after each round
    /// the last slot is reinserted at position 1. An odd participant count
    /// gets a synthetic bye slot, and pairings involving it are dropped, so
    /// one participant sits out each of those rounds. Fewer than two
    /// participants yields an empty schedule.
    #[must_use]
    pub fn round_robin(participants: &[Id], doubled: Doubled) -> Self {
        if participants.len() < 2 {
            return Self::default();
        }

        // None is the bye slot.
        let mut slots: Vec<Option<Id>> = participants.iter().copied().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let round_count = slots.len() - 1;
        let half = slots.len() / 2;

        let mut fixtures =
            Vec::with_capacity(Self::match_count(participants.len(), doubled));
        let mut id: Id = 0;
        let mut gameweek: u32 = 0;

        for _ in 0..round_count {
            gameweek += 1;

            for i in 0..half {
                if let (Some(home), Some(away)) = (slots[i], slots[slots.len() - 1 - i]) {
                    id += 1;
                    fixtures.push(Fixture {
                        id,
                        gameweek,
                        home,
                        away,
                    });
                }
            }

            if let Some(last) = slots.pop() {
                slots.insert(1, last);
            }
        }

        if doubled.into() {
            let first_half = fixtures.clone();
            for fixture in &first_half {
                id += 1;
                fixtures.push(fixture.mirrored(id, gameweek));
            }
        }

        Self { fixtures }
    }

    /// Total fixtures for `count` participants, in closed form.
    #[must_use]
    pub fn match_count(count: usize, doubled: Doubled) -> usize {
        if count < 2 {
            return 0;
        }

        let half = count * (count - 1) / 2;
        if doubled.into() { half * 2 } else { half }
    }

    /// Total gameweeks for `count` participants, in closed form.
    ///
    /// An odd count needs one extra round so that every participant can sit
    /// out exactly once.
    #[must_use]
    pub fn gameweek_count(count: usize, doubled: Doubled) -> usize {
        if count < 2 {
            return 0;
        }

        let half = if count % 2 == 0 { count - 1 } else { count };
        if doubled.into() { half * 2 } else { half }
    }

    #[must_use]
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// The fixtures of one gameweek, in emission order. Empty if there are
    /// none.
    #[must_use]
    pub fn by_gameweek(&self, gameweek: u32) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|fixture| fixture.gameweek == gameweek)
            .collect()
    }

    /// The gameweek numbers present in the schedule, ascending.
    #[must_use]
    pub fn gameweeks(&self) -> Vec<u32> {
        let gameweeks: BTreeSet<u32> = self
            .fixtures
            .iter()
            .map(|fixture| fixture.gameweek)
            .collect();

        gameweeks.into_iter().collect()
    }

    pub fn clear(&mut self) {
        self.fixtures.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixtures: Vec<_> = self.fixtures.iter().map(ToString::to_string).collect();

        write!(f, "{}", fixtures.join("\n"))
    }
}
