// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Id,
    participant::{Image, Participant},
};

/// The participant registry.
///
/// Participants are kept in insertion order; that order is user-visible and
/// is the base ordering fed to the scheduler. Identifiers come from a counter
/// that never goes backwards, so an id stays unique for the roster's
/// lifetime even after removals.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Roster {
    participants: Vec<Participant>,
    next_id: Id,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a participant with a fresh id and returns the id.
    ///
    /// Empty and whitespace-only names are ignored and `None` is returned.
    pub fn add(&mut self, name: &str) -> Option<Id> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.next_id += 1;
        self.participants.push(Participant {
            id: self.next_id,
            name: name.to_string(),
            image: None,
        });

        Some(self.next_id)
    }

    /// Removes the participant with that id, returning whether anything
    /// changed. Unknown ids are a no-op.
    pub fn remove(&mut self, id: Id) -> bool {
        let before = self.participants.len();
        self.participants.retain(|participant| participant.id != id);
        self.participants.len() != before
    }

    /// Associates opaque image data with a participant, returning whether
    /// anything changed. Unknown ids are a no-op.
    pub fn attach_image(&mut self, id: Id, image: Image) -> bool {
        if let Some(participant) = self
            .participants
            .iter_mut()
            .find(|participant| participant.id == id)
        {
            participant.image = Some(image);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn get(&self, id: Id) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| participant.id == id)
    }

    #[must_use]
    pub fn name(&self, id: Id) -> Option<&str> {
        self.get(id).map(|participant| participant.name.as_str())
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn ids(&self) -> Vec<Id> {
        self.participants
            .iter()
            .map(|participant| participant.id)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let participants: Vec<_> = self
            .participants
            .iter()
            .map(ToString::to_string)
            .collect();

        write!(f, "{}", participants.join("\n"))
    }
}
