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

use std::{fmt, ops::Not, str::FromStr};

use serde::{Deserialize, Serialize};

/// Whether every pair meets twice, with home and away swapped across the two
/// halves of the schedule.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Doubled {
    #[default]
    No,
    Yes,
}

impl fmt::Display for Doubled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Doubled::No => write!(f, "single"),
            Doubled::Yes => write!(f, "doubled"),
        }
    }
}

impl Not for Doubled {
    type Output = Doubled;

    fn not(self) -> Self::Output {
        match self {
            Doubled::No => Doubled::Yes,
            Doubled::Yes => Doubled::No,
        }
    }
}

impl From<bool> for Doubled {
    fn from(boolean: bool) -> Self {
        if boolean { Self::Yes } else { Self::No }
    }
}

impl From<Doubled> for bool {
    fn from(doubled: Doubled) -> Self {
        match doubled {
            Doubled::Yes => true,
            Doubled::No => false,
        }
    }
}

impl FromStr for Doubled {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string {
            "doubled" => Ok(Self::Yes),
            "single" => Ok(Self::No),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to Doubled!"
            ))),
        }
    }
}
