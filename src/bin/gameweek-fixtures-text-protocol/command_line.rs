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

use std::io::Write as _;

use clap::{CommandFactory, Parser};

use gameweek_fixtures::{COPYRIGHT, LONG_VERSION};

/// Round-Robin Gameweek Fixtures
///
/// This schedules fixtures using a line-oriented text protocol.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Round-robin gameweek fixture scheduler")]
pub(crate) struct Args {
    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Displays the league after every command
    #[arg(long)]
    pub display_league: bool,

    /// Whether the application is being run by systemd
    #[arg(long)]
    pub systemd: bool,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command()
            .name("gameweek-fixtures-text-protocol")
            .long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-08-06");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("gameweek-fixtures-text-protocol.1", buffer)?;
        Ok(())
    }
}
