use std::{borrow::Cow, fmt, process::exit, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Id,
    doubled::Doubled,
    fixture::Fixture,
    message::{COMMANDS, Message},
    participant::Image,
    roster::Roster,
    schedule::Schedule,
};

/// The roster and its derived schedule.
///
/// All mutation goes through this type so that the schedule can never be
/// read against a stale roster: every effective roster mutation bumps the
/// generation counter and clears the schedule in the same call. Regeneration
/// rebuilds the whole schedule from the current snapshot and swaps it in
/// with a single assignment.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct League {
    roster: Roster,
    schedule: Schedule,
    doubled: Doubled,
    generation: u64,
}

impl League {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a participant, invalidating the schedule. Empty and
    /// whitespace-only names are ignored.
    pub fn add_player(&mut self, name: &str) -> Option<Id> {
        let id = self.roster.add(name);
        if id.is_some() {
            self.invalidate();
        }

        id
    }

    /// Removes a participant, invalidating the schedule. Unknown ids are a
    /// no-op and leave the schedule alone.
    pub fn remove_player(&mut self, id: Id) -> bool {
        let removed = self.roster.remove(id);
        if removed {
            self.invalidate();
        }

        removed
    }

    /// Attaches opaque image data to a participant. Never invalidates the
    /// schedule; images play no part in scheduling.
    pub fn attach_image(&mut self, id: Id, image: Image) -> bool {
        self.roster.attach_image(id, image)
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.schedule.clear();
    }

    /// Recomputes the schedule from the current roster snapshot. With fewer
    /// than two participants this is a no-op that leaves the schedule empty.
    pub fn generate(&mut self, doubled: Doubled) {
        self.doubled = doubled;
        self.schedule = Schedule::round_robin(&self.roster.ids(), doubled);
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[must_use]
    pub fn doubled(&self) -> Doubled {
        self.doubled
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn fixtures_by_gameweek(&self, gameweek: u32) -> Vec<&Fixture> {
        self.schedule.by_gameweek(gameweek)
    }

    #[must_use]
    pub fn gameweeks(&self) -> Vec<u32> {
        self.schedule.gameweeks()
    }

    /// Total match count for the current roster and mode, in closed form.
    #[must_use]
    pub fn match_count(&self) -> usize {
        Schedule::match_count(self.roster.len(), self.doubled)
    }

    /// Total gameweek count for the current roster and mode, in closed form.
    #[must_use]
    pub fn gameweek_count(&self) -> usize {
        Schedule::gameweek_count(self.roster.len(), self.doubled)
    }

    /// # Errors
    ///
    /// If the command is illegal or invalid.
    pub fn read_line(&mut self, buffer: &str) -> anyhow::Result<Option<String>> {
        let mut buffer = Cow::from(buffer);
        if let Some(comment_offset) = buffer.find('#') {
            buffer.to_mut().replace_range(comment_offset.., "");
        }

        self.update(Message::from_str(buffer.as_ref())?)
    }

    /// # Errors
    ///
    /// If the command is illegal or invalid.
    pub fn update(&mut self, message: Message) -> anyhow::Result<Option<String>> {
        match message {
            Message::AddPlayer(name) => Ok(Some(match self.add_player(&name) {
                Some(id) => id.to_string(),
                None => String::new(),
            })),
            Message::AttachImage(id, data) => {
                self.attach_image(id, Image(data));
                Ok(Some(String::new()))
            }
            Message::Empty => Ok(None),
            Message::Fixtures => Ok(Some(self.show_fixtures())),
            Message::Gameweek(gameweek) => {
                let fixtures: Vec<_> = self
                    .fixtures_by_gameweek(gameweek)
                    .into_iter()
                    .map(|fixture| self.fixture_names(fixture))
                    .collect();

                Ok(Some(fixtures.join("\n")))
            }
            Message::Gameweeks => Ok(Some(
                self.gameweeks()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            )),
            Message::Generate(doubled) => {
                self.generate(doubled);
                Ok(Some(format!(
                    "{} matches over {} gameweeks",
                    self.schedule.len(),
                    self.gameweeks().len()
                )))
            }
            Message::KnownCommand(command) => {
                if COMMANDS.contains(&command.as_str()) {
                    Ok(Some("true".to_string()))
                } else {
                    Ok(Some("false".to_string()))
                }
            }
            Message::ListCommands => {
                let mut commands = "\n".to_string();
                commands.push_str(&COMMANDS.join("\n"));
                Ok(Some(commands))
            }
            Message::Name => {
                let name = env!("CARGO_PKG_NAME");
                Ok(Some(name.to_string()))
            }
            Message::ProtocolVersion => Ok(Some("1".to_string())),
            Message::Quit => exit(0),
            Message::RemovePlayer(id) => {
                self.remove_player(id);
                Ok(Some(String::new()))
            }
            Message::ShowRoster => Ok(Some(self.roster.to_string())),
            Message::Summary => Ok(Some(format!(
                "players {} mode {} matches {} gameweeks {}",
                self.roster.len(),
                self.doubled,
                self.match_count(),
                self.gameweek_count()
            ))),
            Message::Version => {
                let version = env!("CARGO_PKG_VERSION");
                Ok(Some(version.to_string()))
            }
        }
    }

    fn fixture_names(&self, fixture: &Fixture) -> String {
        let home = self.roster.name(fixture.home).unwrap_or("?");
        let away = self.roster.name(fixture.away).unwrap_or("?");

        format!("{home} v {away}")
    }

    fn show_fixtures(&self) -> String {
        let mut lines = Vec::new();

        for gameweek in self.gameweeks() {
            lines.push(format!("gameweek {gameweek}:"));
            for fixture in self.fixtures_by_gameweek(gameweek) {
                lines.push(format!("    {}", self.fixture_names(fixture)));
            }
        }

        lines.join("\n")
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.roster.is_empty() {
            writeln!(f, "{}\n", self.roster)?;
        }

        writeln!(f, "players: {}", self.roster.len())?;
        writeln!(f, "mode: {}", self.doubled)?;
        writeln!(f, "matches: {}", self.match_count())?;
        writeln!(f, "gameweeks: {}", self.gameweek_count())?;

        write!(f, "{}", self.show_fixtures())
    }
}
