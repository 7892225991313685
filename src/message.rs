use std::str::FromStr;

use thiserror::Error;

use crate::{Id, doubled::Doubled};

pub const COMMANDS: [&str; 15] = [
    "add_player",
    "attach_image",
    "fixtures",
    "gameweek",
    "gameweeks",
    "generate",
    "known_command",
    "list_commands",
    "name",
    "protocol_version",
    "quit",
    "remove_player",
    "show_roster",
    "summary",
    "version",
];

/// One command of the text protocol.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AddPlayer(String),
    AttachImage(Id, Vec<u8>),
    Empty,
    Fixtures,
    Gameweek(u32),
    Gameweeks,
    Generate(Doubled),
    KnownCommand(String),
    ListCommands,
    Name,
    ProtocolVersion,
    Quit,
    RemovePlayer(Id),
    ShowRoster,
    Summary,
    Version,
}

#[derive(Error, Debug)]
pub enum InvalidCommand {
    #[error("attach_image: expected 'attach_image ID DATA'")]
    AttachImage,
    #[error("gameweek: expected 'gameweek NUMBER'")]
    Gameweek,
    #[error("remove_player: expected 'remove_player ID'")]
    RemovePlayer,
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Message {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        let words: Vec<&str> = string.split_ascii_whitespace().collect();

        let Some(command) = words.first() else {
            return Ok(Self::Empty);
        };

        match *command {
            "add_player" => Ok(Self::AddPlayer(words[1..].join(" "))),
            "attach_image" => {
                let Some(id) = words.get(1) else {
                    return Err(InvalidCommand::AttachImage.into());
                };
                let data = words[2..].join(" ");
                if data.is_empty() {
                    return Err(InvalidCommand::AttachImage.into());
                }

                Ok(Self::AttachImage(id.parse()?, data.into_bytes()))
            }
            "fixtures" => Ok(Self::Fixtures),
            "gameweek" => {
                let Some(gameweek) = words.get(1) else {
                    return Err(InvalidCommand::Gameweek.into());
                };

                Ok(Self::Gameweek(gameweek.parse()?))
            }
            "gameweeks" => Ok(Self::Gameweeks),
            "generate" => match words.get(1) {
                Some(mode) => Ok(Self::Generate(Doubled::from_str(mode)?)),
                None => Ok(Self::Generate(Doubled::No)),
            },
            "known_command" => Ok(Self::KnownCommand(
                words.get(1).unwrap_or(&"").to_string(),
            )),
            "list_commands" => Ok(Self::ListCommands),
            "name" => Ok(Self::Name),
            "protocol_version" => Ok(Self::ProtocolVersion),
            "quit" => Ok(Self::Quit),
            "remove_player" => {
                let Some(id) = words.get(1) else {
                    return Err(InvalidCommand::RemovePlayer.into());
                };

                Ok(Self::RemovePlayer(id.parse()?))
            }
            "show_roster" => Ok(Self::ShowRoster),
            "summary" => Ok(Self::Summary),
            "version" => Ok(Self::Version),
            _ => Err(InvalidCommand::Unknown((*command).to_string()).into()),
        }
    }
}
