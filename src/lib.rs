//! A round-robin fixture scheduler for gameweek-based competitions.
//!
//! Participants live in an insertion-ordered [`roster::Roster`]. A
//! [`schedule::Schedule`] is generated from a roster snapshot with the
//! classic circle method, once per pair or doubled home-and-away, and the
//! [`league::League`] ties the two together so a mutated roster can never be
//! read against a stale schedule.
//!
//! ## Message Protocol
//!
//! The league is driven by a line-oriented message protocol, see
//! [`message::Message`]. The `gameweek-fixtures-text-protocol` binary speaks
//! it over stdin and stdout.

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

#![deny(clippy::panic)]

pub mod doubled;
pub mod fixture;
pub mod league;
pub mod message;
pub mod participant;
pub mod roster;
pub mod schedule;
pub mod utils;

pub type Id = u128;

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the gameweek-fixtures project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 Developers of the gameweek-fixtures project
Licensed under the AGPLv3"
);

#[cfg(test)]
mod tests {
    use std::fmt;

    use crate::{
        doubled::Doubled, league::League, participant::Image, schedule::Schedule,
    };

    fn assert_error_str<T: fmt::Debug>(result: anyhow::Result<T>, string: &str) {
        if let Err(error) = result {
            assert_eq!(error.to_string(), string);
        }
    }

    fn league_of(names: &[&str]) -> League {
        let mut league = League::new();
        for name in names {
            league.add_player(name);
        }

        league
    }

    // One

    #[test]
    fn add_players() -> anyhow::Result<()> {
        let mut league = League::default();

        assert_eq!(league.read_line("add_player Ann\n")?, Some("1".to_string()));
        assert_eq!(league.read_line("add_player Bea\n")?, Some("2".to_string()));
        assert_eq!(league.roster().len(), 2);

        let names: Vec<_> = league
            .roster()
            .participants()
            .iter()
            .map(|participant| participant.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ann", "Bea"]);

        Ok(())
    }

    #[test]
    fn add_player_empty_name_is_ignored() -> anyhow::Result<()> {
        let mut league = League::default();

        assert_eq!(league.read_line("add_player\n")?, Some(String::new()));
        assert_eq!(league.read_line("add_player   \n")?, Some(String::new()));
        assert!(league.roster().is_empty());
        assert_eq!(league.generation(), 0);

        Ok(())
    }

    #[test]
    fn add_player_keeps_insertion_order() {
        let league = league_of(&["Dan", "Ann", "Cal", "Bea"]);

        let names: Vec<_> = league
            .roster()
            .participants()
            .iter()
            .map(|participant| participant.name.as_str())
            .collect();
        assert_eq!(names, vec!["Dan", "Ann", "Cal", "Bea"]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut league = league_of(&["Ann", "Bea"]);

        assert!(league.remove_player(2));
        let id = league.add_player("Cal");
        assert_eq!(id, Some(3));
    }

    // Two

    #[test]
    fn two_players_single() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea"]);

        assert_eq!(
            league.read_line("generate\n")?,
            Some("1 matches over 1 gameweeks".to_string())
        );
        assert_eq!(
            league.read_line("fixtures\n")?,
            Some("gameweek 1:\n    Ann v Bea".to_string())
        );

        Ok(())
    }

    #[test]
    fn two_players_doubled() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea"]);

        league.read_line("generate doubled\n")?;
        assert_eq!(league.gameweeks(), vec![1, 2]);
        assert_eq!(
            league.read_line("gameweek 1\n")?,
            Some("Ann v Bea".to_string())
        );
        assert_eq!(
            league.read_line("gameweek 2\n")?,
            Some("Bea v Ann".to_string())
        );

        Ok(())
    }

    // Three

    #[test]
    fn three_players_one_idle_per_gameweek() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea", "Cal"]);

        league.read_line("generate\n")?;
        assert_eq!(league.schedule().len(), 3);
        assert_eq!(league.gameweeks(), vec![1, 2, 3]);

        for gameweek in league.gameweeks() {
            assert_eq!(league.fixtures_by_gameweek(gameweek).len(), 1);
        }

        assert_eq!(
            league.read_line("fixtures\n")?,
            Some(
                "gameweek 1:\n    Bea v Cal\n\
                 gameweek 2:\n    Ann v Cal\n\
                 gameweek 3:\n    Ann v Bea"
                    .to_string()
            )
        );

        Ok(())
    }

    // Four

    #[test]
    fn four_players_single() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea", "Cal", "Dan"]);

        assert_eq!(
            league.read_line("generate\n")?,
            Some("6 matches over 3 gameweeks".to_string())
        );
        assert_eq!(
            league.read_line("gameweek 1\n")?,
            Some("Ann v Dan\nBea v Cal".to_string())
        );
        assert_eq!(
            league.read_line("gameweek 3\n")?,
            Some("Ann v Bea\nCal v Dan".to_string())
        );

        Ok(())
    }

    #[test]
    fn four_players_doubled_mirrors_first_half() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea", "Cal", "Dan"]);

        assert_eq!(
            league.read_line("generate doubled\n")?,
            Some("12 matches over 6 gameweeks".to_string())
        );
        assert_eq!(
            league.read_line("gameweek 4\n")?,
            Some("Dan v Ann\nCal v Bea".to_string())
        );

        let first = league.fixtures_by_gameweek(1);
        let mirrored = league.fixtures_by_gameweek(4);
        for (a, b) in first.iter().zip(&mirrored) {
            assert_eq!(a.home, b.away);
            assert_eq!(a.away, b.home);
        }

        Ok(())
    }

    // Five

    #[test]
    fn too_few_players_is_a_no_op() -> anyhow::Result<()> {
        let mut league = League::default();

        assert_eq!(
            league.read_line("generate\n")?,
            Some("0 matches over 0 gameweeks".to_string())
        );
        assert!(league.schedule().is_empty());

        league.read_line("add_player Ann\n")?;
        league.read_line("generate doubled\n")?;
        assert!(league.schedule().is_empty());
        assert_eq!(league.read_line("fixtures\n")?, Some(String::new()));
        assert_eq!(league.read_line("gameweeks\n")?, Some(String::new()));

        Ok(())
    }

    // Six

    #[test]
    fn removal_invalidates_the_schedule() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea", "Cal", "Dan"]);

        league.read_line("generate\n")?;
        assert_eq!(league.schedule().len(), 6);
        let generation = league.generation();

        league.read_line("remove_player 3\n")?;
        assert!(league.schedule().is_empty());
        assert_eq!(league.generation(), generation + 1);
        assert_eq!(league.read_line("fixtures\n")?, Some(String::new()));

        Ok(())
    }

    #[test]
    fn removing_an_unknown_id_is_a_no_op() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea"]);

        league.read_line("generate\n")?;
        league.read_line("remove_player 99\n")?;
        assert_eq!(league.schedule().len(), 1);
        assert_eq!(league.roster().len(), 2);

        Ok(())
    }

    #[test]
    fn adding_invalidates_the_schedule() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea"]);

        league.read_line("generate\n")?;
        league.read_line("add_player Cal\n")?;
        assert!(league.schedule().is_empty());

        Ok(())
    }

    // Seven

    #[test]
    fn attach_image_never_invalidates() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea"]);

        league.read_line("generate\n")?;
        assert_eq!(league.read_line("attach_image 1 ann.png\n")?, Some(String::new()));
        assert_eq!(league.schedule().len(), 1);

        let participant = league.roster().get(1).unwrap();
        assert_eq!(participant.image, Some(Image(b"ann.png".to_vec())));

        // an unknown id is a no-op, not an error
        assert_eq!(league.read_line("attach_image 99 x\n")?, Some(String::new()));

        Ok(())
    }

    // Eight

    #[test]
    fn bad_commands() {
        let mut league = league_of(&["Ann", "Bea"]);

        let mut result = league.read_line("foo\n");
        assert!(result.is_err());
        assert_error_str(result, "unknown command: foo");

        result = league.read_line("gameweek\n");
        assert!(result.is_err());
        assert_error_str(result, "gameweek: expected 'gameweek NUMBER'");

        result = league.read_line("gameweek one\n");
        assert!(result.is_err());
        assert_error_str(result, "invalid digit found in string");

        result = league.read_line("remove_player\n");
        assert!(result.is_err());
        assert_error_str(result, "remove_player: expected 'remove_player ID'");

        result = league.read_line("attach_image 1\n");
        assert!(result.is_err());
        assert_error_str(result, "attach_image: expected 'attach_image ID DATA'");

        result = league.read_line("generate both\n");
        assert!(result.is_err());
        assert_error_str(result, "Error trying to convert 'both' to Doubled!");
    }

    #[test]
    fn comments_and_blank_lines() -> anyhow::Result<()> {
        let mut league = League::default();

        assert_eq!(league.read_line("# a comment\n")?, None);
        assert_eq!(league.read_line("\n")?, None);
        assert_eq!(league.read_line("add_player Ann # trailing\n")?, Some("1".to_string()));

        Ok(())
    }

    // Nine

    #[test]
    fn protocol_chatter() -> anyhow::Result<()> {
        let mut league = League::default();

        assert_eq!(
            league.read_line("known_command generate\n")?,
            Some("true".to_string())
        );
        assert_eq!(
            league.read_line("known_command poster\n")?,
            Some("false".to_string())
        );
        assert_eq!(league.read_line("name\n")?, Some("gameweek-fixtures".to_string()));
        assert_eq!(
            league.read_line("version\n")?,
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
        assert_eq!(league.read_line("protocol_version\n")?, Some("1".to_string()));

        let commands = league.read_line("list_commands\n")?.unwrap();
        assert!(commands.contains("add_player"));
        assert!(commands.contains("summary"));

        Ok(())
    }

    #[test]
    fn summary_uses_closed_forms() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea", "Cal", "Dan"]);

        league.read_line("generate doubled\n")?;
        assert_eq!(
            league.read_line("summary\n")?,
            Some("players 4 mode doubled matches 12 gameweeks 6".to_string())
        );

        Ok(())
    }

    #[test]
    fn show_roster() -> anyhow::Result<()> {
        let mut league = league_of(&["Ann", "Bea"]);

        assert_eq!(
            league.read_line("show_roster\n")?,
            Some("1 Ann\n2 Bea".to_string())
        );

        league.attach_image(2, Image(vec![0; 16]));
        assert_eq!(
            league.read_line("show_roster\n")?,
            Some("1 Ann\n2 Bea (16 bytes)".to_string())
        );

        Ok(())
    }

    // Ten

    #[test]
    fn regeneration_is_deterministic() {
        let ids: Vec<crate::Id> = (1..=7).collect();

        let first = Schedule::round_robin(&ids, Doubled::Yes);
        let second = Schedule::round_robin(&ids, Doubled::Yes);
        assert_eq!(first, second);
    }

    #[test]
    fn fixture_ids_count_up_in_emission_order() {
        let ids: Vec<crate::Id> = (1..=4).collect();

        let schedule = Schedule::round_robin(&ids, Doubled::Yes);
        let fixture_ids: Vec<_> = schedule.fixtures().iter().map(|fixture| fixture.id).collect();
        let expected: Vec<crate::Id> = (1..=12).collect();
        assert_eq!(fixture_ids, expected);
    }
}
