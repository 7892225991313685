mod command_line;

use std::{
    io,
    process::{Command, ExitStatus},
};

use clap::Parser;
use log::debug;

use gameweek_fixtures::{league::League, utils};

use crate::command_line::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug, args.systemd);

    if args.man {
        return Args::generate_man_page();
    }

    run(args.display_league)
}

fn clear_screen() -> anyhow::Result<ExitStatus> {
    #[cfg(target_family = "windows")]
    let exit_status = Command::new("cls").status()?;

    #[cfg(not(target_family = "windows"))]
    let exit_status = Command::new("clear").status()?;

    Ok(exit_status)
}

fn run(display_league: bool) -> anyhow::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut league = League::default();

    if display_league {
        clear_screen()?;
        println!("{league}\n");
        println!("Enter 'list_commands' for a list of commands.");
    }

    loop {
        match stdin.read_line(&mut buffer) {
            Ok(0) => return Ok(()),
            Ok(_) => {}
            Err(error) => {
                println!("? {error}\n");
                buffer.clear();
                return Ok(());
            }
        }

        debug!("read: {}", buffer.trim_end());
        let result = league.read_line(&buffer);

        if display_league {
            clear_screen()?;
            println!("{league}\n");
        }

        match result {
            Err(error) => println!("? {error}\n"),
            Ok(message) => {
                if let Some(message) = message {
                    println!("= {message}");
                }
            }
        }

        buffer.clear();
    }
}
