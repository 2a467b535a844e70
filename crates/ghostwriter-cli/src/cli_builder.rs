//! CLI argument parsing and command building
//!
//! This module handles the construction of the command-line interface,
//! including global flags and one subcommand per journal operation.

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

fn date_arg(help: &'static str) -> Arg {
    Arg::new("date")
        .value_name("YYYY-MM-DD")
        .help(help)
        .required(true)
}

fn mood_arg() -> Arg {
    Arg::new("mood")
        .short('m')
        .long("mood")
        .value_name("1-5")
        .help("Mood rating from 1 (bad) to 5 (great)")
        .value_parser(clap::value_parser!(i64))
        .allow_negative_numbers(true)
        .required(true)
}

/// Build the main CLI command structure
pub fn build_cli() -> Command {
    Command::new("ghostwriter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mood journal with Ghost Writer reflections")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("journal")
                .long("journal")
                .value_name("FILE")
                .help("Journal file to read and write")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Output results in JSON format")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-latency")
                .long("no-latency")
                .help("Skip the simulated Ghost Writer thinking time")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Seed for reflection and sample-data randomness")
                .value_parser(clap::value_parser!(u64))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("write")
                .about("Create or replace the entry for a day")
                .arg(mood_arg())
                .arg(
                    Arg::new("note")
                        .short('n')
                        .long("note")
                        .value_name("TEXT")
                        .help("What's on your mind")
                        .default_value(""),
                )
                .arg(
                    Arg::new("date")
                        .short('d')
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .help("Day to write for (defaults to today)"),
                )
                .arg(
                    Arg::new("no-enhance")
                        .long("no-enhance")
                        .help("Save without a Ghost Writer reflection")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Show the reflection a note would get, without saving")
                .arg(mood_arg())
                .arg(
                    Arg::new("note")
                        .short('n')
                        .long("note")
                        .value_name("TEXT")
                        .help("Note to reflect on")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List entries, newest first")
                .arg(
                    Arg::new("limit")
                        .short('l')
                        .long("limit")
                        .value_name("N")
                        .help("Show at most N entries")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show one entry with its reflection and original words")
                .arg(date_arg("Day of the entry")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete the entry for a day")
                .arg(date_arg("Day of the entry to delete")),
        )
        .subcommand(
            Command::new("regenerate")
                .about("Ask Ghost Writer for a fresh reflection on an entry")
                .arg(date_arg("Day of the entry to regenerate")),
        )
        .subcommand(Command::new("stats").about("Average mood, streaks, distribution and insight"))
        .subcommand(
            Command::new("chart")
                .about("Text chart of recent moods")
                .arg(
                    Arg::new("days")
                        .long("days")
                        .value_name("N")
                        .help("Number of most recent entries to chart")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("seed")
                .about("Fill an empty journal with sample entries")
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Replace existing entries with sample data")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or create configuration")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(
                    Command::new("init")
                        .about("Write a default configuration file")
                        .arg(
                            Arg::new("path")
                                .value_name("FILE")
                                .help("Destination (defaults to ./ghostwriter.json)")
                                .value_parser(clap::value_parser!(PathBuf)),
                        )
                        .arg(
                            Arg::new("force")
                                .long("force")
                                .help("Overwrite an existing file")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["ghostwriter", "stats", "--json", "--journal", "j.json"])
            .unwrap();
        assert!(matches.get_flag("json"));
        assert_eq!(
            matches.get_one::<PathBuf>("journal"),
            Some(&PathBuf::from("j.json"))
        );
    }

    #[test]
    fn test_write_requires_mood() {
        let result = build_cli().try_get_matches_from(["ghostwriter", "write", "--note", "hi"]);
        assert!(result.is_err());
    }
}
