use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hato` binary.
#[derive(Debug, Parser)]
#[command(name = "hato", version, about = "Hato - herd records and activity logbook")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Act as this user login (defaults to the configured operator)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Database file path (overrides configuration)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            user: self.user.clone(),
            db: self.db.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{AnimalCommands, LogCommands, PenCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "hato", "--format", "table", "--limit", "10", "--verbose", "pen", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Pen {
                action: PenCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["hato", "pen", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["hato", "--format", "xml", "pen", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn user_and_db_flags_are_global() {
        let cli = Cli::try_parse_from([
            "hato", "animal", "list", "--user", "jdoe", "--db", "/tmp/test.db",
        ])
        .expect("cli should parse");

        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.user.as_deref(), Some("jdoe"));
        assert_eq!(flags.db.as_deref(), Some("/tmp/test.db"));
    }

    #[test]
    fn log_query_accepts_filters() {
        let cli = Cli::try_parse_from([
            "hato", "log", "query", "--from", "2026-01-01", "--to", "2026-01-31", "--module",
            "Animals", "--tag", "MX-001",
        ])
        .expect("cli should parse");

        let Commands::Log {
            action:
                LogCommands::Query {
                    from,
                    to,
                    module,
                    tag,
                    ..
                },
        } = cli.command
        else {
            panic!("expected log query");
        };
        assert_eq!(from.as_deref(), Some("2026-01-01"));
        assert_eq!(to.as_deref(), Some("2026-01-31"));
        assert_eq!(module.as_deref(), Some("Animals"));
        assert_eq!(tag.as_deref(), Some("MX-001"));
    }

    #[test]
    fn animal_register_requires_sex() {
        assert!(Cli::try_parse_from(["hato", "animal", "register", "MX-001"]).is_err());

        let cli =
            Cli::try_parse_from(["hato", "animal", "register", "MX-001", "--sex", "female"])
                .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Animal {
                action: AnimalCommands::Register { .. }
            }
        ));
    }
}
