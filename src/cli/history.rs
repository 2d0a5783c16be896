//! CLI commands for the calculation history log

use std::io;

use clap::Subcommand;

use crate::config::OutputFormat;
use crate::error::FincalcResult;

use super::context::Context;

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Show recent calculations
    List {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Delete every recorded calculation
    Clear,
}

/// Handle history commands
pub fn handle_history_command(ctx: &Context, cmd: HistoryCommands) -> FincalcResult<()> {
    let logger = ctx.history();

    match cmd {
        HistoryCommands::List { limit } => {
            let entries = logger.read_recent(limit)?;

            if !ctx.is_table() {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                match ctx.format {
                    OutputFormat::Yaml => serde_yaml::to_writer(&mut out, &entries)?,
                    _ => {
                        serde_json::to_writer_pretty(&mut out, &entries)?;
                        println!();
                    }
                }
                return Ok(());
            }

            if entries.is_empty() {
                println!("No calculations recorded yet.");
                if !ctx.settings.record_history {
                    println!("History recording is turned off in settings.");
                }
                return Ok(());
            }

            println!("Recent calculations ({} of {}):", entries.len(), logger.entry_count()?);
            println!();
            for entry in &entries {
                println!("{}", entry.format_human_readable(&ctx.settings.date_format));
            }
        }
        HistoryCommands::Clear => {
            let removed = logger.clear()?;
            println!("Cleared {} history entries.", removed);
        }
    }

    Ok(())
}
