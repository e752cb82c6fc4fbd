use crate::application::{Config, SelectorApp};
use crate::domain::{FixedClock, SelectionInput, parse_day, start_of_day};
use anyhow::Context;
use chrono::{NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "date-selector")]
#[command(about = "Resolve dashboard date ranges from presets or explicit dates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct NowArg {
    /// Pretend the current time is this (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List presets in display order with their current ranges
    Presets {
        #[command(flatten)]
        now: NowArg,
    },
    /// Select a preset or an explicit range and print the resulting filters
    Select {
        /// Preset id
        #[arg(conflicts_with_all = ["start", "end"], required_unless_present = "start")]
        preset: Option<String>,
        /// First day of an explicit range (YYYY-MM-DD)
        #[arg(long, requires = "end", value_parser = parse_date_arg)]
        start: Option<NaiveDateTime>,
        /// Last day of an explicit range (YYYY-MM-DD)
        #[arg(long, requires = "start", value_parser = parse_date_arg)]
        end: Option<NaiveDateTime>,
        /// Print the filters as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        now: NowArg,
    },
    /// Interactive session reading commands from stdin
    Shell {
        #[command(flatten)]
        now: NowArg,
    },
    /// Write the standard presets to the catalog file
    InitCatalog {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },
}

fn parse_date_arg(s: &str) -> Result<NaiveDateTime, String> {
    parse_day(s).map(start_of_day).map_err(|e| e.to_string())
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    let Some((day, time)) = s.split_once('T') else {
        return parse_date_arg(s);
    };

    let day = parse_day(day).map_err(|e| e.to_string())?;
    let strict = time.len() == 8 && time.bytes().all(|b| b.is_ascii_digit() || b == b':');
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .ok()
        .filter(|_| strict)
        .ok_or_else(|| format!("`{time}` is not an HH:MM:SS time"))?;
    Ok(day.and_time(time))
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();

        match cli.command {
            Commands::Presets { now } => {
                let app = load_app(&now)?;
                if app.catalog().is_empty() {
                    println!("(no presets)");
                }
                for listing in app.list_presets() {
                    match listing.range {
                        Ok(range) => println!("{:<16} {:<16} {}", listing.id, listing.label, range),
                        Err(e) => println!("{:<16} {:<16} error: {}", listing.id, listing.label, e),
                    }
                }
            }
            Commands::Select {
                preset,
                start,
                end,
                json,
                now,
            } => {
                let app = load_app(&now)?;
                let input = match (preset, start, end) {
                    (Some(id), _, _) => SelectionInput::preset(id),
                    (None, Some(start), Some(end)) => SelectionInput::explicit(start, end),
                    _ => anyhow::bail!("either a preset or both --start and --end are required"),
                };

                let filters = app.select_once(&input)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&filters)?);
                } else if let Some((start, end)) = filters.range() {
                    println!("start_date={start}");
                    println!("end_date={end}");
                }
            }
            Commands::Shell { now } => {
                let app = load_app(&now)?;
                let stdin = std::io::stdin();
                app.run_shell(stdin.lock(), std::io::stdout())
                    .context("shell session failed")?;
            }
            Commands::InitCatalog { force } => {
                // Never loads the catalog, so a broken file can be rewritten.
                let path = SelectorApp::init_catalog(&Config::from_env(), force)?;
                println!("Wrote {}", path.display());
            }
        }

        Ok(())
    }
}

fn load_app(now: &NowArg) -> anyhow::Result<SelectorApp> {
    let mut app = SelectorApp::new()?;
    if let Some(now) = now.now {
        log::debug!("clock pinned to {now}");
        app.set_clock(FixedClock(now));
    }
    Ok(app)
}
