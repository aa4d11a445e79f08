//! evdash CLI
//!
//! Command-line interface for the EV demand dashboard:
//! - Serve the dashboard API
//! - Print hourly averages, fleet cards and county tables
//! - Export the county table
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use evdash::aggregate::average_demand_by_hour;
use evdash::api::{serve, AppState};
use evdash::config::{generate_default_config, Config};
use evdash::dataset::{Dataset, Hour};
use evdash::telemetry::init_tracing;
use evdash::view::{self, format::kwh, ViewState};

#[derive(Parser)]
#[command(name = "evdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "EV demand dashboard for county/hour charging data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// GeoJSON dataset, overriding the config
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Dataset(DatasetCommand),

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Commands that need the dataset loaded
#[derive(Subcommand)]
pub enum DatasetCommand {
    /// Run the dashboard API server
    Serve {
        /// Port to listen on, overriding the config
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Average demand across counties for each hour
    Averages,

    /// Fleet cards, statewide or for one county
    Fleet {
        /// County to focus on
        #[arg(long)]
        county: Option<String>,
        /// Hour used for the county's record (default: config default hour)
        #[arg(long)]
        hour: Option<String>,
    },

    /// County table for one hour
    Table {
        /// Hour 0-23 (default: config default hour)
        #[arg(long)]
        hour: Option<String>,
    },

    /// One county's demand at every hour
    County {
        /// County name, e.g. "Kanawha County"
        name: String,
    },

    /// Colour legend of the choropleth
    Legend,

    /// Export the county table
    Export {
        /// Hour 0-23 (default: config default hour)
        #[arg(long)]
        hour: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(path) = &cli.dataset {
        config.dataset.path = path.clone();
    }

    let json = cli.format.eq_ignore_ascii_case("json");

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
        Commands::Dataset(command) => {
            init_tracing(&config.logging)?;
            let dataset = Dataset::load(&config.dataset.path).with_context(|| {
                format!("could not load dataset {}", config.dataset.path.display())
            })?;
            run(command, dataset, config, json).await
        }
    }
}

async fn run(
    command: DatasetCommand,
    dataset: Dataset,
    mut config: Config,
    json: bool,
) -> anyhow::Result<()> {
    let default_hour = config.dataset.initial_hour()?;

    match command {
        DatasetCommand::Serve { port } => {
            if let Some(port) = port {
                config.api.port = port;
            }
            let state = AppState::new(Arc::new(dataset), &config)?;
            serve(state, &config.api).await?;
        }

        DatasetCommand::Averages => {
            let averages = average_demand_by_hour(&dataset);
            if json {
                println!("{}", serde_json::to_string_pretty(&averages)?);
            } else {
                println!("{:<6} {:>12}", "Hour", "Avg kWh");
                for avg in averages {
                    println!("{:<6} {:>12}", avg.hour.label(), kwh(avg.average));
                }
            }
        }

        DatasetCommand::Fleet { county, hour } => {
            let mut state = ViewState::new(parse_hour(hour.as_deref(), default_hour)?);
            if let Some(county) = county {
                state.focus_county(&dataset, &county)?;
            }
            let cards = state.cards(&dataset)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                for line in cards.lines() {
                    println!("{}", line);
                }
            }
        }

        DatasetCommand::Table { hour } => {
            let table = view::county_table(&dataset, parse_hour(hour.as_deref(), default_hour)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("Hour {}", table.hour.label());
                print_row(&view::COLUMNS.map(String::from));
                for row in &table.rows {
                    print_row(&row.cells());
                }
                println!("{} counties", table.rows.len());
            }
        }

        DatasetCommand::County { name } => {
            let chart = view::county_demand_chart(&dataset, &name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("{}", chart.county);
                for (label, value) in chart.series.labels.iter().zip(&chart.series.values) {
                    println!("{:<6} {:>12}", label, kwh(*value));
                }
            }
        }

        DatasetCommand::Legend => {
            let legend = view::legend();
            if json {
                println!("{}", serde_json::to_string_pretty(&legend)?);
            } else {
                for entry in legend {
                    println!("{}  {}", entry.color, entry.label);
                }
            }
        }

        DatasetCommand::Export { hour, output } => {
            let table = view::county_table(&dataset, parse_hour(hour.as_deref(), default_hour)?);
            let content = if json {
                serde_json::to_string_pretty(&table)?
            } else {
                table.to_csv()?
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Exported {} rows to {}", table.rows.len(), path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Parse a `--hour` argument, falling back to the configured default
fn parse_hour(hour: Option<&str>, default: Hour) -> anyhow::Result<Hour> {
    match hour {
        Some(h) => Ok(h.parse()?),
        None => Ok(default),
    }
}

fn print_row(cells: &[String; 6]) {
    println!(
        "{:<28} {:>12} {:>12} {:>12} {:>15} {:>16}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_commands_parse_at_top_level() {
        let cli = Cli::try_parse_from(["evdash", "table", "--hour", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Dataset(DatasetCommand::Table { hour: Some(ref h) }) if h == "5"
        ));

        let cli = Cli::try_parse_from(["evdash", "--format", "json", "fleet", "--county", "Wood County"])
            .unwrap();
        assert_eq!(cli.format, "json");
        assert!(matches!(
            cli.command,
            Commands::Dataset(DatasetCommand::Fleet { county: Some(_), hour: None })
        ));
    }

    #[test]
    fn test_config_command_is_separate() {
        let cli = Cli::try_parse_from(["evdash", "config", "-o", "out.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { output: Some(_) }));
    }

    #[test]
    fn test_parse_hour_falls_back_to_default() {
        assert_eq!(parse_hour(None, Hour::NOON).unwrap(), Hour::NOON);
        assert_eq!(parse_hour(Some("7"), Hour::NOON).unwrap().get(), 7);
        assert!(parse_hour(Some("24"), Hour::NOON).is_err());
    }
}
