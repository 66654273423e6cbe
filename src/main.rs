use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fridge_status::api::{load_inventory, load_sensor_reading};
use fridge_status::domain::time::parse_timestamp_strict;
use fridge_status::domain::ExpiryPolicy;
use fridge_status::keyboard::{Key, LAYOUT};
use fridge_status::view::{PollSchedule, RefreshOutcome, ViewState};
use fridge_status::{ClassifierConfig, StatusReport};

#[derive(Parser)]
#[command(name = "fridge-status", version, about = "Fridge inventory freshness report")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a saved inventory once and print the report
    Report(ReportArgs),
    /// Re-read the saved payloads on the poll interval and print each pass
    Watch {
        #[command(flatten)]
        args: ReportArgs,
        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Print the touch keyboard layout
    Keys,
}

#[derive(Args)]
struct ReportArgs {
    /// JSON body of GET /api/inventory
    #[arg(long)]
    inventory: PathBuf,
    /// JSON body of GET /api/sensors
    #[arg(long)]
    sensors: Option<PathBuf>,
    /// Classify as of this time instead of now
    #[arg(long)]
    now: Option<String>,
    /// Overrides FRIDGE_EXPIRY_POLICY
    #[arg(long)]
    policy: Option<ExpiryPolicy>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // 1️⃣ Environment and logging
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = ClassifierConfig::from_env().context("invalid configuration")?;

    // 2️⃣ Dispatch
    match cli.command {
        Command::Report(args) => {
            let config = with_overrides(config, &args);
            let state = ViewState::load(&args.inventory, args.sensors.as_deref())
                .with_context(|| format!("cannot report on {}", args.inventory.display()))?;
            print_report(&state, &args, &config)?;
        }
        Command::Watch { args, ticks } => {
            let config = with_overrides(config, &args);
            let mut state = ViewState::new();
            let mut schedule = PollSchedule::new(config.poll_interval, std::time::Instant::now());
            let mut failed = None;

            schedule.run(ticks, |_| {
                if failed.is_some() {
                    return;
                }
                refresh(&mut state, &args);
                if let Err(e) = print_report(&state, &args, &config) {
                    failed = Some(e);
                }
            });

            if let Some(e) = failed {
                return Err(e);
            }
        }
        Command::Keys => {
            for row in LAYOUT {
                let caps: Vec<String> = row
                    .iter()
                    .filter_map(|k| Key::from_data_key(k))
                    .map(Key::cap)
                    .collect();
                println!("{}", caps.join(" "));
            }
        }
    }

    Ok(())
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn with_overrides(mut config: ClassifierConfig, args: &ReportArgs) -> ClassifierConfig {
    if let Some(policy) = args.policy {
        config.expiry_policy = policy;
    }
    config
}

/// One watch pass. A failed read keeps whatever the state held before,
/// the same way a failed poll does on the kiosks.
fn refresh(state: &mut ViewState, args: &ReportArgs) {
    let outcome = state.apply_inventory(load_inventory(&args.inventory));
    notify(outcome, &args.inventory);

    if let Some(path) = &args.sensors {
        let outcome = state.apply_sensors(load_sensor_reading(path));
        notify(outcome, path);
    }
}

fn notify(outcome: RefreshOutcome, path: &Path) {
    if let RefreshOutcome::Retained { notice } = outcome {
        eprintln!("❌ {notice} ({})", path.display());
    }
}

fn resolve_now(args: &ReportArgs) -> Result<DateTime<Utc>> {
    match &args.now {
        Some(raw) => Ok(parse_timestamp_strict(raw)?),
        None => Ok(Utc::now()),
    }
}

fn print_report(state: &ViewState, args: &ReportArgs, config: &ClassifierConfig) -> Result<()> {
    let now = resolve_now(args)?;
    let report = StatusReport::build(state, now, config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
