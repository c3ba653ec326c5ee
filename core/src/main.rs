//! FileChain CLI - run the dashboard's simulated flows in a terminal
//!
//! ```bash
//! filechain scenario               # Upload a file, wait for the toast to clear
//! filechain upload --file a.pdf    # One simulated upload
//! filechain verify --file a.pdf    # One simulated verification
//! filechain files [--json]         # Sample file history
//! filechain files --status pending # Only pending files (also --kind image)
//! filechain profile --tab stats    # Profile panel tab as text
//! filechain activity [--json]      # Weekly activity series
//! ```
//!
//! Time is virtual by default; `--realtime` paces the timeline with the
//! wall clock.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use filechain::{
    data, CliResult, DashboardState, Event, FileSelection, FileStatus, MediaKind, ModelResult,
    NavigationTarget, ProfileTab, SimulatedDashboard, SimulationConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "filechain")]
#[command(about = "Simulate the FileChain dashboard flows", long_about = None)]
struct Cli {
    /// JSON file with simulation timings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Sleep between timer firings instead of jumping the virtual clock
    #[arg(long, global = true)]
    realtime: bool,

    /// Log state machine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select upload, choose a file, wait for completion and toast dismissal
    Scenario,

    /// Run one simulated upload to completion
    Upload {
        /// Name of the pretend file
        #[arg(short, long, default_value = "contract.pdf")]
        file: String,
    },

    /// Run one simulated verification
    Verify {
        /// Name of the pretend file
        #[arg(short, long, default_value = "contract.pdf")]
        file: String,
    },

    /// Print the sample file history
    Files {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Only files with this status (verified, pending)
        #[arg(long)]
        status: Option<String>,

        /// Only files of this media kind (document, image, video, audio)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Print one tab of the profile panel
    Profile {
        /// Tab to print (details, stats)
        #[arg(short, long, default_value = "details")]
        tab: String,
    },

    /// Print the weekly activity series
    Activity {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = SimulationConfig::load(cli.config.as_deref())?;
    log::debug!("Simulation config: {:?}", config);

    match cli.command {
        Commands::Scenario => {
            let toast = config.toast_duration();
            let upload_total = upload_duration(&config);
            let mut sim = SimulatedDashboard::new(config);

            sim.send(Event::Navigate(NavigationTarget::Upload));
            println!("{} 🧭 Panel: {}", stamp(sim.now()), sim.state().navigation().current().title());
            sim.send(Event::UploadFileChosen(FileSelection::named("contract.pdf", 48_213)));
            println!("{} 📤 File chosen: contract.pdf", stamp(sim.now()));

            run_for(&mut sim, upload_total, cli.realtime).await;
            print_upload_summary(sim.state());

            run_for(&mut sim, toast, cli.realtime).await;
            println!(
                "{} 🔕 Toast visible: {}",
                stamp(sim.now()),
                sim.state().toast().is_visible()
            );
            sim.teardown();
        }

        Commands::Upload { file } => {
            let total = upload_duration(&config);
            let mut sim = SimulatedDashboard::new(config);
            sim.send(Event::UploadFileChosen(FileSelection::named(file, 0)));
            run_for(&mut sim, total, cli.realtime).await;
            print_upload_summary(sim.state());
            sim.teardown();
        }

        Commands::Verify { file } => {
            let delay = config.verify_delay();
            let mut sim = SimulatedDashboard::new(config);
            sim.send(Event::VerifyFileChosen(FileSelection::named(file, 0)));
            println!("{} 🔍 Verifying...", stamp(sim.now()));
            run_for(&mut sim, delay, cli.realtime).await;
            sim.teardown();
        }

        Commands::Files { json, status, kind } => {
            let status: Option<FileStatus> = parse_opt(status.as_deref())?;
            let kind: Option<MediaKind> = parse_opt(kind.as_deref())?;
            let files: Vec<_> = data::filter_files(status, kind).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else {
                println!(
                    "{:<14} {:<12} {:<15} {:<15} {:<9}",
                    "File Name", "Upload Date", "Hash", "Transaction ID", "Status"
                );
                for f in &files {
                    println!(
                        "{:<14} {:<12} {:<15} {:<15} {:<9}",
                        f.name,
                        f.upload_date_label(),
                        f.hash,
                        f.transaction_id,
                        f.status
                    );
                }
            }
        }

        Commands::Profile { tab } => {
            let tab: ProfileTab = tab.parse()?;
            let mut sim = SimulatedDashboard::new(config);
            sim.send(Event::ProfileTab(tab));
            println!("👤 {}", sim.state().profile().tab().label());
            match sim.state().profile().tab() {
                ProfileTab::Details => {
                    let profile = sim.state().profile().saved();
                    println!("   Name: {}", profile.name);
                    println!("   Email: {}", profile.email);
                }
                ProfileTab::Stats => {
                    let stats = data::user_stats();
                    println!("   Total Files Uploaded: {}", stats.total_uploaded);
                    println!("   Files Verified: {}", stats.verified);
                    println!("   Account Created: {}", stats.account_created_label());
                }
            }
        }

        Commands::Activity { json } => {
            let series = data::activity_series();
            if json {
                println!("{}", serde_json::to_string_pretty(series)?);
            } else {
                println!("{:<5} {:>8} {:>14}", "Day", "Uploads", "Verifications");
                for p in series {
                    println!("{:<5} {:>8} {:>14}", p.label, p.uploads, p.verifications);
                }
            }
        }
    }

    Ok(())
}

/// Parse an optional filter argument.
fn parse_opt<T>(value: Option<&str>) -> ModelResult<Option<T>>
where
    T: std::str::FromStr<Err = filechain::ModelError>,
{
    value.map(str::parse).transpose()
}

/// Time needed for the progress to go from 0 to 100.
fn upload_duration(config: &SimulationConfig) -> Duration {
    let ticks = 100u32.div_ceil(u32::from(config.upload_step.max(1)));
    config.upload_tick() * ticks
}

/// Let `duration` pass, printing every timer that fires.
async fn run_for(sim: &mut SimulatedDashboard, duration: Duration, realtime: bool) {
    let until = sim.now() + duration;

    while let Some(deadline) = sim.next_deadline().filter(|d| *d <= until) {
        if realtime {
            tokio::time::sleep(deadline.saturating_sub(sim.now())).await;
        }
        sim.advance_to(deadline, print_timer);
    }

    if realtime {
        tokio::time::sleep(until.saturating_sub(sim.now())).await;
    }
    sim.advance_to(until, print_timer);
}

fn print_timer(at: Duration, event: &Event, state: &DashboardState) {
    match event {
        Event::UploadTick => {
            println!("{} ⏳ Upload {:>3}%", stamp(at), state.upload().progress());
            if state.upload().receipt().is_some() {
                print_toast(at, state);
            }
        }
        Event::VerifyElapsed => {
            println!("{} ✅ Verification finished", stamp(at));
            print_toast(at, state);
        }
        Event::ToastExpired(_) if !state.toast().is_visible() => {
            println!("{} 🔕 Toast dismissed", stamp(at));
        }
        _ => {}
    }
}

fn print_toast(at: Duration, state: &DashboardState) {
    if let Some(message) = state.toast().message() {
        println!("{} 🔔 Toast: {}", stamp(at), message);
    }
}

fn print_upload_summary(state: &DashboardState) {
    if let Some(receipt) = state.upload().receipt() {
        println!("   Hash: {}", receipt.hash);
        println!("   Transaction ID: {}", receipt.transaction_id);
    }
}

fn stamp(at: Duration) -> String {
    format!("[{:>7.3}s]", at.as_secs_f64())
}
