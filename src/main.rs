use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use dev_version::boundary::{SilentSink, WarningSink};
use dev_version::config::{self, Config};
use dev_version::ui::{self, ConsoleSink};
use dev_version::{compute_dev_version_with, stamp, CounterOverflow};

#[derive(clap::Parser)]
#[command(
    name = "dev-version",
    version,
    about = "Compute development versions from weekly and release tags"
)]
struct Args {
    #[arg(help = "Commit, branch or tag to version [default: HEAD or config rev]")]
    rev: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path to the git repository")]
    repo: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Write the version to this Python module")]
    write_to: Option<PathBuf>,

    #[arg(long, help = "Counter overflow policy: widen, clamp or error")]
    counter_overflow: Option<CounterOverflow>,

    #[arg(short, long, help = "Suppress warnings")]
    quiet: bool,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(rev) = &args.rev {
        config.rev = rev.clone();
    }
    if let Some(write_to) = &args.write_to {
        config.write_to = Some(write_to.clone());
    }
    if let Some(policy) = args.counter_overflow {
        config.counter_overflow = policy;
    }
    config
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => apply_overrides(cfg, &args),
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let sink: &dyn WarningSink = if args.quiet { &SilentSink } else { &ConsoleSink };

    if let Some(write_to) = config.write_to.as_ref() {
        match stamp::stamp_version(&args.repo, &config, sink) {
            Ok(Some(version)) => {
                ui::display_success(&format!("Wrote {} to {}", version, write_to.display()));
                println!("{}", version);
            }
            Ok(None) => {}
            Err(e) => {
                ui::display_error(&format!("Failed to stamp version: {}", e));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    if !args.quiet {
        ui::display_status(&format!(
            "Computing version of '{}' in {}",
            config.rev,
            args.repo.display()
        ));
    }
    match compute_dev_version_with(&args.repo, &config.rev, config.counter_overflow, sink) {
        Ok(version) => println!("{}", version),
        Err(e) => {
            ui::display_error(&format!(
                "Failed to determine version of '{}': {}",
                config.rev, e
            ));
            std::process::exit(1);
        }
    }

    Ok(())
}
