//! # PinPoint Main Entry Point
//!
//! Interactive pincode lookup, or one-shot / batch lookups when a code is
//! given on the command line or piped in.

use anyhow::{Context, Result};
use pinpoint::cmd_args::CommandLineArgs;
use pinpoint::config::{self, LookupProfile, LOG_LEVEL_ENV_VAR};
use pinpoint::lookup::io::{TerminalEventStream, TerminalRenderStream};
use pinpoint::{run_batch, run_once, AppController, HttpPincodeDirectory, OutputFormat};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    let profile_path = config::get_profile_path();
    let format = if cmd_args.json() {
        OutputFormat::Json
    } else {
        OutputFormat::Cards
    };

    if let Some(code) = cmd_args.pincode() {
        init_tracing_subscriber(&cmd_args, None)?;
        let profile = config::load_profile(cmd_args.profile(), &profile_path)?;
        let directory = HttpPincodeDirectory::new(&profile)?;
        let ok = run_once(directory, code, format, &mut std::io::stdout()).await?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    if !atty::is(atty::Stream::Stdin) {
        init_tracing_subscriber(&cmd_args, None)?;
        let profile = config::load_profile(cmd_args.profile(), &profile_path)?;
        let directory = HttpPincodeDirectory::new(&profile)?;
        let stdin = std::io::stdin();
        let failures = run_batch(directory, stdin.lock(), format, &mut std::io::stdout()).await?;
        if failures > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    // The full-screen view owns the terminal, so logs go to the profile's file
    let profile = config::load_profile(cmd_args.profile(), &profile_path)?;
    init_tracing_subscriber(&cmd_args, Some(&profile))?;
    tracing::debug!(
        "Using profile '{}' from '{}', base url: {}",
        cmd_args.profile(),
        profile_path,
        profile.base_url
    );
    let mut app = AppController::with_io_streams(
        &profile,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run().await?;

    println!("👋 Thanks for using PinPoint!");
    Ok(())
}

/// Set up tracing; `log_to` selects the profile's log file instead of stderr
fn init_tracing_subscriber(cmd_args: &CommandLineArgs, log_to: Option<&LookupProfile>) -> Result<()> {
    let default_level = if cmd_args.verbose() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?)
        .add_directive("tokio=warn".parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339());

    match log_to {
        Some(profile) => {
            let path = profile.log_file_path();
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory {dir:?}"))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {path:?}"))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    tracing::debug!("Tracing initialized");
    Ok(())
}
