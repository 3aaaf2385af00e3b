use std::future::Future;
use std::io;
use std::process;

use clap::Parser;
use log::{error, info};
use sporand::clients::errors::{Error, Result};
use sporand::generator::{ConfigBuilder, Generator};
use tokio::task::JoinHandle;

// Exit status of a process stopped by SIGINT
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Parser)]
#[command(name = "sporand")]
#[command(
    version,
    about = "Refill a Spotify playlist with recommendations seeded by your top artists and tracks",
    long_about = None
)]
struct Cli {}

pub async fn run() -> Result<()> {
    let _cli = Cli::parse();

    // The authorization prompt blocks its thread on stdin, so Ctrl-C is
    // watched from a task of its own
    let watcher = watch_for_interrupt(tokio::signal::ctrl_c(), || {
        error!("Received Ctrl-C, stopping");
        eprintln!("{}", Error::Cancelled);
        process::exit(INTERRUPTED_EXIT_CODE);
    });

    let res = generate().await;
    watcher.abort();
    res
}

// Runs `on_interrupt` once `signal` resolves. A failure to listen is logged and ignored.
fn watch_for_interrupt<F, H>(signal: F, on_interrupt: H) -> JoinHandle<()>
where
    F: Future<Output = io::Result<()>> + Send + 'static,
    H: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        match signal.await {
            Ok(()) => on_interrupt(),
            Err(e) => error!("Unable to listen for Ctrl-C: {e}"),
        }
    })
}

async fn generate() -> Result<()> {
    // Credentials may also come from a .env file
    dotenvy::dotenv().ok();

    info!("Building config ...");
    let config = ConfigBuilder::new().build().await?;
    let mut generator = Generator::new(config);
    let report = generator.generate().await?;
    info!(
        "Added {} tracks to playlist {}",
        report.added, report.playlist_id
    );
    Ok(())
}
