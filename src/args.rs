use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "urltally",
    about = "Summarize a URL access log into per-day hit counts",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the access log file, one `<epoch_seconds>|<url>` record per line
    pub input: PathBuf,
}
