use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::record;
use crate::stats::IngestStats;
use crate::tally::TallyStore;

/// Reads the access log line by line and tallies each well-formed
/// event into `store`.
///
/// The file handle lives only for the duration of this call, so it is
/// released on every exit path. Lines are consumed lazily; memory is
/// bounded by the number of distinct (date, URL) pairs, not by the
/// line count. Malformed lines are skipped with a diagnostic.
pub fn ingest_file(path: &Path, store: &mut TallyStore) -> Result<IngestStats> {
    let start_time = Instant::now();
    info!(action = "start", component = "ingest", path = ?path, "Starting log ingestion");

    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut stats = IngestStats::default();
    for (line_number, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("read error in {}", path.display()))?;

        let parsed = record::parse_line(&line)
            .and_then(|event| Ok((record::gmt_date(event.epoch_seconds)?, event.url)));
        match parsed {
            Ok((date, url)) => {
                store.increment(date, url);
                stats.events += 1;
            }
            Err(e) => {
                warn!(
                    action = "skip",
                    component = "ingest",
                    line_number = line_number + 1,
                    error = %e,
                    "Skipping malformed line"
                );
                stats.lines_skipped += 1;
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        action = "complete",
        component = "ingest",
        events = stats.events,
        lines_skipped = stats.lines_skipped,
        dates = store.date_count(),
        duration_ms = elapsed.as_millis(),
        "Ingestion completed"
    );
    Ok(stats)
}
