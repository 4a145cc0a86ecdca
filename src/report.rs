use anyhow::Result;
use std::io::Write;
use std::time::Instant;
use tracing::info;

use crate::tally::TallyStore;

/// Writes the full report: one block per date in ascending
/// chronological order, headed by `MM/DD/YYYY GMT`, then one
/// `<url> <count>` line per URL in descending count order. Equal
/// counts fall back to ascending lexicographic URL order so repeated
/// runs render byte-identical output.
pub fn write_report<W: Write>(store: &TallyStore, out: &mut W) -> Result<()> {
    let mut dates: Vec<_> = store.entries().collect();
    dates.sort_by_key(|(date, _)| **date);

    for (date, url_counts) in dates {
        writeln!(out, "{} GMT", date.format("%m/%d/%Y"))?;

        let mut urls: Vec<(&String, &u32)> = url_counts.iter().collect();
        urls.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (url, count) in urls {
            writeln!(out, "{url} {count}")?;
        }
    }
    Ok(())
}

/// Renders the report to stdout.
pub fn print_report(store: &TallyStore) -> Result<()> {
    let start_time = Instant::now();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(store, &mut out)?;
    out.flush()?;

    info!(
        action = "complete",
        component = "report",
        dates = store.date_count(),
        duration_ms = start_time.elapsed().as_millis(),
        "Report written"
    );
    Ok(())
}
