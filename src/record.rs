use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate};

/// A single URL access event. Produced per line and consumed
/// immediately by the ingestor; never stored.
#[derive(Debug, PartialEq, Eq)]
pub struct Event {
    pub epoch_seconds: i64,
    pub url: String,
}

/// Parses one log line of the form `<epoch_seconds>|<url>`.
///
/// The line is split on every `|` and only the first two fields are
/// kept, so a URL containing `|` is truncated at its first one. Both
/// fields are trimmed of surrounding whitespace.
pub fn parse_line(line: &str) -> Result<Event> {
    let mut fields = line.split('|');
    let timestamp = fields.next().unwrap_or_default().trim();
    let url = fields
        .next()
        .map(str::trim)
        .context("missing '|' separator")?;

    let epoch_seconds: i64 = timestamp
        .parse()
        .with_context(|| format!("invalid timestamp '{timestamp}'"))?;

    if url.is_empty() {
        anyhow::bail!("empty URL");
    }

    Ok(Event {
        epoch_seconds,
        url: url.to_string(),
    })
}

/// Projects an epoch-seconds instant onto the GMT calendar and returns
/// its date component. Pre-epoch timestamps land on the correct
/// proleptic Gregorian date; leap seconds are not modeled.
pub fn gmt_date(epoch_seconds: i64) -> Result<NaiveDate> {
    let instant = DateTime::from_timestamp(epoch_seconds, 0)
        .with_context(|| format!("timestamp {epoch_seconds} outside representable range"))?;
    Ok(instant.date_naive())
}
