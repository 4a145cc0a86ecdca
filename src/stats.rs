/// Summary of a single ingest run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Well-formed records tallied.
    pub events: u64,
    /// Lines skipped as malformed.
    pub lines_skipped: u64,
}
