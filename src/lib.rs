pub mod args;
pub mod ingest;
pub mod record;
pub mod report;
pub mod stats;
pub mod tally;
pub mod utils;

pub use args::Args;
pub use ingest::ingest_file;
pub use report::{print_report, write_report};
pub use stats::IngestStats;
pub use tally::TallyStore;
