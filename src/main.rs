use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;

use urltally::{ingest, report, utils, Args, TallyStore};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(_) => {
            println!("Invalid number of arguments");
            std::process::exit(2);
        }
    };

    utils::setup_logging();

    let mut store = TallyStore::new();
    if let Err(e) = ingest::ingest_file(&args.input, &mut store) {
        error!(action = "fail", component = "ingest", error = %e, "Ingestion failed");
        std::process::exit(1);
    }

    if let Err(e) = report::print_report(&store) {
        error!(action = "fail", component = "report", error = %e, "Failed to write report");
        std::process::exit(1);
    }
}
