//! medialib CLI.
//!
//! Runs the media-library demonstrations: variant census, downcasting
//! report, and heterogeneous-value dispatch.

use media_cli::commands::{run_all, run_casts, run_census, run_values};
use media_dispatch::stdout_sink;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let sink = stdout_sink();

    match args.get(1).map(String::as_str) {
        None => run_all(&sink),
        Some("census") => run_census(&sink),
        Some("casts") => run_casts(&sink),
        Some("values") => run_values(&sink),
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: medialib [command]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  census    Count library items by variant");
    eprintln!("  casts     Print the downcasting report");
    eprintln!("  values    Classify the heterogeneous value sequence");
    eprintln!();
    eprintln!("With no command, all demonstrations run in order.");
}

/// Route `RUST_LOG`-filtered events to a hierarchical tree writer on
/// stderr; demonstration output stays on stdout.
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_tree::HierarchicalLayer::new(2))
        .init();
}
