//! Command handlers for the medialib CLI.
//!
//! Each handler runs one demonstration against a caller-supplied sink;
//! [`run_all`] chains the three in their canonical order.

use media_dispatch::{
    cast_report, demo_library, demo_values, take_census, Dispatcher, OutputSink,
};

/// Count the demonstration library by variant and print the summary.
pub fn run_census(sink: &OutputSink) {
    let library = demo_library();
    let census = take_census(&library);
    sink.line(&census.summary());
}

/// Print the per-item downcasting report.
pub fn run_casts(sink: &OutputSink) {
    cast_report(&demo_library(), sink);
}

/// Classify the heterogeneous value sequence.
pub fn run_values(sink: &OutputSink) {
    Dispatcher::new().run(&demo_values(), sink);
}

/// All three demonstrations, in order.
pub fn run_all(sink: &OutputSink) {
    run_census(sink);
    run_casts(sink);
    run_values(sink);
}
