//! Downcasting report: recover each item's concrete variant and print
//! its variant-specific fields.

use crate::sink::OutputSink;
use media_model::Library;

/// Print one line per library item via fallible casts.
///
/// The movie cast is attempted first, then the song cast; exactly one
/// succeeds per item. Only the fallible forms are used here — a miss on
/// the first cast is an expected outcome, not a fault.
pub fn cast_report(library: &Library, sink: &OutputSink) {
    for item in library {
        if let Some(movie) = item.as_movie() {
            sink.line(&format!(
                "Movie: {}, directed by: {}",
                movie.name, movie.director
            ));
        } else if let Some(song) = item.as_song() {
            sink.line(&format!(
                "Song: {}, directed by: {}",
                song.name, song.artist
            ));
        }
    }
}
