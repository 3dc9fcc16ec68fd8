//! Subtype census over a library.

use media_model::Library;

/// Movie/song tallies for one library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MediaCensus {
    pub movies: usize,
    pub songs: usize,
}

impl MediaCensus {
    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "The media library contains {} movies and {} songs",
            self.movies, self.songs
        )
    }
}

/// Count library elements by dynamic variant.
///
/// Membership is tested movie-first, then song. The two variants are
/// disjoint, so each element lands in exactly one tally and no element
/// is left uncounted.
pub fn take_census(library: &Library) -> MediaCensus {
    let mut census = MediaCensus::default();
    for item in library {
        if item.is_movie() {
            census.movies += 1;
        } else if item.is_song() {
            census.songs += 1;
        }
    }
    tracing::debug!(movies = census.movies, songs = census.songs, "census complete");
    census
}
