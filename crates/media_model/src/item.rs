//! The closed media hierarchy and its cast operations.

use std::fmt;

use crate::cast::CastError;

/// A film with its director.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movie {
    pub name: String,
    pub director: String,
}

/// A recording with its artist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Song {
    pub name: String,
    pub artist: String,
}

/// Discriminant for the two concrete media variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Song,
}

impl MediaKind {
    /// Type name for error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Song => "song",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A media item: exactly one of the two concrete variants.
///
/// The union is closed. Every item is provably a [`Movie`] or a [`Song`],
/// never both, so an ordered either/or membership test always lands in
/// exactly one branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaItem {
    Movie(Movie),
    Song(Song),
}

impl MediaItem {
    /// Create a movie item.
    #[inline]
    pub fn movie(name: impl Into<String>, director: impl Into<String>) -> Self {
        MediaItem::Movie(Movie {
            name: name.into(),
            director: director.into(),
        })
    }

    /// Create a song item.
    #[inline]
    pub fn song(name: impl Into<String>, artist: impl Into<String>) -> Self {
        MediaItem::Song(Song {
            name: name.into(),
            artist: artist.into(),
        })
    }

    /// Shared name attribute, regardless of variant.
    pub fn name(&self) -> &str {
        match self {
            MediaItem::Movie(movie) => &movie.name,
            MediaItem::Song(song) => &song.name,
        }
    }

    /// Dynamic variant of this item.
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Movie(_) => MediaKind::Movie,
            MediaItem::Song(_) => MediaKind::Song,
        }
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Check membership in the movie variant.
    pub fn is_movie(&self) -> bool {
        matches!(self, MediaItem::Movie(_))
    }

    /// Check membership in the song variant.
    pub fn is_song(&self) -> bool {
        matches!(self, MediaItem::Song(_))
    }

    /// Fallible cast to the movie variant.
    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            MediaItem::Movie(movie) => Some(movie),
            MediaItem::Song(_) => None,
        }
    }

    /// Fallible cast to the song variant.
    pub fn as_song(&self) -> Option<&Song> {
        match self {
            MediaItem::Song(song) => Some(song),
            MediaItem::Movie(_) => None,
        }
    }

    /// Fallible owning cast to the movie variant.
    pub fn try_into_movie(self) -> Result<Movie, CastError> {
        match self {
            MediaItem::Movie(movie) => Ok(movie),
            other => Err(CastError::mismatch(MediaKind::Movie, other.kind())),
        }
    }

    /// Fallible owning cast to the song variant.
    pub fn try_into_song(self) -> Result<Song, CastError> {
        match self {
            MediaItem::Song(song) => Ok(song),
            other => Err(CastError::mismatch(MediaKind::Song, other.kind())),
        }
    }

    /// Forced cast to the movie variant.
    ///
    /// Panics when the item is a song. Use [`as_movie`](Self::as_movie) or
    /// [`try_into_movie`](Self::try_into_movie) when the variant is not
    /// known in advance.
    #[track_caller]
    pub fn force_movie(self) -> Movie {
        match self.try_into_movie() {
            Ok(movie) => movie,
            Err(err) => panic!("forced cast failed: {err}"),
        }
    }

    /// Forced cast to the song variant.
    ///
    /// Panics when the item is a movie.
    #[track_caller]
    pub fn force_song(self) -> Song {
        match self.try_into_song() {
            Ok(song) => song,
            Err(err) => panic!("forced cast failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shared_name_accessor() {
        assert_eq!(MediaItem::movie("Evil Dead", "Savage Pain").name(), "Evil Dead");
        assert_eq!(MediaItem::song("Helpless", "Heartless").name(), "Helpless");
    }

    #[test]
    fn membership_is_disjoint() {
        let movie = MediaItem::movie("Summer", "Sadness");
        let song = MediaItem::song("Dreamtime", "Dragon");

        assert!(movie.is_movie());
        assert!(!movie.is_song());
        assert!(song.is_song());
        assert!(!song.is_movie());
    }

    #[test]
    fn fallible_reference_casts() {
        let movie = MediaItem::movie("Fearsome", "Flower");
        assert_eq!(movie.as_movie().map(|m| m.director.as_str()), Some("Flower"));
        assert!(movie.as_song().is_none());

        let song = MediaItem::song("Helpless", "Heartless");
        assert_eq!(song.as_song().map(|s| s.artist.as_str()), Some("Heartless"));
        assert!(song.as_movie().is_none());
    }

    #[test]
    fn fallible_owning_cast_reports_kinds() {
        let err = match MediaItem::song("Helpless", "Heartless").try_into_movie() {
            Ok(_) => panic!("expected a cast mismatch"),
            Err(err) => err,
        };
        assert_eq!(err.expected, MediaKind::Movie);
        assert_eq!(err.got, MediaKind::Song);
        assert_eq!(err.to_string(), "cast mismatch: expected movie, got song");
    }

    #[test]
    fn forced_cast_succeeds_on_matching_tag() {
        let movie = MediaItem::movie("Summer", "Sadness").force_movie();
        assert_eq!(movie.director, "Sadness");

        let song = MediaItem::song("Dreamtime", "Dragon").force_song();
        assert_eq!(song.artist, "Dragon");
    }

    #[test]
    #[should_panic(expected = "forced cast failed")]
    fn forced_movie_cast_aborts_on_song() {
        let _ = MediaItem::song("Helpless", "Heartless").force_movie();
    }

    #[test]
    #[should_panic(expected = "forced cast failed")]
    fn forced_song_cast_aborts_on_movie() {
        let _ = MediaItem::movie("Evil Dead", "Savage Pain").force_song();
    }

    #[test]
    fn kind_display() {
        assert_eq!(MediaKind::Movie.to_string(), "movie");
        assert_eq!(MediaKind::Song.to_string(), "song");
    }
}
