//! Heterogeneous runtime values.
//!
//! [`AnyValue`] is a closed tagged union over the six shapes the
//! demonstrations use, rather than a truly open container. Keeping the
//! set enumerated makes downstream dispatch exhaustiveness-checkable.
//! Integer and float zero are distinct tagged shapes and never collide.

use std::fmt;

use crate::item::{MediaItem, Movie};

/// Unary text transform carried as a value.
///
/// Plain function pointers keep the union `Clone` and comparable; the
/// accompanying name is carried for display and equality.
pub type TransformFn = fn(&str) -> String;

/// A value that is exactly one of six enumerated shapes.
#[derive(Clone)]
pub enum AnyValue {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Str(String),
    /// Pair of floating-point coordinates.
    Point(f64, f64),
    /// Media item (either concrete variant).
    Media(MediaItem),
    /// Named unary text transform.
    Transform(TransformFn, &'static str),
}

impl AnyValue {
    /// Create a text value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        AnyValue::Str(s.into())
    }

    /// Create a media value.
    #[inline]
    pub fn media(item: MediaItem) -> Self {
        AnyValue::Media(item)
    }

    /// Create a named transform value.
    #[inline]
    pub fn transform(f: TransformFn, name: &'static str) -> Self {
        AnyValue::Transform(f, name)
    }

    /// Try to read as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnyValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to read as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AnyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to read as text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to read as a coordinate pair.
    pub fn as_point(&self) -> Option<(f64, f64)> {
        match self {
            AnyValue::Point(x, y) => Some((*x, *y)),
            _ => None,
        }
    }

    /// Try to read as a media item.
    pub fn as_media(&self) -> Option<&MediaItem> {
        match self {
            AnyValue::Media(item) => Some(item),
            _ => None,
        }
    }

    /// Try to read as a movie, through the media shape.
    pub fn as_movie(&self) -> Option<&Movie> {
        self.as_media().and_then(MediaItem::as_movie)
    }

    /// Try to read as a transform.
    pub fn as_transform(&self) -> Option<(TransformFn, &'static str)> {
        match self {
            AnyValue::Transform(f, name) => Some((*f, *name)),
            _ => None,
        }
    }

    /// Get the shape name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            AnyValue::Int(_) => "int",
            AnyValue::Float(_) => "float",
            AnyValue::Str(_) => "str",
            AnyValue::Point(_, _) => "point",
            AnyValue::Media(_) => "media",
            AnyValue::Transform(_, _) => "transform",
        }
    }
}

/// Render a float with at least one decimal digit.
///
/// Whole finite values keep a trailing `.0` so a float is never mistaken
/// for an integer in printed output.
pub fn float_repr(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Int(n) => write!(f, "Int({n})"),
            AnyValue::Float(x) => write!(f, "Float({x})"),
            AnyValue::Str(s) => write!(f, "Str({s:?})"),
            AnyValue::Point(x, y) => write!(f, "Point({x}, {y})"),
            AnyValue::Media(item) => write!(f, "Media({item:?})"),
            AnyValue::Transform(_, name) => write!(f, "Transform({name})"),
        }
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Int(n) => write!(f, "{n}"),
            AnyValue::Float(x) => f.write_str(&float_repr(*x)),
            AnyValue::Str(s) => write!(f, "\"{s}\""),
            AnyValue::Point(x, y) => {
                write!(f, "({},{})", float_repr(*x), float_repr(*y))
            }
            AnyValue::Media(item) => write!(f, "<{} {}>", item.type_name(), item.name()),
            AnyValue::Transform(_, name) => write!(f, "<transform {name}>"),
        }
    }
}

impl PartialEq for AnyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyValue::Int(a), AnyValue::Int(b)) => a == b,
            (AnyValue::Float(a), AnyValue::Float(b)) => a == b,
            (AnyValue::Str(a), AnyValue::Str(b)) => a == b,
            (AnyValue::Point(ax, ay), AnyValue::Point(bx, by)) => ax == bx && ay == by,
            (AnyValue::Media(a), AnyValue::Media(b)) => a == b,
            // Transforms are equal by name
            (AnyValue::Transform(_, a), AnyValue::Transform(_, b)) => a == b,
            _ => false,
        }
    }
}
