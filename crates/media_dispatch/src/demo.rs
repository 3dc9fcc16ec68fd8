//! Fixed demonstration datasets.
//!
//! Both sequences are built once and handed out by value; nothing
//! mutates them after construction.

use media_model::{AnyValue, Library, MediaItem};

/// The five-item demonstration library: three movies, two songs.
pub fn demo_library() -> Library {
    Library::new(vec![
        MediaItem::movie("Evil Dead", "Savage Pain"),
        MediaItem::song("Helpless", "Heartless"),
        MediaItem::movie("Summer", "Sadness"),
        MediaItem::song("Dreamtime", "Dragon"),
        MediaItem::movie("Fearsome", "Flower"),
    ])
}

/// Greeting transform carried in the demonstration value sequence.
fn greet(name: &str) -> String {
    format!("Hello {name}")
}

/// The eight-element heterogeneous demonstration sequence.
pub fn demo_values() -> Vec<AnyValue> {
    vec![
        AnyValue::Int(0),
        AnyValue::Float(0.0),
        AnyValue::Int(42),
        AnyValue::Float(3.14159),
        AnyValue::string("hello"),
        AnyValue::Point(3.0, 5.0),
        AnyValue::media(MediaItem::movie("Dream Theater", "Heartless Rose")),
        AnyValue::transform(greet, "greet"),
    ]
}
