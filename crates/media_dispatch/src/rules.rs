//! Ordered first-match-wins dispatch over heterogeneous values.
//!
//! Rules live in an explicit ordered table rather than a single `match`
//! so evaluation order stays a first-class property: the zero rules
//! shadow the general numeric rules, and reordering changes behavior.

use crate::sink::OutputSink;
use media_model::{float_repr, AnyValue};

/// Description used when no rule matches.
pub const UNIDENTIFIED: &str = "type can't be identified";

/// Probe input handed to transform values.
const TRANSFORM_INPUT: &str = "Micharl";

/// One named classification rule.
///
/// The matcher returns the description line when the rule claims the
/// value, `None` to let later rules see it.
pub struct DispatchRule {
    name: &'static str,
    matcher: fn(&AnyValue) -> Option<String>,
}

impl DispatchRule {
    /// Rule name, for logs and tests.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, value: &AnyValue) -> Option<String> {
        (self.matcher)(value)
    }
}

/// Ordered rule table with first-match-wins semantics.
pub struct Dispatcher {
    rules: Vec<DispatchRule>,
}

impl Dispatcher {
    /// Dispatcher with the standard rule order.
    pub fn new() -> Self {
        Dispatcher {
            rules: standard_rules(),
        }
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(DispatchRule::name).collect()
    }

    /// Describe one value: the earliest matching rule wins.
    ///
    /// Falls back to [`UNIDENTIFIED`] when no rule claims the value;
    /// a miss is never an error.
    pub fn describe(&self, value: &AnyValue) -> String {
        for rule in &self.rules {
            if let Some(line) = rule.apply(value) {
                tracing::trace!(rule = rule.name, value = %value, "rule matched");
                return line;
            }
        }
        tracing::trace!(value = %value, "no rule matched");
        UNIDENTIFIED.to_string()
    }

    /// Describe every element in sequence order, one line each.
    pub fn run(&self, values: &[AnyValue], sink: &OutputSink) {
        for value in values {
            sink.line(&self.describe(value));
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn standard_rules() -> Vec<DispatchRule> {
    vec![
        DispatchRule {
            name: "zero-int",
            matcher: |v| match v {
                AnyValue::Int(0) => Some("zero as integer".to_string()),
                _ => None,
            },
        },
        DispatchRule {
            name: "zero-float",
            matcher: |v| match v {
                AnyValue::Float(f) if *f == 0.0 => Some("zero as float".to_string()),
                _ => None,
            },
        },
        DispatchRule {
            name: "int",
            matcher: |v| match v {
                AnyValue::Int(n) => Some(format!("{n} is an integer")),
                _ => None,
            },
        },
        DispatchRule {
            name: "positive-float",
            matcher: |v| match v {
                AnyValue::Float(f) if *f > 0.0 => {
                    Some(format!("{} is a positive float", float_repr(*f)))
                }
                _ => None,
            },
        },
        DispatchRule {
            name: "float",
            matcher: |v| match v {
                AnyValue::Float(_) => Some("some other float".to_string()),
                _ => None,
            },
        },
        DispatchRule {
            name: "string",
            matcher: |v| match v {
                AnyValue::Str(s) => Some(format!("{s} is a string")),
                _ => None,
            },
        },
        DispatchRule {
            name: "point",
            matcher: |v| match v {
                AnyValue::Point(x, y) => {
                    Some(format!("a point at ({},{})", float_repr(*x), float_repr(*y)))
                }
                _ => None,
            },
        },
        DispatchRule {
            name: "movie",
            matcher: |v| {
                v.as_movie()
                    .map(|movie| format!("a movie called {}", movie.name))
            },
        },
        DispatchRule {
            name: "transform",
            matcher: |v| match v {
                AnyValue::Transform(f, _) => Some(f(TRANSFORM_INPUT)),
                _ => None,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_values;
    use crate::sink::buffer_sink;
    use media_model::MediaItem;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn rule_order_is_fixed() {
        assert_eq!(
            Dispatcher::new().rule_names(),
            vec![
                "zero-int",
                "zero-float",
                "int",
                "positive-float",
                "float",
                "string",
                "point",
                "movie",
                "transform",
            ]
        );
    }

    #[test]
    fn demo_sequence_descriptions() {
        let dispatcher = Dispatcher::new();
        let lines: Vec<String> = demo_values().iter().map(|v| dispatcher.describe(v)).collect();
        assert_eq!(
            lines,
            vec![
                "zero as integer",
                "zero as float",
                "42 is an integer",
                "3.14159 is a positive float",
                "hello is a string",
                "a point at (3.0,5.0)",
                "a movie called Dream Theater",
                "Hello Micharl",
            ]
        );
    }

    #[test]
    fn zero_rules_shadow_numeric_rules() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.describe(&AnyValue::Int(0)), "zero as integer");
        assert_eq!(dispatcher.describe(&AnyValue::Float(0.0)), "zero as float");
    }

    #[test]
    fn negative_float_is_some_other_float() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.describe(&AnyValue::Float(-1.5)), "some other float");
    }

    #[test]
    fn song_media_falls_through_to_default() {
        let dispatcher = Dispatcher::new();
        let song = AnyValue::media(MediaItem::song("Helpless", "Heartless"));
        assert_eq!(dispatcher.describe(&song), UNIDENTIFIED);
    }

    #[test]
    fn run_emits_one_line_per_element() {
        let values = demo_values();
        let sink = buffer_sink();
        Dispatcher::new().run(&values, &sink);
        assert_eq!(sink.captured().lines().count(), values.len());
    }

    #[test]
    fn run_twice_produces_identical_output() {
        let values = demo_values();
        let dispatcher = Dispatcher::new();

        let sink = buffer_sink();
        dispatcher.run(&values, &sink);
        let first = sink.captured();

        sink.clear();
        dispatcher.run(&values, &sink);
        assert_eq!(sink.captured(), first);
    }

    proptest! {
        #[test]
        fn nonzero_ints_report_as_integers(n in any::<i64>().prop_filter("nonzero", |n| *n != 0)) {
            let dispatcher = Dispatcher::new();
            prop_assert_eq!(dispatcher.describe(&AnyValue::Int(n)), format!("{n} is an integer"));
        }

        #[test]
        fn positive_floats_never_report_as_integers(
            f in (f64::MIN_POSITIVE..1e12f64)
        ) {
            let dispatcher = Dispatcher::new();
            let line = dispatcher.describe(&AnyValue::Float(f));
            prop_assert!(line.ends_with("is a positive float"));
        }

        #[test]
        fn describe_is_stable_across_calls(n in any::<i64>()) {
            let dispatcher = Dispatcher::new();
            let value = AnyValue::Int(n);
            prop_assert_eq!(dispatcher.describe(&value), dispatcher.describe(&value));
        }
    }
}
