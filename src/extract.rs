//! Spec-string extraction.
//!
//! Splits a raw time-bounds spec into at most two textual components,
//! `since` and `until`. The grammar is a fixed list of anchored regex
//! alternatives tried in priority order; the first match wins and each
//! alternative must consume the whole string.
//!
//! A `<component>` is either a clock-time token with optional colon and
//! leading digits (`"18:55"`, `"1855"`, `"855"`, `"55"`, `":5"`) or a
//! signed packed offset (`"+5"`, `"-250"`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BoundsError, Result};

/// The shape a spec string was recognized as, with the raw component texts.
///
/// Keeping the shape explicit (rather than an anonymous pair of optional
/// strings) lets every consumer match exhaustively on what the user
/// actually wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecShape<'a> {
    /// `"18:55..19:30"`: both bounds given.
    Full { since: &'a str, until: &'a str },
    /// `"..130"`: since the previous fact ended, until the given point.
    UntilOnly { until: &'a str },
    /// `"55.."`: since the given point, until now.
    SinceOnly { since: &'a str },
    /// `""` or `".."`: since the previous fact ended, until now.
    Open,
    /// `"1230+5"`: clock time and positive offset, separator omitted.
    Ultrashortcut { since: &'a str, until: &'a str },
    /// `"+5"` / `"-5"`: a single offset, until now.
    SinceRelative { since: &'a str },
}

impl<'a> SpecShape<'a> {
    /// The raw `(since, until)` component texts.
    pub fn components(&self) -> (Option<&'a str>, Option<&'a str>) {
        match *self {
            SpecShape::Full { since, until } => (Some(since), Some(until)),
            SpecShape::UntilOnly { until } => (None, Some(until)),
            SpecShape::SinceOnly { since } => (Some(since), None),
            SpecShape::Open => (None, None),
            SpecShape::Ultrashortcut { since, until } => (Some(since), Some(until)),
            SpecShape::SinceRelative { since } => (Some(since), None),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Full,
    UntilOnly,
    SinceOnly,
    Open,
    Ultrashortcut,
    SinceRelative,
}

const TIME: &str = "[0-9]{0,2}:?[0-9]{1,2}";
const REL: &str = r"[+-]\d+";

static RULES: Lazy<Vec<(Rule, Regex)>> = Lazy::new(|| {
    let component = format!("(?:{TIME}|{REL})");
    let compile = |pattern: String| Regex::new(&pattern).unwrap();
    vec![
        (Rule::Full, compile(format!(r"^(?P<since>{component})\.\.(?P<until>{component})$"))),
        (Rule::UntilOnly, compile(format!(r"^\.\.(?P<until>{component})$"))),
        (Rule::SinceOnly, compile(format!(r"^(?P<since>{component})\.\.$"))),
        (Rule::Open, compile(r"^(\.\.)?$".to_string())),
        (Rule::Ultrashortcut, compile(format!(r"^(?P<since>{TIME})(?P<until>\+\d+)$"))),
        (Rule::SinceRelative, compile(format!(r"^(?P<since>{REL})$"))),
    ]
});

/// Recognizes `spec` (surrounding whitespace ignored) as one of the grammar
/// shapes. Fails with [`BoundsError::UnparseableSpec`] when nothing matches,
/// or [`BoundsError::AmbiguousShortcut`] for the one shape that is
/// deliberately illegal.
pub fn extract(spec: &str) -> Result<SpecShape<'_>> {
    let spec = spec.trim();

    for (rule, rx) in RULES.iter() {
        let Some(caps) = rx.captures(spec) else { continue };
        let group = |name| caps.name(name).map_or("", |m| m.as_str());
        return Ok(match rule {
            Rule::Full => SpecShape::Full { since: group("since"), until: group("until") },
            Rule::UntilOnly => SpecShape::UntilOnly { until: group("until") },
            Rule::SinceOnly => SpecShape::SinceOnly { since: group("since") },
            Rule::Open => SpecShape::Open,
            Rule::Ultrashortcut => {
                SpecShape::Ultrashortcut { since: group("since"), until: group("until") }
            }
            Rule::SinceRelative => SpecShape::SinceRelative { since: group("since") },
        });
    }

    // "1230-5" reads equally well as "12:30 minus five minutes" and as a
    // mistyped negative-offset spec, so it never parses.
    if regex!(r"^[0-9]{0,2}:?[0-9]{1,2}-\d+$").is_match(spec) {
        return Err(BoundsError::AmbiguousShortcut { spec: spec.to_string() });
    }

    Err(BoundsError::UnparseableSpec { spec: spec.to_string() })
}
