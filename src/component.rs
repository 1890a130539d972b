//! Per-component normalization.
//!
//! Each textual component extracted from a spec becomes either an absolute
//! time of day or a signed offset. The two cases are kept as an explicit
//! sum type so the group resolver can match exhaustively instead of probing
//! runtime types.

use chrono::Duration;

use crate::error::{BoundsError, Result};

/// One normalized side of a time-bounds spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// An absolute time of day, seconds always zero.
    ///
    /// The hour is not range-checked here: the packed-digit rule happily
    /// yields e.g. `99:30`, and resolution rejects it when building the
    /// concrete datetime.
    Clock { hour: u32, minute: u32 },
    /// A signed offset against an anchor.
    Offset(Duration),
}

/// Converts a raw component into a [`Component`]; absence propagates.
///
/// Signed tokens become offsets with the packed `HHMM` reading
/// (`"+250"` is 2h50m, not 250 minutes) and a strict minutes bound:
/// anything with a minutes part of 60 or more is malformed input, not a
/// large offset. Unsigned tokens become clock times.
pub fn normalize_component(token: Option<&str>) -> Result<Option<Component>> {
    let Some(token) = token else {
        return Ok(None);
    };

    let component = if let Some(digits) = token.strip_prefix(['+', '-']) {
        let (hours, minutes) = split_digits(digits)?;
        if minutes >= 60 {
            return Err(BoundsError::OffsetMinutesOutOfRange { token: token.to_string() });
        }
        let delta = Duration::minutes(i64::from(hours) * 60 + i64::from(minutes));
        Component::Offset(if token.starts_with('-') { -delta } else { delta })
    } else {
        let (hour, minute) = split_digits(token)?;
        Component::Clock { hour, minute }
    };

    Ok(Some(component))
}

/// Splits a possibly-colon-separated digit string into `(hours, minutes)`.
///
/// Without a colon the split is asymmetric: a string of up to two digits is
/// all minutes, a longer one keeps its last two digits as minutes. This is
/// why `"537"` means 5:37 while `"37"` means 0:37. Empty parts count as
/// zero.
pub(crate) fn split_digits(s: &str) -> Result<(u32, u32)> {
    let (hours, minutes) = if let Some((h, m)) = s.split_once(':') {
        (h, m)
    } else if s.len() <= 2 {
        ("", s)
    } else {
        s.split_at(s.len() - 2)
    };

    let part = |p: &str| -> Result<u32> {
        if p.is_empty() {
            return Ok(0);
        }
        p.parse().map_err(|_| BoundsError::Malformed { token: s.to_string() })
    };

    Ok((part(hours)?, part(minutes)?))
}
