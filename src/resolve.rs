//! Resolution of normalized components against the `last`/`now` anchors.
//!
//! Given the two optional [`Component`]s of a spec plus the end time of the
//! previous fact (`last`) and the current moment (`now`), this module
//! produces the concrete `(since, until)` pair. Resolution runs in three
//! steps: defaults for absent sides, per-side resolution against the
//! anchors, then cross-resolution of offsets that hang off the *other*
//! side (`"-5..21:30"`, `"21:30..+5"`, `"-10..+5"`).

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::component::Component;
use crate::error::{BoundsError, Result};

/// Rounds a timestamp forward to the nearest half-minute boundary.
///
/// Sub-second precision is dropped first by rounding up to the next whole
/// second; the seconds then round up to `:30`, or to `:00` of the next
/// minute. A timestamp already on a boundary is returned unchanged. The
/// result never moves backward, so the `until` of one fact can feed the
/// `since` of the next without overlap.
pub fn round_fwd(t: NaiveDateTime) -> NaiveDateTime {
    if t.second() == 0 && t.nanosecond() == 0 {
        return t;
    }

    let mut t = t;
    if t.nanosecond() > 0 {
        t += Duration::seconds(1) - Duration::nanoseconds(i64::from(t.nanosecond()));
    }
    match t.second() {
        0 => {}
        s @ 1..=30 => t += Duration::seconds(i64::from(30 - s)),
        s => t += Duration::seconds(i64::from(60 - s)),
    }
    t
}

/// A side that is either fully resolved or still a raw offset waiting for
/// the other side to become concrete.
#[derive(Debug, Clone, Copy)]
enum Partial {
    Done(NaiveDateTime),
    Pending(Duration),
}

/// Resolves the two sides of a spec into concrete datetimes.
///
/// `last` is only consulted where the grammar calls for it (an absent
/// `since`, or a non-negative since-offset); a spec that never looks at it
/// resolves fine without a previous fact.
pub fn normalize_group(
    last: Option<NaiveDateTime>,
    since: Option<Component>,
    until: Option<Component>,
    now: NaiveDateTime,
) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let since = match since {
        None => Partial::Done(round_fwd(last.ok_or(BoundsError::MissingLastFact)?)),
        Some(component) => resolve_since(component, last, now)?,
    };
    let until = match until {
        None => Partial::Done(now),
        Some(component) => resolve_until(component, now)?,
    };

    if let Partial::Done(until) = until {
        if until > now {
            return Err(BoundsError::UntilInFuture { until, now });
        }
    }

    let (since, until) = match (since, until) {
        (Partial::Pending(s), Partial::Pending(u)) => {
            // "-10..+5": the start hangs off `now`, the end off the start.
            debug_assert!(s < Duration::zero());
            debug_assert!(u >= Duration::zero());
            let since = round_fwd(shift(now, s)?);
            (since, shift(since, u)?)
        }
        (Partial::Pending(s), Partial::Done(until)) => {
            // "-5..21:30": the start hangs off the resolved end.
            debug_assert!(s < Duration::zero());
            (round_fwd(shift(until, s)?), until)
        }
        (Partial::Done(since), Partial::Pending(u)) => {
            // "21:30..+5": the end hangs off the resolved start.
            debug_assert!(u >= Duration::zero());
            (since, shift(since, u)?)
        }
        (Partial::Done(since), Partial::Done(until)) => (since, until),
    };

    if since >= until {
        return Err(BoundsError::EmptyInterval { since, until });
    }
    Ok((since, until))
}

fn resolve_since(
    component: Component,
    last: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Result<Partial> {
    Ok(match component {
        Component::Clock { hour, minute } => Partial::Done(on_reference_day(hour, minute, now)?),
        // A negative offset counts back from `until`, which is not concrete
        // yet at this point.
        Component::Offset(delta) if delta < Duration::zero() => Partial::Pending(delta),
        // A non-negative offset counts forward from the previous fact.
        Component::Offset(delta) => {
            Partial::Done(shift(round_fwd(last.ok_or(BoundsError::MissingLastFact)?), delta)?)
        }
    })
}

fn resolve_until(component: Component, now: NaiveDateTime) -> Result<Partial> {
    Ok(match component {
        Component::Clock { hour, minute } => Partial::Done(on_reference_day(hour, minute, now)?),
        // A negative offset counts back from `now`.
        Component::Offset(delta) if delta < Duration::zero() => {
            Partial::Done(shift(round_fwd(now), delta)?)
        }
        // A non-negative offset counts forward from `since`, which is not
        // concrete yet at this point.
        Component::Offset(delta) => Partial::Pending(delta),
    })
}

/// Applies an offset to a bound, reporting instead of panicking when the
/// result leaves the representable datetime range. The grammar admits
/// packed offsets with hours parts up to ten digits, far beyond what
/// chrono's datetime addition tolerates.
fn shift(t: NaiveDateTime, delta: Duration) -> Result<NaiveDateTime> {
    t.checked_add_signed(delta)
        .ok_or(BoundsError::OffsetOutOfRange { minutes: delta.num_minutes() })
}

/// Anchors a bare clock time to a concrete day.
///
/// The time is read within the day of `round_fwd(now)`; a time of day that
/// has not happened yet must belong to yesterday, since a just-finished
/// activity cannot lie in the future. Earlier days are not considered;
/// they would make terse specs too easy to misread.
fn on_reference_day(hour: u32, minute: u32, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let time_of_day =
        NaiveTime::from_hms_opt(hour, minute, 0).ok_or(BoundsError::InvalidTime { hour, minute })?;

    let mut reference = round_fwd(now);
    if time_of_day >= now.time() {
        reference -= Duration::days(1);
    }
    Ok(reference.date().and_time(time_of_day))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2014, 1, 31)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
    }

    #[test]
    fn round_fwd_keeps_boundaries() {
        assert_eq!(round_fwd(at(19, 51, 0, 0)), at(19, 51, 0, 0));
        assert_eq!(round_fwd(at(19, 51, 30, 0)), at(19, 51, 30, 0));
    }

    #[test]
    fn round_fwd_rounds_up_to_half_minute() {
        assert_eq!(round_fwd(at(19, 51, 1, 0)), at(19, 51, 30, 0));
        assert_eq!(round_fwd(at(19, 51, 29, 0)), at(19, 51, 30, 0));
        assert_eq!(round_fwd(at(19, 51, 31, 0)), at(19, 52, 0, 0));
        assert_eq!(round_fwd(at(19, 51, 59, 0)), at(19, 52, 0, 0));
    }

    #[test]
    fn round_fwd_lifts_microseconds_to_the_next_second_first() {
        // 19:51:00.000001 rounds to :01, then onward to the half minute.
        assert_eq!(round_fwd(at(19, 51, 0, 1)), at(19, 51, 30, 0));
        // 19:51:30.5 leaves the :30 boundary and lands on the next minute.
        assert_eq!(round_fwd(at(19, 51, 30, 500_000)), at(19, 52, 0, 0));
        assert_eq!(round_fwd(at(19, 51, 37, 123_456)), at(19, 52, 0, 0));
    }

    #[test]
    fn round_fwd_is_idempotent() {
        for t in [
            at(19, 51, 0, 0),
            at(19, 51, 30, 0),
            at(19, 51, 14, 0),
            at(19, 51, 37, 123_456),
            at(23, 59, 59, 999_999),
        ] {
            assert_eq!(round_fwd(round_fwd(t)), round_fwd(t));
        }
    }

    #[test]
    fn round_fwd_crosses_midnight() {
        let rounded = round_fwd(at(23, 59, 59, 999_999));
        let next_day = NaiveDate::from_ymd_opt(2014, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(rounded, next_day);
    }
}
