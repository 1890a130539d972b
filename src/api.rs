//! Public parsing surface.

use chrono::{Duration, Local, NaiveDateTime};

use crate::component::normalize_component;
use crate::error::Result;
use crate::extract::extract;
use crate::resolve::normalize_group;

/// Anchors used to resolve a time-bounds spec.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// End time of the most recently recorded fact, if any. Relative specs
    /// like `"+5"` or the empty spec count from here.
    pub last: Option<NaiveDateTime>,
    /// The current moment. Injectable so parsing stays deterministic under
    /// test; [`Context::new`] takes it from the wall clock.
    pub now: NaiveDateTime,
}

impl Context {
    /// Context anchored to the wall clock.
    pub fn new(last: Option<NaiveDateTime>) -> Self {
        Self { last, now: Local::now().naive_local() }
    }

    /// Context with a frozen `now`.
    pub fn at(last: Option<NaiveDateTime>, now: NaiveDateTime) -> Self {
        Self { last, now }
    }
}

/// A resolved activity interval, `since` strictly before `until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub since: NaiveDateTime,
    pub until: NaiveDateTime,
}

impl Bounds {
    /// Length of the interval; positive by construction.
    pub fn delta(&self) -> Duration {
        self.until - self.since
    }
}

/// Parse `spec` into concrete bounds, with `now` taken from the wall clock.
///
/// # Example
/// ```
/// use stint::parse_bounds;
///
/// // "for the last five minutes, ending now"
/// let bounds = parse_bounds("-5", None).unwrap();
/// assert!(bounds.since < bounds.until);
/// ```
pub fn parse_bounds(spec: &str, last: Option<NaiveDateTime>) -> Result<Bounds> {
    parse_bounds_with(spec, &Context::new(last))
}

/// Parse `spec` against an explicit [`Context`].
///
/// Extraction, per-component normalization and group resolution run in
/// sequence; the first failure propagates unmodified, with no partial
/// result.
pub fn parse_bounds_with(spec: &str, context: &Context) -> Result<Bounds> {
    let shape = extract(spec)?;
    let (raw_since, raw_until) = shape.components();

    let since = normalize_component(raw_since)?;
    let until = normalize_component(raw_until)?;

    let (since, until) = normalize_group(context.last, since, until, context.now)?;
    Ok(Bounds { since, until })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn frozen_context() -> Context {
        let last = NaiveDate::from_ymd_opt(2014, 1, 30).unwrap().and_hms_opt(22, 15, 0).unwrap();
        let now = NaiveDate::from_ymd_opt(2014, 1, 31).unwrap().and_hms_opt(19, 51, 0).unwrap();
        Context::at(Some(last), now)
    }

    #[test]
    fn parse_bounds_with_resolves_a_full_spec() {
        let ctx = frozen_context();
        let bounds = parse_bounds_with("18:55..19:30", &ctx).unwrap();

        let day = NaiveDate::from_ymd_opt(2014, 1, 31).unwrap();
        assert_eq!(bounds.since, day.and_hms_opt(18, 55, 0).unwrap());
        assert_eq!(bounds.until, day.and_hms_opt(19, 30, 0).unwrap());
        assert_eq!(bounds.delta(), Duration::minutes(35));
    }

    #[test]
    fn parse_bounds_with_defaults_the_empty_spec() {
        let ctx = frozen_context();
        let bounds = parse_bounds_with("", &ctx).unwrap();

        assert_eq!(bounds.since, ctx.last.unwrap());
        assert_eq!(bounds.until, ctx.now);
    }
}
