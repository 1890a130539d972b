//! stint: a time-bounds parsing engine for personal activity logging.
//!
//! An activity logger records "facts": an activity plus the time span it
//! covered. Typing full timestamps for every fact is tedious, so facts are
//! described with a terse spec string resolved against two anchors, the
//! end of the previous fact (`last`) and the current moment (`now`):
//!
//! ```text
//! 18:55..19:30   from 18:55 until 19:30
//! 55..130        from 0:55 until 1:30
//! ..130          from the end of the previous fact until 1:30
//! +5..           from five minutes after the previous fact, until now
//! -5             the last five minutes, ending now
//! 1230+5         from 12:30, for five minutes
//! -9..+5         nine minutes ago, for five minutes
//! ..             the whole gap since the previous fact
//! ```
//!
//! Parsing is a three-stage pipeline, each stage pure and fallible:
//!
//! 1. [`extract`] splits the spec into raw `since`/`until` components by
//!    trying a fixed list of anchored grammar alternatives in priority
//!    order, yielding a tagged [`SpecShape`].
//! 2. [`normalize_component`] turns each component into a [`Component`]:
//!    an absolute time of day or a signed offset, via the packed-digit rule
//!    (`"537"` is 5:37, `"37"` is 0:37, `"+250"` is plus 2h50m).
//! 3. [`normalize_group`] resolves both components against `last` and
//!    `now` into concrete datetimes, forward-rounding sub-minute precision
//!    (see [`round_fwd`]) so consecutive facts never overlap, and enforcing
//!    that the interval is non-empty and does not end in the future.
//!
//! [`parse_bounds`] / [`parse_bounds_with`] run the whole pipeline:
//!
//! ```
//! use chrono::NaiveDate;
//! use stint::{parse_bounds_with, Context};
//!
//! let last = NaiveDate::from_ymd_opt(2014, 1, 30).unwrap().and_hms_opt(22, 15, 0).unwrap();
//! let now = NaiveDate::from_ymd_opt(2014, 1, 31).unwrap().and_hms_opt(19, 51, 0).unwrap();
//!
//! let bounds = parse_bounds_with("18:55..19:30", &Context::at(Some(last), now)).unwrap();
//! assert_eq!(bounds.delta(), chrono::Duration::minutes(35));
//! ```
//!
//! Everything here is a pure computation over its arguments: no I/O, no
//! globals, no shared state. Callers may invoke it from any thread.

#[macro_use]
mod macros;

mod api;
mod component;
mod error;
mod extract;
mod format;
mod resolve;

pub use api::{Bounds, Context, parse_bounds, parse_bounds_with};
pub use component::{Component, normalize_component};
pub use error::{BoundsError, Result};
pub use extract::{SpecShape, extract};
pub use format::{format_delta, parse_date, parse_delta};
pub use resolve::{normalize_group, round_fwd};
