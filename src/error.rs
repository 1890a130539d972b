//! Error types for time-bounds parsing.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Everything that can go wrong between a raw spec string and a resolved
/// `(since, until)` pair. All failures are fatal and surface synchronously;
/// nothing is retried or silently corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// No grammar alternative matched the spec string.
    #[error("could not parse {spec:?} to time bounds")]
    UnparseableSpec { spec: String },

    /// A trailing negative offset without the `..` separator (`"1230-5"`).
    /// Visually ambiguous with a single negative-offset spec, so it is
    /// rejected instead of guessed at.
    #[error("ambiguous shortcut {spec:?}: a negative offset needs an explicit \"..\" separator")]
    AmbiguousShortcut { spec: String },

    /// The minutes part of a packed offset was 60 or more (`"+70"`).
    #[error("minutes part of offset {token:?} must be below 60")]
    OffsetMinutesOutOfRange { token: String },

    /// An offset that pushes a bound outside the representable datetime
    /// range (`"+429496729559"` is grammar-valid but centuries long).
    #[error("offset of {minutes} minutes is out of range")]
    OffsetOutOfRange { minutes: i64 },

    /// A value that should have read as packed hours and minutes did not.
    #[error("malformed value {token:?}")]
    Malformed { token: String },

    /// A clock component survived extraction but does not name a real
    /// time of day (`"25:00"`, `"1299"`).
    #[error("{hour:02}:{minute:02} is not a valid time of day")]
    InvalidTime { hour: u32, minute: u32 },

    /// A recorded fact cannot end in the future.
    #[error("until ({until}) must not be later than now ({now})")]
    UntilInFuture { until: NaiveDateTime, now: NaiveDateTime },

    /// Resolution produced `since >= until`. Never auto-swapped: a swap
    /// could silently log the wrong interval.
    #[error("since ({since}) must be earlier than until ({until})")]
    EmptyInterval { since: NaiveDateTime, until: NaiveDateTime },

    /// The spec leans on the end of the previous fact (`""`, `"+5"`) but
    /// no fact has been recorded yet.
    #[error("no previous fact to anchor the start bound to")]
    MissingLastFact,
}

pub type Result<T> = std::result::Result<T, BoundsError>;
