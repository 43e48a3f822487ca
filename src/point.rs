// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Capability traits for the instants an [`Interval`](crate::Interval)
//! is built over.
//!
//! [`TimePoint`] is the seam between the period algebra and the underlying
//! time representation: anything totally ordered that can absorb a
//! [`Span`] and measure elapsed seconds to a peer qualifies. The crate
//! implements it for `chrono::DateTime<Utc>` and
//! `chrono::DateTime<FixedOffset>`; callers with their own conforming
//! representation round-trip through the generic interval type unchanged.
//!
//! Comparison and equality follow the underlying type's absolute-instant
//! semantics: two `DateTime<FixedOffset>` values at different display
//! offsets are equal whenever they name the same instant.

use crate::span::{CalendarSpan, Span};
use chrono::{DateTime, Duration, FixedOffset, Months, NaiveTime, TimeZone, Utc};
use qtty::Seconds;

/// A point in time usable as an interval endpoint.
pub trait TimePoint: Copy + PartialEq + PartialOrd + Sized {
    /// The absolute instant, for diagnostics rendering.
    fn to_utc(&self) -> DateTime<Utc>;

    /// Signed elapsed seconds since `earlier` (negative if `self` is the
    /// earlier of the two), with sub-second precision.
    fn seconds_since(&self, earlier: &Self) -> Seconds;

    /// Signed calendar-relative span since `earlier`, computed in
    /// `earlier`'s calendar context.
    fn span_since(&self, earlier: &Self) -> CalendarSpan;

    /// This point displaced forward by `span` (backward if the span is
    /// negative).
    fn add_span(&self, span: &Span) -> Self;

    /// This point displaced backward by `span` (forward if the span is
    /// negative).
    fn sub_span(&self, span: &Span) -> Self;
}

/// A [`TimePoint`] that also knows its civil calendar day.
///
/// Needed only by the day factory
/// ([`Interval::day_of`](crate::Interval::day_of)), which must echo the
/// caller's concrete representation and display offset back unchanged.
pub trait CivilPoint: TimePoint {
    /// Midnight at the start of this point's civil day, in the same
    /// representation and display offset as `self`.
    fn start_of_day(&self) -> Self;
}

const RANGE_MSG: &str = "time instant out of chrono representable range";

/// Exact seconds (possibly fractional, possibly negative) as a chrono
/// duration.
fn exact_duration(seconds: Seconds) -> Duration {
    let s = seconds.value();
    let whole = s.floor();
    let nanos = ((s - whole) * 1e9).round() as i64;
    Duration::seconds(whole as i64) + Duration::nanoseconds(nanos)
}

/// Chrono duration as fractional seconds, tolerating durations too large
/// for an i64 nanosecond count.
fn duration_seconds(duration: Duration) -> Seconds {
    match duration.num_nanoseconds() {
        Some(ns) => Seconds::new(ns as f64 / 1e9),
        None => Seconds::new(duration.num_seconds() as f64),
    }
}

/// Apply a calendar span: month units via chrono month arithmetic (with
/// its day-of-month clamping), then the sub-month remainder as an exact
/// duration. `forward == false` inverts the direction, as does the span's
/// own sign.
fn apply_calendar<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    span: &CalendarSpan,
    forward: bool,
) -> DateTime<Tz> {
    let months = Months::new(span.total_months());
    let clock = span.clock_part();
    if forward != span.is_negative() {
        dt.clone().checked_add_months(months).expect(RANGE_MSG) + clock
    } else {
        dt.clone().checked_sub_months(months).expect(RANGE_MSG) - clock
    }
}

impl TimePoint for DateTime<Utc> {
    fn to_utc(&self) -> DateTime<Utc> {
        *self
    }

    fn seconds_since(&self, earlier: &Self) -> Seconds {
        duration_seconds(self.signed_duration_since(*earlier))
    }

    fn span_since(&self, earlier: &Self) -> CalendarSpan {
        CalendarSpan::between(&earlier.naive_utc(), &self.naive_utc())
    }

    fn add_span(&self, span: &Span) -> Self {
        match span {
            Span::Calendar(c) => apply_calendar(self, c, true),
            Span::Exact(s) => *self + exact_duration(*s),
        }
    }

    fn sub_span(&self, span: &Span) -> Self {
        match span {
            Span::Calendar(c) => apply_calendar(self, c, false),
            Span::Exact(s) => *self - exact_duration(*s),
        }
    }
}

impl TimePoint for DateTime<FixedOffset> {
    fn to_utc(&self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }

    fn seconds_since(&self, earlier: &Self) -> Seconds {
        duration_seconds(self.signed_duration_since(*earlier))
    }

    fn span_since(&self, earlier: &Self) -> CalendarSpan {
        // Both operands observed through the earlier operand's offset.
        let local = self.with_timezone(earlier.offset());
        CalendarSpan::between(&earlier.naive_local(), &local.naive_local())
    }

    fn add_span(&self, span: &Span) -> Self {
        match span {
            Span::Calendar(c) => apply_calendar(self, c, true),
            Span::Exact(s) => *self + exact_duration(*s),
        }
    }

    fn sub_span(&self, span: &Span) -> Self {
        match span {
            Span::Calendar(c) => apply_calendar(self, c, false),
            Span::Exact(s) => *self - exact_duration(*s),
        }
    }
}

impl CivilPoint for DateTime<Utc> {
    fn start_of_day(&self) -> Self {
        Utc.from_utc_datetime(&self.date_naive().and_time(NaiveTime::MIN))
    }
}

impl CivilPoint for DateTime<FixedOffset> {
    fn start_of_day(&self) -> Self {
        let offset = *self.offset();
        let local_midnight = self.date_naive().and_time(NaiveTime::MIN);
        DateTime::from_naive_utc_and_offset(local_midnight - offset, offset)
    }
}
