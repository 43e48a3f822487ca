// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Duration values consumed by the period algebra.
//!
//! Two canonical shapes exist and everything else must be reduced to one of
//! them before it reaches an [`Interval`](crate::Interval):
//!
//! - [`CalendarSpan`] — a signed, calendar-relative span of
//!   years/months/days plus clock time. Resolving it to elapsed time
//!   requires an anchor instant (a month is not a fixed number of seconds).
//! - [`Span::Exact`] — an absolute elapsed-seconds span, fractional and
//!   signed, carried as [`qtty::Seconds`].

use chrono::{Datelike, Duration, Months, NaiveDateTime};
use qtty::Seconds;
use std::fmt;

/// A signed calendar-relative span.
///
/// The unit fields are always non-negative; the sign of the whole span is a
/// single flag, so `-P1M3D` means "one month and three days backward", not
/// a mix of directions. Built with chained setters:
///
/// ```
/// use tempora::CalendarSpan;
///
/// let span = CalendarSpan::new().years(1).months(2).days(10);
/// assert_eq!(span.to_string(), "P1Y2M10D");
/// assert_eq!(span.negated().to_string(), "-P1Y2M10D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarSpan {
    negative: bool,
    years: u32,
    months: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
    nanos: u32,
}

impl CalendarSpan {
    /// The zero span.
    pub const fn new() -> Self {
        Self {
            negative: false,
            years: 0,
            months: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            nanos: 0,
        }
    }

    // ── builder-style setters ─────────────────────────────────────────

    pub const fn years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    pub const fn months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    pub const fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub const fn hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    pub const fn minutes(mut self, minutes: u32) -> Self {
        self.minutes = minutes;
        self
    }

    pub const fn seconds(mut self, seconds: u32) -> Self {
        self.seconds = seconds;
        self
    }

    /// Sub-second part, in nanoseconds (`0..1_000_000_000`).
    pub const fn nanos(mut self, nanos: u32) -> Self {
        self.nanos = nanos;
        self
    }

    /// The same magnitude with the sign flipped.
    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────

    pub const fn get_years(&self) -> u32 {
        self.years
    }

    pub const fn get_months(&self) -> u32 {
        self.months
    }

    pub const fn get_days(&self) -> u32 {
        self.days
    }

    pub const fn get_hours(&self) -> u32 {
        self.hours
    }

    pub const fn get_minutes(&self) -> u32 {
        self.minutes
    }

    pub const fn get_seconds(&self) -> u32 {
        self.seconds
    }

    pub const fn get_nanos(&self) -> u32 {
        self.nanos
    }

    /// Whether every unit field is zero.
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanos == 0
    }

    /// Whether this span points backward in time.
    pub const fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Total month count (years folded in), used when applying the span.
    pub(crate) const fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    /// The sub-month remainder as an exact clock duration.
    pub(crate) fn clock_part(&self) -> Duration {
        Duration::days(self.days as i64)
            + Duration::hours(self.hours as i64)
            + Duration::minutes(self.minutes as i64)
            + Duration::seconds(self.seconds as i64)
            + Duration::nanoseconds(self.nanos as i64)
    }

    /// Calendar-relative span between two civil date-times.
    ///
    /// The result is the greedy decomposition: as many whole months as fit
    /// (years folded out of the month count), then whole days, then clock
    /// time. Month steps clamp the day-of-month the same way
    /// [`chrono::Months`] arithmetic does, so
    /// `a + CalendarSpan::between(&a, &b)` lands exactly on `b`.
    pub fn between(a: &NaiveDateTime, b: &NaiveDateTime) -> Self {
        if b < a {
            return Self::between(b, a).negated();
        }

        let candidate = (b.year() - a.year()) * 12 + b.month() as i32 - a.month() as i32;
        let mut months = candidate.max(0) as u32;
        while months > 0 && add_months(a, months) > *b {
            months -= 1;
        }

        let anchor = add_months(a, months);
        let mut rem = *b - anchor;

        let days = rem.num_days();
        rem = rem - Duration::days(days);
        let hours = rem.num_hours();
        rem = rem - Duration::hours(hours);
        let minutes = rem.num_minutes();
        rem = rem - Duration::minutes(minutes);
        let seconds = rem.num_seconds();
        rem = rem - Duration::seconds(seconds);
        // rem is now strictly sub-second and non-negative.
        let nanos = rem.num_nanoseconds().unwrap_or(0);

        Self {
            negative: false,
            years: months / 12,
            months: months % 12,
            days: days as u32,
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            nanos: nanos as u32,
        }
    }
}

fn add_months(t: &NaiveDateTime, months: u32) -> NaiveDateTime {
    t.checked_add_months(Months::new(months))
        .expect("time instant out of chrono representable range")
}

impl fmt::Display for CalendarSpan {
    /// ISO-8601-style rendering, e.g. `P1Y2M10DT4H30M1.5S`; the zero span
    /// prints as `PT0S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 || self.nanos > 0 {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.nanos > 0 {
                let secs = self.seconds as f64 + self.nanos as f64 / 1e9;
                write!(f, "{}S", secs)?;
            } else if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

/// A duration operand in one of the two canonical shapes.
///
/// Callers that hold human-readable or mixed representations are expected
/// to reduce them to one of these shapes before calling into the algebra.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Span {
    /// Calendar-relative: resolving it needs an anchor instant.
    Calendar(CalendarSpan),
    /// Exact elapsed time in (possibly fractional, possibly negative) seconds.
    Exact(Seconds),
}

impl Span {
    /// An exact span of `s` seconds.
    pub fn seconds(s: f64) -> Self {
        Span::Exact(Seconds::new(s))
    }

    /// An exact span of `h` hours.
    pub fn hours(h: f64) -> Self {
        Span::Exact(Seconds::new(h * 3_600.0))
    }

    /// An exact span of `d` 24-hour days.
    pub fn days(d: f64) -> Self {
        Span::Exact(Seconds::new(d * 86_400.0))
    }

    /// The same magnitude pointing the other way.
    pub fn negated(&self) -> Self {
        match self {
            Span::Calendar(c) => Span::Calendar(c.negated()),
            Span::Exact(s) => Span::Exact(Seconds::new(-s.value())),
        }
    }
}

impl From<CalendarSpan> for Span {
    fn from(span: CalendarSpan) -> Self {
        Span::Calendar(span)
    }
}

impl From<Seconds> for Span {
    fn from(seconds: Seconds) -> Self {
        Span::Exact(seconds)
    }
}
