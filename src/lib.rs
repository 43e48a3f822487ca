// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time Period Module
//!
//! This crate models an immutable, half-open time period `[start, end)`
//! together with an algebra of comparisons, set-like operations, and
//! arithmetic transformations. It is aimed at scheduling, billing cycles,
//! availability windows, and any other domain where "from X to Y"
//! intervals must be compared, merged, split, or measured.
//!
//! # Core types
//!
//! - [`Interval<T>`] — generic interval over any [`TimePoint`].
//! - [`Period`] — fixed-offset alias, `Interval<DateTime<FixedOffset>>`.
//! - [`UtcPeriod`] — UTC alias, `Interval<DateTime<Utc>>`.
//! - [`TimePoint`] / [`CivilPoint`] — capability traits for interval
//!   endpoints; implemented for `chrono::DateTime<Utc>` and
//!   `chrono::DateTime<FixedOffset>`.
//! - [`CalendarSpan`] / [`Span`] — the two canonical duration shapes
//!   (calendar-relative, exact elapsed seconds).
//! - [`PeriodError`] — the single error type of every fallible operation.
//!
//! # Operations
//!
//! | Group | Operations |
//! |-------|------------|
//! | Construction | [`Interval::new`], [`Interval::from_span`], [`Interval::span_before`], [`Period::from_year`], [`Period::from_semester`], [`Period::from_quarter`], [`Period::from_month`], [`Period::from_iso_week`], [`Interval::day_of`] |
//! | Predicates | [`Interval::is_before`], [`Interval::is_after`], [`Interval::abuts`], [`Interval::overlaps`], [`Interval::contains`], [`Interval::shorter_than`], [`Interval::longer_than`], [`Interval::same_duration_as`], [`Interval::same_value_as`] |
//! | Arithmetic | [`Interval::span`], [`Interval::elapsed_seconds`], [`Interval::with_span`], [`Interval::with_span_before_end`], [`Interval::starting_on`], [`Interval::ending_on`], [`Interval::move_start`], [`Interval::move_end`], [`Interval::translate`], [`Interval::next_period`], [`Interval::previous_period`] |
//! | Set operations | [`Interval::merge`], [`Interval::intersect`], [`Interval::gap`], [`Interval::diff`], [`Interval::span_diff`], [`Interval::seconds_diff`] |
//! | Decomposition | [`Interval::split`], [`Interval::points`] |
//!
//! # Example
//!
//! ```
//! use chrono::{Offset, Utc};
//! use tempora::{Period, Span};
//!
//! let march = Period::from_month(2014, 3, Utc.fix())?;
//! let april = Period::from_month(2014, 4, Utc.fix())?;
//!
//! assert!(march.abuts(&april));
//!
//! let two_months = march.merge([april]);
//! assert_eq!(
//!     two_months.to_string(),
//!     "[2014-03-01T00:00:00Z, 2014-05-01T00:00:00Z)"
//! );
//!
//! let weeks: Vec<_> = march.split(Span::days(7.0))?.collect();
//! assert_eq!(weeks.len(), 5); // four full weeks plus a truncated tail
//! # Ok::<(), tempora::PeriodError>(())
//! ```
//!
//! Every interval that ever exists satisfies `start <= end`; every
//! transformation returns a fresh value, so concurrent readers need no
//! synchronisation.

mod error;
mod interval;
mod iter;
mod point;
mod span;
mod units;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::PeriodError;
pub use interval::{Interval, IntervalOperand, Period, UtcPeriod};
pub use iter::{Points, Split};
pub use point::{CivilPoint, TimePoint};
pub use span::{CalendarSpan, Span};
