// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: immutable half-open interval over any [`TimePoint`]
//! - [`Period`]: fixed-offset alias, `Interval<DateTime<FixedOffset>>`
//! - [`UtcPeriod`]: UTC alias, `Interval<DateTime<Utc>>`
//!
//! Every interval that ever exists satisfies `start <= end`; each
//! construction path, including every transformation, re-validates the
//! ordering and rejects violations with a [`PeriodError`]. Transformations
//! always return a fresh value — no interval is mutated after creation.

use crate::error::PeriodError;
use crate::iter::{Points, Split};
use crate::point::TimePoint;
use crate::span::{CalendarSpan, Span};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use qtty::Seconds;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Operand adapter for the ordering predicates.
///
/// [`Interval::is_before`], [`Interval::is_after`] and
/// [`Interval::contains`] accept either a bare instant or a whole interval;
/// this trait supplies the bounds either shape contributes to the
/// comparison.
pub trait IntervalOperand<T: TimePoint> {
    /// The earliest instant this operand occupies.
    fn lower(&self) -> T;

    /// The latest instant this operand occupies.
    fn upper(&self) -> T;

    /// Whether `interval` contains this operand.
    fn within(&self, interval: &Interval<T>) -> bool;
}

impl<T: TimePoint> IntervalOperand<T> for T {
    #[inline]
    fn lower(&self) -> T {
        *self
    }

    #[inline]
    fn upper(&self) -> T {
        *self
    }

    fn within(&self, interval: &Interval<T>) -> bool {
        if interval.start == interval.end {
            // Degenerate interval: the single boundary instant is the only
            // member, half-open exclusion does not apply.
            *self == interval.start
        } else {
            interval.start <= *self && *self < interval.end
        }
    }
}

impl<T: TimePoint> IntervalOperand<T> for Interval<T> {
    #[inline]
    fn lower(&self) -> T {
        self.start
    }

    #[inline]
    fn upper(&self) -> T {
        self.end
    }

    fn within(&self, interval: &Interval<T>) -> bool {
        interval.start <= self.start && self.end <= interval.end
    }
}

/// An immutable half-open interval `[start, end)` between two instants.
///
/// The endpoints satisfy `start <= end` for every interval this crate ever
/// hands out. The end instant is excluded from membership tests but serves
/// as the shared boundary for adjacency ([`abuts`](Interval::abuts)).
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use tempora::{Interval, Span};
///
/// let start: DateTime<Utc> = "2014-05-01T00:00:00Z".parse().unwrap();
/// let period = Interval::from_span(start, Span::days(7.0)).unwrap();
///
/// assert!(period.contains(&start));
/// assert_eq!(period.elapsed_seconds().value(), 7.0 * 86_400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: TimePoint> {
    start: T,
    end: T,
}

/// Fixed-offset period alias: instants carry a display offset.
pub type Period = Interval<DateTime<FixedOffset>>;

/// UTC period alias.
pub type UtcPeriod = Interval<DateTime<Utc>>;

fn earlier_of<T: TimePoint>(a: T, b: T) -> T {
    if a <= b {
        a
    } else {
        b
    }
}

fn later_of<T: TimePoint>(a: T, b: T) -> T {
    if a >= b {
        a
    } else {
        b
    }
}

impl<T: TimePoint> Interval<T> {
    /// Internal constructor for endpoints already known to be ordered.
    #[inline]
    pub(crate) fn from_ordered(start: T, end: T) -> Self {
        debug_assert!(start <= end);
        Interval { start, end }
    }

    // ── construction ──────────────────────────────────────────────────

    /// Creates a new interval between two instants.
    ///
    /// Fails with [`PeriodError::StartAfterEnd`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora::UtcPeriod;
    ///
    /// let start = "2014-05-01T00:00:00Z".parse().unwrap();
    /// let end = "2014-05-08T00:00:00Z".parse().unwrap();
    /// let period = UtcPeriod::new(start, end).unwrap();
    /// assert!(UtcPeriod::new(end, start).is_err());
    /// # let _ = period;
    /// ```
    pub fn new(start: T, end: T) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::StartAfterEnd);
        }
        Ok(Self::from_ordered(start, end))
    }

    /// Interval of length `span` anchored at `start`.
    ///
    /// Fails with [`PeriodError::InvertedSpan`] if the span, resolved at
    /// `start`, points backward.
    pub fn from_span(start: T, span: Span) -> Result<Self, PeriodError> {
        let end = start.add_span(&span);
        if end < start {
            return Err(PeriodError::InvertedSpan);
        }
        Ok(Self::from_ordered(start, end))
    }

    /// Interval of length `span` anchored at `end`.
    ///
    /// Fails with [`PeriodError::InvertedSpan`] if the span, resolved
    /// against `end`, points backward.
    pub fn span_before(end: T, span: Span) -> Result<Self, PeriodError> {
        let start = end.sub_span(&span);
        if end < start {
            return Err(PeriodError::InvertedSpan);
        }
        Ok(Self::from_ordered(start, end))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The included lower bound.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// The excluded upper bound.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Calendar-relative length, measured in the start instant's calendar
    /// context. Never negative.
    pub fn span(&self) -> CalendarSpan {
        self.end.span_since(&self.start)
    }

    /// Exact length in elapsed seconds, with sub-second precision. Never
    /// negative.
    pub fn elapsed_seconds(&self) -> Seconds {
        self.end.seconds_since(&self.start)
    }

    // ── ordering & overlap predicates ─────────────────────────────────

    /// Whether this interval lies entirely before `other` (an instant or
    /// an interval). Abutting intervals count as before.
    pub fn is_before<O: IntervalOperand<T>>(&self, other: &O) -> bool {
        self.end <= other.lower()
    }

    /// Whether this interval lies entirely after `other` (an instant or an
    /// interval). Abutting intervals count as after.
    pub fn is_after<O: IntervalOperand<T>>(&self, other: &O) -> bool {
        self.start >= other.upper()
    }

    /// Whether the two intervals share exactly one boundary instant with
    /// no overlapping interior.
    pub fn abuts(&self, other: &Self) -> bool {
        (self.start == other.end) != (self.end == other.start)
    }

    /// Whether the two intervals share at least one interior instant.
    /// Commutative; abutting intervals do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether this interval contains `other` (an instant or an interval).
    ///
    /// For an instant the test is half-open, except that a degenerate
    /// zero-length interval contains its single boundary instant. For an
    /// interval the test is full containment of both endpoints.
    pub fn contains<O: IntervalOperand<T>>(&self, other: &O) -> bool {
        other.within(self)
    }

    // ── duration comparison ───────────────────────────────────────────

    /// Whether this interval's exact length is strictly shorter than
    /// `other`'s.
    pub fn shorter_than(&self, other: &Self) -> bool {
        self.elapsed_seconds() < other.elapsed_seconds()
    }

    /// Whether this interval's exact length is strictly longer than
    /// `other`'s.
    pub fn longer_than(&self, other: &Self) -> bool {
        self.elapsed_seconds() > other.elapsed_seconds()
    }

    /// Whether the two intervals have exactly the same elapsed-seconds
    /// length, at the collaborator's full sub-second precision.
    pub fn same_duration_as(&self, other: &Self) -> bool {
        self.elapsed_seconds() == other.elapsed_seconds()
    }

    /// Value equality: same absolute start instant and same absolute end
    /// instant, independent of display offsets.
    pub fn same_value_as(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }

    // ── endpoint movement ─────────────────────────────────────────────

    /// Same start, new length. Fails with [`PeriodError::InvertedSpan`] on
    /// a backward span.
    pub fn with_span(&self, span: Span) -> Result<Self, PeriodError> {
        Self::from_span(self.start, span)
    }

    /// Same end, new length. Fails with [`PeriodError::InvertedSpan`] on a
    /// backward span.
    pub fn with_span_before_end(&self, span: Span) -> Result<Self, PeriodError> {
        Self::span_before(self.end, span)
    }

    /// Replace the start, keeping the end fixed.
    pub fn starting_on(&self, start: T) -> Result<Self, PeriodError> {
        Self::new(start, self.end)
    }

    /// Replace the end, keeping the start fixed.
    pub fn ending_on(&self, end: T) -> Result<Self, PeriodError> {
        Self::new(self.start, end)
    }

    /// Shift the start by `span` (backward if negative), keeping the end
    /// fixed. Fails with [`PeriodError::StartAfterEnd`] if the shifted
    /// start crosses the end.
    pub fn move_start(&self, span: Span) -> Result<Self, PeriodError> {
        Self::new(self.start.add_span(&span), self.end)
    }

    /// Shift the end by `span` (backward if negative), keeping the start
    /// fixed. Fails with [`PeriodError::StartAfterEnd`] if the shifted end
    /// crosses the start.
    pub fn move_end(&self, span: Span) -> Result<Self, PeriodError> {
        Self::new(self.start, self.end.add_span(&span))
    }

    /// Translate both endpoints by the same span. Relative order is
    /// preserved, so this always succeeds.
    pub fn translate(&self, span: Span) -> Self {
        Self::from_ordered(self.start.add_span(&span), self.end.add_span(&span))
    }

    /// The adjacent interval of this interval's own calendar length,
    /// immediately after the end.
    pub fn next_period(&self) -> Self {
        let span = Span::from(self.span());
        Self::from_ordered(self.end, self.end.add_span(&span))
    }

    /// The adjacent interval of this interval's own calendar length,
    /// immediately before the start.
    pub fn previous_period(&self) -> Self {
        let span = Span::from(self.span());
        Self::from_ordered(self.start.sub_span(&span), self.start)
    }

    /// The adjacent interval of length `span` immediately after the end.
    pub fn next_spanning(&self, span: Span) -> Result<Self, PeriodError> {
        Self::from_span(self.end, span)
    }

    /// The adjacent interval of length `span` immediately before the
    /// start.
    pub fn previous_spanning(&self, span: Span) -> Result<Self, PeriodError> {
        Self::span_before(self.start, span)
    }

    // ── set operations ────────────────────────────────────────────────

    /// The smallest interval covering `self` and every interval in
    /// `others`: `[min(starts), max(ends))`.
    ///
    /// Always succeeds, in any argument order, even for disjoint operands
    /// (the result is a covering span, not a concatenation).
    pub fn merge<I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        others.into_iter().fold(*self, |acc, p| {
            Self::from_ordered(earlier_of(acc.start, p.start), later_of(acc.end, p.end))
        })
    }

    /// The overlapping sub-interval `[max(starts), min(ends))`.
    ///
    /// Fails with [`PeriodError::Disjoint`] unless the operands strictly
    /// overlap; a zero-width meeting of abutting intervals is rejected.
    pub fn intersect(&self, other: &Self) -> Result<Self, PeriodError> {
        if !self.overlaps(other) {
            return Err(PeriodError::Disjoint);
        }
        Ok(Self::from_ordered(
            later_of(self.start, other.start),
            earlier_of(self.end, other.end),
        ))
    }

    /// The interval strictly between two non-overlapping intervals,
    /// symmetric in its operands.
    ///
    /// Fails with [`PeriodError::Overlapping`] if the operands overlap.
    /// Abutting intervals yield a degenerate zero-length gap at the shared
    /// boundary, so the gap to this interval's own
    /// [`next_period`](Interval::next_period) is defined.
    pub fn gap(&self, other: &Self) -> Result<Self, PeriodError> {
        if self.overlaps(other) {
            return Err(PeriodError::Overlapping);
        }
        if self.end <= other.start {
            Ok(Self::from_ordered(self.end, other.start))
        } else {
            Ok(Self::from_ordered(other.end, self.start))
        }
    }

    /// The non-overlapping remainders: the parts of the union not covered
    /// by the intersection, ordered by start instant.
    ///
    /// Yields no intervals for value-equal operands, one when the operands
    /// share exactly one endpoint, and two for a plain partial overlap.
    /// Fails with [`PeriodError::Disjoint`] if the operands neither
    /// overlap nor are value-equal.
    pub fn diff(&self, other: &Self) -> Result<Vec<Self>, PeriodError> {
        if self.same_value_as(other) {
            return Ok(Vec::new());
        }
        if !self.overlaps(other) {
            return Err(PeriodError::Disjoint);
        }

        let mut parts = Vec::with_capacity(2);
        if self.start != other.start {
            parts.push(Self::from_ordered(
                earlier_of(self.start, other.start),
                later_of(self.start, other.start),
            ));
        }
        if self.end != other.end {
            parts.push(Self::from_ordered(
                earlier_of(self.end, other.end),
                later_of(self.end, other.end),
            ));
        }
        Ok(parts)
    }

    /// Signed calendar-relative difference between the two intervals'
    /// lengths: positive when `other` is longer. Swapping the operands
    /// inverts the sign, not the magnitude.
    pub fn span_diff(&self, other: &Self) -> CalendarSpan {
        let anchor = self.start.add_span(&Span::from(other.span()));
        anchor.span_since(&self.end)
    }

    /// Signed elapsed-seconds difference between the two intervals'
    /// lengths: positive when `other` is longer.
    pub fn seconds_diff(&self, other: &Self) -> Seconds {
        let a = self.elapsed_seconds();
        let b = other.elapsed_seconds();
        Seconds::new(b.value() - a.value())
    }

    // ── decomposition ─────────────────────────────────────────────────

    /// Lazily tile `[start, end)` with sub-intervals of length `span`,
    /// from the start forward. Every piece has length `span` except
    /// possibly the last, which is truncated to fit; folding
    /// [`merge`](Interval::merge) over the pieces reconstructs this
    /// interval exactly. A span at least as long as the interval (and in
    /// particular any span applied to a zero-length interval) yields a
    /// single piece equal to the interval itself.
    ///
    /// Each call returns an independent traversal. Fails with
    /// [`PeriodError::ZeroStep`] if `span` does not strictly advance from
    /// the start.
    pub fn split(&self, span: Span) -> Result<Split<T>, PeriodError> {
        if self.start.add_span(&span) <= self.start {
            return Err(PeriodError::ZeroStep);
        }
        Ok(Split::new(self.start, self.end, span))
    }

    /// Lazily step instants from the start towards the (excluded) end by
    /// `span`; with `exclude_start` the start instant itself is skipped.
    ///
    /// Fails with [`PeriodError::ZeroStep`] if `span` does not strictly
    /// advance from the start.
    pub fn points(&self, span: Span, exclude_start: bool) -> Result<Points<T>, PeriodError> {
        if self.start.add_span(&span) <= self.start {
            return Err(PeriodError::ZeroStep);
        }
        let first = if exclude_start {
            self.start.add_span(&span)
        } else {
            self.start
        };
        Ok(Points::new(first, self.end, span))
    }
}

impl Period {
    /// Re-express both endpoints at another display offset. The absolute
    /// instants, and therefore the interval's value, are unchanged.
    pub fn with_offset(&self, offset: FixedOffset) -> Period {
        Self::from_ordered(
            self.start.with_timezone(&offset),
            self.end.with_timezone(&offset),
        )
    }

    /// Drop the display offsets, keeping the absolute instants.
    pub fn to_utc_period(&self) -> UtcPeriod {
        Interval::from_ordered(TimePoint::to_utc(&self.start), TimePoint::to_utc(&self.end))
    }
}

impl UtcPeriod {
    /// Attach a display offset to both endpoints. The absolute instants
    /// are unchanged.
    pub fn with_offset(&self, offset: FixedOffset) -> Period {
        Interval::from_ordered(
            self.start.with_timezone(&offset),
            self.end.with_timezone(&offset),
        )
    }
}

// Display implementation: fixed interval notation over absolute UTC
// instants, e.g. `[2014-04-30T21:00:00Z, 2014-05-07T21:00:00Z)`.
impl<T: TimePoint> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.to_utc().to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.end.to_utc().to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )
    }
}

// Serde support: structured `{start, end}` representation for external
// formatters. Deserialisation re-validates the ordering invariant.
#[cfg(feature = "serde")]
impl<T: TimePoint + Serialize> Serialize for Interval<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: TimePoint + Deserialize<'de>> Deserialize<'de> for Interval<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<U> {
            start: U,
            end: U,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Interval::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn period(start: &str, end: &str) -> UtcPeriod {
        UtcPeriod::new(utc(start), utc(end)).unwrap()
    }

    fn may() -> UtcPeriod {
        period("2014-05-01T00:00:00Z", "2014-06-01T00:00:00Z")
    }

    #[test]
    fn new_rejects_inverted_endpoints() {
        let err = UtcPeriod::new(utc("2014-05-02T00:00:00Z"), utc("2014-05-01T00:00:00Z"));
        assert_eq!(err, Err(PeriodError::StartAfterEnd));
    }

    #[test]
    fn new_accepts_degenerate_interval() {
        let t = utc("2014-05-01T00:00:00Z");
        let p = UtcPeriod::new(t, t).unwrap();
        assert_eq!(p.elapsed_seconds(), Seconds::new(0.0));
        assert!(p.contains(&t));
        assert!(!p.contains(&(t + Duration::seconds(1))));
    }

    #[test]
    fn from_span_rejects_backward_span() {
        let start = utc("2014-05-01T00:00:00Z");
        assert_eq!(
            UtcPeriod::from_span(start, Span::seconds(-1.0)),
            Err(PeriodError::InvertedSpan)
        );
        assert_eq!(
            UtcPeriod::from_span(start, Span::from(CalendarSpan::new().months(1).negated())),
            Err(PeriodError::InvertedSpan)
        );
    }

    #[test]
    fn span_before_anchors_on_end() {
        let end = utc("2014-05-08T00:00:00Z");
        let p = UtcPeriod::span_before(end, Span::days(7.0)).unwrap();
        assert_eq!(p.start(), utc("2014-05-01T00:00:00Z"));
        assert_eq!(p.end(), end);
        assert_eq!(
            UtcPeriod::span_before(end, Span::days(-7.0)),
            Err(PeriodError::InvertedSpan)
        );
    }

    #[test]
    fn is_before_and_after_with_instants_and_intervals() {
        let p = may();
        assert!(p.is_before(&utc("2014-06-01T00:00:00Z")));
        assert!(!p.is_before(&utc("2014-05-31T23:59:59Z")));
        assert!(p.is_after(&utc("2014-05-01T00:00:00Z")));
        assert!(!p.is_after(&utc("2014-05-01T00:00:01Z")));

        let june = period("2014-06-01T00:00:00Z", "2014-07-01T00:00:00Z");
        assert!(p.is_before(&june));
        assert!(june.is_after(&p));
    }

    #[test]
    fn abuts_requires_exactly_one_shared_boundary() {
        let p = may();
        let june = period("2014-06-01T00:00:00Z", "2014-07-01T00:00:00Z");
        assert!(p.abuts(&june));
        assert!(june.abuts(&p));
        assert!(!p.abuts(&p));

        let degenerate = period("2014-06-01T00:00:00Z", "2014-06-01T00:00:00Z");
        assert!(p.abuts(&degenerate));
        assert!(!degenerate.abuts(&degenerate));
    }

    #[test]
    fn overlaps_is_commutative_and_excludes_abutting() {
        let p = may();
        let late_may = period("2014-05-20T00:00:00Z", "2014-06-10T00:00:00Z");
        let june = period("2014-06-01T00:00:00Z", "2014-07-01T00:00:00Z");

        assert!(p.overlaps(&late_may));
        assert!(late_may.overlaps(&p));
        assert!(!p.overlaps(&june));
    }

    #[test]
    fn contains_interval_and_instant() {
        let p = may();
        let inner = period("2014-05-10T00:00:00Z", "2014-05-20T00:00:00Z");
        assert!(p.contains(&inner));
        assert!(p.contains(&p));
        assert!(!inner.contains(&p));
        assert!(!p.contains(&utc("2014-06-01T00:00:00Z")));
        assert!(p.contains(&utc("2014-05-01T00:00:00Z")));
    }

    #[test]
    fn duration_predicates_use_subsecond_precision() {
        let base = utc("2014-05-01T00:00:00Z");
        let a = UtcPeriod::from_span(base, Span::seconds(10.0)).unwrap();
        let b = UtcPeriod::from_span(base, Span::seconds(10.5)).unwrap();
        let c = UtcPeriod::from_span(utc("2015-01-01T00:00:00Z"), Span::seconds(10.5)).unwrap();

        assert!(a.shorter_than(&b));
        assert!(b.longer_than(&a));
        assert!(b.same_duration_as(&c));
        assert!(!b.same_duration_as(&a));
    }

    #[test]
    fn starting_and_ending_on() {
        let p = may();
        let shrunk = p.starting_on(utc("2014-05-10T00:00:00Z")).unwrap();
        assert_eq!(shrunk.start(), utc("2014-05-10T00:00:00Z"));
        assert_eq!(shrunk.end(), p.end());
        assert_eq!(
            p.starting_on(utc("2014-07-01T00:00:00Z")),
            Err(PeriodError::StartAfterEnd)
        );
        assert_eq!(
            p.ending_on(utc("2014-04-01T00:00:00Z")),
            Err(PeriodError::StartAfterEnd)
        );
    }

    #[test]
    fn move_endpoints_by_span() {
        let p = may();
        let widened = p.move_start(Span::days(-1.0)).unwrap();
        assert_eq!(widened.start(), utc("2014-04-30T00:00:00Z"));

        let shortened = p.move_end(Span::days(-30.0)).unwrap();
        assert_eq!(shortened.end(), utc("2014-05-02T00:00:00Z"));

        assert_eq!(
            p.move_start(Span::days(40.0)),
            Err(PeriodError::StartAfterEnd)
        );
        assert_eq!(
            p.move_end(Span::days(-40.0)),
            Err(PeriodError::StartAfterEnd)
        );
    }

    #[test]
    fn translate_preserves_length() {
        let p = may();
        let moved = p.translate(Span::from(CalendarSpan::new().months(2)));
        assert_eq!(moved.start(), utc("2014-07-01T00:00:00Z"));
        assert_eq!(moved.end(), utc("2014-08-01T00:00:00Z"));

        let back = p.translate(Span::days(-1.0));
        assert_eq!(back.start(), utc("2014-04-30T00:00:00Z"));
        assert!(back.same_duration_as(&p));
    }

    #[test]
    fn with_span_reanchors() {
        let p = may();
        let week = p.with_span(Span::days(7.0)).unwrap();
        assert_eq!(week.start(), p.start());
        assert_eq!(week.end(), utc("2014-05-08T00:00:00Z"));

        let before = p.with_span_before_end(Span::days(7.0)).unwrap();
        assert_eq!(before.end(), p.end());
        assert_eq!(before.start(), utc("2014-05-25T00:00:00Z"));

        assert_eq!(p.with_span(Span::days(-1.0)), Err(PeriodError::InvertedSpan));
    }

    #[test]
    fn next_and_previous_adjacent_periods() {
        let p = may();
        let next = p.next_period();
        assert_eq!(next.start(), p.end());
        assert_eq!(next.end(), utc("2014-07-01T00:00:00Z"));
        assert!(p.abuts(&next));

        let prev = p.previous_period();
        assert_eq!(prev.end(), p.start());
        assert_eq!(prev.start(), utc("2014-04-01T00:00:00Z"));

        let hour_after = p.next_spanning(Span::hours(1.0)).unwrap();
        assert_eq!(hour_after.start(), p.end());
        assert_eq!(hour_after.elapsed_seconds(), Seconds::new(3_600.0));
        assert_eq!(
            p.previous_spanning(Span::hours(-1.0)),
            Err(PeriodError::InvertedSpan)
        );
    }

    #[test]
    fn merge_covers_all_operands() {
        let march = period("2014-03-01T00:00:00Z", "2014-04-01T00:00:00Z");
        let june = period("2014-06-01T00:00:00Z", "2014-07-01T00:00:00Z");
        let p = may();

        let merged = march.merge([p, june]);
        assert_eq!(merged.start(), march.start());
        assert_eq!(merged.end(), june.end());

        // Order-independent and associative.
        assert!(june.merge([march, p]).same_value_as(&merged));
        assert!(march.merge([p]).merge([june]).same_value_as(&merged));
    }

    #[test]
    fn intersect_requires_strict_overlap() {
        let p = may();
        let late_may = period("2014-05-20T00:00:00Z", "2014-06-10T00:00:00Z");
        let overlap = p.intersect(&late_may).unwrap();
        assert_eq!(overlap.start(), utc("2014-05-20T00:00:00Z"));
        assert_eq!(overlap.end(), utc("2014-06-01T00:00:00Z"));

        let june = period("2014-06-01T00:00:00Z", "2014-07-01T00:00:00Z");
        assert_eq!(p.intersect(&june), Err(PeriodError::Disjoint));
        let august = period("2014-08-01T00:00:00Z", "2014-09-01T00:00:00Z");
        assert_eq!(p.intersect(&august), Err(PeriodError::Disjoint));
    }

    #[test]
    fn gap_between_disjoint_periods() {
        let p = may();
        let august = period("2014-08-01T00:00:00Z", "2014-09-01T00:00:00Z");

        let gap = p.gap(&august).unwrap();
        assert_eq!(gap.start(), p.end());
        assert_eq!(gap.end(), august.start());
        assert!(august.gap(&p).unwrap().same_value_as(&gap));
    }

    #[test]
    fn gap_of_abutting_periods_is_degenerate() {
        let p = may();
        let gap = p.gap(&p.next_period()).unwrap();
        assert_eq!(gap.start(), p.end());
        assert_eq!(gap.elapsed_seconds(), Seconds::new(0.0));
    }

    #[test]
    fn gap_rejects_overlapping_periods() {
        let p = may();
        let late_may = period("2014-05-20T00:00:00Z", "2014-06-10T00:00:00Z");
        assert_eq!(p.gap(&late_may), Err(PeriodError::Overlapping));
    }

    #[test]
    fn diff_cardinality() {
        let p = may();

        // Identical operands: nothing remains.
        assert_eq!(p.diff(&p).unwrap(), Vec::<UtcPeriod>::new());

        // One shared endpoint: a single remainder.
        let first_week = period("2014-05-01T00:00:00Z", "2014-05-08T00:00:00Z");
        let rest = p.diff(&first_week).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].start(), first_week.end());
        assert_eq!(rest[0].end(), p.end());

        // Plain partial overlap: two remainders, sorted by start.
        let shifted = period("2014-05-15T00:00:00Z", "2014-06-15T00:00:00Z");
        let parts = p.diff(&shifted).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].start(), p.start());
        assert_eq!(parts[0].end(), shifted.start());
        assert_eq!(parts[1].start(), p.end());
        assert_eq!(parts[1].end(), shifted.end());

        // Disjoint operands are rejected.
        let august = period("2014-08-01T00:00:00Z", "2014-09-01T00:00:00Z");
        assert_eq!(p.diff(&august), Err(PeriodError::Disjoint));
    }

    #[test]
    fn diff_is_symmetric_in_value() {
        let p = may();
        let shifted = period("2014-05-15T00:00:00Z", "2014-06-15T00:00:00Z");
        assert_eq!(p.diff(&shifted).unwrap(), shifted.diff(&p).unwrap());
    }

    #[test]
    fn length_differences_are_signed() {
        let p = may(); // 31 days
        let week = period("2014-05-01T00:00:00Z", "2014-05-08T00:00:00Z");

        assert_eq!(p.seconds_diff(&week), Seconds::new(-24.0 * 86_400.0));
        assert_eq!(week.seconds_diff(&p), Seconds::new(24.0 * 86_400.0));

        assert!(p.span_diff(&week).is_negative());
        let forward = week.span_diff(&p);
        assert!(!forward.is_negative());
        assert_eq!(forward, CalendarSpan::new().days(24));
    }

    #[test]
    fn same_value_ignores_display_offset() {
        let plus3 = FixedOffset::east_opt(3 * 3_600).unwrap();
        let p = may().with_offset(plus3);
        let q = p.to_utc_period().with_offset(FixedOffset::east_opt(0).unwrap());
        assert!(p.same_value_as(&q));
        assert_eq!(p, q);
        assert!(p.same_value_as(&p));
    }

    #[test]
    fn display_renders_absolute_utc_bounds() {
        let start = DateTime::parse_from_rfc3339("2014-05-01T00:00:00+03:00").unwrap();
        let end = DateTime::parse_from_rfc3339("2014-05-08T00:00:00+03:00").unwrap();
        let p = Period::new(start, end).unwrap();

        // Date-only bounds read in a +03:00 context sit three hours back
        // on the absolute axis.
        assert_eq!(
            p.to_string(),
            "[2014-04-30T21:00:00Z, 2014-05-07T21:00:00Z)"
        );
    }
}
