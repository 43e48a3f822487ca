// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lazy, finite decomposition of an interval.
//!
//! Both iterators are pull-based: one element is computed per advance, so
//! memory stays proportional to a single sub-interval regardless of the
//! total span, and stopping early has no side effects. They are produced
//! by [`Interval::split`](crate::Interval::split) and
//! [`Interval::points`](crate::Interval::points), which validate the step
//! before the first element is ever computed.

use crate::interval::Interval;
use crate::point::TimePoint;
use crate::span::Span;

/// Forward tiling of `[start, end)` with sub-intervals of a fixed span.
///
/// The last piece is truncated to the remaining length, so the pieces are
/// contiguous, non-overlapping, and merge back to the original interval.
/// Every interval yields at least one piece: a zero-length interval
/// produces a single zero-length piece equal to itself.
#[derive(Debug, Clone, Copy)]
pub struct Split<T: TimePoint> {
    cursor: T,
    end: T,
    step: Span,
    done: bool,
}

impl<T: TimePoint> Split<T> {
    pub(crate) fn new(start: T, end: T, step: Span) -> Self {
        Self {
            cursor: start,
            end,
            step,
            done: false,
        }
    }
}

impl<T: TimePoint> Iterator for Split<T> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let advanced = self.cursor.add_span(&self.step);
        let stop = if advanced < self.end {
            advanced
        } else {
            self.end
        };
        let piece = Interval::from_ordered(self.cursor, stop);
        self.cursor = stop;
        self.done = stop >= self.end;
        Some(piece)
    }
}

/// Forward stepping of instants from `start` towards the excluded `end`.
#[derive(Debug, Clone, Copy)]
pub struct Points<T: TimePoint> {
    cursor: T,
    end: T,
    step: Span,
}

impl<T: TimePoint> Points<T> {
    pub(crate) fn new(first: T, end: T, step: Span) -> Self {
        Self {
            cursor: first,
            end,
            step,
        }
    }
}

impl<T: TimePoint> Iterator for Points<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        let point = self.cursor;
        self.cursor = self.cursor.add_span(&self.step);
        Some(point)
    }
}
