// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible period operation.

use thiserror::Error;

/// Errors reported by interval construction, mutation, and set operations.
///
/// Every operation in this crate is all-or-nothing: it either returns a
/// valid [`Interval`](crate::Interval) (or scalar result) or one of these
/// errors. No operation silently clamps or substitutes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// A constructed or mutated interval would have `start > end`.
    #[error("interval start is after its end")]
    StartAfterEnd,

    /// A span supplied to a duration-anchored operation resolves backward
    /// where a forward span is required.
    #[error("span is inverted where a forward span is required")]
    InvertedSpan,

    /// A calendar-unit index (month, quarter, semester, ISO week) is
    /// outside its valid domain.
    #[error("{unit} index {index} is outside {min}..={max}")]
    IndexOutOfRange {
        unit: &'static str,
        index: u32,
        min: u32,
        max: u32,
    },

    /// The requested calendar date cannot be represented by the underlying
    /// time library.
    #[error("date is outside the representable range")]
    DateOutOfRange,

    /// `intersect` or `diff` was invoked on periods that do not overlap.
    #[error("periods do not overlap")]
    Disjoint,

    /// `gap` was invoked on periods that overlap.
    #[error("periods overlap where disjoint operands are required")]
    Overlapping,

    /// A decomposition step does not strictly advance.
    #[error("step span does not advance")]
    ZeroStep,
}
