// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-unit factories.
//!
//! Each factory computes the canonical `[unit-start, next-unit-start)`
//! pair for a calendar unit, in an explicit fixed-offset calendar context.
//! Callers that hold a reference instant stay in its context by passing
//! `*instant.offset()`; `Utc.fix()` gives the default context.
//!
//! Index domains follow the civil calendar: months `1..=12`, quarters
//! `1..=4`, semesters `1..=2`, ISO weeks `1..=53` (week 53 only in long
//! ISO years). Out-of-domain indices are rejected with
//! [`PeriodError::IndexOutOfRange`].

use crate::error::PeriodError;
use crate::interval::{Interval, Period};
use crate::point::CivilPoint;
use crate::span::Span;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Weekday};

/// Local midnight of `date` in the given offset context.
fn midnight(date: NaiveDate, offset: FixedOffset) -> Result<DateTime<FixedOffset>, PeriodError> {
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(offset)
        .single()
        .ok_or(PeriodError::DateOutOfRange)
}

/// First instant of the month `(year, month)` in the offset context.
fn month_start(
    year: i32,
    month: u32,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, PeriodError> {
    let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::DateOutOfRange)?;
    midnight(date, offset)
}

/// The month `months` whole months after `(year, month)`, normalised.
fn month_after(year: i32, month: u32, months: u32) -> Result<(i32, u32), PeriodError> {
    let zero_based = month - 1 + months;
    let year = year
        .checked_add((zero_based / 12) as i32)
        .ok_or(PeriodError::DateOutOfRange)?;
    Ok((year, zero_based % 12 + 1))
}

fn check_index(unit: &'static str, index: u32, min: u32, max: u32) -> Result<(), PeriodError> {
    if (min..=max).contains(&index) {
        Ok(())
    } else {
        Err(PeriodError::IndexOutOfRange {
            unit,
            index,
            min,
            max,
        })
    }
}

/// A run of whole months starting at `(year, month)`, as a period.
fn month_run(
    year: i32,
    month: u32,
    months: u32,
    offset: FixedOffset,
) -> Result<Period, PeriodError> {
    let start = month_start(year, month, offset)?;
    let (next_year, next_month) = month_after(year, month, months)?;
    let end = month_start(next_year, next_month, offset)?;
    Period::new(start, end)
}

impl Period {
    /// The calendar year `[Jan 1, next Jan 1)` in the offset context.
    pub fn from_year(year: i32, offset: FixedOffset) -> Result<Self, PeriodError> {
        month_run(year, 1, 12, offset)
    }

    /// One of the two six-month halves of `year`; `index` is `1` or `2`.
    pub fn from_semester(year: i32, index: u32, offset: FixedOffset) -> Result<Self, PeriodError> {
        check_index("semester", index, 1, 2)?;
        month_run(year, (index - 1) * 6 + 1, 6, offset)
    }

    /// One of the four quarters of `year`; `index` is `1..=4`.
    pub fn from_quarter(year: i32, index: u32, offset: FixedOffset) -> Result<Self, PeriodError> {
        check_index("quarter", index, 1, 4)?;
        month_run(year, (index - 1) * 3 + 1, 3, offset)
    }

    /// The calendar month `[month start, next month start)`; `month` is
    /// `1..=12`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Offset, Utc};
    /// use tempora::Period;
    ///
    /// let march = Period::from_month(2014, 3, Utc.fix()).unwrap();
    /// assert_eq!(march.to_string(), "[2014-03-01T00:00:00Z, 2014-04-01T00:00:00Z)");
    /// ```
    pub fn from_month(year: i32, month: u32, offset: FixedOffset) -> Result<Self, PeriodError> {
        check_index("month", month, 1, 12)?;
        month_run(year, month, 1, offset)
    }

    /// The ISO-8601 week `week` of ISO year `year`, Monday to Monday;
    /// `week` is `1..=53` and week 53 exists only in long ISO years.
    pub fn from_iso_week(year: i32, week: u32, offset: FixedOffset) -> Result<Self, PeriodError> {
        check_index("week", week, 1, 53)?;
        let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or(
            PeriodError::IndexOutOfRange {
                unit: "week",
                index: week,
                min: 1,
                max: 53,
            },
        )?;
        let next = monday
            .checked_add_signed(Duration::days(7))
            .ok_or(PeriodError::DateOutOfRange)?;
        Period::new(midnight(monday, offset)?, midnight(next, offset)?)
    }
}

impl<T: CivilPoint> Interval<T> {
    /// The civil day containing `instant`: `[local midnight, +24h)`.
    ///
    /// The caller's concrete instant representation and display offset are
    /// preserved in both endpoints, so custom [`CivilPoint`]
    /// implementations round-trip unchanged.
    pub fn day_of(instant: T) -> Self {
        let start = instant.start_of_day();
        let end = start.add_span(&Span::days(1.0));
        Self::from_ordered(start, end)
    }
}
