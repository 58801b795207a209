//! Year/month partitioning that fixes the output order.
//!
//! Years are ordered by descending string value, which is only correct while
//! every year has the same number of digits. Within a year, records without a
//! month come first, then December down to January. Records sharing a bucket
//! keep their input order.

use crate::record::Record;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Full English name or three-letter abbreviation, case-insensitive.
    /// A trailing period is accepted (`Sep.`).
    pub fn from_name(raw: &str) -> Option<Month> {
        let raw = raw.trim().trim_end_matches('.').to_lowercase();
        Month::ALL.into_iter().find(|month| {
            let name = month.name().to_lowercase();
            raw == name || raw == name[..3]
        })
    }
}

/// Month partition a record falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthBucket {
    /// No `month` field
    None,
    Month(Month),
    /// A `month` value that names no month; sorted after January
    Unrecognized,
}

impl MonthBucket {
    pub fn of(month: Option<&str>) -> Self {
        match month {
            None => MonthBucket::None,
            Some(raw) => Month::from_name(raw)
                .map(MonthBucket::Month)
                .unwrap_or(MonthBucket::Unrecognized),
        }
    }

    /// Position in the output order, lowest first
    pub fn priority(self) -> u8 {
        match self {
            MonthBucket::None => 0,
            MonthBucket::Month(month) => 13 - month as u8,
            MonthBucket::Unrecognized => 13,
        }
    }
}

/// Records sharing one `year` value, already in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup<'a> {
    pub year: &'a str,
    pub records: Vec<Record<'a>>,
}

/// Partition records by exact `year` and order groups and members for output.
pub fn group_records(records: Vec<Record<'_>>) -> Vec<YearGroup<'_>> {
    let mut by_year: BTreeMap<&str, Vec<Record<'_>>> = BTreeMap::new();
    for record in records {
        if MonthBucket::of(record.month) == MonthBucket::Unrecognized {
            tracing::warn!(
                pubid = record.pubid,
                month = record.month.unwrap_or_default(),
                "unrecognized month, placing entry at the end of its year"
            );
        }
        by_year.entry(record.year).or_default().push(record);
    }

    by_year
        .into_iter()
        .rev()
        .map(|(year, mut records)| {
            records.sort_by_key(|record| MonthBucket::of(record.month).priority());
            YearGroup { year, records }
        })
        .collect()
}
