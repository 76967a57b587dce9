//! Numeric range filters encoded as `"min-max"`, `"min+"` or a bare number

use std::fmt;
use thiserror::Error;

/// Why a range string was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("empty range")]
    Empty,

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("negative bound: {0}")]
    Negative(f64),

    #[error("lower bound {min} exceeds upper bound {max}")]
    Inverted { min: f64, max: f64 },

    #[error("a bare number is not accepted here")]
    BareNumber,
}

/// How a bare number without `-` or `+` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BareNumber {
    /// `"n"` means `≤ n`
    UpperBound,
    /// `"n"` means exactly `n`
    Exact,
    Reject,
}

/// Inclusive numeric interval; a missing bound is unbounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub const fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub const fn at_least(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    pub const fn at_most(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Parse `"min-max"` or `"min+"`; bare numbers are rejected
    pub fn parse(raw: &str) -> Result<Self, RangeError> {
        Self::parse_with(raw, BareNumber::Reject)
    }

    /// Parse a range where a bare number `"n"` means `≤ n`
    pub fn parse_upper_bound(raw: &str) -> Result<Self, RangeError> {
        Self::parse_with(raw, BareNumber::UpperBound)
    }

    pub fn parse_with(raw: &str, bare: BareNumber) -> Result<Self, RangeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(RangeError::Empty);
        }

        if let Some(min) = raw.strip_suffix('+') {
            return Ok(Self::at_least(parse_bound(min)?));
        }

        if let Some((min, max)) = raw.split_once('-') {
            let min = parse_bound(min)?;
            let max = parse_bound(max)?;
            if min > max {
                return Err(RangeError::Inverted { min, max });
            }
            return Ok(Self::between(min, max));
        }

        let value = parse_bound(raw)?;
        match bare {
            BareNumber::UpperBound => Ok(Self::at_most(value)),
            BareNumber::Exact => Ok(Self::between(value, value)),
            BareNumber::Reject => Err(RangeError::BareNumber),
        }
    }
}

fn parse_bound(part: &str) -> Result<f64, RangeError> {
    let part = part.trim();
    if part.is_empty() {
        return Err(RangeError::Empty);
    }
    let value: f64 = part
        .parse()
        .map_err(|_| RangeError::NotANumber(part.to_string()))?;
    if !value.is_finite() {
        return Err(RangeError::NotANumber(part.to_string()));
    }
    if value < 0.0 {
        return Err(RangeError::Negative(value));
    }
    Ok(value)
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{min}-{max}"),
            (Some(min), None) => write!(f, "{min}+"),
            (None, Some(max)) => write!(f, "{max}"),
            (None, None) => write!(f, "any"),
        }
    }
}

/// A predefined range offered as a filter chip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub label: &'static str,
    pub range: NumericRange,
}

impl Bucket {
    pub const fn new(label: &'static str, range: NumericRange) -> Self {
        Self { label, range }
    }
}

/// Reference to one bucket of a fixed table, ordered by table position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketFacet {
    pub position: usize,
    pub label: &'static str,
}

impl fmt::Display for BucketFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Buckets of `table` that would retain `value` if selected
pub fn buckets_containing(table: &'static [Bucket], value: f64) -> Vec<BucketFacet> {
    table
        .iter()
        .enumerate()
        .filter(|(_, bucket)| bucket.range.contains(value))
        .map(|(position, bucket)| BucketFacet { position, label: bucket.label })
        .collect()
}

/// Range behind a facet produced from `table`
pub fn bucket_range(table: &'static [Bucket], facet: &BucketFacet) -> Option<NumericRange> {
    table.get(facet.position).map(|bucket| bucket.range)
}

pub const PRICE_BUCKETS: &[Bucket] = &[
    Bucket::new("0-5", NumericRange::between(0.0, 5.0)),
    Bucket::new("5-10", NumericRange::between(5.0, 10.0)),
    Bucket::new("10-20", NumericRange::between(10.0, 20.0)),
    Bucket::new("20+", NumericRange::at_least(20.0)),
];

pub const COOKING_TIME_BUCKETS: &[Bucket] = &[
    Bucket::new("0-15", NumericRange::between(0.0, 15.0)),
    Bucket::new("15-30", NumericRange::between(15.0, 30.0)),
    Bucket::new("30-60", NumericRange::between(30.0, 60.0)),
    Bucket::new("60-120", NumericRange::between(60.0, 120.0)),
    Bucket::new("120+", NumericRange::at_least(120.0)),
];

pub const DISTANCE_BUCKETS: &[Bucket] = &[
    Bucket::new("1", NumericRange::at_most(1.0)),
    Bucket::new("2", NumericRange::at_most(2.0)),
    Bucket::new("5", NumericRange::at_most(5.0)),
    Bucket::new("10", NumericRange::at_most(10.0)),
];

pub const SERVINGS_BUCKETS: &[Bucket] = &[
    Bucket::new("1-2", NumericRange::between(1.0, 2.0)),
    Bucket::new("3-4", NumericRange::between(3.0, 4.0)),
    Bucket::new("5-6", NumericRange::between(5.0, 6.0)),
    Bucket::new("7+", NumericRange::at_least(7.0)),
];
