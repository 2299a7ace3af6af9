// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering,
          fmt::{Display, Formatter, Result}};

/// The value a column accessor reads out of a row. This is what the default filter
/// searches, what the default sort compares, and what the presentation layer prints.
///
/// [`CellValue::Empty`] stands in for a missing field, a null, or an empty string.
/// Empty cells always sort last, regardless of sort direction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// `true` for [`CellValue::Empty`], for empty text, and for a `NaN` float, which
    /// has no place among the numbers and so sorts with the empties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.is_empty(),
            CellValue::Float(it) => it.is_nan(),
            _ => false,
        }
    }

    /// Lowercase stringification used by the default substring filter.
    #[must_use]
    pub fn search_text(&self) -> String { self.to_string().to_lowercase() }

    /// Orders two non-empty values. This is a total order, so it is safe to hand to
    /// any sort.
    ///
    /// - Text is compared case folded first (so `"alpha" < "Beta"`), with the raw text
    ///   as a tie break.
    /// - Integers and floats compare exactly by numeric value, with no rounding through
    ///   `f64`. `NaN` orders after every number.
    /// - Values of different kinds order by kind: bool, then numbers, then text.
    ///
    /// Callers are expected to have handled [`CellValue::is_empty`] first; see
    /// [`crate::compare_cells`].
    #[must_use]
    pub fn compare_present(&self, other: &Self) -> Ordering {
        use CellValue::{Bool, Float, Integer, Text};

        match (self, other) {
            (Text(lhs), Text(rhs)) => lhs
                .to_lowercase()
                .cmp(&rhs.to_lowercase())
                .then_with(|| lhs.cmp(rhs)),
            (Bool(lhs), Bool(rhs)) => lhs.cmp(rhs),
            (Integer(lhs), Integer(rhs)) => lhs.cmp(rhs),
            (Float(lhs), Float(rhs)) => compare_floats(*lhs, *rhs),
            (Integer(lhs), Float(rhs)) => compare_integer_to_float(*lhs, *rhs),
            (Float(lhs), Integer(rhs)) => compare_integer_to_float(*rhs, *lhs).reverse(),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Float(_) => 2,
            CellValue::Text(_) => 3,
        }
    }
}

mod constants {
    /// 2^63, the first float past `i64::MAX`. `-2^63` is exactly `i64::MIN`.
    pub const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
}

/// `NaN` equals itself and goes after every number. `-0.0` equals `0.0`.
fn compare_floats(lhs: f64, rhs: f64) -> Ordering {
    match (lhs.is_nan(), rhs.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison: the float's integer part is compared as an `i64`, then its
/// fraction breaks the tie. Casting the integer to `f64` instead would make
/// `2^53` and `2^53 + 1` both equal to `2^53` as a float.
#[allow(clippy::cast_possible_truncation)]
fn compare_integer_to_float(lhs: i64, rhs: f64) -> Ordering {
    if rhs.is_nan() || rhs >= constants::I64_BOUND {
        return Ordering::Less;
    }
    if rhs < -constants::I64_BOUND {
        return Ordering::Greater;
    }
    let whole = rhs.trunc();
    // In range, so the cast is exact.
    lhs.cmp(&(whole as i64))
        .then_with(|| rhs.partial_cmp(&whole).map_or(Ordering::Equal, Ordering::reverse))
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(it) => write!(f, "{it}"),
            CellValue::Integer(it) => write!(f, "{it}"),
            CellValue::Float(it) => write!(f, "{it}"),
            CellValue::Text(it) => write!(f, "{it}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(it: &str) -> Self { Self::Text(it.to_owned()) }
}

impl From<String> for CellValue {
    fn from(it: String) -> Self { Self::Text(it) }
}

impl From<&String> for CellValue {
    fn from(it: &String) -> Self { Self::Text(it.clone()) }
}

impl From<bool> for CellValue {
    fn from(it: bool) -> Self { Self::Bool(it) }
}

impl From<i64> for CellValue {
    fn from(it: i64) -> Self { Self::Integer(it) }
}

impl From<i32> for CellValue {
    fn from(it: i32) -> Self { Self::Integer(i64::from(it)) }
}

impl From<u32> for CellValue {
    fn from(it: u32) -> Self { Self::Integer(i64::from(it)) }
}

impl From<u64> for CellValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(it: u64) -> Self {
        i64::try_from(it).map_or(Self::Float(it as f64), Self::Integer)
    }
}

impl From<f64> for CellValue {
    fn from(it: f64) -> Self { Self::Float(it) }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(it: Option<V>) -> Self { it.map_or(CellValue::Empty, Into::into) }
}
