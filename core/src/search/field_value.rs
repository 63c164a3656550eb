use {
    crate::search::CaseFolding,
    std::{borrow::Cow, cmp::Ordering},
};

/// A field value prepared for comparison.
///
/// Raw field values are always strings; fields that normally hold integers are converted to
/// [FieldValue::Int] when the values on both sides parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue<'a> {
    /// Represents a string value.
    String(Cow<'a, str>),
    /// Represents an integer value.
    Int(i32),
}

impl<'a> FieldValue<'a> {
    /// Compares two values.
    ///
    /// Integers compare numerically. A string compared against an integer is parsed first; if it is
    /// not an integer, both sides are compared as strings. Strings are case-folded and then compared
    /// by code point.
    pub fn compare(&self, other: &FieldValue<'_>, case_folding: CaseFolding) -> Ordering {
        match (self, other) {
            (Self::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (Self::String(a), FieldValue::Int(b)) => match parse_int(a) {
                Some(a) => a.cmp(b),
                None => case_folding.fold(a).as_ref().cmp(b.to_string().as_str()),
            },
            (Self::Int(a), FieldValue::String(b)) => match parse_int(b) {
                Some(b) => a.cmp(&b),
                None => a.to_string().as_str().cmp(case_folding.fold(b).as_ref()),
            },
            (Self::String(a), FieldValue::String(b)) => case_folding.fold(a).cmp(&case_folding.fold(b)),
        }
    }
}

/// The zero of every run of ten consecutive decimal digits (Unicode category Nd) recognized by
/// [parse_int].
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06f0, 0x07c0, 0x0966, 0x09e6, 0x0a66, 0x0ae6, 0x0b66, 0x0be6, 0x0c66, 0x0ce6, 0x0d66,
    0x0de6, 0x0e50, 0x0ed0, 0x0f20, 0x1040, 0x1090, 0x17e0, 0x1810, 0x1946, 0x19d0, 0x1a80, 0x1a90, 0x1b50,
    0x1bb0, 0x1c40, 0x1c50, 0xa620, 0xa8d0, 0xa900, 0xa9d0, 0xa9f0, 0xaa50, 0xabf0, 0xff10, 0x104a0, 0x11066,
    0x1d7ce, 0x1d7d8, 0x1d7e2, 0x1d7ec, 0x1d7f6, 0x1e950,
];

fn decimal_digit(c: char) -> Option<u32> {
    let c = c as u32;
    DECIMAL_DIGIT_ZEROS.iter().find(|zero| (**zero..**zero + 10).contains(&c)).map(|zero| c - zero)
}

/// Parses a signed 32-bit integer: an optional `+` or `-` followed by one or more decimal digits from
/// any script (`"١٢"` is 12). Anything else, including surrounding whitespace or an out-of-range
/// value, yields `None`.
pub fn parse_int(s: &str) -> Option<i32> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for c in digits.chars() {
        value = value.checked_mul(10)?.checked_add(decimal_digit(c)? as i64)?;
        if value > 1 << 31 {
            return None;
        }
    }

    i32::try_from(if negative { -value } else { value }).ok()
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::String(Cow::Borrowed(value))
    }
}

impl From<i32> for FieldValue<'static> {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}
