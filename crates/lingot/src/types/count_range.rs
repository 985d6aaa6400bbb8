use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use winnow::ascii::Caseless;
use winnow::combinator::{fail, opt};
use winnow::prelude::*;
use winnow::token::{literal, take_while};

/// An inclusive range of counts a message applies to.
///
/// Unbounded ends are stored as `i64::MIN` / `i64::MAX` and written as
/// `-infinity` / `infinity`. The range is not normalized: a range whose start
/// is greater than its end is valid and contains nothing.
///
/// # Example
///
/// ```
/// use lingot::CountRange;
///
/// let few = CountRange::parse("2..10").unwrap();
/// assert!(few.contains(5));
/// assert!(!few.contains(11));
///
/// let many = CountRange::parse("11..infinity").unwrap();
/// assert!(many.contains(1_000_000));
///
/// assert_eq!(CountRange::parse("1_000"), Some(CountRange::single(1000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountRange {
    start: i64,
    end: i64,
}

/// Returned when text is neither an integer nor a `start..end` range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid count range '{0}'")]
pub struct InvalidCountRange(pub String);

impl CountRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub const fn single(count: i64) -> Self {
        Self::new(count, count)
    }

    /// `[count, infinity]`
    pub const fn at_least(count: i64) -> Self {
        Self::new(count, i64::MAX)
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn end(&self) -> i64 {
        self.end
    }

    pub const fn contains(&self, count: i64) -> bool {
        self.start <= count && count <= self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Parse a bare integer (`5`, `-3`, `1_000`) or a range literal
    /// (`2..10`, `11..infinity`, `-infinity..0`).
    ///
    /// `_` digit separators are stripped. An empty endpoint (`..5`, `3..`)
    /// is unbounded on that side. Endpoints that overflow `i64` make the
    /// whole literal invalid.
    pub fn parse(text: &str) -> Option<CountRange> {
        if let Some(count) = parse_integer(text) {
            return Some(CountRange::single(count));
        }

        let mut remaining = text;
        let (start, end) = range_literal(&mut remaining).ok()?;
        if !remaining.is_empty() {
            return None;
        }

        Some(CountRange::new(
            start.resolve(i64::MIN)?,
            end.resolve(i64::MAX)?,
        ))
    }
}

impl FromStr for CountRange {
    type Err = InvalidCountRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountRange::parse(s.trim()).ok_or_else(|| InvalidCountRange(s.to_string()))
    }
}

impl TryFrom<String> for CountRange {
    type Error = InvalidCountRange;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountRange> for String {
    fn from(range: CountRange) -> Self {
        range.to_string()
    }
}

impl Display for CountRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_bound(f, self.start)?;
        if self.start != self.end {
            f.write_str("..")?;
            write_bound(f, self.end)?;
        }
        Ok(())
    }
}

fn write_bound(f: &mut Formatter<'_>, bound: i64) -> FmtResult {
    match bound {
        i64::MIN => f.write_str("-infinity"),
        i64::MAX => f.write_str("infinity"),
        n => write!(f, "{n}"),
    }
}

/// One side of a range literal before it is mapped onto `i64`.
#[derive(Debug, Clone, PartialEq)]
enum Bound {
    Infinity,
    NegativeInfinity,
    Open,
    Digits { negative: bool, digits: String },
}

impl Bound {
    /// Map onto `i64`, using `open` for an empty endpoint.
    fn resolve(self, open: i64) -> Option<i64> {
        match self {
            Bound::Infinity => Some(i64::MAX),
            Bound::NegativeInfinity => Some(i64::MIN),
            Bound::Open => Some(open),
            Bound::Digits { negative, digits } => {
                let signed = if negative {
                    format!("-{digits}")
                } else {
                    digits
                };
                signed.parse().ok()
            }
        }
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let stripped: String = text.chars().filter(|&c| c != '_').collect();
    if stripped.is_empty() {
        return None;
    }
    stripped.parse().ok()
}

/// Parse `bound..bound`.
fn range_literal(input: &mut &str) -> ModalResult<(Bound, Bound)> {
    let start = bound(input)?;
    "..".parse_next(input)?;
    let end = bound(input)?;
    Ok((start, end))
}

/// Parse `-?infinity` or `-?[0-9_]*`.
fn bound(input: &mut &str) -> ModalResult<Bound> {
    let negative = opt('-').parse_next(input)?.is_some();

    if opt(literal(Caseless("infinity"))).parse_next(input)?.is_some() {
        return Ok(if negative {
            Bound::NegativeInfinity
        } else {
            Bound::Infinity
        });
    }

    let raw: &str = take_while(0.., |c: char| c.is_ascii_digit() || c == '_').parse_next(input)?;
    let digits: String = raw.chars().filter(|&c| c != '_').collect();

    if digits.is_empty() {
        if negative {
            // A lone sign is not an endpoint.
            return fail.parse_next(input);
        }
        return Ok(Bound::Open);
    }

    Ok(Bound::Digits { negative, digits })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_and_signed_integers() {
        assert_eq!(CountRange::parse("0"), Some(CountRange::single(0)));
        assert_eq!(CountRange::parse("-3"), Some(CountRange::single(-3)));
        assert_eq!(CountRange::parse("10_000"), Some(CountRange::single(10_000)));
    }

    #[test]
    fn parses_infinite_bounds_case_insensitively() {
        assert_eq!(
            CountRange::parse("-Infinity..INFINITY"),
            Some(CountRange::new(i64::MIN, i64::MAX))
        );
        assert_eq!(CountRange::parse("11..infinity"), Some(CountRange::at_least(11)));
    }

    #[test]
    fn empty_endpoints_are_unbounded() {
        assert_eq!(CountRange::parse("..5"), Some(CountRange::new(i64::MIN, 5)));
        assert_eq!(CountRange::parse("3.."), Some(CountRange::at_least(3)));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(CountRange::parse(""), None);
        assert_eq!(CountRange::parse("_"), None);
        assert_eq!(CountRange::parse("-..3"), None);
        assert_eq!(CountRange::parse("1...3"), None);
        assert_eq!(CountRange::parse("one"), None);
        assert_eq!(CountRange::parse("99999999999999999999..1"), None);
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = CountRange::parse("10..2").unwrap();
        assert!(range.is_empty());
        assert!(!range.contains(5));
        assert!(!range.contains(2));
    }

    #[test]
    fn display_uses_range_syntax() {
        assert_eq!(CountRange::new(2, 10).to_string(), "2..10");
        assert_eq!(CountRange::at_least(11).to_string(), "11..infinity");
        assert_eq!(CountRange::single(1).to_string(), "1");
        assert_eq!(
            CountRange::new(i64::MIN, 0).to_string(),
            "-infinity..0"
        );
    }
}
