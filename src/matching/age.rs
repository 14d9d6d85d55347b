//! Free-form catalog age specs ("5-7", "5 and 7", "5,6,7")
//!
//! Known limitation: there is no unit handling. "18-24 months" reads as the
//! ages 18 and 24, not as toddlers.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

/// Every age a topic is valid for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeSet {
    /// Two bounds, inclusive. Kept as a range so wide specs never allocate.
    Range(RangeInclusive<u32>),
    /// Standalone ages picked out of the text
    Set(BTreeSet<u32>),
}

impl AgeSet {
    pub fn contains(&self, age: &u32) -> bool {
        match self {
            AgeSet::Range(range) => range.contains(age),
            AgeSet::Set(ages) => ages.contains(age),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AgeSet::Range(range) => range.is_empty(),
            AgeSet::Set(ages) => ages.is_empty(),
        }
    }
}

impl fmt::Display for AgeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeSet::Range(range) if range.start() == range.end() => write!(f, "{}", range.start()),
            AgeSet::Range(range) => write!(f, "{}-{}", range.start(), range.end()),
            AgeSet::Set(ages) => {
                let ages: Vec<String> = ages.iter().map(u32::to_string).collect();
                write!(f, "{}", ages.join(","))
            }
        }
    }
}

/// Parse an age spec into every age it covers. Never fails; junk yields an empty set.
pub fn parse_age_range(raw: &str) -> AgeSet {
    let normalized = raw.to_lowercase().replace("and", ",").replace("to", "-");

    if normalized.contains('-') {
        if let Some(range) = parse_bounds(&normalized) {
            return AgeSet::Range(range);
        }
    }

    AgeSet::Set(collect_tokens(&normalized))
}

/// Exactly two integer bounds around a single hyphen
fn parse_bounds(s: &str) -> Option<RangeInclusive<u32>> {
    let mut parts = s.split('-');
    let low = parts.next()?.trim().parse::<u32>().ok()?;
    let high = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(low..=high)
}

fn collect_tokens(s: &str) -> BTreeSet<u32> {
    s.split(|c: char| c == ',' || c == '-' || c.is_whitespace())
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ages(list: &[u32]) -> AgeSet {
        AgeSet::Set(list.iter().copied().collect())
    }

    #[test]
    fn test_hyphen_range() {
        assert_eq!(parse_age_range("5-7"), AgeSet::Range(5..=7));
        assert_eq!(parse_age_range(" 3 - 4 "), AgeSet::Range(3..=4));
        assert!(!parse_age_range("5-7").contains(&4));
        assert!(parse_age_range("5-7").contains(&6));
    }

    #[test]
    fn test_and_list() {
        assert_eq!(parse_age_range("5 and 7"), ages(&[5, 7]));
        assert_eq!(parse_age_range("5 AND 7"), ages(&[5, 7]));
        assert!(!parse_age_range("5 and 7").contains(&6));
    }

    #[test]
    fn test_to_range() {
        assert_eq!(parse_age_range("3 to 5"), AgeSet::Range(3..=5));
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(parse_age_range("5,6,7"), ages(&[5, 6, 7]));
        assert_eq!(parse_age_range("5, 9"), ages(&[5, 9]));
    }

    #[test]
    fn test_single_age() {
        assert_eq!(parse_age_range("6"), ages(&[6]));
    }

    #[test]
    fn test_unparseable_is_empty() {
        assert!(parse_age_range("abc").is_empty());
        assert!(parse_age_range("").is_empty());
        assert!(parse_age_range("all ages").is_empty());
    }

    #[test]
    fn test_hyphen_fallback_collects_tokens() {
        // Three bounds: not a range, so standalone integers are kept
        assert_eq!(parse_age_range("4-5-6"), ages(&[4, 5, 6]));
        assert_eq!(parse_age_range("5-x"), ages(&[5]));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let reversed = parse_age_range("7-5");
        assert!(reversed.is_empty());
        assert!(!reversed.contains(&6));
    }

    #[test]
    fn test_months_are_read_as_years() {
        // No unit support: the numbers are taken at face value
        assert_eq!(parse_age_range("18-24 months"), ages(&[18, 24]));
    }

    #[test]
    fn test_wide_range_keeps_every_age() {
        let wide = parse_age_range("0-150");
        assert!(wide.contains(&7));
        assert!(wide.contains(&150));
        assert!(!wide.contains(&151));
        assert!(parse_age_range("1-4000000000").contains(&3_999_999_999));
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_age_range("5-7").to_string(), "5-7");
        assert_eq!(parse_age_range("4-4").to_string(), "4");
        assert_eq!(parse_age_range("5 and 7").to_string(), "5,7");
    }
}
