//! Parsing utilities for range and index-list strings
//!
//! Pure parsing functions used by hosts and the command line to build
//! selections from text.

use alloc::vec::Vec;

use crate::error::ParseError;
use crate::index::IndexList;

/// Parse an inclusive range in the format "start:end" or "start-end"
///
/// Returns `(start, end)`, both inclusive, as taken by
/// [`SelectionConfig::with_row_range`](crate::SelectionConfig::with_row_range).
pub fn parse_range(range_str: &str) -> Result<(i64, i64), ParseError> {
    let range_str = range_str.trim();
    if range_str.is_empty() {
        return Err(ParseError::Empty);
    }

    let split = range_str
        .split_once(':')
        .or_else(|| range_str.split_once('-'))
        .ok_or(ParseError::MissingSeparator)?;

    let start = parse_index(split.0)?;
    let end = parse_index(split.1)?;
    if start > end {
        return Err(ParseError::Reversed);
    }

    Ok((start, end))
}

/// Largest number of indices a parsed index list may expand to
pub const MAX_EXPANDED_INDICES: usize = 1 << 24;

/// Parse a comma separated index list such as "0,2,2,5"
///
/// Parts written as ranges ("1:3") expand to every index they cover.
/// Order and duplicates are kept.
/// The expanded list may hold at most [`MAX_EXPANDED_INDICES`] indices.
pub fn parse_index_list(list_str: &str) -> Result<IndexList, ParseError> {
    let list_str = list_str.trim();
    if list_str.is_empty() {
        return Ok(IndexList::new());
    }

    let mut indices = Vec::new();
    for part in list_str.split(',') {
        let part = part.trim();
        if part.contains(':') || part.contains('-') {
            let (start, end) = parse_range(part)?;
            // start <= end, both non-negative
            let count = (end - start) as u64 + 1;
            if count > (MAX_EXPANDED_INDICES - indices.len()) as u64 {
                return Err(ParseError::TooManyIndices {
                    max: MAX_EXPANDED_INDICES,
                });
            }
            indices.extend(start..=end);
        } else {
            if indices.len() == MAX_EXPANDED_INDICES {
                return Err(ParseError::TooManyIndices {
                    max: MAX_EXPANDED_INDICES,
                });
            }
            indices.push(parse_index(part)?);
        }
    }

    Ok(IndexList::from(indices))
}

/// Parse a non-negative index
fn parse_index(s: &str) -> Result<i64, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut result: i64 = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(ParseError::InvalidNumber);
        }
        let digit = i64::from(byte - b'0');
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseError::Overflow)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        // Valid colon format
        assert_eq!(parse_range("0:10"), Ok((0, 10)));
        assert_eq!(parse_range(" 5:5 "), Ok((5, 5)));

        // Valid dash format
        assert_eq!(parse_range("1-2"), Ok((1, 2)));

        // Invalid cases
        assert_eq!(parse_range(""), Err(ParseError::Empty));
        assert_eq!(parse_range("10:5"), Err(ParseError::Reversed));
        assert_eq!(parse_range("abc:def"), Err(ParseError::InvalidNumber));
        assert_eq!(parse_range("10"), Err(ParseError::MissingSeparator));
        assert_eq!(parse_range("10:"), Err(ParseError::Empty));
        assert_eq!(parse_range(":10"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Ok(0));
        assert_eq!(parse_index("123"), Ok(123));

        assert_eq!(parse_index(""), Err(ParseError::Empty));
        assert_eq!(parse_index("12a"), Err(ParseError::InvalidNumber));
        assert_eq!(parse_index("+4"), Err(ParseError::InvalidNumber));
        assert_eq!(
            parse_index("99999999999999999999"),
            Err(ParseError::Overflow)
        );
    }

    #[test]
    fn test_parse_index_list() {
        assert_eq!(parse_index_list("0,2,2,5").unwrap().as_slice(), &[0, 2, 2, 5]);
        assert_eq!(parse_index_list("3, 1:2").unwrap().as_slice(), &[3, 1, 2]);
        assert!(parse_index_list("  ").unwrap().is_empty());
        assert_eq!(parse_index_list("1,,2"), Err(ParseError::Empty));
        assert_eq!(parse_index_list("1,x"), Err(ParseError::InvalidNumber));
    }

    #[test]
    fn test_index_list_expansion_is_capped() {
        let err = parse_index_list("0:99999999999").unwrap_err();
        assert_eq!(
            err,
            ParseError::TooManyIndices {
                max: MAX_EXPANDED_INDICES
            }
        );
        assert!(parse_index_list("1,2,0:99999999999").is_err());
        assert_eq!(parse_index_list("7,0:2").unwrap().as_slice(), &[7, 0, 1, 2]);
    }
}
