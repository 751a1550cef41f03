use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Empty key in --set value '{0}'.")]
    EmptyKey(String),

    #[error("Invalid {expected} value for {key}: '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Splits `key=value` at the first `=`, trimming whitespace around both halves.
pub fn parse_set_value(kv_pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = kv_pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(kv_pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(kv_pair.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: "integer",
    })
}

/// Parses a comma-separated list such as `64,34,25` (brackets optional).
pub fn parse_number_list(key: &str, value: &str) -> Result<Vec<i64>, ParseError> {
    let inner = value.trim_start_matches('[').trim_end_matches(']').trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|item| {
            item.trim().parse().map_err(|_| ParseError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                expected: "integer list",
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_splits_at_first_equals() {
        assert_eq!(
            parse_set_value("tour.guestbook=a=b.json"),
            Ok(("tour.guestbook", "a=b.json"))
        );
        assert_eq!(parse_set_value(" primes.count = 20 "), Ok(("primes.count", "20")));
    }

    #[test]
    fn set_value_without_separator_fails() {
        assert_eq!(
            parse_set_value("primes.count"),
            Err(ParseError::MissingSeparator("primes.count".to_string()))
        );
        assert_eq!(
            parse_set_value("=5"),
            Err(ParseError::EmptyKey("=5".to_string()))
        );
    }

    #[test]
    fn numbers_are_parsed_or_reported() {
        assert_eq!(parse_number::<usize>("primes.count", "42"), Ok(42));
        let err = parse_number::<usize>("primes.count", "-1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid integer value for primes.count: '-1'"
        );
    }

    #[test]
    fn number_lists_accept_optional_brackets() {
        assert_eq!(
            parse_number_list("exhibits.quicksort-input", "[3, -1, 2]"),
            Ok(vec![3, -1, 2])
        );
        assert_eq!(parse_number_list("k", "5,4"), Ok(vec![5, 4]));
        assert_eq!(parse_number_list("k", "[]"), Ok(vec![]));
        assert!(parse_number_list("k", "1,x").is_err());
    }
}
