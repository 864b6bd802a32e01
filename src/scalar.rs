//! Scalar token coercion.
//!
//! Converts a raw value token from one line of source text into a typed
//! [`Value`], and back again for the serializer. The spellings are
//! JavaScript-flavored:
//!
//! | token                         | value                        |
//! |-------------------------------|------------------------------|
//! | `undefined`                   | [`Value::Undefined`]         |
//! | `null`                        | [`Value::Null`]              |
//! | `true` / `false`              | [`Value::Bool`]              |
//! | `NaN`                         | [`Value::NaN`]               |
//! | `Infinity`                    | [`Value::Infinity`]          |
//! | leading-numeric (`5`, `5abc`) | [`Value::Number`]            |
//! | `'text'` / `"text"`           | [`Value::String`]            |
//! | `BigInt(123)` / `BigInt('1')` | [`Value::BigInt`]            |
//!
//! The numeric rule is deliberately permissive: any token with a valid
//! numeric prefix parses as that number, trailing characters and all
//! (`"5abc"` is `5`). Switching to strict whole-token parsing would change
//! which documents are accepted, so don't.
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::scalar::{decode, encode};
//! use yamlet::Value;
//!
//! assert_eq!(decode("true").unwrap(), Value::Bool(true));
//! assert_eq!(decode("5abc").unwrap(), Value::Number(5.0));
//! assert_eq!(decode("'hi'").unwrap(), Value::String("hi".to_string()));
//! assert_eq!(encode(&Value::Bool(true), '\''), "true");
//! assert_eq!(encode(&Value::String("hi".to_string()), '\''), "'hi'");
//! ```

use crate::Value;
use num_bigint::BigInt;
use thiserror::Error;

/// A token that could not be coerced to any scalar kind.
///
/// Fatal for the line it appeared on, never for the document: the line
/// classifier demotes the line to a skip with a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No scalar spelling matched.
    #[error("unrecognized token")]
    Unrecognized,

    /// A `BigInt(...)` wrapper whose inner text is not an integer.
    #[error("invalid BigInt literal")]
    InvalidBigInt,
}

/// Decodes a raw value token into a typed [`Value`].
///
/// Keyword spellings win over everything else, then the lenient numeric
/// parse, then quoted strings, then `BigInt(...)` literals.
///
/// # Errors
///
/// [`TokenError::Unrecognized`] if nothing matched,
/// [`TokenError::InvalidBigInt`] for a malformed big-integer literal.
pub fn decode(token: &str) -> Result<Value, TokenError> {
    match token {
        "undefined" => return Ok(Value::Undefined),
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "NaN" => return Ok(Value::NaN),
        "Infinity" => return Ok(Value::Infinity),
        _ => {}
    }

    if let Some(number) = leading_number(token) {
        return Ok(Value::Number(number));
    }

    if let Some(inner) = strip_quote_pair(token) {
        return Ok(Value::String(inner.to_string()));
    }

    if let Some(inner) = token
        .strip_prefix("BigInt(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let digits = strip_quote_pair(inner).unwrap_or(inner);
        return digits
            .trim()
            .parse::<BigInt>()
            .map(Value::BigInt)
            .map_err(|_| TokenError::InvalidBigInt);
    }

    Err(TokenError::Unrecognized)
}

/// Encodes a value back into its token spelling.
///
/// `quote` is the configured string quote character. Containers have no
/// scalar spelling and fall back to their `Display` form; the serializer
/// reports a diagnostic when that happens.
#[must_use]
pub fn encode(value: &Value, quote: char) -> String {
    match value {
        Value::String(s) => format!("{quote}{s}{quote}"),
        Value::BigInt(bi) => format!("BigInt({bi})"),
        other => other.to_string(),
    }
}

/// Strips a matching pair of single or double quotes, if present.
///
/// Requires an actual pair: a lone quote character is not a quoted empty
/// string.
fn strip_quote_pair(token: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return Some(&token[1..token.len() - 1]);
        }
    }
    None
}

/// Parses the longest valid numeric prefix of `token`, permissive-float
/// style: optional sign, digits with an optional fraction, an optional
/// well-formed exponent. Trailing garbage is ignored.
///
/// Textual `Infinity`/`NaN` are handled by the keyword table before this
/// runs; this function never recognizes them (and in particular there is no
/// `-Infinity` spelling).
fn leading_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let mut saw_digit = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        saw_digit = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }

    // An exponent only counts if it is complete; "5e" is the number 5
    // followed by the letter e.
    let mut end = i;
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits_start {
            end = j;
        }
    }

    token[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tokens() {
        assert_eq!(decode("undefined").unwrap(), Value::Undefined);
        assert_eq!(decode("null").unwrap(), Value::Null);
        assert_eq!(decode("true").unwrap(), Value::Bool(true));
        assert_eq!(decode("false").unwrap(), Value::Bool(false));
        assert_eq!(decode("NaN").unwrap(), Value::NaN);
        assert_eq!(decode("Infinity").unwrap(), Value::Infinity);
    }

    #[test]
    fn test_keywords_encode_back_to_canonical_spelling() {
        for token in ["undefined", "null", "true", "false", "NaN", "Infinity"] {
            let value = decode(token).unwrap();
            assert_eq!(encode(&value, '\''), token);
        }
    }

    #[test]
    fn test_lenient_numeric_parse() {
        assert_eq!(decode("42").unwrap(), Value::Number(42.0));
        assert_eq!(decode("-3.5").unwrap(), Value::Number(-3.5));
        assert_eq!(decode("+7").unwrap(), Value::Number(7.0));
        assert_eq!(decode(".5").unwrap(), Value::Number(0.5));
        assert_eq!(decode("1e3").unwrap(), Value::Number(1000.0));
        assert_eq!(decode("1E-2").unwrap(), Value::Number(0.01));

        // numeric prefix wins, trailing garbage ignored
        assert_eq!(decode("5abc").unwrap(), Value::Number(5.0));
        assert_eq!(decode("3.5kg").unwrap(), Value::Number(3.5));
        assert_eq!(decode("5e").unwrap(), Value::Number(5.0));
        assert_eq!(decode("5e+").unwrap(), Value::Number(5.0));
    }

    #[test]
    fn test_no_negative_infinity_spelling() {
        assert_eq!(decode("-Infinity"), Err(TokenError::Unrecognized));
    }

    #[test]
    fn test_quoted_strings() {
        assert_eq!(decode("'hello'").unwrap(), Value::String("hello".into()));
        assert_eq!(decode("\"hello\"").unwrap(), Value::String("hello".into()));
        assert_eq!(decode("''").unwrap(), Value::String(String::new()));
        // quotes must pair up
        assert_eq!(decode("'half"), Err(TokenError::Unrecognized));
        assert_eq!(decode("'"), Err(TokenError::Unrecognized));
        // mismatched pair is not a string
        assert_eq!(decode("'mixed\""), Err(TokenError::Unrecognized));
    }

    #[test]
    fn test_quoted_number_stays_a_string() {
        // the numeric parse runs first, so only non-numeric tokens reach the
        // quote rule; a quoted digit string is still a string
        assert_eq!(decode("'42'").unwrap(), Value::String("42".into()));
    }

    #[test]
    fn test_bigint_literals() {
        let big = "123456789012345678901234567890";
        let expected: BigInt = big.parse().unwrap();
        assert_eq!(
            decode(&format!("BigInt({big})")).unwrap(),
            Value::BigInt(expected.clone())
        );
        assert_eq!(
            decode(&format!("BigInt('{big}')")).unwrap(),
            Value::BigInt(expected.clone())
        );
        assert_eq!(
            decode(&format!("BigInt(\"{big}\")")).unwrap(),
            Value::BigInt(expected.clone())
        );
        assert_eq!(decode("BigInt(-42)").unwrap(), Value::BigInt(BigInt::from(-42)));

        assert_eq!(
            encode(&Value::BigInt(expected), '\''),
            format!("BigInt({big})")
        );
    }

    #[test]
    fn test_bad_bigint_is_its_own_error() {
        assert_eq!(decode("BigInt(1.5)"), Err(TokenError::InvalidBigInt));
        assert_eq!(decode("BigInt(abc)"), Err(TokenError::InvalidBigInt));
        assert_eq!(decode("BigInt()"), Err(TokenError::InvalidBigInt));
    }

    #[test]
    fn test_unrecognized_tokens() {
        assert_eq!(decode("bare"), Err(TokenError::Unrecognized));
        assert_eq!(decode("True"), Err(TokenError::Unrecognized));
        assert_eq!(decode("nan"), Err(TokenError::Unrecognized));
    }

    #[test]
    fn test_encode_uses_configured_quote() {
        let value = Value::String("hi".to_string());
        assert_eq!(encode(&value, '\''), "'hi'");
        assert_eq!(encode(&value, '"'), "\"hi\"");
    }

    #[test]
    fn test_decode_encode_roundtrip() {
        for token in [
            "null",
            "undefined",
            "true",
            "false",
            "NaN",
            "Infinity",
            "42",
            "-3.5",
            "'text'",
            "BigInt(99999999999999999999)",
        ] {
            let value = decode(token).unwrap();
            let encoded = encode(&value, '\'');
            assert_eq!(decode(&encoded).unwrap(), value, "token {token:?}");
        }
    }
}
