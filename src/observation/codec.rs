//! JSON wire form for price observations
//!
//! One observation is a JSON object with exactly `symbol`, `price`,
//! `timestamp` and `source`. Price travels as a string so no digits are
//! lost to binary floating point; a numeric price, or one with more digits
//! than `Decimal` holds, fails to decode. Streams are newline-delimited.

use super::PriceObservation;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors raised while encoding or decoding observations
#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed JSON, or a missing/unknown field
    #[error("Invalid observation{}: {source}", line_suffix(.line))]
    Json {
        /// 1-based line number when decoding a stream
        line: Option<usize>,
        source: serde_json::Error,
    },
    /// Reading or writing the underlying stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|n| format!(" on line {n}")).unwrap_or_default()
}

impl From<serde_json::Error> for CodecError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { line: None, source }
    }
}

/// Encode an observation as compact JSON
pub fn to_json(obs: &PriceObservation) -> Result<String, CodecError> {
    Ok(serde_json::to_string(obs)?)
}

/// Encode an observation as indented JSON
pub fn to_json_pretty(obs: &PriceObservation) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(obs)?)
}

/// Decode a single observation
pub fn from_json(input: &str) -> Result<PriceObservation, CodecError> {
    Ok(serde_json::from_str(input)?)
}

/// Decode newline-delimited observations, skipping blank lines
///
/// Stops at the first line that fails to decode.
pub fn read_json_lines<R: BufRead>(reader: R) -> Result<Vec<PriceObservation>, CodecError> {
    let mut observations = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let obs = serde_json::from_str(trimmed).map_err(|source| {
            tracing::debug!(line = idx + 1, error = %source, "Failed to decode observation");
            CodecError::Json {
                line: Some(idx + 1),
                source,
            }
        })?;
        observations.push(obs);
    }

    Ok(observations)
}

/// Encode observations as newline-delimited JSON
pub fn write_json_lines<W: Write>(
    mut writer: W,
    observations: &[PriceObservation],
) -> Result<(), CodecError> {
    for obs in observations {
        serde_json::to_writer(&mut writer, obs)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn aapl() -> PriceObservation {
        PriceObservation::new(
            "AAPL",
            dec!(150.25),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            "NASDAQ",
        )
    }

    #[test]
    fn test_json_has_exactly_four_fields() {
        let json = to_json(&aapl()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["symbol"], "AAPL");
        assert_eq!(object["source"], "NASDAQ");
    }

    #[test]
    fn test_price_encoded_as_string() {
        let json = to_json(&aapl()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["price"], serde_json::Value::String("150.25".to_string()));
    }

    #[test]
    fn test_timestamp_encoded_as_rfc3339() {
        let json = to_json(&aapl()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let text = value["timestamp"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(text).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), aapl().timestamp);
    }

    #[test]
    fn test_decode_preserves_decimal_digits() {
        let input = r#"{
            "symbol": "X",
            "price": "19.999999999",
            "timestamp": "2024-01-01T00:00:00Z",
            "source": "feed"
        }"#;
        let obs = from_json(input).unwrap();
        assert_eq!(obs.price, dec!(19.999999999));
        assert_eq!(obs.price.to_string(), "19.999999999");
    }

    #[test]
    fn test_decode_rejects_numeric_price() {
        let input = r#"{"symbol":"X","price":12345678.123456789,"timestamp":"2024-01-01T00:00:00Z","source":"f"}"#;
        let err = from_json(input).unwrap_err();
        assert!(matches!(err, CodecError::Json { line: None, .. }));
        assert!(err.to_string().contains("expected a string"));
    }

    #[test]
    fn test_decode_rejects_integer_price() {
        let input = r#"{"symbol":"X","price":150,"timestamp":"2024-01-01T00:00:00Z","source":"f"}"#;
        assert!(from_json(input).is_err());
    }

    #[test]
    fn test_decode_rejects_price_beyond_precision() {
        let input = r#"{"symbol":"X","price":"0.12345678901234567890123456789012","timestamp":"2024-01-01T00:00:00Z","source":"f"}"#;
        let err = from_json(input).unwrap_err();
        assert!(err.to_string().contains("invalid price"));
    }

    #[test]
    fn test_decode_rejects_price_out_of_range() {
        let input = r#"{"symbol":"X","price":"99999999999999999999999999999999","timestamp":"2024-01-01T00:00:00Z","source":"f"}"#;
        assert!(from_json(input).is_err());
    }

    #[test]
    fn test_decode_keeps_full_precision_price() {
        let input = r#"{"symbol":"X","price":"0.1234567890123456789012345678","timestamp":"2024-01-01T00:00:00Z","source":"f"}"#;
        let obs = from_json(input).unwrap();
        assert_eq!(obs.price.to_string(), "0.1234567890123456789012345678");
        assert_eq!(obs.price.scale(), 28);
    }

    #[test]
    fn test_decode_keeps_trailing_zeros() {
        let input = r#"{"symbol":"X","price":"300.00","timestamp":"2024-01-01T00:00:00Z","source":"f"}"#;
        let obs = from_json(input).unwrap();
        assert_eq!(obs.price.to_string(), "300.00");
        assert!(to_json(&obs).unwrap().contains(r#""price":"300.00""#));
    }

    #[test]
    fn test_json_lines_numeric_price_reports_line() {
        let good = to_json(&aapl()).unwrap();
        let bad = r#"{"symbol":"X","price":1.5,"timestamp":"2024-01-01T00:00:00Z","source":"f"}"#;
        let input = format!("{good}\n{bad}\n");

        let err = read_json_lines(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, CodecError::Json { line: Some(2), .. }));
    }

    #[test]
    fn test_decode_accepts_offset_timestamp() {
        let input = r#"{"symbol":"AAPL","price":"150.25","timestamp":"2024-01-01T02:00:00+02:00","source":"NASDAQ"}"#;
        assert_eq!(from_json(input).unwrap(), aapl());
    }

    #[test]
    fn test_decode_does_not_validate_values() {
        let input = r#"{"symbol":"","price":"-1.5","timestamp":"1970-01-01T00:00:00Z","source":""}"#;
        let obs = from_json(input).unwrap();
        assert_eq!(obs.price, dec!(-1.5));
        assert_eq!(obs.symbol, "");
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let input = r#"{"symbol":"AAPL","price":"150.25","timestamp":"2024-01-01T00:00:00Z"}"#;
        let err = from_json(input).unwrap_err();
        assert!(matches!(err, CodecError::Json { line: None, .. }));
        assert!(err.to_string().contains("source"));
    }

    #[test]
    fn test_decode_rejects_unknown_field() {
        let input = r#"{"symbol":"AAPL","price":"150.25","timestamp":"2024-01-01T00:00:00Z","source":"NASDAQ","volume":10}"#;
        let err = from_json(input).unwrap_err();
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_pretty_json_decodes() {
        let json = to_json_pretty(&aapl()).unwrap();
        assert!(json.contains('\n'));
        assert_eq!(from_json(&json).unwrap(), aapl());
    }

    #[test]
    fn test_json_lines_skip_blank_lines() {
        let mut msft = aapl();
        msft.symbol = "MSFT".to_string();
        msft.price = dec!(300.00);

        let mut buf = Vec::new();
        write_json_lines(&mut buf, &[aapl(), msft.clone()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);

        let padded = format!("\n{}\n   \n", text);
        let decoded = read_json_lines(Cursor::new(padded)).unwrap();
        assert_eq!(decoded, vec![aapl(), msft]);
    }

    #[test]
    fn test_json_lines_reports_line_number() {
        let good = to_json(&aapl()).unwrap();
        let input = format!("{good}\n\n{{\"symbol\":\"AAPL\"}}\n{good}\n");

        let err = read_json_lines(Cursor::new(input)).unwrap_err();
        match err {
            CodecError::Json { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_display_mentions_line() {
        let err = read_json_lines(Cursor::new("not json\n")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid observation on line 1"));
    }

    #[test]
    fn test_empty_stream() {
        let decoded = read_json_lines(Cursor::new("")).unwrap();
        assert!(decoded.is_empty());
    }
}
