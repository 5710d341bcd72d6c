//! The reference codec.
//!
//! A reference token carries a whole record:
//!
//! ```text
//! REF-<YYYYMMDD>-<url-safe base64 of the percent-encoded phrase>
//! ```
//!
//! Percent-encoding first keeps the base64 input pure ASCII, so multi-byte
//! characters survive. The payload uses `-` and `_` in place of `+` and
//! `/`, which means it can itself contain `-`: decoding rejoins every
//! segment after the date instead of taking only the third one.
//!
//! The date segment is not validated on decode. Whatever sits there is
//! redisplayed as `YYYY-MM-DD` by fixed slicing. Encoding only accepts
//! years that fill exactly eight digits.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{Datelike, NaiveDate};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};
use serde::Serialize;

use crate::{Error, REF_PREFIX, Result};

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet, tolerant of non-zero trailing bits the way `atob` is.
const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// A decoded record. Never persisted; reconstructed from a token on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// The withheld phrase, exactly as submitted (after trimming).
    pub text: String,
    /// Display date, `YYYY-MM-DD` for well-formed tokens.
    pub date: String,
}

/// Years that format as exactly four digits.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Encode a phrase recorded on `date` into a reference token.
///
/// The caller is expected to have sanitized and trimmed `text`. Dates
/// outside years 0000-9999 have no 8-digit form and are rejected.
pub fn encode(date: NaiveDate, text: &str) -> Result<String> {
    if !YEARS.contains(&date.year()) {
        return Err(Error::DateOutOfRange(date));
    }

    let escaped = utf8_percent_encode(text, URI_COMPONENT).to_string();
    // Same bytes as standard base64 with `+/` swapped and `=` stripped.
    let payload = URL_SAFE_NO_PAD.encode(escaped.as_bytes());

    Ok(format!("{REF_PREFIX}-{}-{payload}", date.format("%Y%m%d")))
}

/// Decode a reference token back into its record.
pub fn decode(token: &str) -> Result<Record> {
    let mut segments = token.split('-');

    let (Some(prefix), Some(date_digits)) = (segments.next(), segments.next()) else {
        return Err(Error::MalformedReference);
    };
    let payload: Vec<&str> = segments.collect();

    if payload.is_empty() || prefix != REF_PREFIX {
        return Err(Error::MalformedReference);
    }

    let text = decode_payload(&payload.join("-"))?;

    Ok(Record {
        text,
        date: format_date_digits(date_digits),
    })
}

/// Reformat a `YYYYMMDD` segment as `YYYY-MM-DD`.
///
/// Slices by character position and clamps to the input length; no
/// calendar validation is performed.
pub fn format_date_digits(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let slice = |from: usize, to: usize| -> String {
        let len = chars.len();
        chars[from.min(len)..to.min(len)].iter().collect()
    };

    format!("{}-{}-{}", slice(0, 4), slice(4, 6), slice(6, 8))
}

/// Today's date in the server's local time zone.
pub fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Restore standard base64, decode it, then percent-decode to UTF-8.
fn decode_payload(payload: &str) -> Result<String> {
    let mut standard: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    let escaped = FORGIVING_STANDARD
        .decode(standard.as_bytes())
        .map_err(|e| Error::InvalidEncoding(e.to_string()))?;

    check_escapes(&escaped)?;

    percent_decode(&escaped)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| Error::InvalidEncoding(e.to_string()))
}

/// Every `%` must introduce two hex digits.
fn check_escapes(bytes: &[u8]) -> Result<()> {
    for (i, _) in bytes.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let well_formed = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(Error::InvalidEncoding(format!(
                "malformed percent-escape at offset {i}"
            )));
        }
    }
    Ok(())
}

/// A validated reference token together with the record it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    token: String,
    record: Record,
}

impl Reference {
    /// Encode a new reference for `text` recorded on `date`.
    pub fn new(date: NaiveDate, text: &str) -> Result<Self> {
        let token = encode(date, text)?;
        let record = Record {
            text: text.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
        };
        Ok(Self { token, record })
    }

    /// The token string, safe to place in a URL path segment.
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// The decoded record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// The raw date segment of the token, before reformatting.
    pub fn date_digits(&self) -> &str {
        self.token.split('-').nth(1).unwrap_or_default()
    }
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let record = decode(token)?;
        Ok(Self {
            token: token.to_string(),
            record,
        })
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
