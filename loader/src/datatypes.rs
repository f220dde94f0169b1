//! Parsers for the scalar datatypes of the meta model.
//!
//! Every XSD datatype an Aspect Model may use, plus `rdf:langString` and
//! `samm:curie`, parses into a [`Scalar`]. Bounded integer types are range
//! checked; calendar types go through `chrono`; binary types through `hex`
//! and `base64`.

use base64::Engine as _;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use samm_metamodel::model::iris::*;

use crate::error::LoadError;

/// A parsed scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `xsd:string`.
    String(String),
    /// `rdf:langString`: text and normalised locale.
    LangString {
        /// The text.
        text: String,
        /// BCP 47 locale, normalised.
        locale: String,
    },
    /// `xsd:boolean`.
    Boolean(bool),
    /// Every integer-derived type.
    Integer(i128),
    /// `xsd:decimal`, kept as its validated lexical form.
    Decimal(String),
    /// `xsd:double`.
    Double(f64),
    /// `xsd:float`.
    Float(f32),
    /// `xsd:date`.
    Date {
        /// Calendar date.
        date: NaiveDate,
        /// Timezone, if given.
        offset: Option<FixedOffset>,
    },
    /// `xsd:time`.
    Time {
        /// Time of day.
        time: NaiveTime,
        /// Timezone, if given.
        offset: Option<FixedOffset>,
    },
    /// `xsd:dateTime` and `xsd:dateTimeStamp`.
    DateTime {
        /// Local date and time.
        local: NaiveDateTime,
        /// Timezone, if given.
        offset: Option<FixedOffset>,
    },
    /// `xsd:gYear`, `gMonth`, `gDay`, `gYearMonth`, `gMonthDay`.
    Gregorian(String),
    /// `xsd:duration`, `yearMonthDuration`, `dayTimeDuration`.
    Duration(String),
    /// `xsd:hexBinary` and `xsd:base64Binary`.
    Binary(Vec<u8>),
    /// `xsd:anyURI`, and named resources used as values.
    Uri(String),
    /// `samm:curie`.
    Curie(String),
}

lexical_pattern!(is_decimal = r"^[+-]?(\d+(\.\d*)?|\.\d+)$");
lexical_pattern!(is_floating = r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$");
lexical_pattern!(is_g_year = r"^-?\d{4,}$");
lexical_pattern!(is_g_month = r"^--(0[1-9]|1[0-2])$");
lexical_pattern!(is_g_day = r"^---(0[1-9]|[12]\d|3[01])$");
lexical_pattern!(is_g_year_month = r"^-?\d{4,}-(0[1-9]|1[0-2])$");
lexical_pattern!(is_g_month_day = r"^--(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$");
lexical_pattern!(
    is_duration = r"^-?P(\d+Y)?(\d+M)?(\d+D)?(T(\d+H)?(\d+M)?(\d+(\.\d+)?S)?)?$"
);
lexical_pattern!(is_year_month_duration = r"^-?P(\d+Y(\d+M)?|\d+M)$");
lexical_pattern!(is_day_time_duration = r"^-?P(\d+D)?(T(\d+H)?(\d+M)?(\d+(\.\d+)?S)?)?$");
lexical_pattern!(is_curie = r"^[A-Za-z_][A-Za-z0-9_.-]*:[A-Za-z0-9_./-]*$");
lexical_pattern!(is_timezone = r"(Z|[+-]\d{2}:\d{2})$");

/// Parses `lexical` as a value of `datatype`.
///
/// `language` is required for (and only used with) `rdf:langString`.
///
/// # Errors
///
/// Returns [`LoadError::InvalidLiteral`] if the datatype is not supported or
/// the lexical form is not valid for it.
pub fn parse(lexical: &str, datatype: &str, language: Option<&str>) -> Result<Scalar, LoadError> {
    let invalid = |reason: &str| LoadError::InvalidLiteral {
        lexical: lexical.to_owned(),
        datatype: datatype.to_owned(),
        reason: reason.to_owned(),
    };
    let integer = |min: i128, max: i128| -> Result<Scalar, LoadError> {
        let value: i128 = lexical.parse().map_err(|_| invalid("not an integer"))?;
        if value < min || value > max {
            return Err(invalid("out of range"));
        }
        Ok(Scalar::Integer(value))
    };

    match datatype {
        XSD_STRING => Ok(Scalar::String(lexical.to_owned())),
        RDF_LANG_STRING => {
            let tag = language.ok_or_else(|| invalid("missing language tag"))?;
            let locale = normalize_locale(tag).ok_or_else(|| invalid("unrecognized locale"))?;
            Ok(Scalar::LangString {
                text: lexical.to_owned(),
                locale,
            })
        }
        XSD_BOOLEAN => match lexical {
            "true" | "1" => Ok(Scalar::Boolean(true)),
            "false" | "0" => Ok(Scalar::Boolean(false)),
            _ => Err(invalid("not a boolean")),
        },
        XSD_DECIMAL if is_decimal(lexical) => Ok(Scalar::Decimal(lexical.to_owned())),
        XSD_DECIMAL => Err(invalid("not a decimal")),
        XSD_INTEGER => integer(i128::MIN, i128::MAX),
        XSD_LONG => integer(i64::MIN.into(), i64::MAX.into()),
        XSD_INT => integer(i32::MIN.into(), i32::MAX.into()),
        XSD_SHORT => integer(i16::MIN.into(), i16::MAX.into()),
        XSD_BYTE => integer(i8::MIN.into(), i8::MAX.into()),
        XSD_UNSIGNED_LONG => integer(0, u64::MAX.into()),
        XSD_UNSIGNED_INT => integer(0, u32::MAX.into()),
        XSD_UNSIGNED_SHORT => integer(0, u16::MAX.into()),
        XSD_UNSIGNED_BYTE => integer(0, u8::MAX.into()),
        XSD_POSITIVE_INTEGER => integer(1, i128::MAX),
        XSD_NON_NEGATIVE_INTEGER => integer(0, i128::MAX),
        XSD_NEGATIVE_INTEGER => integer(i128::MIN, -1),
        XSD_NON_POSITIVE_INTEGER => integer(i128::MIN, 0),
        XSD_DOUBLE => floating(lexical)
            .map(Scalar::Double)
            .ok_or_else(|| invalid("not a double")),
        #[allow(clippy::cast_possible_truncation)]
        XSD_FLOAT => floating(lexical)
            .map(|v| Scalar::Float(v as f32))
            .ok_or_else(|| invalid("not a float")),
        XSD_DATE => {
            let (text, offset) = split_timezone(lexical).ok_or_else(|| invalid("bad timezone"))?;
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(|date| Scalar::Date { date, offset })
                .map_err(|e| invalid(&e.to_string()))
        }
        XSD_TIME => {
            let (text, offset) = split_timezone(lexical).ok_or_else(|| invalid("bad timezone"))?;
            NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
                .map(|time| Scalar::Time { time, offset })
                .map_err(|e| invalid(&e.to_string()))
        }
        XSD_DATE_TIME | XSD_DATE_TIME_STAMP => {
            let (text, offset) = split_timezone(lexical).ok_or_else(|| invalid("bad timezone"))?;
            if datatype == XSD_DATE_TIME_STAMP && offset.is_none() {
                return Err(invalid("timezone is required"));
            }
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|local| Scalar::DateTime { local, offset })
                .map_err(|e| invalid(&e.to_string()))
        }
        XSD_G_YEAR | XSD_G_MONTH | XSD_G_DAY | XSD_G_YEAR_MONTH | XSD_G_MONTH_DAY => {
            let (text, _) = split_timezone(lexical).ok_or_else(|| invalid("bad timezone"))?;
            let valid = match datatype {
                XSD_G_YEAR => is_g_year(text),
                XSD_G_MONTH => is_g_month(text),
                XSD_G_DAY => is_g_day(text),
                XSD_G_YEAR_MONTH => is_g_year_month(text),
                _ => is_g_month_day(text),
            };
            if valid {
                Ok(Scalar::Gregorian(lexical.to_owned()))
            } else {
                Err(invalid("malformed calendar value"))
            }
        }
        XSD_DURATION | XSD_YEAR_MONTH_DURATION | XSD_DAY_TIME_DURATION => {
            let shape = match datatype {
                XSD_YEAR_MONTH_DURATION => is_year_month_duration(lexical),
                XSD_DAY_TIME_DURATION => is_day_time_duration(lexical),
                _ => is_duration(lexical),
            };
            let has_component = !lexical.ends_with('P') && !lexical.ends_with('T');
            if shape && has_component {
                Ok(Scalar::Duration(lexical.to_owned()))
            } else {
                Err(invalid("malformed duration"))
            }
        }
        XSD_HEX_BINARY => hex::decode(lexical)
            .map(Scalar::Binary)
            .map_err(|e| invalid(&e.to_string())),
        XSD_BASE64_BINARY => {
            let compact: String = lexical.split_whitespace().collect();
            base64::engine::general_purpose::STANDARD
                .decode(compact)
                .map(Scalar::Binary)
                .map_err(|e| invalid(&e.to_string()))
        }
        XSD_ANY_URI if lexical.chars().any(char::is_whitespace) => {
            Err(invalid("URIs cannot contain whitespace"))
        }
        XSD_ANY_URI => Ok(Scalar::Uri(lexical.to_owned())),
        SAMM_CURIE if is_curie(lexical) => Ok(Scalar::Curie(lexical.to_owned())),
        SAMM_CURIE => Err(invalid("not a prefixed name")),
        _ => Err(invalid("unsupported datatype")),
    }
}

fn floating(lexical: &str) -> Option<f64> {
    match lexical {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ if is_floating(lexical) => lexical.parse().ok(),
        _ => None,
    }
}

/// Splits a trailing timezone off a calendar lexical form. Returns `None`
/// if a timezone is present but out of range.
fn split_timezone(lexical: &str) -> Option<(&str, Option<FixedOffset>)> {
    if !is_timezone(lexical) {
        return Some((lexical, None));
    }
    if let Some(text) = lexical.strip_suffix('Z') {
        return Some((text, FixedOffset::east_opt(0)));
    }
    let (text, zone) = lexical.split_at(lexical.len() - 6);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let hours: i32 = zone.get(1..3)?.parse().ok()?;
    let minutes: i32 = zone.get(4..6)?.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
    Some((text, Some(offset)))
}

/// Normalises a BCP 47 language tag: lower-case language, title-case
/// script, upper-case region; `_` separators become `-`.
///
/// Returns `None` if the primary language subtag is not two or three letters
/// or any later subtag is malformed.
#[must_use]
pub fn normalize_locale(tag: &str) -> Option<String> {
    let mut subtags = tag.split(['-', '_']);
    let language = subtags.next()?;
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let mut normalized = vec![language.to_ascii_lowercase()];
    for (position, subtag) in subtags.enumerate() {
        let alphabetic = subtag.chars().all(|c| c.is_ascii_alphabetic());
        let numeric = subtag.chars().all(|c| c.is_ascii_digit());
        let next = match subtag.len() {
            4 if position == 0 && alphabetic => {
                let (head, tail) = subtag.split_at(1);
                format!("{}{}", head.to_ascii_uppercase(), tail.to_ascii_lowercase())
            }
            2 if alphabetic => subtag.to_ascii_uppercase(),
            3 if numeric => subtag.to_owned(),
            1..=8 if subtag.chars().all(|c| c.is_ascii_alphanumeric()) => {
                subtag.to_ascii_lowercase()
            }
            _ => return None,
        };
        normalized.push(next);
    }
    Some(normalized.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(parse("127", XSD_BYTE, None).unwrap(), Scalar::Integer(127));
        assert!(parse("128", XSD_BYTE, None).is_err());
        assert!(parse("-1", XSD_UNSIGNED_INT, None).is_err());
        assert!(parse("0", XSD_POSITIVE_INTEGER, None).is_err());
        assert_eq!(
            parse("18446744073709551615", XSD_UNSIGNED_LONG, None).unwrap(),
            Scalar::Integer(18_446_744_073_709_551_615)
        );
        assert!(parse("1.5", XSD_INT, None).is_err());
    }

    #[test]
    fn decimals_and_floats() {
        assert_eq!(
            parse("-12.50", XSD_DECIMAL, None).unwrap(),
            Scalar::Decimal("-12.50".into())
        );
        assert!(parse("1e3", XSD_DECIMAL, None).is_err());
        assert_eq!(parse("1e3", XSD_DOUBLE, None).unwrap(), Scalar::Double(1000.0));
        assert_eq!(parse("-INF", XSD_FLOAT, None).unwrap(), Scalar::Float(f32::NEG_INFINITY));
        assert!(parse("inf", XSD_DOUBLE, None).is_err());
    }

    #[test]
    fn calendar_values() {
        let Scalar::DateTime { local, offset } =
            parse("2024-03-01T12:30:00.5+02:00", XSD_DATE_TIME, None).unwrap()
        else {
            panic!("expected a dateTime");
        };
        assert_eq!(local.to_string(), "2024-03-01 12:30:00.500");
        assert_eq!(offset, FixedOffset::east_opt(7200));
        assert!(parse("2024-03-01T12:30:00", XSD_DATE_TIME_STAMP, None).is_err());
        assert!(parse("2024-02-30", XSD_DATE, None).is_err());
        assert!(matches!(
            parse("2024-02-29Z", XSD_DATE, None).unwrap(),
            Scalar::Date { offset: Some(_), .. }
        ));
        assert!(parse("--12-31", XSD_G_MONTH_DAY, None).is_ok());
        assert!(parse("--13", XSD_G_MONTH, None).is_err());
    }

    #[test]
    fn durations() {
        assert!(parse("P1Y2M3DT4H5M6.7S", XSD_DURATION, None).is_ok());
        assert!(parse("P", XSD_DURATION, None).is_err());
        assert!(parse("P1DT", XSD_DURATION, None).is_err());
        assert!(parse("P1Y", XSD_YEAR_MONTH_DURATION, None).is_ok());
        assert!(parse("P1D", XSD_YEAR_MONTH_DURATION, None).is_err());
        assert!(parse("PT36H", XSD_DAY_TIME_DURATION, None).is_ok());
    }

    #[test]
    fn binary_values() {
        assert_eq!(
            parse("0FB7", XSD_HEX_BINARY, None).unwrap(),
            Scalar::Binary(vec![0x0f, 0xb7])
        );
        assert_eq!(
            parse("aGVsbG8=", XSD_BASE64_BINARY, None).unwrap(),
            Scalar::Binary(b"hello".to_vec())
        );
        assert!(parse("0FB", XSD_HEX_BINARY, None).is_err());
    }

    #[test]
    fn language_strings_need_a_valid_locale() {
        assert_eq!(
            parse("Gewicht", RDF_LANG_STRING, Some("de_de")).unwrap(),
            Scalar::LangString {
                text: "Gewicht".into(),
                locale: "de-DE".into()
            }
        );
        assert!(parse("Gewicht", RDF_LANG_STRING, None).is_err());
        assert!(parse("Gewicht", RDF_LANG_STRING, Some("german")).is_err());
    }

    #[test]
    fn locale_normalisation() {
        assert_eq!(normalize_locale("EN").as_deref(), Some("en"));
        assert_eq!(normalize_locale("zh-hant-tw").as_deref(), Some("zh-Hant-TW"));
        assert_eq!(normalize_locale("es-419").as_deref(), Some("es-419"));
        assert_eq!(normalize_locale("e"), None);
        assert_eq!(normalize_locale("en--US"), None);
    }

    #[test]
    fn curies_and_unknown_datatypes() {
        assert!(parse("unit:kilogram", SAMM_CURIE, None).is_ok());
        assert!(parse("kilogram", SAMM_CURIE, None).is_err());
        assert!(parse("x", "urn:example:custom", None).is_err());
    }
}
