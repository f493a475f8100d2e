//! Content-based column detectors
//!
//! When a column's name matches nothing, these heuristics inspect its values
//! instead. Each detector is a total predicate over arbitrary strings: it
//! never fails, it only declines. Detection runs in a fixed priority order
//! and the first firing detector wins.
//!
//! Shape-based detectors (names, school codes, phone numbers, emails) read a
//! bounded sample; ratio/cardinality detectors (dates, gender, grade,
//! academic year) always read the full non-missing set. The sample is
//! evenly spaced rather than random so detector outcomes are reproducible.

use crate::constants::{
    CONTENT_SAMPLE_SIZE, contact_detection, date_detection, email_detection, gender_detection,
    grade_detection, name_detection, school_detection, year_detection,
};
use crate::mapper::FieldType;
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::collections::HashSet;

/// Compiled content-pattern set shared by the detectors
#[derive(Debug)]
pub struct ContentDetectors {
    /// Short leading integer, the shape of a grade number ("5", "12A").
    /// Deliberately capped at two digits so four-digit years never qualify.
    grade_token: Regex,

    /// Full-value academic year range: a four-digit year, optionally
    /// followed by a separator and a 2- or 4-digit year ("2019-2020",
    /// "2019/20", "2019")
    year_range: Regex,

    /// School short code embedded in a value: 2-5 uppercase letters followed
    /// by digits ("SCH123", "ACAD07")
    school_code: Regex,

    /// Minimal email shape: an '@' later followed by a '.'
    email_shape: Regex,
}

impl ContentDetectors {
    /// Compile the detector pattern set
    pub fn compile() -> Result<Self> {
        Ok(Self {
            grade_token: compile(FieldType::Grade, r"^\s*\d{1,2}(\D.*)?$")?,
            year_range: compile(FieldType::AcademicYear, r"^(19|20)\d{2}([-/_](\d{2}|\d{4}))?$")?,
            school_code: compile(FieldType::School, r"[A-Z]{2,5}\d+")?,
            email_shape: compile(FieldType::Email, r"@.*\.")?,
        })
    }

    /// Infer a field type from a column's non-missing values
    ///
    /// Returns the first field type, in detection priority order, whose
    /// detector fires; `None` when the column is empty or nothing fires.
    pub fn detect(&self, values: &[&str]) -> Option<FieldType> {
        if values.is_empty() {
            return None;
        }

        let sample = sample_evenly(values, CONTENT_SAMPLE_SIZE);

        FieldType::DETECTOR_ORDER
            .into_iter()
            .find(|field| self.fires(*field, values, &sample))
    }

    fn fires(&self, field: FieldType, values: &[&str], sample: &[&str]) -> bool {
        match field {
            FieldType::Name => self.is_name_column(sample),
            FieldType::DateOfBirth => self.is_date_column(values),
            FieldType::Gender => self.is_gender_column(values),
            FieldType::Grade => self.is_grade_column(values),
            FieldType::AcademicYear => self.is_year_column(values),
            FieldType::School => self.is_school_column(sample),
            FieldType::ContactNumber => self.is_contact_column(sample),
            FieldType::Email => self.is_email_column(sample),
            // Recognized by name patterns only
            FieldType::EnrollmentDate | FieldType::Address => false,
        }
    }

    /// Person names: multiple words on average, mostly alphabetic characters
    fn is_name_column(&self, sample: &[&str]) -> bool {
        if sample.is_empty() {
            return false;
        }

        let mean_words = mean(sample, |value| value.split_whitespace().count() as f64);
        let mean_alpha = mean(sample, alphabetic_fraction);

        mean_words > name_detection::MIN_MEAN_WORD_COUNT
            && mean_alpha > name_detection::MIN_ALPHABETIC_FRACTION
    }

    /// Dates: most values parse against the best-effort format list
    fn is_date_column(&self, values: &[&str]) -> bool {
        let parsed = values
            .iter()
            .filter(|value| parse_date(value.trim()).is_some())
            .count();

        ratio(parsed, values.len()) >= date_detection::MIN_PARSE_RATIO
    }

    /// Gender: tiny cardinality and values drawn from the known vocabulary
    fn is_gender_column(&self, values: &[&str]) -> bool {
        let normalized: Vec<String> = values.iter().map(|v| v.trim().to_lowercase()).collect();
        let distinct: HashSet<&str> = normalized.iter().map(String::as_str).collect();

        if distinct.is_empty() || distinct.len() > gender_detection::MAX_DISTINCT_VALUES {
            return false;
        }

        let known = normalized
            .iter()
            .filter(|v| gender_detection::KNOWN_VALUES.contains(&v.as_str()))
            .count();

        ratio(known, normalized.len()) >= gender_detection::MIN_KNOWN_VALUE_RATIO
    }

    /// Grades: leading grade numbers together with grade keywords, or a
    /// limited-cardinality column showing either signal on its own
    fn is_grade_column(&self, values: &[&str]) -> bool {
        let normalized: Vec<String> = values.iter().map(|v| v.trim().to_lowercase()).collect();
        let distinct: HashSet<&str> = normalized.iter().map(String::as_str).collect();

        let numeric = normalized
            .iter()
            .filter(|v| self.grade_token.is_match(v))
            .count();
        let keyword = normalized
            .iter()
            .filter(|v| grade_detection::KEYWORDS.iter().any(|k| v.contains(k)))
            .count();

        let numeric_ratio = ratio(numeric, normalized.len());
        let keyword_ratio = ratio(keyword, normalized.len());

        let strong = numeric_ratio > grade_detection::MIN_NUMERIC_RATIO
            && keyword_ratio > grade_detection::MIN_KEYWORD_RATIO;
        let limited = !distinct.is_empty()
            && distinct.len() <= grade_detection::MAX_DISTINCT_VALUES
            && (numeric_ratio > grade_detection::MIN_NUMERIC_RATIO
                || keyword_ratio > grade_detection::MIN_KEYWORD_RATIO);

        strong || limited
    }

    /// Academic years: year-range shaped values with low cardinality
    fn is_year_column(&self, values: &[&str]) -> bool {
        let trimmed: Vec<&str> = values.iter().map(|v| v.trim()).collect();
        let distinct: HashSet<&str> = trimmed.iter().copied().collect();

        if distinct.is_empty() || distinct.len() > year_detection::MAX_DISTINCT_VALUES {
            return false;
        }

        let matching = trimmed
            .iter()
            .filter(|v| self.year_range.is_match(v))
            .count();

        ratio(matching, trimmed.len()) >= year_detection::MIN_PATTERN_RATIO
    }

    /// Schools: keyword mentions or embedded short codes
    fn is_school_column(&self, sample: &[&str]) -> bool {
        if sample.is_empty() {
            return false;
        }

        let keyword = sample
            .iter()
            .filter(|v| {
                let lower = v.to_lowercase();
                school_detection::KEYWORDS.iter().any(|k| lower.contains(k))
            })
            .count();
        let coded = sample
            .iter()
            .filter(|v| self.school_code.is_match(v))
            .count();

        ratio(keyword, sample.len()) >= school_detection::MIN_KEYWORD_RATIO
            || ratio(coded, sample.len()) >= school_detection::MIN_CODE_RATIO
    }

    /// Phone numbers: enough digits left after stripping punctuation
    fn is_contact_column(&self, sample: &[&str]) -> bool {
        if sample.is_empty() {
            return false;
        }

        let phone_like = sample
            .iter()
            .filter(|v| {
                let digits = v.chars().filter(char::is_ascii_digit).count();
                digits >= contact_detection::MIN_PHONE_DIGITS
            })
            .count();

        ratio(phone_like, sample.len()) >= contact_detection::MIN_PHONE_RATIO
    }

    /// Email addresses: the '@' then '.' shape
    fn is_email_column(&self, sample: &[&str]) -> bool {
        let matching = sample
            .iter()
            .filter(|v| self.email_shape.is_match(v))
            .count();

        ratio(matching, sample.len()) > email_detection::MIN_PATTERN_RATIO
    }
}

fn compile(field: FieldType, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| Error::pattern_compilation(field.label(), source, e))
}

/// Best-effort date parse against the configured format lists
///
/// Unparseable values are not errors, they simply return `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    for format in date_detection::DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in date_detection::DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Select up to `limit` values, evenly spaced across the column
///
/// Deterministic: the same column always yields the same sample, so detector
/// outcomes are exactly reproducible.
pub fn sample_evenly<'a>(values: &[&'a str], limit: usize) -> Vec<&'a str> {
    if values.len() <= limit {
        return values.to_vec();
    }

    (0..limit)
        .map(|i| values[i * values.len() / limit])
        .collect()
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

fn mean(sample: &[&str], f: impl Fn(&str) -> f64) -> f64 {
    sample.iter().map(|v| f(v)).sum::<f64>() / sample.len() as f64
}

/// Fraction of characters that are alphabetic or whitespace
fn alphabetic_fraction(value: &str) -> f64 {
    let total = value.chars().count();
    if total == 0 {
        return 0.0;
    }
    let kept = value
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .count();
    kept as f64 / total as f64
}
