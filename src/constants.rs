//! Application constants for the roster mapper
//!
//! This module contains the heuristic thresholds, fixed vocabularies and
//! format lists used by the field mapping engine. The thresholds are tuned
//! against real school enrollment spreadsheets and are deliberately kept as
//! literal values rather than derived at runtime.

// =============================================================================
// Content Sampling
// =============================================================================

/// Maximum number of non-missing values a sampled detector inspects per column
///
/// Detectors that judge value shape (names, school codes, phone numbers,
/// email addresses) only need a handful of examples; detectors that count
/// ratios or cardinality always read the full column.
pub const CONTENT_SAMPLE_SIZE: usize = 10;

// =============================================================================
// Per-Field Detector Thresholds
// =============================================================================

/// Name column detection
pub mod name_detection {
    /// Mean whitespace-separated token count must exceed this (full names
    /// carry at least a given name and a surname)
    pub const MIN_MEAN_WORD_COUNT: f64 = 1.0;

    /// Mean fraction of alphabetic-or-space characters must exceed this
    pub const MIN_ALPHABETIC_FRACTION: f64 = 0.7;
}

/// Date column detection
pub mod date_detection {
    /// Fraction of non-missing values that must parse as a date
    pub const MIN_PARSE_RATIO: f64 = 0.7;

    /// Date-only formats tried, in order, for best-effort parsing
    pub const DATE_FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%d/%m/%Y",
        "%m/%d/%Y",
        "%Y/%m/%d",
        "%d-%m-%Y",
        "%d.%m.%Y",
        "%d %b %Y",
        "%d %B %Y",
        "%b %d, %Y",
        "%B %d, %Y",
    ];

    /// Datetime formats tried when no date-only format matches
    pub const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
}

/// Gender column detection
pub mod gender_detection {
    /// Gender columns have very low cardinality
    pub const MAX_DISTINCT_VALUES: usize = 6;

    /// Fraction of values that must come from the known vocabulary
    pub const MIN_KNOWN_VALUE_RATIO: f64 = 0.7;

    /// Recognized gender values, compared after trimming and lowercasing
    pub const KNOWN_VALUES: &[&str] = &["m", "f", "male", "female", "other", "non-binary"];
}

/// Grade/class column detection
pub mod grade_detection {
    /// Fraction of values that must carry a leading grade number
    pub const MIN_NUMERIC_RATIO: f64 = 0.5;

    /// Fraction of values that must contain a grade keyword
    pub const MIN_KEYWORD_RATIO: f64 = 0.3;

    /// Cardinality cap for the limited-cardinality fallback
    pub const MAX_DISTINCT_VALUES: usize = 20;

    /// Keywords that mark grade/class/level columns
    pub const KEYWORDS: &[&str] = &["grade", "class", "level"];
}

/// Academic year column detection
pub mod year_detection {
    /// Fraction of values that must match the year-range pattern
    pub const MIN_PATTERN_RATIO: f64 = 0.5;

    /// A school only spans a handful of academic years per extract
    pub const MAX_DISTINCT_VALUES: usize = 10;
}

/// School column detection
pub mod school_detection {
    /// Fraction of values containing a school keyword
    pub const MIN_KEYWORD_RATIO: f64 = 0.3;

    /// Fraction of values matching the letters-plus-digits code shape
    pub const MIN_CODE_RATIO: f64 = 0.3;

    /// Keywords that mark school name/ID columns
    pub const KEYWORDS: &[&str] = &["sch", "school", "college", "academy"];
}

/// Contact number column detection
pub mod contact_detection {
    /// Minimum digit count, after stripping punctuation, to look like a phone
    pub const MIN_PHONE_DIGITS: usize = 7;

    /// Fraction of values that must reach the digit threshold
    pub const MIN_PHONE_RATIO: f64 = 0.7;
}

/// Email column detection
pub mod email_detection {
    /// Fraction of values that must match the '@' then '.' shape
    pub const MIN_PATTERN_RATIO: f64 = 0.3;
}
