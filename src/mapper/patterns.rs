//! Column name pattern registry
//!
//! Holds the per-field regex sets used by the first mapping pass. Column
//! names are normalized (trimmed, lowercased) before matching, and every
//! pattern is anchored: a pattern must account for the whole normalized name,
//! never a substring of it.

use crate::mapper::FieldType;
use crate::{Error, Result};
use regex::Regex;

/// Raw pattern sources per field, in registry order
///
/// Separators inside names ("full name", "full_name", "fullname") are
/// tolerated via `[\s_]*`.
const PATTERN_SOURCES: [(FieldType, &[&str]); 10] = [
    (
        FieldType::Name,
        &[
            r"^(?:student|pupil|learner)?[\s_]*(?:full[\s_]*)?name$",
            r"^(?:first[\s_]*name|f[\s_]*name)$",
            r"^(?:last[\s_]*name|l[\s_]*name|surname)$",
        ],
    ),
    (
        FieldType::DateOfBirth,
        &[
            r"^(?:date[\s_]*of[\s_]*birth|dob|birth[\s_]*date|birthdate)$",
            r"^birth$",
        ],
    ),
    (FieldType::Gender, &[r"^(?:gender|sex)$"]),
    (FieldType::Grade, &[r"^(?:grade|class|level|std)$"]),
    (
        FieldType::AcademicYear,
        &[r"^(?:academic[\s_]*year|school[\s_]*year|year|session|term)$"],
    ),
    (
        FieldType::School,
        &[r"^(?:school|institution|center)[\s_]*(?:name|id|code)?$"],
    ),
    (
        FieldType::EnrollmentDate,
        &[r"^(?:enrollment|registration|admission)[\s_]*(?:date|day)?$"],
    ),
    (
        FieldType::Address,
        &[r"^(?:address|location|residence)$"],
    ),
    (
        FieldType::ContactNumber,
        &[r"^(?:contact|phone|mobile|tel|telephone|cell)[\s_]*(?:number|no|#)?$"],
    ),
    (
        FieldType::Email,
        &[r"^(?:email|e-mail|mail)[\s_]*(?:address)?$"],
    ),
];

/// Compiled name patterns for every field type
#[derive(Debug)]
pub struct NamePatternRegistry {
    entries: Vec<(FieldType, Vec<Regex>)>,
}

impl NamePatternRegistry {
    /// Compile the full pattern registry
    pub fn compile() -> Result<Self> {
        let mut entries = Vec::with_capacity(PATTERN_SOURCES.len());

        for (field, sources) in PATTERN_SOURCES {
            let mut patterns = Vec::with_capacity(sources.len());
            for source in sources {
                let pattern = Regex::new(source)
                    .map_err(|e| Error::pattern_compilation(field.label(), *source, e))?;
                patterns.push(pattern);
            }
            entries.push((field, patterns));
        }

        Ok(Self { entries })
    }

    /// Match a raw column name against the registry
    ///
    /// Returns the first field type, in registry order, with any matching
    /// pattern. Pattern order within a field only short-circuits; field order
    /// is the tie-break between fields.
    pub fn match_column_name(&self, column_name: &str) -> Option<FieldType> {
        let normalized = column_name.trim().to_lowercase();

        for (field, patterns) in &self.entries {
            if patterns.iter().any(|pattern| pattern.is_match(&normalized)) {
                return Some(*field);
            }
        }

        None
    }
}
