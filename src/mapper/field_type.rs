//! Canonical field vocabulary for student records
//!
//! Every column the mapper recognizes resolves to one of these ten semantic
//! fields. Registry iteration order is fixed: it is the tie-break when a
//! column name could match more than one field's patterns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic field types a spreadsheet column can map onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Name,
    DateOfBirth,
    Gender,
    Grade,
    AcademicYear,
    School,
    EnrollmentDate,
    Address,
    ContactNumber,
    Email,
}

impl FieldType {
    /// All field types in registry order (name matching tie-break order)
    pub const ALL: [FieldType; 10] = [
        FieldType::Name,
        FieldType::DateOfBirth,
        FieldType::Gender,
        FieldType::Grade,
        FieldType::AcademicYear,
        FieldType::School,
        FieldType::EnrollmentDate,
        FieldType::Address,
        FieldType::ContactNumber,
        FieldType::Email,
    ];

    /// Field types with a content detector, in detection priority order
    ///
    /// EnrollmentDate and Address are recognized by name patterns only: an
    /// enrollment-date column is indistinguishable from a birth-date column
    /// by its values, and free-text addresses have no reliable value shape.
    pub const DETECTOR_ORDER: [FieldType; 8] = [
        FieldType::Name,
        FieldType::DateOfBirth,
        FieldType::Gender,
        FieldType::Grade,
        FieldType::AcademicYear,
        FieldType::School,
        FieldType::ContactNumber,
        FieldType::Email,
    ];

    /// Canonical output column label for this field
    pub fn output_name(&self) -> &'static str {
        match self {
            FieldType::Name => "StudentName",
            FieldType::DateOfBirth => "DateOfBirth",
            FieldType::Gender => "Gender",
            FieldType::Grade => "Grade",
            FieldType::AcademicYear => "AcademicYear",
            FieldType::School => "SchoolID",
            FieldType::EnrollmentDate => "EnrollmentDate",
            FieldType::Address => "Address",
            FieldType::ContactNumber => "ContactNumber",
            FieldType::Email => "EmailAddress",
        }
    }

    /// Short lowercase tag used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Name => "name",
            FieldType::DateOfBirth => "date-of-birth",
            FieldType::Gender => "gender",
            FieldType::Grade => "grade",
            FieldType::AcademicYear => "academic-year",
            FieldType::School => "school",
            FieldType::EnrollmentDate => "enrollment-date",
            FieldType::Address => "address",
            FieldType::ContactNumber => "contact-number",
            FieldType::Email => "email",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
