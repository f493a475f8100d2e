//! Tests for mapping orchestration and table transformation

use super::{column, mapper, table};
use crate::mapper::MappingSource;
use crate::FieldType;

#[test]
fn test_name_pass_maps_recognized_headers() {
    let mapper = mapper();
    let table = table(vec![
        column("Student Full Name", &["Ana Ruiz", "Ben Okafor"]),
        column("DOB", &["2010-04-01", "2011-09-17"]),
        column("Notes", &["left-handed", ""]),
    ]);

    let mapping = mapper.map_fields(&table);

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.canonical_for("Student Full Name"), Some("StudentName"));
    assert_eq!(mapping.canonical_for("DOB"), Some("DateOfBirth"));
    assert_eq!(mapping.canonical_for("Notes"), None);
}

#[test]
fn test_content_pass_maps_unrecognized_headers() {
    let mapper = mapper();
    let table = table(vec![
        column("col_7", &["2019-2020", "2020-2021", "2019-2020"]),
        column("Sex", &["M", "F", "Other"]),
    ]);

    let mapping = mapper.map_fields(&table);

    // "Sex" is caught by the name pass; "col_7" only by content detection
    assert_eq!(mapping.canonical_for("col_7"), Some("AcademicYear"));
    assert_eq!(mapping.canonical_for("Sex"), Some("Gender"));

    let sources: Vec<MappingSource> = mapping.entries().iter().map(|e| e.source).collect();
    assert_eq!(sources, vec![MappingSource::Name, MappingSource::Content]);
}

#[test]
fn test_content_pass_respects_claimed_targets() {
    let mapper = mapper();
    let table = table(vec![
        column("DOB", &["2010-04-01", "2011-09-17", "2009-01-30"]),
        // Dates again, but DateOfBirth is already claimed by the name pass
        column("col_3", &["2015-09-01", "2016-09-01", "2014-09-01"]),
    ]);

    let mapping = mapper.map_fields(&table);

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.canonical_for("DOB"), Some("DateOfBirth"));
    assert_eq!(mapping.canonical_for("col_3"), None);
}

#[test]
fn test_name_pass_keeps_duplicate_targets() {
    let mapper = mapper();
    let table = table(vec![
        column("Name", &["Ana Ruiz"]),
        column("Student Name", &["Ana R."]),
    ]);

    let mapping = mapper.map_fields(&table);

    assert_eq!(mapping.len(), 2);
    assert!(mapping
        .entries()
        .iter()
        .all(|entry| entry.canonical == "StudentName"));
}

#[test]
fn test_transform_renames_and_passes_through() {
    let mapper = mapper();
    let input = table(vec![
        column("Notes", &["quiet", "sporty"]),
        column("Student Full Name", &["Ana Ruiz", "Ben Okafor"]),
        column("Sex", &["F", "M"]),
    ]);

    let output = mapper.transform_table(&input);

    // Mapped columns first (name pass then content pass), unmapped appended
    assert_eq!(
        output.column_names(),
        vec!["StudentName", "Gender", "Notes"]
    );
    assert_eq!(output.row_count(), 2);
    assert_eq!(
        output.column("StudentName").unwrap().present_values(),
        vec!["Ana Ruiz", "Ben Okafor"]
    );
    assert_eq!(
        output.column("Notes").unwrap().present_values(),
        vec!["quiet", "sporty"]
    );
}

#[test]
fn test_transform_preserves_rows_and_cells() {
    let mapper = mapper();
    let input = table(vec![
        column("DOB", &["2010-04-01", "2011-09-17", "2009-01-30"]),
        column("remarks", &["", "repeat year", "transferred"]),
    ]);

    let output = mapper.transform_table(&input);

    assert_eq!(output.row_count(), input.row_count());
    assert_eq!(
        output.column("DateOfBirth").unwrap().values(),
        input.column("DOB").unwrap().values()
    );
    assert_eq!(
        output.column("remarks").unwrap().values(),
        input.column("remarks").unwrap().values()
    );
}

#[test]
fn test_transform_with_no_mappable_columns_is_a_no_op() {
    let mapper = mapper();
    let input = table(vec![
        column("alpha", &["x1!", "y2!"]),
        column("beta", &["p9?", "q8?"]),
    ]);

    let output = mapper.transform_table(&input);

    assert_eq!(output, input);
}

#[test]
fn test_transform_emits_duplicate_canonical_columns() {
    let mapper = mapper();
    let input = table(vec![
        column("Name", &["Ana Ruiz"]),
        column("Student Name", &["Ana R."]),
    ]);

    let output = mapper.transform_table(&input);

    assert_eq!(output.column_names(), vec!["StudentName", "StudentName"]);
    assert_eq!(output.columns()[0].present_values(), vec!["Ana Ruiz"]);
    assert_eq!(output.columns()[1].present_values(), vec!["Ana R."]);
}

#[test]
fn test_transform_is_idempotent() {
    let mapper = mapper();
    let input = table(vec![
        column("Student Full Name", &["Ana Ruiz", "Ben Okafor"]),
        column("DOB", &["2010-04-01", "2011-09-17"]),
        column("Sex", &["F", "M"]),
        column("Guardian Notes", &["calls evenings", ""]),
    ]);

    let once = mapper.transform_table(&input);
    let twice = mapper.transform_table(&once);

    assert_eq!(once, twice);
}

#[test]
fn test_mapping_stats_counts_passes() {
    let mapper = mapper();
    let table = table(vec![
        column("Student Full Name", &["Ana Ruiz", "Ben Okafor"]),
        column("col_7", &["2019-2020", "2020-2021"]),
        column("Notes", &["quiet", "sporty"]),
    ]);

    let stats = mapper.map_fields(&table).stats(table.column_count());

    assert_eq!(stats.total_columns, 3);
    assert_eq!(stats.mapped_by_name, 1);
    assert_eq!(stats.mapped_by_content, 1);
    assert_eq!(stats.unmapped, 1);
    assert!((stats.mapped_fraction() - 2.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_mapper_is_shareable_across_threads() {
    let mapper = std::sync::Arc::new(mapper());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let mapper = std::sync::Arc::clone(&mapper);
            std::thread::spawn(move || {
                let table = table(vec![column("Sex", &["M", "F", "Other"])]);
                let output = mapper.transform_table(&table);
                assert_eq!(output.column_names(), vec!["Gender"], "thread {i}");
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("mapping thread should not panic");
    }
}

#[test]
fn test_field_types_resolve_to_expected_canonical_names() {
    let pairs = [
        (FieldType::Name, "StudentName"),
        (FieldType::DateOfBirth, "DateOfBirth"),
        (FieldType::Gender, "Gender"),
        (FieldType::Grade, "Grade"),
        (FieldType::AcademicYear, "AcademicYear"),
        (FieldType::School, "SchoolID"),
        (FieldType::EnrollmentDate, "EnrollmentDate"),
        (FieldType::Address, "Address"),
        (FieldType::ContactNumber, "ContactNumber"),
        (FieldType::Email, "EmailAddress"),
    ];

    for (field, expected) in pairs {
        assert_eq!(field.output_name(), expected);
    }
}
