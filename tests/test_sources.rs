// Row-set acquisition tests

use std::io::Write;

use rust_data_profiling_engine::{
    data::{CsvRowSource, DataError, JsonRowSource, Value},
    profiling::profile,
    utils::Config,
};

#[test]
fn test_csv_from_bytes() {
    let data = b"id,name,score\n1,Alice,9.5\n2,,8.0\n3,Carol,\n";

    let rows = CsvRowSource::new().from_bytes(data, "people.csv").unwrap();

    assert_eq!(rows.source_name, "people.csv");
    assert_eq!(rows.row_count(), 3);
    assert_eq!(rows.column_names(), vec!["id", "name", "score"]);

    // Empty cells become nulls
    assert_eq!(rows.rows[1].get("name"), Some(&Value::Null));
    assert_eq!(rows.rows[2].get("score"), Some(&Value::Null));
    assert_eq!(
        rows.rows[0].get("name"),
        Some(&Value::String("Alice".to_string()))
    );
}

#[test]
fn test_csv_from_path() {
    let mut file = tempfile::Builder::new()
        .prefix("dataset")
        .suffix(".csv")
        .tempfile()
        .unwrap();
    writeln!(file, "amount,city").unwrap();
    writeln!(file, "10,Lisbon").unwrap();
    writeln!(file, "-3,Porto").unwrap();
    file.flush().unwrap();

    let rows = CsvRowSource::new().from_path(file.path()).unwrap();

    assert_eq!(rows.row_count(), 2);
    // The file name becomes the source name
    assert!(rows.source_name.starts_with("dataset"));
    assert!(rows.source_name.ends_with(".csv"));

    let report = profile(&rows).unwrap();
    assert_eq!(report.numeric_stats["amount"].min_value, -3.0);
    assert!(report.compliance_flags.monetary_fields_present);
}

#[test]
fn test_csv_without_header() {
    let data = b"1,alpha\n2,beta\n";

    let rows = CsvRowSource::with_options(false, b',')
        .from_bytes(data, "raw.csv")
        .unwrap();

    assert_eq!(rows.row_count(), 2);
    assert_eq!(rows.column_names(), vec!["column_0", "column_1"]);
}

#[test]
fn test_csv_with_semicolon_delimiter() {
    let data = b"a;b\n1;2\n";

    let rows = CsvRowSource::with_options(true, b';')
        .from_bytes(data, "semi.csv")
        .unwrap();

    assert_eq!(rows.column_names(), vec!["a", "b"]);
    assert_eq!(rows.rows[0].get("b"), Some(&Value::String("2".to_string())));
}

#[test]
fn test_csv_empty_input_profiles_to_zeros() {
    let rows = CsvRowSource::new().from_bytes(b"", "empty.csv").unwrap();
    assert!(rows.is_empty());

    let report = profile(&rows).unwrap();
    assert_eq!(report.dataset.row_count, 0);
    assert_eq!(report.dataset.column_count, 0);
}

#[test]
fn test_json_from_bytes() {
    let data = br#"[
        {"id": 1, "name": "Alice", "score": 9.5, "active": true},
        {"id": 2, "name": null, "score": 8, "active": false}
    ]"#;

    let rows = JsonRowSource::new().from_bytes(data, "users").unwrap();

    assert_eq!(rows.row_count(), 2);
    // Document key order is preserved as column order
    assert_eq!(rows.column_names(), vec!["id", "name", "score", "active"]);

    assert_eq!(rows.rows[0].get("id"), Some(&Value::Integer(1)));
    assert_eq!(rows.rows[0].get("score"), Some(&Value::Float(9.5)));
    assert_eq!(rows.rows[0].get("active"), Some(&Value::Boolean(true)));
    assert_eq!(rows.rows[1].get("name"), Some(&Value::Null));
    assert_eq!(rows.rows[1].get("score"), Some(&Value::Integer(8)));
}

#[test]
fn test_json_nested_values_are_stringified() {
    let data = br#"[{"id": 1, "tags": ["a", "b"], "meta": {"k": 1}}]"#;

    let rows = JsonRowSource::new().from_bytes(data, "docs").unwrap();

    assert_eq!(
        rows.rows[0].get("tags"),
        Some(&Value::String("[\"a\",\"b\"]".to_string()))
    );
    assert_eq!(
        rows.rows[0].get("meta"),
        Some(&Value::String("{\"k\":1}".to_string()))
    );
}

#[test]
fn test_json_root_must_be_array() {
    let err = JsonRowSource::new()
        .from_bytes(br#"{"id": 1}"#, "doc")
        .err()
        .unwrap();
    assert!(err.to_string().contains("not an array"));
}

#[test]
fn test_json_rejects_non_object_elements() {
    let err = JsonRowSource::new()
        .from_bytes(br#"[{"id": 1}, 42]"#, "docs")
        .err()
        .unwrap();

    match err {
        DataError::InvalidDocument { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_json_profiles_end_to_end() {
    let data = br#"[
        {"user_email": "ada@example.com", "amount": 120, "created": "2024-01-01"},
        {"user_email": "bob@example.com", "amount": -5, "created": "2024-02-01"}
    ]"#;

    let rows = JsonRowSource::new().from_bytes(data, "payments").unwrap();
    let report = profile(&rows).unwrap();

    assert_eq!(report.dataset.column_count, 3);
    assert_eq!(report.numeric_stats["amount"].negative_value_ratio, 0.5);
    assert!(report.temporal_stats.contains_key("created"));
    assert!(report.compliance_flags.personal_data_present);
    assert!(report.compliance_flags.monetary_fields_present);
}

#[test]
fn test_config_from_yaml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(file, "logging:").unwrap();
    writeln!(file, "  level: debug").unwrap();
    writeln!(file, "profiler:").unwrap();
    writeln!(file, "  missing_policy: null_only").unwrap();
    writeln!(file, "  stale_after_days: 30").unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
    assert_eq!(config.profiler.stale_after_days, 30);
    // Unspecified fields keep their defaults
    assert_eq!(config.profiler.sample_mask, "***");
    assert_eq!(config.profiler.max_top_values, 3);
}

#[test]
fn test_config_rejects_unknown_extension() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "level = 'info'").unwrap();
    file.flush().unwrap();

    let err = Config::from_file(file.path()).err().unwrap();
    assert!(err.to_string().contains("unsupported"));
}
