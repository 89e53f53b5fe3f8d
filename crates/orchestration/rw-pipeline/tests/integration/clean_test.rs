//! End-to-end tests for the cleaning pipeline.

use crate::common::{cell, read_csv, write_file};
use rw_pipeline::clean;
use rw_types::CleanConfig;

fn test_config(dir: &std::path::Path) -> CleanConfig {
    CleanConfig::new(dir.join("rules.csv"), dir.join("rules_clean.csv")).with_backup(false)
}

#[test]
fn test_clean_extracts_group_ips_and_drops_ranges() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP,Source Groups,Destination Groups\n\
         r1,\"['10.1.1.1', '0.0.0.0-9.255.255.255']\",[],\"['web-servers', '10.5.5.5', '10.6.0.0/16']\",\"['db-servers']\"\n",
    );

    let config = test_config(dir.path());
    let summary = clean::run(&config).unwrap();

    assert_eq!(summary.rows_processed, 1);
    assert_eq!(summary.source_extracted, 2);
    assert_eq!(summary.dest_extracted, 0);
    assert_eq!(summary.source_ranges_removed, 1);

    let (headers, rows) = read_csv(&config.output);
    assert_eq!(
        cell(&headers, &rows, 0, "Source IP"),
        r#"["10.1.1.1","10.5.5.5","10.6.0.0/16"]"#
    );
    assert_eq!(cell(&headers, &rows, 0, "Destination IP"), "[]");

    // Group columns pass through untouched.
    assert_eq!(
        cell(&headers, &rows, 0, "Source Groups"),
        "['web-servers', '10.5.5.5', '10.6.0.0/16']"
    );
}

#[test]
fn test_clean_preserves_row_count_and_columns() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP,Source Groups,Destination Groups\n\
         r1,[],[],[],[]\n\
         r2,\"['10.1.1.1']\",[],[],\"['192.168.0.0/16']\"\n",
    );

    let config = test_config(dir.path());
    let summary = clean::run(&config).unwrap();

    assert_eq!(summary.rows_processed, 2);
    assert_eq!(summary.dest_extracted, 1);

    let (headers, rows) = read_csv(&config.output);
    assert_eq!(rows.len(), 2);
    assert_eq!(headers.len(), 5);
    assert_eq!(
        cell(&headers, &rows, 1, "Destination IP"),
        r#"["192.168.0.0/16"]"#
    );
}

#[test]
fn test_clean_missing_groups_column_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\nr1,[],[]\n",
    );

    let config = test_config(dir.path());
    let err = clean::run(&config).unwrap_err();
    assert!(err.to_string().contains("'Source Groups'"));
    assert!(!config.output.exists());
}
