//! End-to-end tests for the enrichment pipeline.

use crate::common::{cell, read_csv, write_file, write_reference_tables};
use rw_pipeline::enrich;
use rw_types::EnrichConfig;
use serde_json::Value;

fn parse_analysis(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

#[test]
fn test_single_ip_resolves_with_identifier_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\n\
         allow-web,\"['10.1.1.1']\",[]\n",
    );

    let stats = enrich::run(&config).unwrap();

    let (headers, rows) = read_csv(&config.output);
    let analysis = parse_analysis(&cell(&headers, &rows, 0, "Source IP Analysis"));

    let entry = &analysis["10.1.1.1"];
    assert_eq!(entry["file"], "ip.csv");
    assert_eq!(entry["environment"], "prod");
    assert_eq!(entry["identifier"], "I100");
    assert_eq!(entry["identifier_name"], "Payments");
    assert_eq!(entry["function"], Value::Null);
    assert_eq!(entry["location"], Value::Null);
    assert_eq!(entry["infra"], Value::Null);

    assert_eq!(stats.source.mapped, 1);
    assert_eq!(stats.source.ips, 1);
    assert_eq!(stats.destination.mapped, 0);
}

#[test]
fn test_host_route_resolves_like_single_ip() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\n\
         allow-host,\"['10.1.1.1/32']\",\"['10.1.1.1']\"\n",
    );

    enrich::run(&config).unwrap();

    let (headers, rows) = read_csv(&config.output);
    let source = parse_analysis(&cell(&headers, &rows, 0, "Source IP Analysis"));
    let dest = parse_analysis(&cell(&headers, &rows, 0, "Destination IP Analysis"));

    // Same entry content; only the map key keeps the original spelling.
    assert_eq!(source["10.1.1.1/32"], dest["10.1.1.1"]);
}

#[test]
fn test_subnet_priority_first_table_wins() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_file(dir.path(), "t1.csv", "subnet,environment\n");
    let second = write_file(
        dir.path(),
        "t2.csv",
        "subnet,environment\n10.2.0.0/16,from-t2\n",
    );
    let third = write_file(
        dir.path(),
        "t3.csv",
        "subnet,environment\n10.2.0.0/16,from-t3\n",
    );
    let ip = write_file(dir.path(), "ip.csv", "ip,environment\n");
    let itam = write_file(dir.path(), "itam.csv", "identifier,name\n");
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\n\
         r1,\"['10.2.0.0/16']\",[]\n",
    );

    let config = EnrichConfig::new(dir.path().join("rules.csv"), dir.path().join("out.csv"))
        .with_ip_table(ip)
        .with_subnet_table(empty)
        .with_subnet_table(second)
        .with_subnet_table(third)
        .with_id_name_table(itam)
        .with_backup(false);

    let stats = enrich::run(&config).unwrap();

    let (headers, rows) = read_csv(&config.output);
    let analysis = parse_analysis(&cell(&headers, &rows, 0, "Source IP Analysis"));
    assert_eq!(analysis["10.2.0.0/16"]["file"], "t2.csv");
    assert_eq!(analysis["10.2.0.0/16"]["environment"], "from-t2");

    assert_eq!(stats.source.by_table.get("t2.csv"), Some(&1));
    assert_eq!(stats.source.by_table.get("t3.csv"), None);
}

#[test]
fn test_malformed_list_cell_degrades_to_empty_map() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\n\
         broken,totally broken cell,[]\n\
         fine,\"['10.1.1.1']\",[]\n",
    );

    let stats = enrich::run(&config).unwrap();

    let (headers, rows) = read_csv(&config.output);
    assert_eq!(cell(&headers, &rows, 0, "Source IP Analysis"), "{}");

    let fine = parse_analysis(&cell(&headers, &rows, 1, "Source IP Analysis"));
    assert_eq!(fine["10.1.1.1"]["environment"], "prod");

    assert_eq!(stats.rows_processed, 2);
    assert_eq!(stats.source.mapped, 1);
}

#[test]
fn test_host_shaped_subnet_never_consults_ip_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    // 10.1.1.1 is present in the IP table, but a /24 token is a subnet and
    // only the subnet tables may resolve it.
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\n\
         r1,\"['10.1.1.1/24']\",[]\n",
    );

    let stats = enrich::run(&config).unwrap();

    let (headers, rows) = read_csv(&config.output);
    assert_eq!(cell(&headers, &rows, 0, "Source IP Analysis"), "{}");
    assert_eq!(stats.source.mapped, 0);
    assert_eq!(stats.source.unmatched, 1);
}

#[test]
fn test_row_count_and_column_set_invariant() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Port,Source IP,Destination IP\n\
         r1,443,\"['10.1.1.1']\",[]\n\
         r2,22,[],\"['10.0.0.0/24']\"\n\
         r3,80,[],[]\n",
    );

    enrich::run(&config).unwrap();

    let (headers, rows) = read_csv(&config.output);
    assert_eq!(
        headers,
        vec![
            "Rule",
            "Port",
            "Source IP",
            "Destination IP",
            "Source IP Analysis",
            "Destination IP Analysis",
        ]
    );
    assert_eq!(rows.len(), 3);

    // Passthrough cells survive untouched, in order.
    assert_eq!(cell(&headers, &rows, 0, "Rule"), "r1");
    assert_eq!(cell(&headers, &rows, 1, "Port"), "22");
    assert_eq!(cell(&headers, &rows, 2, "Source IP"), "[]");
}

#[test]
fn test_unresolved_token_omitted_and_counted() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\n\
         r1,\"['10.9.9.9', '10.1.1.1']\",[]\n",
    );

    let stats = enrich::run(&config).unwrap();

    let (headers, rows) = read_csv(&config.output);
    let analysis = parse_analysis(&cell(&headers, &rows, 0, "Source IP Analysis"));
    assert!(analysis.get("10.9.9.9").is_none());
    assert!(analysis.get("10.1.1.1").is_some());
    assert_eq!(stats.source.unmatched, 1);
}

#[test]
fn test_enrichment_is_deterministic_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\n\
         r1,\"['10.1.1.1', '10.0.0.0/24', '10.2.0.0/16']\",\"['10.1.1.2']\"\n",
    );

    enrich::run(&config).unwrap();
    let first = read_csv(&config.output);

    let rerun = config.clone();
    let rerun = EnrichConfig {
        output: dir.path().join("rules_out_2.csv"),
        ..rerun
    };
    enrich::run(&rerun).unwrap();
    let second = read_csv(&rerun.output);

    let (headers, rows) = first;
    let (headers2, rows2) = second;
    for column in ["Source IP Analysis", "Destination IP Analysis"] {
        assert_eq!(
            cell(&headers, &rows, 0, column),
            cell(&headers2, &rows2, 0, column)
        );
    }
}

#[test]
fn test_missing_input_files_reported_together() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_reference_tables(dir.path());
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\nr1,[],[]\n",
    );
    config.ip_table = dir.path().join("absent_ip.csv");
    config.id_name_table = dir.path().join("absent_itam.csv");

    let err = enrich::run(&config).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("absent_ip.csv"));
    assert!(msg.contains("absent_itam.csv"));
    assert!(!config.output.exists());
}

#[test]
fn test_missing_rule_column_fails_before_write() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    write_file(dir.path(), "rules.csv", "Rule,Source IP\nr1,[]\n");

    let err = enrich::run(&config).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'Destination IP'"));
    assert!(msg.contains("Rule, Source IP"));
    assert!(!config.output.exists());
}

#[test]
fn test_backup_created_before_write() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path()).with_backup(true);
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\nr1,[],[]\n",
    );

    enrich::run(&config).unwrap();

    let backups: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            name.starts_with("rules_backup_").then_some(name)
        })
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn test_stats_breakdown_over_mixed_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_reference_tables(dir.path());
    write_file(
        dir.path(),
        "rules.csv",
        "Rule,Source IP,Destination IP\n\
         r1,\"['10.1.1.1', '10.1.1.2/32', '10.0.0.0/24', '10.2.0.0/16', 'garbage']\",\"['10.1.1.1']\"\n",
    );

    let stats = enrich::run(&config).unwrap();

    assert_eq!(stats.source.mapped, 4);
    // Host routes count as IPs; only real prefixes count as subnets.
    assert_eq!(stats.source.ips, 2);
    assert_eq!(stats.source.subnets, 2);
    assert_eq!(stats.source.unparseable, 1);
    assert_eq!(stats.source.by_table.get("ip.csv"), Some(&2));
    assert_eq!(stats.source.by_table.get("ipam_subnet.csv"), Some(&1));
    assert_eq!(stats.source.by_table.get("dev_subnet.csv"), Some(&1));

    assert_eq!(stats.destination.mapped, 1);
    assert!(stats.duration().is_some());
}
