//! Common utilities for pipeline integration tests.

use rw_types::EnrichConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a fixture file and returns its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Reads a CSV back as (headers, rows).
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

/// Returns the cell of `column` in row `row`.
pub fn cell(headers: &[String], rows: &[Vec<String>], row: usize, column: &str) -> String {
    let idx = headers.iter().position(|h| h == column).unwrap();
    rows[row][idx].clone()
}

/// Standard reference tables used by most enrich tests:
/// - `ip.csv` with `10.1.1.1` (prod, I100) and `10.1.1.2` (dev, no id)
/// - `ipam_subnet.csv` with `10.0.0.0/24` (prod, I200)
/// - `dev_subnet.csv` with `10.0.0.0/24` (dev) and `10.2.0.0/16` (dev)
/// - `itam.csv` naming I100 "Payments" and I200 "Core Network"
pub fn write_reference_tables(dir: &Path) -> EnrichConfig {
    let ip = write_file(
        dir,
        "ip.csv",
        "ip,environment,function,location,infra,identifier\n\
         10.1.1.1,prod,,,,I100\n\
         10.1.1.2,dev,,,,\n",
    );
    let ipam = write_file(
        dir,
        "ipam_subnet.csv",
        "subnet,environment,function,location,infra,identifier\n\
         10.0.0.0/24,prod,,,,I200\n",
    );
    let dev = write_file(
        dir,
        "dev_subnet.csv",
        "subnet,environment,function,location,infra,identifier\n\
         10.0.0.0/24,dev,,,,\n\
         10.2.0.0/16,dev,,,,\n",
    );
    let itam = write_file(
        dir,
        "itam.csv",
        "identifier,name\n\
         I100,Payments\n\
         I200,Core Network\n",
    );

    EnrichConfig::new(dir.join("rules.csv"), dir.join("rules_out.csv"))
        .with_ip_table(ip)
        .with_subnet_table(ipam)
        .with_subnet_table(dev)
        .with_id_name_table(itam)
        .with_backup(false)
}
