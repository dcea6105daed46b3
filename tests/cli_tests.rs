use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

mod common;
use common::{gat, init_db_with_employees, setup_test_db, temp_out};

fn add(db: &str, employee: &str, kind: &str, place: &str, lat: &str, lng: &str, at: &str) {
    gat()
        .args([
            "--db", db, "--test", "add", employee, kind, "--place", place, "--lat", lat, "--lng",
            lng, "--at", at,
        ])
        .assert()
        .success();
}

fn seed_day(db: &str) {
    add(db, "123", "entrada", "Sede Norte", "6.2442", "-75.5812", "2024-01-10 08:00");
    add(db, "123", "salida", "Sede Norte", "6.2442", "-75.5812", "2024-01-10 17:30");
    add(db, "456", "entrada", "Sede Norte", "6.2443", "-75.5812", "2024-01-10 08:15");
    add(db, "456", "in", "Bodega Sur", "6.1500", "-75.6000", "2024-01-09 09:00");
}

#[test]
fn test_init_creates_db() {
    let db_path = setup_test_db("cli_init");

    gat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_employee_add_and_list() {
    let db_path = setup_test_db("cli_employee");
    init_db_with_employees(&db_path);

    gat()
        .args(["--db", &db_path, "--test", "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Ana Restrepo"))
        .stdout(contains("456"));

    gat()
        .args(["--db", &db_path, "--test", "employee", "add", "123", "Otra"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_history_json() {
    let db_path = setup_test_db("cli_history");
    init_db_with_employees(&db_path);
    seed_day(&db_path);

    let output = gat()
        .args([
            "--db", &db_path, "--test", "history", "123", "--days", "7", "--as-of", "2024-01-10",
            "--json",
        ])
        .output()
        .expect("run history");
    assert!(output.status.success());

    let rows: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["fecha"], "2024-01-10");
    assert_eq!(rows[0]["horas"], "9.5h");
    assert_eq!(rows[0]["status"], "complete");
    assert_eq!(rows[0]["lugares"][0], "Sede Norte");
}

#[test]
fn test_history_table_and_incomplete_day() {
    let db_path = setup_test_db("cli_history_table");
    init_db_with_employees(&db_path);
    seed_day(&db_path);

    gat()
        .args([
            "--db", &db_path, "--test", "history", "456", "-d", "7", "--as-of", "2024-01-10",
        ])
        .assert()
        .success()
        .stdout(contains("2024-01-10"))
        .stdout(contains("2024-01-09"))
        .stdout(contains("incomplete"))
        .stdout(contains("Bodega Sur"));
}

#[test]
fn test_history_rejects_bad_input() {
    let db_path = setup_test_db("cli_history_bad");
    init_db_with_employees(&db_path);

    for days in ["0", "91", "-1"] {
        gat()
            .args(["--db", &db_path, "--test", "history", "123", "--days", days])
            .assert()
            .failure()
            .stderr(contains("Error"));
    }

    gat()
        .args(["--db", &db_path, "--test", "history", "999", "--days", "7"])
        .assert()
        .failure()
        .stderr(contains("999"));
}

#[test]
fn test_map_json_clusters_nearby_events() {
    let db_path = setup_test_db("cli_map");
    init_db_with_employees(&db_path);
    seed_day(&db_path);

    let output = gat()
        .args(["--db", &db_path, "--test", "map", "--date", "2024-01-10", "--json"])
        .output()
        .expect("run map");
    assert!(output.status.success());

    let markers: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let markers = markers.as_array().unwrap();

    // Three events on the 10th, all within ~11 m of the first.
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["count"], 3);
    assert_eq!(markers[0]["majorityKind"], "entrada");
    assert_eq!(markers[0]["members"][0]["cedula"], "123");
}

#[test]
fn test_stats_json() {
    let db_path = setup_test_db("cli_stats");
    init_db_with_employees(&db_path);
    seed_day(&db_path);

    let output = gat()
        .args(["--db", &db_path, "--test", "stats", "--date", "2024-01-10", "--json"])
        .output()
        .expect("run stats");
    assert!(output.status.success());

    let stats: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(stats["total_registros"], 3);
    assert_eq!(stats["entradas"], 2);
    assert_eq!(stats["salidas"], 1);
    assert_eq!(stats["auxiliares_activos"], 2);
    assert_eq!(stats["lugares_mas_visitados"][0]["lugar"], "Sede Norte");
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("cli_add_bad");
    init_db_with_employees(&db_path);

    gat()
        .args([
            "--db", &db_path, "--test", "add", "123", "descanso", "--place", "X", "--lat", "6.0",
            "--lng", "-75.0",
        ])
        .assert()
        .failure();

    gat()
        .args([
            "--db", &db_path, "--test", "add", "123", "entrada", "--place", "X", "--lat", "95.0",
            "--lng", "-75.0",
        ])
        .assert()
        .failure()
        .stderr(contains("coordinates"));

    gat()
        .args([
            "--db", &db_path, "--test", "add", "999", "entrada", "--place", "X", "--lat", "6.0",
            "--lng", "-75.0",
        ])
        .assert()
        .failure();
}

#[test]
fn test_import_then_map() {
    let db_path = setup_test_db("cli_import");
    init_db_with_employees(&db_path);

    let csv_path = temp_out("cli_import_src", "csv");
    fs::write(
        &csv_path,
        "employee_id,kind,place,latitude,longitude,timestamp\n\
         123,entrada,Sede Norte,6.2442,-75.5812,2024-02-01 08:00\n\
         456,salida,Sede Norte,not-a-number,-75.5812,2024-02-01 17:00\n\
         777,entrada,Sede Norte,6.2442,-75.5812,2024-02-01 08:00\n",
    )
    .unwrap();

    gat()
        .args(["--db", &db_path, "--test", "import", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 2 events (1 skipped)"));

    let output = gat()
        .args(["--db", &db_path, "--test", "map", "--date", "2024-02-01", "--json"])
        .output()
        .expect("run map");
    let markers: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(markers.as_array().unwrap().len(), 1);
    assert_eq!(markers[0]["count"], 1);

    fs::remove_file(&csv_path).ok();
}

#[test]
fn test_export_history_csv_and_map_json() {
    let db_path = setup_test_db("cli_export");
    init_db_with_employees(&db_path);
    seed_day(&db_path);

    let csv_out = temp_out("cli_export_history", "csv");
    gat()
        .args([
            "--db", &db_path, "--test", "export", "--view", "history", "--format", "csv",
            "--file", &csv_out, "--employee", "123", "--days", "7", "--as-of", "2024-01-10",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("csv written");
    assert!(content.starts_with("fecha,entradas,salidas,horas"));
    assert!(content.contains("2024-01-10,1,1,9.5h"));

    let json_out = temp_out("cli_export_map", "json");
    gat()
        .args([
            "--db", &db_path, "--test", "export", "--view", "map", "--file", &json_out,
            "--date", "2024-01-10", "--force",
        ])
        .assert()
        .success();

    let markers: Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("json written")).unwrap();
    assert_eq!(markers[0]["count"], 3);

    // History export needs an employee.
    gat()
        .args([
            "--db", &db_path, "--test", "export", "--view", "history", "--file", &json_out,
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("--employee"));

    fs::remove_file(&csv_out).ok();
    fs::remove_file(&json_out).ok();
}

#[test]
fn test_export_checks_employee_before_overwrite_prompt() {
    let db_path = setup_test_db("cli_export_order");
    init_db_with_employees(&db_path);

    let existing = temp_out("cli_export_order", "json");
    fs::write(&existing, "[]").unwrap();

    gat()
        .args([
            "--db", &db_path, "--test", "export", "--view", "history", "--file", &existing,
        ])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stdout(contains("Overwrite?").not())
        .stderr(contains("--employee"));

    assert_eq!(fs::read_to_string(&existing).unwrap(), "[]");
    fs::remove_file(&existing).ok();
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_employees(&db_path);
    seed_day(&db_path);

    gat()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("employee_add"))
        .stdout(contains("add"));
}
