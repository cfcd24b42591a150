use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn valid_record_json() -> &'static str {
    r#"
{
  "id": "6f1c2a9e-3b7d-4c55-9a10-2f8e6d4b1c07",
  "hour": 7,
  "minute": 5,
  "daysActive": {
    "sunday": false,
    "monday": true,
    "tuesday": false,
    "wednesday": true,
    "thursday": false,
    "friday": true,
    "saturday": false
  }
}
"#
}

#[test]
fn default_alarm_renders_muted_text() {
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("12:30 (off)  S M T W T F S"));
}

#[test]
fn few_days_render_abbreviated_list() {
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.arg("--hour")
        .arg("9")
        .arg("--minute")
        .arg("5")
        .arg("--days")
        .arg("fri,Monday,wed")
        .assert()
        .success()
        .stdout(predicate::str::contains("09:05  Mon, Wed, Fri"));
}

#[test]
fn json_output_carries_all_seven_days() {
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.arg("--all-days")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"daysActive\""))
        .stdout(predicate::str::contains("\"sunday\": true"))
        .stdout(predicate::str::contains("\"saturday\": true"));
}

#[test]
fn record_renders_as_html_card() {
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.arg("--record")
        .arg(valid_record_json())
        .arg("--format")
        .arg("html")
        .assert()
        .success()
        .stdout(predicate::str::contains("rp-container-alarms"))
        .stdout(predicate::str::contains(
            "alarm-6f1c2a9e-3b7d-4c55-9a10-2f8e6d4b1c07",
        ))
        .stdout(predicate::str::contains(">Mon, Wed, Fri<"));
}

#[test]
fn record_can_be_read_from_stdin() {
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.arg("--record")
        .arg("-")
        .write_stdin(valid_record_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("07:05  Mon, Wed, Fri"));
}

#[test]
fn abbreviation_threshold_is_configurable() {
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.arg("--days")
        .arg("mon,tue")
        .arg("--abbreviate-up-to")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("12:30  S M T W T F S"));
}

#[test]
fn out_of_range_hour_fails_with_clear_error() {
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.arg("--hour")
        .arg("24")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time 24:30"));
}

#[test]
fn unknown_day_key_in_record_fails() {
    let record = valid_record_json().replace("\"saturday\"", "\"caturday\"");
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.arg("--record")
        .arg(record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown day key 'caturday'"));
}

#[test]
fn malformed_record_fails_with_clear_error() {
    let mut cmd = cargo_bin_cmd!("alarmcard");
    cmd.arg("--record")
        .arg("{ not-valid-json ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}
