//! End-to-end tests running the compiled binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn vacancy_cli(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vacancy-cli"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("run vacancy-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn prints_json_for_default_input_path() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("logement_vacants_communes.csv"),
        "CODGEO_25;pp_vacant_plus_2ans_25\n01001;12\n01002;s\n01003;0\n",
    )
    .unwrap();

    let output = vacancy_cli(&[], dir.path());
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "{\n  \"01001\": {\n    \"pp_vacant_plus_2ans_25\": 12\n  },\n  \
         \"01003\": {\n    \"pp_vacant_plus_2ans_25\": 0\n  }\n}\n"
    );
}

#[test]
fn wide_counts_pass_through_unchanged() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("logement_vacants_communes.csv"),
        "CODGEO_25;pp_vacant_plus_2ans_25\n01001;12\n01002;123456789012345678901234\n",
    )
    .unwrap();

    let output = vacancy_cli(&[], dir.path());
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "{\n  \"01001\": {\n    \"pp_vacant_plus_2ans_25\": 12\n  },\n  \
         \"01002\": {\n    \"pp_vacant_plus_2ans_25\": 123456789012345678901234\n  }\n}\n"
    );
}

#[test]
fn explicit_path_and_subcommand_agree() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("communes.csv");
    fs::write(&path, "CODGEO_25;pp_vacant_plus_2ans_25\n02001;5\n02001;9\n").unwrap();
    let path = path.to_str().unwrap();

    let bare = vacancy_cli(&[path], dir.path());
    let sub = vacancy_cli(&["extract", path], dir.path());
    assert!(bare.status.success());
    assert_eq!(bare.stdout, sub.stdout);
    assert_eq!(
        stdout(&bare),
        "{\n  \"02001\": {\n    \"pp_vacant_plus_2ans_25\": 9\n  }\n}\n"
    );
}

#[test]
fn missing_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = vacancy_cli(&[], dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CSV file not found"));
}

#[test]
fn missing_column_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "CODGEO_25;autre\n01001;3\n").unwrap();

    let output = vacancy_cli(&[path.to_str().unwrap()], dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pp_vacant_plus_2ans_25"));
}

#[test]
fn summary_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("communes.csv");
    fs::write(&path, "CODGEO_25;pp_vacant_plus_2ans_25\n01001;4\n").unwrap();

    let output = vacancy_cli(&[path.to_str().unwrap(), "--summary"], dir.path());
    assert!(output.status.success());
    let document: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout stays pure json");
    assert_eq!(document["01001"]["pp_vacant_plus_2ans_25"], 4);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Municipalities"));
}

#[test]
fn columns_lists_headers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("communes.csv");
    fs::write(&path, "CODGEO_25;LIBGEO;pp_vacant_plus_2ans_25\n").unwrap();

    let output = vacancy_cli(&["columns", path.to_str().unwrap()], dir.path());
    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.contains("LIBGEO"));
    assert!(listing.contains("pp_vacant_plus_2ans_25"));
}
