mod common;

use common::TestEnv;
use predicates::str::contains;

const BARE_REVISED: &str = "# Defect 200\n\n## Summary\n\n## Details\n\n## Reproduction Steps\n\n## Comments\n\n## Developer Analysis\n\n## Screenshots\n";

#[test]
fn two_words_join_into_one_title() {
    let env = TestEnv::new();
    env.cmd()
        .args(["Defect", "200"])
        .assert()
        .success()
        .stdout(contains("Defect200.md"));
    assert!(env.work.join("Defect 200").is_dir());
    assert_eq!(env.read_document("Defect 200", "Defect200.md"), BARE_REVISED);
}

#[test]
fn single_quoted_argument_keeps_space_in_folder() {
    let env = TestEnv::new();
    let out = env.run_json(&["Defect 200"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["title"], "Defect 200");
    assert_eq!(out["data"]["mode"], "bare");
    assert_eq!(out["data"]["written"], true);
    assert_eq!(env.read_document("Defect 200", "Defect200.md"), BARE_REVISED);
}

#[test]
fn classic_schema_has_no_developer_analysis() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--schema", "classic", "Defect7134"])
        .assert()
        .success();
    assert_eq!(
        env.read_document("Defect7134", "Defect7134.md"),
        "# Defect7134\n\n## Summary\n\n## Details\n\n## Reproduction Steps\n\n## Comments\n\n## Screenshots\n"
    );
}

#[test]
fn prompt_reads_title_from_stdin() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("Defect 300\n")
        .assert()
        .success()
        .stderr(contains("Enter Defect Title:"));
    assert!(env
        .read_document("Defect 300", "Defect300.md")
        .starts_with("# Defect 300\n"));
}

#[test]
fn empty_prompt_answer_is_usage_error() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("\n")
        .assert()
        .code(1)
        .stderr(contains("must not be empty"));
}

#[test]
fn three_arguments_print_usage_and_exit_one() {
    let env = TestEnv::new();
    env.cmd()
        .args(["Defect", "7134", "extra"])
        .assert()
        .code(1)
        .stderr(contains("expected at most two arguments"))
        .stderr(contains("\"Defect 7134\" is a single argument"));
    assert_eq!(std::fs::read_dir(&env.work).unwrap().count(), 0);
}

#[test]
fn existing_folder_aborts_without_changes() {
    let env = TestEnv::new();
    env.cmd().args(["Defect", "400"]).assert().success();
    std::fs::write(
        env.work.join("Defect 400").join("Defect400.md"),
        "my notes\n",
    )
    .unwrap();

    let out = env.run_json_failure(&["Defect", "400"]);
    assert_eq!(out["ok"], false);
    assert_eq!(out["data"]["kind"], "target_already_exists");
    assert_eq!(env.read_document("Defect 400", "Defect400.md"), "my notes\n");
}

#[test]
fn base_dir_flag_overrides_current_directory() {
    let env = TestEnv::new();
    let elsewhere = env.home.join("defects");
    std::fs::create_dir_all(&elsewhere).unwrap();
    env.cmd()
        .arg("--base-dir")
        .arg(&elsewhere)
        .arg("Defect 500")
        .assert()
        .success();
    assert!(elsewhere.join("Defect 500").join("Defect500.md").is_file());
    assert!(!env.work.join("Defect 500").exists());
}

#[test]
fn config_file_supplies_schema_and_base_dir() {
    let env = TestEnv::new();
    let target = env.home.join("configured");
    std::fs::create_dir_all(&target).unwrap();
    env.write_config(&format!(
        "[general]\nbase_dir = {:?}\nschema = \"classic\"\n",
        target.to_str().unwrap()
    ));

    let out = env.run_json(&["Defect", "600"]);
    assert_eq!(out["data"]["schema"], "classic");
    let text = std::fs::read_to_string(target.join("Defect 600").join("Defect600.md")).unwrap();
    assert!(!text.contains("Developer Analysis"));
}

#[test]
fn invalid_config_fails() {
    let env = TestEnv::new();
    env.write_config("[general]\nschema = \"fancy\"\n");
    env.cmd()
        .args(["Defect", "700"])
        .assert()
        .code(1)
        .stderr(contains("invalid config"));
}

#[test]
fn path_like_title_is_rejected() {
    let env = TestEnv::new();
    env.cmd().arg("../escape").assert().code(1);
    assert!(!env.work.parent().unwrap().join("escape").exists());
}

#[test]
fn help_and_version_paths() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--base-dir"))
        .stdout(contains("--schema"));
    env.cmd().arg("--version").assert().success();
}
