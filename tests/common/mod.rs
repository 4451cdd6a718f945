#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const COMMENTS_HEADER: &str = "Comments (Click Add Comment before commenting)";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("defect-init");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.work);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .code(1)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn read_document(&self, folder: &str, file: &str) -> String {
        fs::read_to_string(self.work.join(folder).join(file)).expect("read document")
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.home.join(".config/defect-init");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }

    /// Writes a workbook whose first sheet holds `rows` starting at A1.
    pub fn write_workbook(&self, name: &str, rows: &[&[&str]]) -> PathBuf {
        let path = self.work.join(name);
        write_workbook(&path, rows);
        path
    }
}

pub fn write_workbook(path: &Path, rows: &[&[&str]]) {
    let mut book = umya_spreadsheet::new_file();
    fill_rows(book.get_active_sheet_mut(), rows);
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write workbook");
}

/// Like `write_workbook`, then stores `serial` at `coordinate` as a number
/// formatted `yyyy-mm-dd`, the way exported date columns arrive.
pub fn write_workbook_with_date(path: &Path, rows: &[&[&str]], coordinate: &str, serial: f64) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    fill_rows(sheet, rows);
    sheet.get_cell_mut(coordinate).set_value_number(serial);
    sheet
        .get_style_mut(coordinate)
        .get_number_format_mut()
        .set_format_code(umya_spreadsheet::NumberingFormat::FORMAT_DATE_YYYYMMDD);
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write workbook");
}

fn fill_rows(sheet: &mut umya_spreadsheet::Worksheet, rows: &[&[&str]]) {
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let coordinate = format!("{}{}", column_letter(c), r + 1);
            sheet.get_cell_mut(coordinate.as_str()).set_value(*value);
        }
    }
}

fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}
