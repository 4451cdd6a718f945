use crate::domain::constants::TITLE_PROMPT;
use crate::error::DefectError;
use crate::services::spreadsheet::is_spreadsheet_path;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleSource {
    Prompt,
    Words(String),
    Spreadsheet(PathBuf),
}

pub fn classify_args(args: &[String]) -> anyhow::Result<TitleSource> {
    match args {
        [] => Ok(TitleSource::Prompt),
        [single] if is_spreadsheet_path(Path::new(single)) => {
            Ok(TitleSource::Spreadsheet(PathBuf::from(single)))
        }
        [single] => Ok(TitleSource::Words(single.clone())),
        [first, second] => Ok(TitleSource::Words(format!("{} {}", first, second))),
        _ => Err(DefectError::Usage(format!(
            "expected at most two arguments, got {}",
            args.len()
        ))
        .into()),
    }
}

pub fn prompt_title<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<String> {
    write!(output, "{}", TITLE_PROMPT)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Trims the title and rejects values that cannot name a single folder.
pub fn validate_title(raw: &str) -> anyhow::Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DefectError::Usage("defect title must not be empty".to_string()).into());
    }
    if title.contains(['/', '\\']) || title == "." || title == ".." {
        return Err(DefectError::Usage(format!(
            "defect title cannot be used as a folder name: {}",
            title
        ))
        .into());
    }
    Ok(title.to_string())
}
