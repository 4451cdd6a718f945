use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DefectError {
    #[error("{0}")]
    Usage(String),
    #[error(
        "a folder and/or file for this work item already exists: {}",
        .0.display()
    )]
    TargetAlreadyExists(PathBuf),
    #[error("spreadsheet has no usable '{0}' column")]
    MissingRequiredField(&'static str),
    #[error("failed to read spreadsheet {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
}

impl DefectError {
    pub fn kind(&self) -> &'static str {
        match self {
            DefectError::Usage(_) => "usage",
            DefectError::TargetAlreadyExists(_) => "target_already_exists",
            DefectError::MissingRequiredField(_) => "missing_required_field",
            DefectError::Decode { .. } => "decode",
        }
    }
}
