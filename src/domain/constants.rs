use crate::domain::models::FieldKey;

/// Accepted spreadsheet header text per canonical field. Matching is exact
/// and case-sensitive; headers not listed here are ignored.
pub const HEADER_TABLE: &[(FieldKey, &[&str])] = &[
    (FieldKey::Title, &["Item ID"]),
    (FieldKey::Summary, &["Summary"]),
    (FieldKey::Description, &["Description"]),
    (
        FieldKey::Comments,
        &["Comments (Click Add Comment before commenting)"],
    ),
    (FieldKey::CreationDate, &["Creation Date"]),
    (FieldKey::DetectedInRelease, &["Detected in Release"]),
    (FieldKey::Environment, &["Environment"]),
    (FieldKey::CreatorFullName, &["Creator Full Name"]),
    (FieldKey::CustomerDesiredRelease, &["Customer Desired Release"]),
];

/// Fields whose text is embedded verbatim in markdown and must not carry `<`/`>`.
pub const MARKUP_SANITIZED_FIELDS: &[FieldKey] = &[FieldKey::Description, FieldKey::Comments];

pub const TITLE_PREFIX: &str = "Defect ";

/// Header label reported when the title column is missing.
pub const TITLE_HEADER: &str = "Item ID";

pub const DOCUMENT_EXTENSION: &str = "md";

pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "xla", "xlam", "ods"];

pub const TITLE_PROMPT: &str = "Enter Defect Title: ";

pub const REPRODUCTION_PLACEHOLDER: &str =
    "**TODO**: Pull Reproduction Steps from the Description section";

pub const HEADING_SUMMARY: &str = "Summary";
pub const HEADING_DETAILS: &str = "Details";
pub const HEADING_DESCRIPTION: &str = "Description";
pub const HEADING_REPRODUCTION: &str = "Reproduction Steps";
pub const HEADING_COMMENTS: &str = "Comments";
pub const HEADING_DEVELOPER_ANALYSIS: &str = "Developer Analysis";
pub const HEADING_SCREENSHOTS: &str = "Screenshots";

/// Details bullets in display order.
pub const DETAIL_BULLETS: &[(FieldKey, &str)] = &[
    (FieldKey::DetectedInRelease, "Detected In"),
    (FieldKey::CreationDate, "Creation Date"),
    (FieldKey::CreatorFullName, "Creator Full Name"),
    (FieldKey::Environment, "Environment"),
    (FieldKey::CustomerDesiredRelease, "Customer Desired Release"),
];
