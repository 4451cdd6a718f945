use crate::domain::constants::{HEADER_TABLE, MARKUP_SANITIZED_FIELDS, TITLE_HEADER, TITLE_PREFIX};
use crate::domain::models::{FieldKey, FieldMapping, RawRow};
use crate::error::DefectError;

pub fn field_for_header(header: &str) -> Option<FieldKey> {
    HEADER_TABLE
        .iter()
        .find(|(_, accepted)| accepted.contains(&header))
        .map(|(key, _)| *key)
}

/// Replaces markdown/HTML delimiters with backticks, one for one.
pub fn sanitize_markup(value: &str) -> String {
    value.replace(['<', '>'], "`")
}

fn field_value(key: FieldKey, raw: &str) -> String {
    if key == FieldKey::Title {
        return format!("{}{}", TITLE_PREFIX, raw);
    }
    if MARKUP_SANITIZED_FIELDS.contains(&key) {
        return sanitize_markup(raw);
    }
    raw.to_string()
}

pub fn extract_fields(row: &RawRow) -> FieldMapping {
    let mut mapping = FieldMapping::default();
    for (header, value) in &row.cells {
        let Some(key) = field_for_header(header) else {
            tracing::debug!(header = %header, "ignoring unrecognized column");
            continue;
        };
        if !mapping.insert_first(key, field_value(key, value)) {
            tracing::debug!(header = %header, "ignoring duplicate column");
        }
    }
    tracing::info!(
        columns = row.cells.len(),
        fields = mapping.len(),
        "extracted spreadsheet fields"
    );
    mapping
}

/// The title names the output folder, so a missing or blank Item ID is fatal.
pub fn require_title(mapping: &FieldMapping) -> anyhow::Result<&str> {
    let title = mapping
        .get(FieldKey::Title)
        .ok_or(DefectError::MissingRequiredField(TITLE_HEADER))?;
    if title.trim() == TITLE_PREFIX.trim() {
        return Err(DefectError::MissingRequiredField(TITLE_HEADER).into());
    }
    Ok(title)
}
