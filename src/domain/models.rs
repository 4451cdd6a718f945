use crate::cli::SchemaRevision;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorReport {
    pub kind: String,
    pub message: String,
}

/// Canonical slots of the defect document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FieldKey {
    Title,
    Summary,
    DetectedInRelease,
    CreationDate,
    CreatorFullName,
    Environment,
    CustomerDesiredRelease,
    Description,
    Comments,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "Title",
            FieldKey::Summary => "Summary",
            FieldKey::DetectedInRelease => "DetectedInRelease",
            FieldKey::CreationDate => "CreationDate",
            FieldKey::CreatorFullName => "CreatorFullName",
            FieldKey::Environment => "Environment",
            FieldKey::CustomerDesiredRelease => "CustomerDesiredRelease",
            FieldKey::Description => "Description",
            FieldKey::Comments => "Comments",
        }
    }
}

/// Header row paired with the first data row of a sheet, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }
}

/// Values extracted from a spreadsheet row. A key is present only when its
/// header was found; a present key may still hold an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    values: BTreeMap<FieldKey, String>,
}

impl FieldMapping {
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Returns the value only when it carries non-whitespace text.
    pub fn non_blank(&self, key: FieldKey) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// First writer wins; returns false when the key was already set.
    pub(crate) fn insert_first(&mut self, key: FieldKey, value: String) -> bool {
        if self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key, value);
        true
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Bare,
    Populated,
}

#[derive(Serialize)]
pub struct ScaffoldReport {
    pub title: String,
    pub folder: String,
    pub document: String,
    pub mode: RenderMode,
    pub schema: SchemaRevision,
    pub populated_fields: Vec<String>,
    pub written: bool,
}
