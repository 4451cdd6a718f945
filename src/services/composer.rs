use crate::cli::SchemaRevision;
use crate::domain::constants::{
    DETAIL_BULLETS, HEADING_COMMENTS, HEADING_DESCRIPTION, HEADING_DETAILS,
    HEADING_DEVELOPER_ANALYSIS, HEADING_REPRODUCTION, HEADING_SCREENSHOTS, HEADING_SUMMARY,
    REPRODUCTION_PLACEHOLDER,
};
use crate::domain::models::{Document, FieldKey, FieldMapping, RenderMode, Section};

impl Document {
    pub fn render(&self) -> String {
        let mut out = format!("# {}\n\n", self.title);
        for (i, section) in self.sections.iter().enumerate() {
            out.push_str("## ");
            out.push_str(section.heading);
            out.push('\n');
            for line in &section.body {
                out.push_str(line);
                out.push('\n');
            }
            if i + 1 < self.sections.len() {
                out.push('\n');
            }
        }
        out
    }
}

pub fn render_mode(fields: Option<&FieldMapping>) -> RenderMode {
    if fields.is_some() {
        RenderMode::Populated
    } else {
        RenderMode::Bare
    }
}

fn section(heading: &'static str, body: Vec<String>) -> Section {
    Section { heading, body }
}

fn block(fields: &FieldMapping, key: FieldKey) -> Vec<String> {
    fields
        .non_blank(key)
        .map(|v| vec![v.to_string()])
        .unwrap_or_default()
}

fn detail_lines(fields: &FieldMapping) -> Vec<String> {
    DETAIL_BULLETS
        .iter()
        .filter_map(|(key, label)| {
            fields
                .non_blank(*key)
                .map(|v| format!("* {}: {}", label, v))
        })
        .collect()
}

fn description_lines(fields: &FieldMapping, schema: SchemaRevision) -> Vec<String> {
    let Some(description) = fields.non_blank(FieldKey::Description) else {
        return Vec::new();
    };
    match schema {
        SchemaRevision::Classic => vec![description.to_string()],
        SchemaRevision::Revised => description
            .split("\r\n")
            .flat_map(|part| part.split(['\r', '\n']))
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("* {}", line))
            .collect(),
    }
}

/// Builds the document skeleton. Without a field mapping every section is
/// left blank and the Description section is omitted.
pub fn compose(title: &str, fields: Option<&FieldMapping>, schema: SchemaRevision) -> Document {
    let mut sections = Vec::new();
    match fields {
        None => {
            sections.push(section(HEADING_SUMMARY, vec![]));
            sections.push(section(HEADING_DETAILS, vec![]));
            sections.push(section(HEADING_REPRODUCTION, vec![]));
            sections.push(section(HEADING_COMMENTS, vec![]));
        }
        Some(fields) => {
            sections.push(section(HEADING_SUMMARY, block(fields, FieldKey::Summary)));
            sections.push(section(HEADING_DETAILS, detail_lines(fields)));
            sections.push(section(
                HEADING_DESCRIPTION,
                description_lines(fields, schema),
            ));
            sections.push(section(
                HEADING_REPRODUCTION,
                vec![REPRODUCTION_PLACEHOLDER.to_string()],
            ));
            sections.push(section(HEADING_COMMENTS, block(fields, FieldKey::Comments)));
        }
    }
    if schema == SchemaRevision::Revised {
        sections.push(section(HEADING_DEVELOPER_ANALYSIS, vec![]));
    }
    sections.push(section(HEADING_SCREENSHOTS, vec![]));

    Document {
        title: title.to_string(),
        sections,
    }
}
