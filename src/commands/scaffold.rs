use crate::domain::models::{FieldMapping, RenderMode, ScaffoldReport};
use crate::services::composer::{compose, render_mode};
use crate::services::config::Settings;
use crate::services::extractor::{extract_fields, require_title};
use crate::services::output::print_one;
use crate::services::spreadsheet::read_first_record;
use crate::services::storage::{create_target, target_for, write_document};
use crate::services::title::{classify_args, prompt_title, validate_title, TitleSource};
use crate::Cli;

pub fn handle_scaffold(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let (title, fields) = match classify_args(&cli.args)? {
        TitleSource::Prompt => {
            let stdin = std::io::stdin();
            let raw = prompt_title(&mut stdin.lock(), &mut std::io::stderr())?;
            (validate_title(&raw)?, None)
        }
        TitleSource::Words(words) => (validate_title(&words)?, None),
        TitleSource::Spreadsheet(path) => {
            let row = read_first_record(&path)?;
            let fields = extract_fields(&row);
            let title = validate_title(require_title(&fields)?)?;
            (title, Some(fields))
        }
    };

    let report = scaffold(settings, &title, fields.as_ref())?;
    print_one(cli.json, report, |r| {
        if r.written {
            format!("created {}", r.document)
        } else {
            format!("left {} unchanged", r.document)
        }
    })
}

pub fn scaffold(
    settings: &Settings,
    title: &str,
    fields: Option<&FieldMapping>,
) -> anyhow::Result<ScaffoldReport> {
    let target = target_for(&settings.base_dir, title);
    create_target(&target)?;

    let document = compose(title, fields, settings.schema);
    let written = write_document(&target.document, &document.render())?;
    let mode = render_mode(fields);
    tracing::info!(title = %title, mode = ?mode, written, "scaffolded work item");

    Ok(ScaffoldReport {
        title: title.to_string(),
        folder: target.folder.display().to_string(),
        document: target.document.display().to_string(),
        mode,
        schema: settings.schema,
        populated_fields: match mode {
            RenderMode::Bare => Vec::new(),
            RenderMode::Populated => fields
                .map(|f| f.keys().map(|k| k.as_str().to_string()).collect())
                .unwrap_or_default(),
        },
        written,
    })
}
