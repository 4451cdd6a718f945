use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const USAGE_TEXT: &str = "\
This program takes a defect title as one or two arguments, or a single spreadsheet path.

Example: Defect7134 is a single argument, because it has no space.
Example: Defect 7134 is two arguments, because of the space and the lack of quotes.
Example: \"Defect 7134\" is a single argument, because the quotes include the space.
Example: export.xlsx pre-fills the document from the first data row of the first sheet.

Run without arguments to be prompted for the title.";

#[derive(Parser, Debug)]
#[command(
    name = "defect-init",
    version,
    about = "Scaffold a defect folder and markdown document",
    after_help = USAGE_TEXT
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Directory in which the defect folder is created")]
    pub base_dir: Option<PathBuf>,
    #[arg(long, value_enum, help = "Document schema revision")]
    pub schema: Option<SchemaRevision>,
    #[arg(long, help = "Configuration file (default: ~/.config/defect-init/config.toml)")]
    pub config: Option<PathBuf>,
    #[arg(help = "Defect title words, or a spreadsheet path")]
    pub args: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemaRevision {
    /// Summary, Details, Reproduction Steps, Comments, Screenshots.
    Classic,
    /// Adds Developer Analysis and renders the description as bullets.
    #[default]
    Revised,
}

impl SchemaRevision {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaRevision::Classic => "classic",
            SchemaRevision::Revised => "revised",
        }
    }
}
