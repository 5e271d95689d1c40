//! The wire document the CyanPrint engine consumes.
//!
//! A descriptor travels inside an envelope naming the templating processor
//! that renders the scaffold, one file rule (include glob + exclusions), and
//! the substitution variables. The envelope's plugin list is for engine-side
//! plugins and is always empty for generated scaffolds; the user's plugin
//! dependencies live in the `plugins` substitution variable instead.

use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::assemble::Descriptor;

/// The templating processor that renders generated scaffolds.
pub const RENDER_PROCESSOR: &str = "kirinnee/dotnet-handlebar:11";

/// Complete document handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CyanDocument {
    pub processors: Vec<TemplateProcessor>,
    pub plugins: Vec<PluginEntry>,
}

/// One processor invocation: which files it touches and with which variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateProcessor {
    pub name: String,
    pub files: Vec<FileRule>,
    pub config: ProcessorConfig,
}

/// File selection for a processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRule {
    pub glob: String,
    #[serde(rename = "type")]
    pub glob_type: GlobType,
    pub exclude: Vec<String>,
}

/// How matched files are treated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GlobType {
    /// Render the file through the templating processor.
    Template,
    /// Copy the file verbatim.
    Copy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessorConfig {
    pub vars: IndexMap<String, String>,
}

/// Engine-side plugin entry. Present for wire completeness; scaffold
/// documents never emit any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginEntry {
    pub name: String,
    pub config: IndexMap<String, String>,
}

impl Descriptor {
    /// Wrap this descriptor in the engine's document envelope.
    pub fn into_document(self) -> CyanDocument {
        CyanDocument {
            processors: vec![TemplateProcessor {
                name: RENDER_PROCESSOR.to_string(),
                files: vec![FileRule {
                    glob: self.file_rules.include_glob,
                    glob_type: GlobType::Template,
                    exclude: self.file_rules.exclude_patterns.into_iter().collect(),
                }],
                config: ProcessorConfig {
                    vars: self.variables,
                },
            }],
            plugins: Vec::new(),
        }
    }
}
