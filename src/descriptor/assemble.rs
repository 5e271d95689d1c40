//! Deterministic descriptor assembly.
//!
//! [`assemble`] maps a completed [`AnswerSet`] to the [`Descriptor`] the
//! renderer consumes: the substitution variable map and the file rules.
//! The computation is pure; given the same answer set it produces a
//! byte-identical descriptor, because every map and set here has a fixed
//! insertion order and no value depends on time, randomness, or environment.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::descriptor::answer::{AnswerSet, ArtifactKind, KindAnswers};

/// Glob handed to the renderer together with the exclusion patterns.
pub const INCLUDE_GLOB: &str = "**/*.*";

/// Scaffold infrastructure that never reaches a generated project: the
/// build/publish metadata directory, the engine config, and the publish
/// workflow.
const INFRASTRUCTURE_EXCLUDES: [&str; 3] = [
    "cyan/**/*.*",
    "cyan.yaml",
    ".github/workflows/publish.yaml",
];

/// Placeholder index/config files for every artifact kind. The selected
/// kind's own pair is removed before the rules are emitted; the other two
/// kinds' placeholders stay excluded.
const UNIVERSAL_EXCLUDES: [&str; 6] = [
    "cyanprint/{{templateIndex}}.ts",
    "cyanprint/{{pluginIndex}}.ts",
    "cyanprint/{{processorIndex}}.ts",
    "{{pluginCyan}}.yaml",
    "{{processorCyan}}.yaml",
    "{{templateCyan}}.yaml",
];

/// Index and config placeholder belonging to one artifact kind.
fn kind_files(kind: ArtifactKind) -> [&'static str; 2] {
    match kind {
        ArtifactKind::Template => ["cyanprint/{{templateIndex}}.ts", "{{templateCyan}}.yaml"],
        ArtifactKind::Plugin => ["cyanprint/{{pluginIndex}}.ts", "{{pluginCyan}}.yaml"],
        ArtifactKind::Processor => ["cyanprint/{{processorIndex}}.ts", "{{processorCyan}}.yaml"],
    }
}

/// File selection handed to the renderer: one include glob plus an ordered
/// set of exclusion patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRules {
    pub include_glob: String,
    pub exclude_patterns: IndexSet<String>,
}

/// The final output of a session: substitution variables and file rules.
/// Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub variables: IndexMap<String, String>,
    pub file_rules: FileRules,
}

/// Compute the descriptor for a completed answer set.
pub fn assemble(answers: &AnswerSet) -> Descriptor {
    let mut variables = IndexMap::new();
    let mut var = |key: &str, value: String| {
        variables.insert(key.to_string(), value);
    };

    var("publish", "cyan_publish".to_string());
    var("pluginCyan", "cyan".to_string());
    var("processorCyan", "cyan".to_string());
    var("templateCyan", "cyan".to_string());
    var("templateIndex", "index".to_string());
    var("pluginIndex", "index".to_string());
    var("processorIndex", "index".to_string());
    var("username", answers.username.to_string());
    var("name", answers.name.to_string());
    var("desc", answers.description.clone());
    var("tags", json_array(&answers.tags));
    var("email", answers.email.clone());
    var("project", answers.project.clone());
    var("source", answers.source.clone());

    let (processors, plugins) = match &answers.kind {
        KindAnswers::Template(template) => (
            format!("processors: {}", json_array(&template.processors)),
            format!("plugins: {}", json_array(&template.plugins)),
        ),
        KindAnswers::Plugin | KindAnswers::Processor => (String::new(), String::new()),
    };
    var("processors", processors);
    var("plugins", plugins);

    let mut placeholders: IndexSet<&str> = UNIVERSAL_EXCLUDES.into_iter().collect();
    for own in kind_files(answers.artifact_kind()) {
        placeholders.shift_remove(own);
    }
    let mut exclude_patterns: IndexSet<String> = INFRASTRUCTURE_EXCLUDES
        .into_iter()
        .map(str::to_string)
        .collect();
    exclude_patterns.extend(placeholders.into_iter().map(str::to_string));

    Descriptor {
        variables,
        file_rules: FileRules {
            include_glob: INCLUDE_GLOB.to_string(),
            exclude_patterns,
        },
    }
}

/// JSON-encode a sequence of string-like values, preserving order.
fn json_array<T: Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).expect("string arrays always serialize")
}
