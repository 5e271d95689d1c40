//! The accumulated answers of one question-flow session.
//!
//! Kind-specific answers live inside the [`KindAnswers`] variant, so an
//! [`AnswerSet`] for a template always carries its reference sequences and
//! the assembler cannot be handed a structurally incomplete set. The set is
//! built once by the flow controller and read-only afterwards.

use std::fmt;

use crate::descriptor::reference::{Identifier, Reference};

/// The mutually exclusive top-level choice driving branch-specific questions
/// and file rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Template,
    Plugin,
    Processor,
}

impl ArtifactKind {
    /// All kinds, in the order they are offered.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Template,
        ArtifactKind::Plugin,
        ArtifactKind::Processor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Template => "Template",
            ArtifactKind::Plugin => "Plugin",
            ArtifactKind::Processor => "Processor",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dependencies collected only for templates. Processor and plugin loops
/// fill separate sequences; both preserve insertion order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateAnswers {
    pub processors: Vec<Reference>,
    pub plugins: Vec<Reference>,
}

/// Kind selection plus the answers that only exist for that kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindAnswers {
    Template(TemplateAnswers),
    Plugin,
    Processor,
}

impl KindAnswers {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            KindAnswers::Template(_) => ArtifactKind::Template,
            KindAnswers::Plugin => ArtifactKind::Plugin,
            KindAnswers::Processor => ArtifactKind::Processor,
        }
    }
}

/// Everything one completed session answered, in the order it was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub kind: KindAnswers,
    pub username: Identifier,
    pub name: Identifier,
    pub description: String,
    /// Tag sequence; insertion order meaningful, duplicates kept.
    pub tags: Vec<Identifier>,
    pub email: String,
    pub project: String,
    pub source: String,
}

impl AnswerSet {
    pub fn artifact_kind(&self) -> ArtifactKind {
        self.kind.kind()
    }
}
