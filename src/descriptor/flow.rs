//! The question flow controller.
//!
//! [`run`] walks the fixed, strictly forward-moving question sequence against
//! an abstract [`Prompter`]: kind selection, the common prefix (username,
//! name, description, tags, email, URLs), then the template-only reference
//! loops. The prompter owns the re-ask-until-valid loop, so the controller
//! only ever sees accepted answers; an accepted answer that fails
//! re-validation means the prompter broke its contract, which is a defect and
//! panics.

use std::fmt;
use std::io;

use crate::descriptor::answer::{AnswerSet, ArtifactKind, KindAnswers, TemplateAnswers};
use crate::descriptor::reference::{Identifier, Reference};
use crate::descriptor::validate::{self, ValidationError};

/// Failure of the prompting channel itself, as opposed to a rejected answer.
#[derive(Debug)]
pub enum PromptError {
    /// The input stream ended before the flow finished.
    Closed,
    /// Underlying I/O failure while prompting.
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Closed => write!(f, "input closed before the flow finished"),
            PromptError::Io(err) => write!(f, "prompt I/O failed: {}", err),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Closed => None,
            PromptError::Io(err) => Some(err),
        }
    }
}

/// Validator attached to a free-text question.
pub type AnswerValidator<'a> = &'a dyn Fn(&str) -> Result<(), ValidationError>;

/// A free-text question handed to the prompter.
pub struct TextQuestion<'a> {
    pub message: &'a str,
    /// Optional secondary line shown under the message.
    pub description: Option<&'a str>,
    /// When present, the prompter must only return answers this accepts.
    pub validate: Option<AnswerValidator<'a>>,
}

/// The interaction capability the flow depends on.
///
/// Implementations guarantee that `select` returns an index into `options`
/// and that `text` only returns a value the question's validator accepts,
/// re-asking as many times as it takes. Rejected attempts never reach the
/// flow controller.
pub trait Prompter {
    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<usize, PromptError>;
    fn text(&mut self, question: &TextQuestion<'_>) -> Result<String, PromptError>;
}

/// Run the full question flow and return the completed answer set.
///
/// Questions are asked one at a time, in order, with no skipping, no editing
/// of accepted answers, and no backtracking.
pub fn run(prompter: &mut dyn Prompter) -> Result<AnswerSet, PromptError> {
    let kind = select_kind(prompter)?;

    let username = ask_identifier(
        prompter,
        "CyanPrint username",
        Some("You can find it in your profile in https://cyanprint.dev"),
        "Username",
    )?;
    let name = ask_identifier(
        prompter,
        "Template name",
        Some("Unique name under your account"),
        "Template",
    )?;

    let message = format!("{} description", kind);
    let hint = format!("Short description of your {}", kind.label().to_lowercase());
    let description = prompter.text(&TextQuestion {
        message: &message,
        description: Some(&hint),
        validate: None,
    })?;

    let mut tags = Vec::new();
    while confirm(prompter, "Add a tag?")? {
        tags.push(ask_identifier(prompter, "Tag to add", None, "Tag")?);
    }

    let email = prompter.text(&TextQuestion {
        message: "Email",
        description: Some("Your email"),
        validate: Some(&validate::email),
    })?;
    let project = prompter.text(&TextQuestion {
        message: "Project URL",
        description: Some("Valid URL to this project's site"),
        validate: Some(&validate::url),
    })?;
    let source = prompter.text(&TextQuestion {
        message: "Source URL",
        description: Some("Valid URL to this project source code"),
        validate: Some(&validate::url),
    })?;

    let kind = match kind {
        ArtifactKind::Template => {
            let processors = collect_references(prompter, "Add a processor?", "Processor to add")?;
            let plugins = collect_references(prompter, "Add a plugin?", "Plugin to add")?;
            KindAnswers::Template(TemplateAnswers {
                processors,
                plugins,
            })
        }
        ArtifactKind::Plugin => KindAnswers::Plugin,
        ArtifactKind::Processor => KindAnswers::Processor,
    };

    Ok(AnswerSet {
        kind,
        username,
        name,
        description,
        tags,
        email,
        project,
        source,
    })
}

fn select_kind(prompter: &mut dyn Prompter) -> Result<ArtifactKind, PromptError> {
    let labels: Vec<&str> = ArtifactKind::ALL.iter().map(|kind| kind.label()).collect();
    let choice = prompter.select("What do you want to create?", &labels)?;
    // The prompter contract keeps the index in range; indexing out of bounds
    // here is the loud failure we want for a broken prompter.
    Ok(ArtifactKind::ALL[choice])
}

/// Ask a yes/no gate; `true` means continue.
fn confirm(prompter: &mut dyn Prompter, prompt: &str) -> Result<bool, PromptError> {
    Ok(prompter.select(prompt, &["yes", "no"])? == 0)
}

fn ask_identifier(
    prompter: &mut dyn Prompter,
    message: &str,
    description: Option<&str>,
    label: &str,
) -> Result<Identifier, PromptError> {
    let answer = prompter.text(&TextQuestion {
        message,
        description,
        validate: Some(&|input| validate::identifier(label, input)),
    })?;
    Ok(accepted(Identifier::parse(label, &answer)))
}

/// Yes/no-gated collection loop for reference answers. Zero iterations is
/// valid and there is no upper bound.
fn collect_references(
    prompter: &mut dyn Prompter,
    gate: &str,
    message: &str,
) -> Result<Vec<Reference>, PromptError> {
    let mut references = Vec::new();
    while confirm(prompter, gate)? {
        let answer = prompter.text(&TextQuestion {
            message,
            description: None,
            validate: Some(&|input| Reference::parse(input).map(|_| ())),
        })?;
        references.push(accepted(Reference::parse(&answer)));
    }
    Ok(references)
}

/// Unwrap the re-validation of an answer the prompter already accepted.
fn accepted<T>(result: Result<T, ValidationError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("prompter accepted an answer that fails validation: {}", err),
    }
}
