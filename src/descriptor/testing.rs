//! Test support: a prompter that replays a scripted interaction.
//!
//! The scripted prompter enforces the same contract a real prompter carries:
//! a select answer must index an offered option, and a text answer must pass
//! the question's validator. A script that drifts from the question sequence
//! panics with the offending prompt, which keeps flow tests honest about
//! exactly which questions were asked.

use std::collections::VecDeque;

use crate::descriptor::flow::{PromptError, Prompter, TextQuestion};

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Index into the offered options of a select question.
    Choice(usize),
    /// Free-text answer to a text question.
    Text(String),
}

/// Answer a select question by option index.
pub fn choice(index: usize) -> Scripted {
    Scripted::Choice(index)
}

/// Answer a text question.
pub fn text(answer: &str) -> Scripted {
    Scripted::Text(answer.to_string())
}

/// Prompter replaying a fixed script.
pub struct ScriptedPrompter {
    script: VecDeque<Scripted>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        ScriptedPrompter {
            script: script.into_iter().collect(),
        }
    }

    /// True once every scripted answer has been consumed. Asserting this at
    /// the end of a test proves no extra questions were asked.
    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<usize, PromptError> {
        match self.script.pop_front() {
            Some(Scripted::Choice(index)) => {
                assert!(
                    index < options.len(),
                    "scripted choice {} out of range for {:?} (options: {:?})",
                    index,
                    prompt,
                    options
                );
                Ok(index)
            }
            other => panic!("expected a choice for {:?}, script had {:?}", prompt, other),
        }
    }

    fn text(&mut self, question: &TextQuestion<'_>) -> Result<String, PromptError> {
        match self.script.pop_front() {
            Some(Scripted::Text(answer)) => {
                if let Some(validate) = question.validate {
                    if let Err(err) = validate(&answer) {
                        panic!(
                            "scripted answer {:?} for {:?} rejected: {}",
                            answer, question.message, err
                        );
                    }
                }
                Ok(answer)
            }
            other => panic!(
                "expected text for {:?}, script had {:?}",
                question.message, other
            ),
        }
    }
}
