//! Answer validation, the question flow, and descriptor assembly.
//!
//! The modules are layered leaves-first: [`validate`] classifies single
//! answers, [`reference`] builds validated identifier and reference values on
//! top of it, [`flow`] drives the ordered question sequence against an
//! abstract prompter, and [`assemble`] computes the final [`Descriptor`] from
//! the accumulated [`AnswerSet`]. [`document`] wraps the descriptor in the
//! wire envelope the CyanPrint engine consumes.

pub mod answer;
pub mod assemble;
pub mod document;
pub mod flow;
pub mod reference;
pub mod testing;
pub mod validate;

pub use answer::{AnswerSet, ArtifactKind, KindAnswers, TemplateAnswers};
pub use assemble::{assemble, Descriptor, FileRules};
pub use document::CyanDocument;
pub use flow::{run, PromptError, Prompter, TextQuestion};
pub use reference::{Identifier, Reference};
pub use validate::ValidationError;
