//! # cyan
//!
//! Descriptor-building core for CyanPrint scaffolds.
//!
//! The crate turns an interactive question-and-answer session into the
//! declarative document that drives scaffold generation: which files the
//! engine renders and which substitution variables it renders them with.
//! Prompting itself lives behind the [`descriptor::flow::Prompter`] seam;
//! the terminal implementation ships in the `cyan-cli` crate.

pub mod descriptor;
