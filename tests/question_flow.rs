//! Integration tests for the question flow
//!
//! Each test replays a scripted session through the real flow controller.
//! The scripted prompter panics if the flow asks a question the script did
//! not anticipate, and `is_exhausted` proves the flow asked nothing less.

use cyan::descriptor::flow;
use cyan::descriptor::testing::{choice, text, ScriptedPrompter};
use cyan::descriptor::{ArtifactKind, KindAnswers};

const TEMPLATE: usize = 0;
const PLUGIN: usize = 1;
const PROCESSOR: usize = 2;
const YES: usize = 0;
const NO: usize = 1;

#[test]
fn template_flow_asks_the_full_sequence() {
    let mut prompter = ScriptedPrompter::new([
        choice(TEMPLATE),
        text("alice"),
        text("blog"),
        text("A blog scaffold"),
        choice(YES),
        text("web"),
        choice(YES),
        text("rust"),
        choice(NO),
        text("alice@example.com"),
        text("https://example.com"),
        text("https://github.com/alice/blog"),
        choice(YES),
        text("alice/proc:1"),
        choice(NO),
        choice(YES),
        text("bob/markdown"),
        choice(NO),
    ]);

    let answers = flow::run(&mut prompter).unwrap();
    assert!(prompter.is_exhausted());

    assert_eq!(answers.artifact_kind(), ArtifactKind::Template);
    assert_eq!(answers.username.as_str(), "alice");
    assert_eq!(answers.name.as_str(), "blog");
    assert_eq!(answers.description, "A blog scaffold");
    assert_eq!(answers.email, "alice@example.com");
    assert_eq!(answers.project, "https://example.com");
    assert_eq!(answers.source, "https://github.com/alice/blog");

    let tags: Vec<&str> = answers.tags.iter().map(|tag| tag.as_str()).collect();
    assert_eq!(tags, ["web", "rust"]);

    match &answers.kind {
        KindAnswers::Template(template) => {
            let processors: Vec<String> = template
                .processors
                .iter()
                .map(|reference| reference.to_string())
                .collect();
            let plugins: Vec<String> = template
                .plugins
                .iter()
                .map(|reference| reference.to_string())
                .collect();
            assert_eq!(processors, ["alice/proc:1"]);
            assert_eq!(plugins, ["bob/markdown"]);
        }
        other => panic!("expected template answers, got {:?}", other),
    }
}

#[test]
fn plugin_flow_skips_the_reference_loops() {
    let mut prompter = ScriptedPrompter::new([
        choice(PLUGIN),
        text("alice"),
        text("minifier"),
        text("Minifies generated output"),
        choice(NO),
        text("alice@example.com"),
        text("https://example.com"),
        text("https://github.com/alice/minifier"),
    ]);

    let answers = flow::run(&mut prompter).unwrap();
    // Script exhaustion proves no processor/plugin gate was ever asked.
    assert!(prompter.is_exhausted());
    assert_eq!(answers.kind, KindAnswers::Plugin);
    assert!(answers.tags.is_empty());
}

#[test]
fn processor_flow_skips_the_reference_loops() {
    let mut prompter = ScriptedPrompter::new([
        choice(PROCESSOR),
        text("bob"),
        text("license-stamper"),
        text("Stamps license headers"),
        choice(NO),
        text("bob@example.com"),
        text("https://example.com"),
        text("https://github.com/bob/license-stamper"),
    ]);

    let answers = flow::run(&mut prompter).unwrap();
    assert!(prompter.is_exhausted());
    assert_eq!(answers.kind, KindAnswers::Processor);
}

#[test]
fn tag_loop_preserves_order_and_duplicates() {
    let mut prompter = ScriptedPrompter::new([
        choice(TEMPLATE),
        text("alice"),
        text("blog"),
        text("desc"),
        choice(YES),
        text("web"),
        choice(YES),
        text("web"),
        choice(YES),
        text("blog"),
        choice(NO),
        text("alice@example.com"),
        text("https://example.com"),
        text("https://example.com/src"),
        choice(NO),
        choice(NO),
    ]);

    let answers = flow::run(&mut prompter).unwrap();
    let tags: Vec<&str> = answers.tags.iter().map(|tag| tag.as_str()).collect();
    assert_eq!(tags, ["web", "web", "blog"]);
}

#[test]
fn zero_tags_and_zero_references_are_valid() {
    let mut prompter = ScriptedPrompter::new([
        choice(TEMPLATE),
        text("alice"),
        text("blog"),
        text("desc"),
        choice(NO),
        text("alice@example.com"),
        text("https://example.com"),
        text("https://example.com/src"),
        choice(NO),
        choice(NO),
    ]);

    let answers = flow::run(&mut prompter).unwrap();
    assert!(answers.tags.is_empty());
    match &answers.kind {
        KindAnswers::Template(template) => {
            assert!(template.processors.is_empty());
            assert!(template.plugins.is_empty());
        }
        other => panic!("expected template answers, got {:?}", other),
    }
}

#[test]
fn description_accepts_free_text() {
    let mut prompter = ScriptedPrompter::new([
        choice(PROCESSOR),
        text("bob"),
        text("stamper"),
        text("Anything:goes here -- even !?#"),
        choice(NO),
        text("bob@example.com"),
        text("https://example.com"),
        text("https://example.com/src"),
    ]);

    let answers = flow::run(&mut prompter).unwrap();
    assert_eq!(answers.description, "Anything:goes here -- even !?#");
}
