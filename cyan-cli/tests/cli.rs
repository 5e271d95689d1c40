//! End-to-end tests for the cyan-init binary
//!
//! Each test pipes a scripted answer session into the real binary and checks
//! the document on stdout. Prompts and validation feedback go to stderr, so
//! stdout carries nothing but the serialized document.

use assert_cmd::Command;
use predicates::prelude::*;

/// A full template session: kind, username, name, description, no tags,
/// contact, one processor, no plugins.
const TEMPLATE_SESSION: &str = "\
1
alice
blog
A blog scaffold
no
alice@example.com
https://example.com
https://github.com/alice/blog
yes
alice/proc:1
no
no
";

fn cyan_init() -> Command {
    Command::cargo_bin("cyan-init").expect("binary builds")
}

#[test]
fn emits_the_template_document_as_json() {
    cyan_init()
        .write_stdin(TEMPLATE_SESSION)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "kirinnee/dotnet-handlebar:11""#))
        .stdout(predicate::str::contains(r#""username": "alice""#))
        .stdout(predicate::str::contains(r#""tags": "[]""#))
        .stdout(predicate::str::contains(
            r#""processors": "processors: [\"alice/proc:1\"]""#,
        ))
        .stdout(predicate::str::contains(r#""plugins": "plugins: []""#));
}

#[test]
fn template_keeps_its_own_placeholders_includable() {
    cyan_init()
        .write_stdin(TEMPLATE_SESSION)
        .assert()
        .success()
        .stdout(predicate::str::contains("cyanprint/{{pluginIndex}}.ts"))
        .stdout(predicate::str::contains("cyanprint/{{processorIndex}}.ts"))
        .stdout(predicate::str::contains("cyanprint/{{templateIndex}}.ts").not())
        .stdout(predicate::str::contains("{{templateCyan}}.yaml").not());
}

#[test]
fn plugin_session_excludes_the_other_kinds() {
    let session = "\
2
alice
minifier
Minifies output
no
alice@example.com
https://example.com
https://github.com/alice/minifier
";
    cyan_init()
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("cyanprint/{{templateIndex}}.ts"))
        .stdout(predicate::str::contains("cyanprint/{{processorIndex}}.ts"))
        .stdout(predicate::str::contains("cyanprint/{{pluginIndex}}.ts").not())
        .stdout(predicate::str::contains(r#""processors": """#));
}

#[test]
fn rejected_answers_are_reasked_with_the_validator_message() {
    let session = "\
1
-NotValid-
alice
blog
desc
no
not-an-email
alice@example.com
https://example.com
https://github.com/alice/blog
no
no
";
    cyan_init()
        .write_stdin(session)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Username must be between 1 and 256 characters",
        ))
        .stderr(predicate::str::contains("Invalid email"))
        .stdout(predicate::str::contains(r#""username": "alice""#));
}

#[test]
fn yaml_format_flag_switches_serialization() {
    cyan_init()
        .arg("--format")
        .arg("yaml")
        .write_stdin(TEMPLATE_SESSION)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: kirinnee/dotnet-handlebar:11"))
        .stdout(predicate::str::contains("publish: cyan_publish"));
}

#[test]
fn output_flag_writes_the_document_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cyan.json");

    cyan_init()
        .arg("--output")
        .arg(&path)
        .write_stdin(TEMPLATE_SESSION)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(r#""username": "alice""#));
}

#[test]
fn closed_stdin_fails_without_a_document() {
    cyan_init()
        .write_stdin("1\nalice\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed before the flow finished"));
}
