//! Answer grammars.
//!
//! Each classifier takes a raw answer string and returns `Ok(())` or a
//! [`ValidationError`] whose `Display` text is shown to the user verbatim by
//! the prompter's re-ask loop. All classifiers are pure and total: any input,
//! including the empty string, whitespace, control characters, or arbitrary
//! unicode, yields a classification rather than a panic.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use url::Url;

/// Identifier grammar: a lowercase letter followed by dash-separated
/// alphanumeric groups. Dashes never double up, lead, or trail.
static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z](-?[a-z0-9]+)*$").unwrap());

/// WHATWG HTML5 `input[type=email]` production.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

const MIN_IDENTIFIER_LEN: usize = 1;
const MAX_IDENTIFIER_LEN: usize = 256;

/// Schemes accepted for project and source URLs.
const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Why an answer was rejected.
///
/// The reference-shaped variants exist so structural failures stay
/// distinguishable from plain grammar failures, but every variant belongs to
/// the same recoverable class: the prompter shows the message and re-asks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The answer does not satisfy the identifier grammar or its length
    /// bounds. `label` names the field being asked for.
    Identifier { label: String },
    /// Not a syntactically valid email address.
    Email,
    /// Not an absolute URL with an accepted scheme.
    Url,
    /// Not a base-10 integer greater than or equal to zero.
    NonNegativeInt,
    /// A reference token contained more than one colon.
    ReferenceColons,
    /// A reference version segment failed the integer grammar.
    ReferenceVersion,
    /// A reference did not split into exactly `username/template`.
    ReferenceShape,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Identifier { label } => write!(
                f,
                "{} must be between {} and {} characters, and can only contain alphanumeric characters and dashes, and cannot end or start with dashes or numbers",
                label, MIN_IDENTIFIER_LEN, MAX_IDENTIFIER_LEN
            ),
            ValidationError::Email => write!(f, "Invalid email"),
            ValidationError::Url => write!(f, "Invalid URL"),
            ValidationError::NonNegativeInt => {
                write!(f, "Invalid number, must be a non-negative integer")
            }
            ValidationError::ReferenceColons => {
                write!(f, "Invalid reference, can only have one colon")
            }
            ValidationError::ReferenceVersion => {
                write!(f, "Invalid reference, version must be a positive integer")
            }
            ValidationError::ReferenceShape => write!(
                f,
                "Invalid reference, must be in the format username/template or username/template:version"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Classify `input` as an identifier. `label` names the field in the
/// rejection message; both the length and charset constraints are stated on
/// every failure.
pub fn identifier(label: &str, input: &str) -> Result<(), ValidationError> {
    let reject = || ValidationError::Identifier {
        label: label.to_string(),
    };
    if input.len() < MIN_IDENTIFIER_LEN || input.len() > MAX_IDENTIFIER_LEN {
        return Err(reject());
    }
    if !IDENTIFIER_REGEX.is_match(input) {
        return Err(reject());
    }
    Ok(())
}

/// Classify `input` as a syntactically valid email address.
pub fn email(input: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(input) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

/// Classify `input` as an absolute URL.
///
/// Protocol-relative and scheme-less strings never parse as absolute URLs,
/// and only the http/https/ftp schemes are accepted, so `alice:3` does not
/// slip through as a URL with scheme `alice`.
pub fn url(input: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(input).map_err(|_| ValidationError::Url)?;
    if !URL_SCHEMES.contains(&parsed.scheme()) || !parsed.has_host() {
        return Err(ValidationError::Url);
    }
    Ok(())
}

/// Classify `input` as a base-10 integer >= 0 with no extraneous characters.
/// An optional leading `+` is tolerated, a minus sign or surrounding
/// whitespace is not.
pub fn non_negative_int(input: &str) -> Result<(), ValidationError> {
    input
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| ValidationError::NonNegativeInt)
}
