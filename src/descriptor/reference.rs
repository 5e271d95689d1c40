//! Validated identifier and reference values.
//!
//! Both types are parse-don't-validate: a value exists only if its input
//! passed the grammars in [`validate`](super::validate), and it is immutable
//! afterwards. References serialize as their canonical token
//! (`username/template` or `username/template:version`) so JSON-encoded
//! reference arrays embed the same shape the user typed.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::descriptor::validate::{self, ValidationError};

/// A validated username, template name, or tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `input` against the identifier grammar. `label` names the
    /// field in the rejection message.
    pub fn parse(label: &str, input: &str) -> Result<Self, ValidationError> {
        validate::identifier(label, input)?;
        Ok(Identifier(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A validated `username/template[:version]` token naming a processor or
/// plugin dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    username: Identifier,
    template: Identifier,
    version: Option<u64>,
}

impl Reference {
    /// Parse a reference token.
    ///
    /// The colon split happens first: more than one colon is rejected
    /// outright, and the right segment must be a non-negative integer. The
    /// remainder must split on `/` into exactly two identifiers. A leading or
    /// trailing separator leaves an empty segment behind, which the
    /// identifier grammar rejects; nothing here panics.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let (full, version) = match input.split_once(':') {
            Some((_, rest)) if rest.contains(':') => {
                return Err(ValidationError::ReferenceColons);
            }
            Some((left, rest)) => {
                validate::non_negative_int(rest)
                    .map_err(|_| ValidationError::ReferenceVersion)?;
                (left, rest.parse().ok())
            }
            None => (input, None),
        };

        let mut segments = full.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(username), Some(template), None) => Ok(Reference {
                username: Identifier::parse("Reference username", username)?,
                template: Identifier::parse("Reference template", template)?,
                version,
            }),
            _ => Err(ValidationError::ReferenceShape),
        }
    }

    pub fn username(&self) -> &Identifier {
        &self.username
    }

    pub fn template(&self) -> &Identifier {
        &self.template
    }

    pub fn version(&self) -> Option<u64> {
        self.version
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(version) => write!(f, "{}/{}:{}", self.username, self.template, version),
            None => write!(f, "{}/{}", self.username, self.template),
        }
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
