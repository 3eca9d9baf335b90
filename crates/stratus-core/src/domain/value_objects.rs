//! Domain value objects: LogicalName, PseudoParam, EntityKind.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. This
//! file's only job is to define the types, their string representations,
//! and their parsers.
//!
//! # Adding New Pseudo Parameters
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add it to `PseudoParam::ALL`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

// ── LogicalName ──────────────────────────────────────────────────────────────

/// The logical ID of a parameter or resource inside a template.
///
/// Invariant: non-empty, ASCII alphanumeric only. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogicalName(String);

impl LogicalName {
    /// Upper bound CloudFormation places on logical IDs.
    pub const MAX_LEN: usize = 255;

    /// Fallible constructor.
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidName {
                name,
                reason: "name is empty".into(),
            });
        }

        if name.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidName {
                reason: format!("longer than {} characters", Self::MAX_LEN),
                name,
            });
        }

        if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidName {
                reason: format!("character {bad:?} is not alphanumeric"),
                name,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LogicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LogicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LogicalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for LogicalName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for LogicalName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<LogicalName> for String {
    fn from(name: LogicalName) -> Self {
        name.0
    }
}

// ── PseudoParam ──────────────────────────────────────────────────────────────

/// A provider-supplied contextual value, referenced by a fixed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PseudoParam {
    AccountId,
    NotificationArns,
    NoValue,
    Partition,
    Region,
    StackId,
    StackName,
    UrlSuffix,
}

impl PseudoParam {
    pub const ALL: [PseudoParam; 8] = [
        Self::AccountId,
        Self::NotificationArns,
        Self::NoValue,
        Self::Partition,
        Self::Region,
        Self::StackId,
        Self::StackName,
        Self::UrlSuffix,
    ];

    /// The token CloudFormation expects inside a `Ref`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AccountId => "AWS::AccountId",
            Self::NotificationArns => "AWS::NotificationARNs",
            Self::NoValue => "AWS::NoValue",
            Self::Partition => "AWS::Partition",
            Self::Region => "AWS::Region",
            Self::StackId => "AWS::StackId",
            Self::StackName => "AWS::StackName",
            Self::UrlSuffix => "AWS::URLSuffix",
        }
    }
}

impl fmt::Display for PseudoParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PseudoParam {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::InvalidName {
                name: s.to_string(),
                reason: "not a known pseudo parameter".into(),
            })
    }
}

// ── EntityKind ───────────────────────────────────────────────────────────────

/// Which registry of a template a logical name lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Parameter,
    Resource,
}

impl EntityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parameter => "parameter",
            Self::Resource => "resource",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_name_accepts_alphanumerics() {
        assert_eq!(LogicalName::try_new("EcsCluster2").unwrap().as_str(), "EcsCluster2");
    }

    #[test]
    fn logical_name_rejects_separators() {
        assert!(LogicalName::try_new("ecs-cluster").is_err());
        assert!(LogicalName::try_new("ecs_cluster").is_err());
        assert!(LogicalName::try_new("AWS::StackName").is_err());
    }

    #[test]
    fn logical_name_rejects_empty_and_oversized() {
        assert!(matches!(
            LogicalName::try_new(""),
            Err(DomainError::InvalidName { .. })
        ));
        assert!(LogicalName::try_new("a".repeat(LogicalName::MAX_LEN + 1)).is_err());
    }

    #[test]
    fn pseudo_param_tokens() {
        assert_eq!(PseudoParam::StackName.as_str(), "AWS::StackName");
        assert_eq!(PseudoParam::UrlSuffix.as_str(), "AWS::URLSuffix");
        assert_eq!(
            PseudoParam::from_str("aws::region").unwrap(),
            PseudoParam::Region
        );
        assert!(PseudoParam::from_str("AWS::Nope").is_err());
    }
}
