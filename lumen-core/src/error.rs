//! Error types for core domain validation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// What kind of name failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Pipeline,
    Team,
    Job,
    Build,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Pipeline => write!(f, "Pipeline"),
            NameKind::Team => write!(f, "Team"),
            NameKind::Job => write!(f, "Job"),
            NameKind::Build => write!(f, "Build"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0} name cannot be empty")]
    EmptyName(NameKind),

    #[error("{kind} name is too long (max {max} characters)")]
    NameTooLong { kind: NameKind, max: usize },

    #[error("{kind} name contains invalid character {ch:?}")]
    InvalidName { kind: NameKind, ch: char },
}

/// Maximum length of any name that ends up in a store key or build link
pub const MAX_NAME_LEN: usize = 255;

/// Validates a name used as a store key or as a segment of a build link
pub fn validate_name(kind: NameKind, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CoreError::EmptyName(kind));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::NameTooLong {
            kind,
            max: MAX_NAME_LEN,
        });
    }

    if let Some(ch) = name.chars().find(|c| *c == '/' || c.is_whitespace()) {
        return Err(CoreError::InvalidName { kind, ch });
    }

    Ok(())
}

pub fn validate_pipeline_name(name: &str) -> Result<()> {
    validate_name(NameKind::Pipeline, name)
}

pub fn validate_team_name(name: &str) -> Result<()> {
    validate_name(NameKind::Team, name)
}
