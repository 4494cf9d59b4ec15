//! Tag entity, identifiers and slug validation
//!
//! Slug format: lowercase alphanumeric with hyphens/underscores

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use super::ValidationError;

/// Maximum length for tag slugs
const MAX_SLUG_LEN: usize = 64;

/// Maximum length for tag names
const MAX_NAME_LEN: usize = 128;

/// Slug pattern: starts with alphanumeric, allows hyphens/underscores
static SLUG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_-]{0,63}$").expect("invalid slug regex")
});

/// Server-assigned tag identifier.
///
/// Stored as `INTEGER`, exposed over JSON as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct TagId(pub i32);

impl TagId {
    /// Parse a tag id from its public string form.
    ///
    /// # Example
    /// ```
    /// use qa_server::models::TagId;
    ///
    /// assert_eq!(TagId::parse("12").unwrap(), TagId(12));
    /// assert!(TagId::parse("twelve").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidTagId {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TagId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Tag record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub description: String,
    pub slug: String,
}

/// Validated tag slug
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagSlug(String);

impl TagSlug {
    /// Create a new slug, validating format.
    ///
    /// # Rules
    /// - Max 64 characters
    /// - Lowercase alphanumeric, hyphens, underscores
    /// - Must start with alphanumeric
    ///
    /// # Example
    /// ```
    /// use qa_server::models::TagSlug;
    ///
    /// assert!(TagSlug::new("rust-async").is_ok());
    /// assert!(TagSlug::new("Rust").is_err());
    /// assert!(TagSlug::new("-rust").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "slug" });
        }

        if s.len() > MAX_SLUG_LEN {
            return Err(ValidationError::TooLong {
                field: "slug",
                max: MAX_SLUG_LEN,
            });
        }

        if !SLUG_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "slug",
                reason: "must be lowercase alphanumeric with hyphens/underscores, starting with alphanumeric",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TagSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Tag about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub description: String,
    pub slug: TagSlug,
}

impl NewTag {
    /// Validate and build a new tag. The name is trimmed and must be non-empty.
    pub fn new(name: &str, description: &str, slug: &str) -> Result<Self, ValidationError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if name.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            description: description.trim().to_owned(),
            slug: TagSlug::new(slug)?,
        })
    }
}
