//! Record data structure

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FixtureError, Result};

/// A named integer value with an append-only list of tags
///
/// Tags are never empty; [`Record::add_tag`] rejects the empty string, and
/// deserialization replays every tag through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    name: String,
    value: i64,
    tags: Vec<String>,
}

/// Unchecked wire form of [`Record`]
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    value: i64,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<RawRecord> for Record {
    type Error = FixtureError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let mut record = Record::new(raw.name, raw.value);
        for tag in raw.tags {
            record.add_tag(tag)?;
        }
        Ok(record)
    }
}

impl Record {
    /// Creates a record with no tags
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            tags: Vec::new(),
        }
    }

    /// Gets the record name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the current value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Adds `amount` to the value, wrapping on overflow, and returns the new value
    pub fn increment(&mut self, amount: i64) -> i64 {
        self.value = self.value.wrapping_add(amount);
        self.value
    }

    /// Appends a tag to the end of the tag list
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidArgument`] if `tag` is empty; the
    /// record is left unchanged.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> Result<()> {
        let tag = tag.into();
        if tag.is_empty() {
            log::warn!("Rejected empty tag for record '{}'", self.name);
            return Err(FixtureError::InvalidArgument(
                "tag cannot be empty".to_string(),
            ));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// All tags in insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({}: {}, tags: {:?})", self.name, self.value, self.tags)
    }
}
