/*!
 * Program Name
 * Bounded inline string for process program names
 */

use crate::core::limits::MAX_PROGRAM_NAME_LEN;
use serde::{Deserialize, Deserializer, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Program name of at most [`MAX_PROGRAM_NAME_LEN`] bytes
///
/// # Performance
///
/// Names up to 23 bytes are stored inline by `SmartString`, so typical
/// records never allocate for their name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProgramName {
    inner: SmartString,
}

/// Rejected program name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTooLong {
    pub len: usize,
}

impl ProgramName {
    /// Create a program name, rejecting names longer than the bound
    pub fn new(name: &str) -> Result<Self, NameTooLong> {
        if name.len() > MAX_PROGRAM_NAME_LEN {
            return Err(NameTooLong { len: name.len() });
        }
        Ok(Self {
            inner: SmartString::from(name),
        })
    }

    /// Get string slice
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Check if name is stored inline (no heap allocation)
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.inner.is_inline()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'de> Deserialize<'de> for ProgramName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = std::string::String::deserialize(deserializer)?;
        Self::new(&raw).map_err(|e| {
            serde::de::Error::custom(format!(
                "program name is {} bytes, limit is {}",
                e.len, MAX_PROGRAM_NAME_LEN
            ))
        })
    }
}

impl fmt::Display for ProgramName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
