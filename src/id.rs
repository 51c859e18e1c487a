use std::fmt;

use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifies a branch in request paths, either by name or by numeric id.
///
/// The Semaphore API accepts both spellings in the same path position. The
/// value is formatted into the path verbatim, without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchId {
    Name(CompactString),
    Id(u32),
}

impl BranchId {
    /// Raw path segment for this branch id.
    pub fn as_segment(&self) -> CompactString {
        match self {
            BranchId::Name(name) => name.clone(),
            BranchId::Id(id) => id.to_compact_string(),
        }
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BranchId::Name(name) => write!(f, "{}", name),
            BranchId::Id(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for BranchId {
    fn from(name: &str) -> Self {
        BranchId::Name(name.into())
    }
}

impl From<String> for BranchId {
    fn from(name: String) -> Self {
        BranchId::Name(name.into())
    }
}

impl From<CompactString> for BranchId {
    fn from(name: CompactString) -> Self {
        BranchId::Name(name)
    }
}

impl From<u32> for BranchId {
    fn from(id: u32) -> Self {
        BranchId::Id(id)
    }
}

/// Sequential build number within a branch.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct BuildNumber {
    value: u32,
}

impl BuildNumber {
    pub fn new(number: u32) -> Self { Self { value: number } }
}

impl From<u32> for BuildNumber {
    fn from(number: u32) -> Self {
        BuildNumber::new(number)
    }
}

impl<'de> Deserialize<'de> for BuildNumber {
    fn deserialize<D>(deserializer: D) -> Result<BuildNumber, D::Error>
        where D: Deserializer<'de>,
    {
        let number = u32::deserialize(deserializer)?;
        Ok(BuildNumber::new(number))
    }
}

impl Serialize for BuildNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer,
    {
        serializer.serialize_u32(self.value)
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
