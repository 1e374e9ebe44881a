//! Selection tags: detector version family and framework preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Detection-library major-version selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionFamily {
    /// Track the newest stable release.
    #[default]
    Latest,
    V8,
    V10,
    V11,
}

impl VersionFamily {
    pub const ALL: [Self; 4] = [Self::Latest, Self::V8, Self::V10, Self::V11];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::V8 => "v8",
            Self::V10 => "v10",
            Self::V11 => "v11",
        }
    }

    /// Major version this family is pinned to, `None` for `latest`.
    pub const fn major(self) -> Option<u64> {
        match self {
            Self::Latest => None,
            Self::V8 => Some(8),
            Self::V10 => Some(10),
            Self::V11 => Some(11),
        }
    }
}

impl fmt::Display for VersionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a selection tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct TagParseError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl TagParseError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

impl FromStr for VersionFamily {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "v8" | "8" => Ok(Self::V8),
            "v10" | "10" => Ok(Self::V10),
            "v11" | "11" => Ok(Self::V11),
            _ => Err(TagParseError::new(
                "version family",
                s,
                "latest, v8, v10, v11",
            )),
        }
    }
}

/// Deep-learning frameworks the resolver knows how to pick builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "tensorflow")]
    TensorFlow,
    #[serde(rename = "pytorch")]
    PyTorch,
}

impl Framework {
    pub const ALL: [Self; 2] = [Self::TensorFlow, Self::PyTorch];

    /// Distribution name used as the stack key.
    pub const fn package_name(self) -> &'static str {
        match self {
            Self::TensorFlow => "tensorflow",
            Self::PyTorch => "torch",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_name())
    }
}

/// Requested framework for the single-framework selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkPreference {
    #[default]
    Auto,
    #[serde(rename = "tensorflow")]
    TensorFlow,
    #[serde(rename = "pytorch")]
    PyTorch,
}

impl FrameworkPreference {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::TensorFlow => "tensorflow",
            Self::PyTorch => "pytorch",
        }
    }
}

impl fmt::Display for FrameworkPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkPreference {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "tensorflow" | "tf" => Ok(Self::TensorFlow),
            "pytorch" | "torch" => Ok(Self::PyTorch),
            _ => Err(TagParseError::new(
                "framework",
                s,
                "auto, tensorflow, pytorch",
            )),
        }
    }
}
