/// Shader model version tag for the platform bytecode backend

use std::fmt;
use std::str::FromStr;
use crate::error::Error;

/// Validated shader model, stored as `<major>_<minor>`
///
/// Accepts `6_0` and `6.0`; both normalize to `6_0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderModel {
    major: u32,
    minor: u32,
}

impl ShaderModel {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Profile argument for a stage tag, e.g. `vs_6_0`
    pub fn profile(&self, stage_tag: &str) -> String {
        format!("{}_{}", stage_tag, self)
    }
}

impl Default for ShaderModel {
    /// Shader model 6.0
    fn default() -> Self {
        Self::new(6, 0)
    }
}

impl fmt::Display for ShaderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.major, self.minor)
    }
}

impl FromStr for ShaderModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidShaderModel(s.to_string());

        let (major, minor) = s.split_once(['_', '.']).ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major) || !all_digits(minor) {
            return Err(invalid());
        }

        Ok(Self::new(
            major.parse().map_err(|_| invalid())?,
            minor.parse().map_err(|_| invalid())?,
        ))
    }
}
