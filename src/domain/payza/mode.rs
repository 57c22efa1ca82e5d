//! Integration mode supplied by host configuration.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::errors::ConfigurationError;

/// Where checkout traffic goes: the live gateway or its sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMode {
    Production,
    Test,
}

impl IntegrationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationMode::Production => "production",
            IntegrationMode::Test => "test",
        }
    }
}

impl FromStr for IntegrationMode {
    type Err = ConfigurationError;

    /// Exact, case-sensitive match on `production` or `test`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(IntegrationMode::Production),
            "test" => Ok(IntegrationMode::Test),
            other => Err(ConfigurationError::InvalidIntegrationMode(other.to_string())),
        }
    }
}

impl fmt::Display for IntegrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
