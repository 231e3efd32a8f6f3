//! Compute devices known to RumPy

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RumpyError;

/// A compute target arrays can live on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cpu,
}

impl Device {
    /// All devices, default first
    pub const ALL: [Device; 1] = [Device::Cpu];

    pub fn name(&self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
        }
    }

    /// Look up a device by name
    pub fn from_name(name: &str) -> Option<Device> {
        Device::ALL.into_iter().find(|device| device.name() == name)
    }
}

impl Default for Device {
    fn default() -> Self {
        Device::Cpu
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Device {
    type Err = RumpyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Device::from_name(s).ok_or_else(|| RumpyError::device_not_understood(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cpu() {
        assert_eq!("cpu".parse::<Device>().unwrap(), Device::Cpu);
        assert_eq!(Device::Cpu.to_string(), "cpu");
    }

    #[test]
    fn test_parse_unknown() {
        let err = "gpu".parse::<Device>().unwrap_err();
        assert!(err.to_string().contains("Device not understood"));
        assert!(err.to_string().contains("gpu"));
    }

    #[test]
    fn test_default_is_listed() {
        assert!(Device::ALL.contains(&Device::default()));
    }
}
