//! Error types for RumPy

use thiserror::Error;

use crate::device::Device;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RumpyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RumpyError {
    /// A device name that does not match any known device
    pub fn device_not_understood(name: &str) -> Self {
        RumpyError::InvalidArgument(format!(
            "Device not understood. Only \"{}\" is allowed, but received: {}",
            Device::Cpu,
            name
        ))
    }

    /// A dtype kind string that is not a recognized category
    pub fn unsupported_kind(kind: &str) -> Self {
        RumpyError::InvalidArgument(format!("unsupported kind: {kind:?}"))
    }
}

pub type Result<T> = std::result::Result<T, RumpyError>;
