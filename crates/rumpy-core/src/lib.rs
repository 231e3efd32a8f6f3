//! RumPy Core - dtype, device and namespace-info types
//!
//! This crate defines the type system shared by every RumPy backend and the
//! `__array_namespace_info__` registry describing what the library supports.

pub mod device;
pub mod dtype;
pub mod error;
pub mod info;

pub use device::Device;
pub use dtype::{DType, DTypeKind};
pub use error::{Result, RumpyError};
pub use info::{
    array_namespace_info, CapabilityValue, Capabilities, DTypeMap, DefaultDTypes, KindArg,
    NamespaceInfo, MAX_RANK,
};

/// Crate version, as reported by `cargo`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
