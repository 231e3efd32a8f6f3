//! Array namespace inspection utilities
//!
//! The RumPy analogue of NumPy's `__array_namespace_info__()`: a read-only
//! registry reporting the capabilities of the library, its devices and the
//! dtypes it supports. Everything here is constant data, so every query is
//! a pure function of its arguments and the registry can be shared freely
//! between threads.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use tracing::debug;

use crate::device::Device;
use crate::dtype::{DType, DTypeKind};
use crate::error::{Result, RumpyError};

/// Maximum number of dimensions an array may have
pub const MAX_RANK: usize = 32;

const CAPABILITIES: Capabilities = Capabilities {
    boolean_indexing: true,
    data_dependent_shapes: true,
    max_rank: MAX_RANK,
};

const DEFAULT_DTYPES: DefaultDTypes = DefaultDTypes {
    real_floating: DType::Float64,
    complex_floating: DType::Complex128,
    integral: DType::Int64,
    indexing: DType::Int64,
};

static NAMESPACE_INFO: NamespaceInfo = NamespaceInfo { _private: () };

/// Get the process-wide namespace info registry
pub fn array_namespace_info() -> &'static NamespaceInfo {
    &NAMESPACE_INFO
}

/// Value of a single capability entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum CapabilityValue {
    Bool(bool),
    Int(usize),
}

/// Optional features supported by the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Capabilities {
    /// Arrays can be indexed with boolean masks
    #[serde(rename = "boolean indexing")]
    pub boolean_indexing: bool,
    /// Output shapes may depend on array values (e.g. `unique`, `nonzero`)
    #[serde(rename = "data-dependent shapes")]
    pub data_dependent_shapes: bool,
    #[serde(rename = "max rank")]
    pub max_rank: usize,
}

impl Capabilities {
    pub const KEYS: [&'static str; 3] = ["boolean indexing", "data-dependent shapes", "max rank"];

    /// Look up a capability by its string key
    pub fn get(&self, name: &str) -> Option<CapabilityValue> {
        match name {
            "boolean indexing" => Some(CapabilityValue::Bool(self.boolean_indexing)),
            "data-dependent shapes" => Some(CapabilityValue::Bool(self.data_dependent_shapes)),
            "max rank" => Some(CapabilityValue::Int(self.max_rank)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, CapabilityValue)> + '_ {
        Self::KEYS
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }
}

/// Default dtypes per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DefaultDTypes {
    #[serde(rename = "real floating")]
    pub real_floating: DType,
    #[serde(rename = "complex floating")]
    pub complex_floating: DType,
    #[serde(rename = "integral")]
    pub integral: DType,
    /// Dtype used for indices and shapes
    #[serde(rename = "indexing")]
    pub indexing: DType,
}

impl DefaultDTypes {
    pub const KEYS: [&'static str; 4] = ["real floating", "complex floating", "integral", "indexing"];

    pub fn get(&self, category: &str) -> Option<DType> {
        match category {
            "real floating" => Some(self.real_floating),
            "complex floating" => Some(self.complex_floating),
            "integral" => Some(self.integral),
            "indexing" => Some(self.indexing),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, DType)> + '_ {
        Self::KEYS
            .into_iter()
            .filter_map(move |key| self.get(key).map(|dtype| (key, dtype)))
    }

    pub fn len(&self) -> usize {
        Self::KEYS.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Ordered mapping from dtype name to dtype.
///
/// Entries are unique and always kept in [`DType::ALL`] order, whatever
/// order they were produced in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DTypeMap {
    dtypes: Vec<DType>,
}

impl DTypeMap {
    fn matching(kinds: &[DTypeKind]) -> Self {
        DType::ALL
            .into_iter()
            .filter(|dtype| kinds.iter().any(|kind| kind.contains(*dtype)))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<DType> {
        self.dtypes.iter().copied().find(|dtype| dtype.as_str() == name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.dtypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dtypes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dtypes.iter().map(|dtype| dtype.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = DType> + '_ {
        self.dtypes.iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, DType)> + '_ {
        self.dtypes.iter().map(|dtype| (dtype.as_str(), *dtype))
    }
}

impl FromIterator<DType> for DTypeMap {
    fn from_iter<I: IntoIterator<Item = DType>>(iter: I) -> Self {
        let wanted: HashSet<DType> = iter.into_iter().collect();
        let dtypes = DType::ALL
            .into_iter()
            .filter(|dtype| wanted.contains(dtype))
            .collect();
        Self { dtypes }
    }
}

impl Serialize for DTypeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, dtype) in self.iter() {
            map.serialize_entry(name, &dtype)?;
        }
        map.end()
    }
}

/// The `kind` argument of [`NamespaceInfo::dtypes`]: one category string or
/// several whose results are unioned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindArg<'a> {
    Single(&'a str),
    Many(Vec<&'a str>),
}

impl KindArg<'_> {
    fn resolve(&self) -> Result<Vec<DTypeKind>> {
        match self {
            KindArg::Single(name) => Ok(vec![resolve_kind(name)?]),
            KindArg::Many(names) => names.iter().map(|name| resolve_kind(name)).collect(),
        }
    }
}

impl<'a> From<&'a str> for KindArg<'a> {
    fn from(kind: &'a str) -> Self {
        KindArg::Single(kind)
    }
}

impl<'a> From<DTypeKind> for KindArg<'a> {
    fn from(kind: DTypeKind) -> Self {
        KindArg::Single(kind.as_str())
    }
}

impl<'a> From<&[&'a str]> for KindArg<'a> {
    fn from(kinds: &[&'a str]) -> Self {
        KindArg::Many(kinds.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for KindArg<'a> {
    fn from(kinds: [&'a str; N]) -> Self {
        KindArg::Many(kinds.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for KindArg<'a> {
    fn from(kinds: Vec<&'a str>) -> Self {
        KindArg::Many(kinds)
    }
}

fn resolve_kind(name: &str) -> Result<DTypeKind> {
    DTypeKind::from_name(name).ok_or_else(|| {
        debug!(kind = name, "rejecting unsupported dtype kind");
        RumpyError::unsupported_kind(name)
    })
}

fn resolve_device(device: Option<&str>) -> Result<Device> {
    match device {
        None => Ok(Device::default()),
        Some(name) => Device::from_name(name).ok_or_else(|| {
            debug!(device = name, "rejecting unknown device");
            RumpyError::device_not_understood(name)
        }),
    }
}

/// Namespace info registry.
///
/// Obtained through [`array_namespace_info`].
///
/// ```
/// use rumpy_core::{array_namespace_info, DType};
///
/// let info = array_namespace_info();
/// assert_eq!(info.capabilities().max_rank, 32);
/// assert_eq!(info.default_device().name(), "cpu");
///
/// let floats = info.dtypes(Some("real floating".into()), None).unwrap();
/// assert_eq!(floats.values().collect::<Vec<_>>(), [DType::Float32, DType::Float64]);
/// ```
#[derive(Debug)]
pub struct NamespaceInfo {
    _private: (),
}

impl NamespaceInfo {
    pub fn capabilities(&self) -> Capabilities {
        CAPABILITIES
    }

    pub fn default_device(&self) -> Device {
        Device::default()
    }

    /// Default dtypes for `device` (the default device when `None`).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` ("Device not understood") for an unknown device.
    pub fn default_dtypes(&self, device: Option<&str>) -> Result<DefaultDTypes> {
        match resolve_device(device)? {
            Device::Cpu => Ok(DEFAULT_DTYPES),
        }
    }

    /// Supported dtypes, optionally filtered by kind.
    ///
    /// The device is validated before the kind. With `kind` omitted all
    /// dtypes are returned; a sequence of kinds yields the union of the
    /// per-kind results, and an empty sequence yields an empty map.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` ("Device not understood") for an unknown device,
    /// or ("unsupported kind") if any requested kind is not recognized.
    pub fn dtypes(&self, kind: Option<KindArg<'_>>, device: Option<&str>) -> Result<DTypeMap> {
        resolve_device(device)?;
        match kind {
            None => Ok(DType::ALL.into_iter().collect()),
            Some(kind) => Ok(DTypeMap::matching(&kind.resolve()?)),
        }
    }

    pub fn devices(&self) -> &'static [Device] {
        &Device::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_lookup() {
        let caps = array_namespace_info().capabilities();
        assert_eq!(caps.get("max rank"), Some(CapabilityValue::Int(32)));
        assert_eq!(caps.get("boolean indexing"), Some(CapabilityValue::Bool(true)));
        assert_eq!(caps.get("unknown"), None);
        assert_eq!(caps.iter().count(), 3);
    }

    #[test]
    fn test_dtype_map_dedups_and_orders() {
        let map: DTypeMap = [DType::Float64, DType::Bool, DType::Float64].into_iter().collect();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["bool", "float64"]);
    }

    #[test]
    fn test_many_kinds_fail_as_a_whole() {
        let err = KindArg::from(["bool", "nope"]).resolve().unwrap_err();
        assert_eq!(err, RumpyError::unsupported_kind("nope"));
    }

    #[test]
    fn test_device_checked_before_kind() {
        let err = array_namespace_info()
            .dtypes(Some("invalid".into()), Some("gpu"))
            .unwrap_err();
        assert!(err.to_string().contains("Device not understood"));
    }

    #[test]
    fn test_explicit_cpu_device() {
        let info = array_namespace_info();
        assert_eq!(info.default_dtypes(Some("cpu")), info.default_dtypes(None));
        assert_eq!(info.dtypes(None, Some("cpu")).unwrap().len(), 13);
    }
}
