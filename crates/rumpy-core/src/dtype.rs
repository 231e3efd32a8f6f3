//! Data types supported by RumPy

use serde::{Deserialize, Serialize};

/// Supported data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Complex64,
    Complex128,
}

impl DType {
    /// Every supported dtype, in canonical (NumPy) enumeration order
    pub const ALL: [DType; 13] = [
        DType::Bool,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::UInt8,
        DType::UInt16,
        DType::UInt32,
        DType::UInt64,
        DType::Float32,
        DType::Float64,
        DType::Complex64,
        DType::Complex128,
    ];

    /// Size in bytes
    pub fn size(&self) -> usize {
        match self {
            DType::Bool | DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Float32 | DType::Int32 | DType::UInt32 => 4,
            DType::Float64 | DType::Int64 | DType::UInt64 | DType::Complex64 => 8,
            DType::Complex128 => 16,
        }
    }

    /// String representation (NumPy compatible)
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
        }
    }

    /// Look up a dtype by its canonical name
    pub fn from_name(name: &str) -> Option<DType> {
        DType::ALL.into_iter().find(|dtype| dtype.as_str() == name)
    }

    /// The element category this dtype belongs to.
    ///
    /// Never returns [`DTypeKind::Integral`]; that kind is the union of the
    /// signed and unsigned categories.
    pub fn kind(&self) -> DTypeKind {
        match self {
            DType::Bool => DTypeKind::Bool,
            DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64 => DTypeKind::SignedInteger,
            DType::UInt8 | DType::UInt16 | DType::UInt32 | DType::UInt64 => {
                DTypeKind::UnsignedInteger
            }
            DType::Float32 | DType::Float64 => DTypeKind::RealFloating,
            DType::Complex64 | DType::Complex128 => DTypeKind::ComplexFloating,
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for DType {
    fn default() -> Self {
        DType::Float64
    }
}

/// Semantic dtype categories accepted by `NamespaceInfo::dtypes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DTypeKind {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "signed integer")]
    SignedInteger,
    #[serde(rename = "unsigned integer")]
    UnsignedInteger,
    #[serde(rename = "integral")]
    Integral,
    #[serde(rename = "real floating")]
    RealFloating,
    #[serde(rename = "complex floating")]
    ComplexFloating,
}

impl DTypeKind {
    pub const ALL: [DTypeKind; 6] = [
        DTypeKind::Bool,
        DTypeKind::SignedInteger,
        DTypeKind::UnsignedInteger,
        DTypeKind::Integral,
        DTypeKind::RealFloating,
        DTypeKind::ComplexFloating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DTypeKind::Bool => "bool",
            DTypeKind::SignedInteger => "signed integer",
            DTypeKind::UnsignedInteger => "unsigned integer",
            DTypeKind::Integral => "integral",
            DTypeKind::RealFloating => "real floating",
            DTypeKind::ComplexFloating => "complex floating",
        }
    }

    /// Exact, case-sensitive lookup of a kind string
    pub fn from_name(name: &str) -> Option<DTypeKind> {
        DTypeKind::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Whether `dtype` is a member of this category
    pub fn contains(&self, dtype: DType) -> bool {
        match self {
            DTypeKind::Integral => matches!(
                dtype.kind(),
                DTypeKind::SignedInteger | DTypeKind::UnsignedInteger
            ),
            kind => dtype.kind() == *kind,
        }
    }
}

impl std::fmt::Display for DTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
