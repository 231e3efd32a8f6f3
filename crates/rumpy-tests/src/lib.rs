//! Shared test suite for RumPy
//!
//! Tests are designed to match NumPy behavior exactly.

pub mod info;

/// Test utilities
pub mod utils {
    use rumpy_core::{DType, DTypeMap};

    /// Build the dtype map NumPy would return for the given dtypes
    pub fn dtype_map(dtypes: &[DType]) -> DTypeMap {
        dtypes.iter().copied().collect()
    }

    /// Install a test-writer subscriber so debug events show up on failure
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("rumpy_core=debug"))
            .with_test_writer()
            .try_init();
    }
}
