//! Namespace info tests - NumPy compatible
//!
//! These tests verify that `array_namespace_info()` reports the same
//! capabilities, devices and dtypes as `np.__array_namespace_info__()`.
