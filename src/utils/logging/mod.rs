//! Logging utilities
//!
//! This module provides standardized log lines for ledger operations.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
