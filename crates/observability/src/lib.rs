//! Tracing/logging setup shared by the back-office binaries and tests.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops. Integration
/// tests call this once per process, the API binary calls it at startup.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formatting).
pub mod tracing;
