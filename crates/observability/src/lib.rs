//! Tracing and logging (shared setup).

/// Initialize process-wide tracing with a fallback filter, used when
/// `RUST_LOG` is unset.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with_default(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
