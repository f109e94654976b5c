//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique object id in its 24 character hex form.
///
/// The value is zero padded so it parses as an object id, and increases with every
/// call so natural ordering matches creation order.
pub fn next_object_id() -> String {
    format!("{:024x}", next_id())
}
