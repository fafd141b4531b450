use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Length of a hex-encoded resource id
pub const OBJECT_ID_LEN: usize = 24;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random);
static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & 0x00FF_FFFF));

/// Generate a 12-byte resource id, hex encoded (24 chars).
///
/// Layout:
///   - 4 bytes: seconds since Unix epoch, big endian
///   - 5 bytes: random, fixed for the lifetime of the process
///   - 3 bytes: counter starting at a random value, wrapping at 2^24
///
/// Ids created by one process sort by creation second.
pub fn object_id() -> String {
    let secs = (now_millis() / 1000) as u32;
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00FF_FFFF;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
    bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
    hex::encode(bytes)
}

/// Whether `s` has the shape of a resource id (24 hex digits)
pub fn is_object_id(s: &str) -> bool {
    s.len() == OBJECT_ID_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}
