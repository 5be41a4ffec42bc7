//! Defaults Module
//!
//! Typed defaults storage with timestamped ("tracked") writes.

mod clock;
mod memory;
mod stats;
mod store;
mod tracking;
mod value;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use memory::MemoryDefaults;
pub use stats::DefaultsStats;
pub use store::DefaultsStore;
pub use tracking::{
    is_reserved_key, timestamp_key, TrackedEntry, TrackedStore, TIMESTAMP_KEY_PREFIX,
};
pub use value::{DefaultValue, Trackable};

// == Public Constants ==
/// Maximum allowed key length in bytes for keys accepted over HTTP
pub const MAX_KEY_LENGTH: usize = 256;
