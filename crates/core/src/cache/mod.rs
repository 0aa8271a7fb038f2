use std::time::Duration;

mod keys;
mod report;
mod serialization;
mod traits;

pub use keys::{owner_stamp_key, ResourceKind};
pub use report::{CacheReport, KindStatus};
pub use serialization::{deserialize_records, serialize_records, SerializationError};
pub use traits::Cache;

/// How long a cached payload stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
