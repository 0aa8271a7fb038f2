mod error;
mod record;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::{Placement, Record, Repository};
pub use types::ListFilter;
