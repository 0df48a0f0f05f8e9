pub mod candidate;
pub mod ranked;
pub mod record;

pub use candidate::{Candidate, Query};
pub use ranked::{to_json_rows, RankedResult};
pub use record::Record;
