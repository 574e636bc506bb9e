pub mod criteria;
pub mod record;
pub mod source;
pub mod time;

pub use criteria::SelectionCriteria;
pub use record::{LastSeenRecord, ResolvedUserRecord, UserProfile};
pub use source::{LastLoginSource, UserDirectory};
pub use time::{format_plain_timestamp, format_utc_timestamp};
