mod accounts;
mod db;
mod preferences;

pub use accounts::AccountRecord;
pub use db::Database;
pub use preferences::{LAST_LOGIN_KEY, LOGIN_APP};
