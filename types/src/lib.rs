mod error;
mod page;
mod roster;
mod user;
pub mod workflow;

pub use error::{Error, Result};
pub use page::{PAGE_SIZE, PageWindow, RosterPage};
pub use roster::{Roster, RosterView};
pub use user::{Role, UserId, UserRecord, UserStatus};
