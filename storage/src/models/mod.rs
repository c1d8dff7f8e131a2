mod account;
mod session_overview;
mod session_query;
mod session_record;

pub use account::Account;
pub use session_overview::SessionOverview;
pub use session_query::SessionQuery;
pub use session_record::SessionRecord;
