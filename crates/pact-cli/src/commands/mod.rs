pub mod dispatch;
pub mod gaps;
pub mod history;
pub mod partner;
pub mod query;
pub mod research;
pub mod schema;
pub mod score;
pub mod shared;
