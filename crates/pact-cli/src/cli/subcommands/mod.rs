mod partner;
mod query;
mod research;

pub use partner::PartnerCommands;
pub use query::QueryCommands;
pub use research::ResearchCommands;
