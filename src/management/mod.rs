mod auth;
mod history;
mod profile;

pub use auth::TokenManager;
pub use history::HistoryManager;
pub use profile::ProfileError;
pub use profile::ProfileManager;
