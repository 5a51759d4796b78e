// history-fzf services
// History lookups with caching, matcher construction, and settings persistence.

pub mod history_query;
pub mod matcher_factory;
pub mod settings_engine;
