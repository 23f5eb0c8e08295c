mod cache;
mod ledger;

pub use cache::CacheError;
pub use cache::ResourceCacheManager;
pub use cache::SearchCacheManager;
pub use ledger::LedgerError;
pub use ledger::LedgerManager;
pub use ledger::friendly_name;
