//! Cache domain - memoization of resolved replies

mod key;
mod repository;

pub use key::CacheKey;
pub use repository::{CacheEntry, ResponseCache};
