//! Intent domain - classification of incoming messages

mod classifier;
mod query;

pub use classifier::{classify, Intent};
pub use query::{normalize, UserQuery};
