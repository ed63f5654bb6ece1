//! User directory implementations

mod in_memory;

pub use in_memory::{demo_student, InMemoryUserDirectory};
