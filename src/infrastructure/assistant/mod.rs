//! Chat pipeline service

mod service;

pub use service::AssistantService;
