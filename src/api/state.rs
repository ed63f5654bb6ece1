//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::StudentId;
use crate::infrastructure::assistant::AssistantService;

#[derive(Debug, Clone)]
pub struct AppState {
    pub assistant: Arc<AssistantService>,
    /// Student every chat request is answered for
    pub default_user_id: StudentId,
}

impl AppState {
    pub fn new(assistant: Arc<AssistantService>, default_user_id: impl Into<StudentId>) -> Self {
        Self {
            assistant,
            default_user_id: default_user_id.into(),
        }
    }
}
