use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading,
    Error {
        message: String,
    },
    Ready,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub phase: DetailPhase,
    /// Product id of the current activation.
    pub product_id: Option<u64>,
    pub generation: u64,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DetailPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, DetailPhase::Ready)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            DetailPhase::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
