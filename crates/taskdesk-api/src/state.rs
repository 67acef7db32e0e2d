use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: taskdesk_core::TaskStore,
    pub quotes: Arc<taskdesk_quotes::QuoteClient>,
}
