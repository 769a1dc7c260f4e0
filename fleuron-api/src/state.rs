use fleuron_ai::NotesParser;
use fleuron_core::OrderStore;
use fleuron_order::TransitionEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TransitionEngine>,
    pub store: Arc<dyn OrderStore>,
    pub parser: NotesParser,
}
