use std::sync::Arc;

use crate::application::ports::JobStore;
use crate::application::services::AnalysisDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<AnalysisDispatcher>,
    pub job_store: Arc<dyn JobStore>,
}
