mod analysis_dispatcher;

pub use analysis_dispatcher::{AnalysisDispatcher, DispatchError};
