//! Bounded two-stage worker pipeline:
//! domain source → input queue → resolution workers → output queue →
//! persistence workers → sink.

mod coordinator;
mod persistence_worker;
mod report;
mod resolution_worker;
mod settings;
mod state;

pub use coordinator::PipelineCoordinator;
pub use persistence_worker::{PersistenceStats, PersistenceWorker};
pub use report::PipelineReport;
pub use resolution_worker::{ResolutionStats, ResolutionWorker};
pub use settings::PipelineSettings;
pub use state::PipelineState;
