//! Per-resource OpenML endpoints.

mod catalog;
mod datasets;
mod evaluations;
mod flows;
mod runs;
mod setups;
mod studies;
mod tasks;

pub use catalog::CatalogApi;
pub use datasets::DatasetsApi;
pub use evaluations::EvaluationsApi;
pub use flows::FlowsApi;
pub use runs::RunsApi;
pub use setups::SetupsApi;
pub use studies::StudiesApi;
pub use tasks::TasksApi;
