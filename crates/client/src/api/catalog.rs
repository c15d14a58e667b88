//! Reference catalogues: task types, evaluation measures, estimation procedures.

use crate::client::OpenMlClient;
use crate::error::OpenMlResult;
use crate::transport::FetchOutcome;

/// Catalog API for the fixed vocabularies OpenML is built on.
pub struct CatalogApi<'a> {
    client: &'a OpenMlClient,
}

impl<'a> CatalogApi<'a> {
    pub(crate) fn new(client: &'a OpenMlClient) -> Self {
        Self { client }
    }

    /// List task types (Supervised Classification, Regression, ...).
    pub async fn task_types(&self) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch("/tasktype/list", None).await
    }

    /// Get a single task type.
    pub async fn task_type(&self, task_type_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client
            .http
            .fetch(&format!("/tasktype/{}", task_type_id), None)
            .await
    }

    /// List evaluation measures (predictive_accuracy, area_under_roc_curve, ...).
    pub async fn evaluation_measures(&self) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch("/evaluationmeasure/list", None).await
    }

    /// List estimation procedures (10-fold Crossvalidation, ...).
    pub async fn estimation_procedures(&self) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch("/estimationprocedure/list", None).await
    }
}
