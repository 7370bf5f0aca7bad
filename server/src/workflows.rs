use eyre::{WrapErr, eyre};
use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use types::{
    Result,
    workflow::{NewWorkflow, StatusPatch, Workflow, WorkflowStatus},
};
use url::Url;

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> eyre::Result<T>;
    async fn try_execute(self) -> eyre::Result<()>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> eyre::Result<T> {
        let response = self.send().await?.error_for_status()?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::debug!(?error, body = %String::from_utf8_lossy(&body), "failed to parse response");
            error.into()
        })
    }

    async fn try_execute(self) -> eyre::Result<()> {
        self.send().await?.error_for_status()?;
        Ok(())
    }
}

/// Client for the remote automation API. Calls are passed straight through:
/// no retries, no caching.
#[derive(Clone)]
pub struct WorkflowClient {
    client: Client,
    base_url: Url,
    token: SecretString,
}

impl WorkflowClient {
    pub fn new(base_url: Url, token: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    /// Appends path segments to the base URL, keeping any path it already has.
    fn endpoint(&self, segments: &[&str]) -> eyre::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| eyre!("workflow API url cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> eyre::Result<RequestBuilder> {
        let url = self.endpoint(segments)?;

        Ok(self
            .client
            .request(method, url)
            .bearer_auth(self.token.expose_secret()))
    }

    /// A body that is not a JSON array is treated as "no workflows".
    pub async fn list_workflows(&self) -> Result<Vec<Workflow>> {
        let body: Value = self
            .request(Method::GET, &["workflows"])?
            .try_send()
            .await
            .wrap_err("failed to fetch workflows")?;

        if !body.is_array() {
            tracing::warn!(%body, "workflows response is not an array");
            return Ok(Vec::new());
        }

        Ok(serde_json::from_value(body).wrap_err("failed to parse workflows")?)
    }

    pub async fn create_workflow(&self, workflow: &NewWorkflow) -> Result<Workflow> {
        let created: Workflow = self
            .request(Method::POST, &["workflows"])?
            .json(workflow)
            .try_send()
            .await
            .wrap_err("failed to create workflow")?;

        tracing::info!(id = %created.id, name = %created.name, "workflow created");
        Ok(created)
    }

    pub async fn set_status(&self, workflow_id: &str, status: WorkflowStatus) -> Result<()> {
        self.request(Method::PATCH, &["workflows", workflow_id])?
            .json(&StatusPatch { status })
            .try_execute()
            .await
            .wrap_err_with(|| format!("failed to update workflow status for {workflow_id}"))?;

        tracing::info!(id = workflow_id, %status, "workflow status updated");
        Ok(())
    }
}
