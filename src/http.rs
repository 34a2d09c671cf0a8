//! reqwest implementation of the workflow repository.
//!
//! Same URL layout and bearer header as the browser editor's adapter, so the
//! CLI and the editor can share one backend.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::time::Duration;

use async_trait::async_trait;
use flowcanvas_core::persistence::{RenameBody, RestRoutes, bearer};
use flowcanvas_core::{
    GraphSnapshot, PersistenceError, SavedWorkflow, WorkflowId, WorkflowRepository,
    WorkflowSummary,
};
use reqwest::{RequestBuilder, Response, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Workflow repository backed by the REST API
#[derive(Debug, Clone)]
pub struct HttpRepository {
    client: reqwest::Client,
    routes: RestRoutes,
    token: Option<String>,
}

impl HttpRepository {
    /// # Errors
    /// Returns [`PersistenceError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(
        api_url: &Url,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PersistenceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PersistenceError::transport)?;
        Ok(Self {
            client,
            routes: RestRoutes::new(api_url.as_str()),
            token: token.filter(|token| !token.is_empty()),
        })
    }

    #[must_use]
    pub const fn routes(&self) -> &RestRoutes {
        &self.routes
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, bearer(token)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, PersistenceError> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(PersistenceError::transport)?;
        debug!(status = %response.status(), url = %response.url(), "Backend replied");
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PersistenceError> {
    response.json::<T>().await.map_err(PersistenceError::decode)
}

#[async_trait(?Send)]
impl WorkflowRepository for HttpRepository {
    async fn list(&self) -> Result<Vec<WorkflowSummary>, PersistenceError> {
        let response = self.send(self.client.get(self.routes.collection())).await?;
        if !response.status().is_success() {
            return Err(PersistenceError::ListFailed {
                status: response.status().as_u16(),
            });
        }
        decode(response).await
    }

    async fn load(&self, id: &WorkflowId) -> Result<GraphSnapshot, PersistenceError> {
        let response = self.send(self.client.get(self.routes.item(id))).await?;
        if !response.status().is_success() {
            return Err(PersistenceError::LoadFailed {
                status: response.status().as_u16(),
            });
        }
        decode(response).await
    }

    async fn save(
        &self,
        id: Option<&WorkflowId>,
        snapshot: &GraphSnapshot,
    ) -> Result<SavedWorkflow, PersistenceError> {
        let builder = match id {
            Some(id) => self.client.put(self.routes.item(id)),
            None => self.client.post(self.routes.collection()),
        };
        let response = self.send(builder.json(snapshot)).await?;
        if !response.status().is_success() {
            return Err(PersistenceError::SaveFailed {
                status: response.status().as_u16(),
            });
        }
        match id {
            Some(id) => Ok(SavedWorkflow { id: id.clone() }),
            None => decode(response).await,
        }
    }

    async fn rename(&self, id: &WorkflowId, name: &str) -> Result<(), PersistenceError> {
        let request = self.client.put(self.routes.item(id)).json(&RenameBody { name });
        let response = self.send(request).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(PersistenceError::SaveFailed {
                status: response.status().as_u16(),
            })
        }
    }

    async fn delete(&self, id: &WorkflowId) -> Result<(), PersistenceError> {
        let response = self.send(self.client.delete(self.routes.item(id))).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(PersistenceError::DeleteFailed {
                status: response.status().as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_routes_from_url() {
        let url = Url::parse("http://localhost:5000/api/").unwrap();
        let repo = HttpRepository::new(&url, None, Duration::from_secs(5)).unwrap();
        assert_eq!(repo.routes().collection(), "http://localhost:5000/api/workflows");
        let id = WorkflowId::new("7").unwrap();
        assert_eq!(repo.routes().item(&id), "http://localhost:5000/api/workflows/7");
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let url = Url::parse("http://localhost:5000/api").unwrap();
        let repo = HttpRepository::new(&url, Some(String::new()), Duration::from_secs(5)).unwrap();
        assert!(repo.token.is_none());
    }
}
