//! REST adapter for the workflow repository.
//!
//! Talks to `{api_url}/workflows` with `fetch` (via gloo-net). The session
//! token, when present, comes from `localStorage["token"]` and is sent as a
//! bearer token; it is written there by the sign-in flow.

use async_trait::async_trait;
use flowcanvas_core::persistence::{RenameBody, RestRoutes, bearer};
use flowcanvas_core::{
    GraphSnapshot, PersistenceError, SavedWorkflow, WorkflowId, WorkflowRepository,
    WorkflowSummary,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

const TOKEN_KEY: &str = "token";

/// Session token from local storage, if signed in
#[must_use]
pub fn session_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PersistenceError> {
    response.json::<T>().await.map_err(PersistenceError::decode)
}

/// Workflow repository backed by the REST API
#[derive(Debug, Clone)]
pub struct RestRepository {
    routes: RestRoutes,
}

impl RestRepository {
    #[must_use]
    pub fn new(api_url: &str) -> Self {
        Self {
            routes: RestRoutes::new(api_url),
        }
    }
}

#[async_trait(?Send)]
impl WorkflowRepository for RestRepository {
    async fn list(&self) -> Result<Vec<WorkflowSummary>, PersistenceError> {
        let response = authorized(Request::get(&self.routes.collection()))
            .send()
            .await
            .map_err(PersistenceError::transport)?;
        if !response.ok() {
            return Err(PersistenceError::ListFailed {
                status: response.status(),
            });
        }
        decode(response).await
    }

    async fn load(&self, id: &WorkflowId) -> Result<GraphSnapshot, PersistenceError> {
        let response = authorized(Request::get(&self.routes.item(id)))
            .send()
            .await
            .map_err(PersistenceError::transport)?;
        if !response.ok() {
            return Err(PersistenceError::LoadFailed {
                status: response.status(),
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
            Some(id) => Request::put(&self.routes.item(id)),
            None => Request::post(&self.routes.collection()),
        };
        let response = authorized(builder)
            .json(snapshot)
            .map_err(PersistenceError::transport)?
            .send()
            .await
            .map_err(PersistenceError::transport)?;
        if !response.ok() {
            return Err(PersistenceError::SaveFailed {
                status: response.status(),
            });
        }
        match id {
            // Updates keep their id; the reply body is not needed
            Some(id) => Ok(SavedWorkflow { id: id.clone() }),
            None => decode(response).await,
        }
    }

    async fn rename(&self, id: &WorkflowId, name: &str) -> Result<(), PersistenceError> {
        let response = authorized(Request::put(&self.routes.item(id)))
            .json(&RenameBody { name })
            .map_err(PersistenceError::transport)?
            .send()
            .await
            .map_err(PersistenceError::transport)?;
        if response.ok() {
            Ok(())
        } else {
            Err(PersistenceError::SaveFailed {
                status: response.status(),
            })
        }
    }

    async fn delete(&self, id: &WorkflowId) -> Result<(), PersistenceError> {
        let response = authorized(Request::delete(&self.routes.item(id)))
            .send()
            .await
            .map_err(PersistenceError::transport)?;
        if response.ok() {
            Ok(())
        } else {
            Err(PersistenceError::DeleteFailed {
                status: response.status(),
            })
        }
    }
}
