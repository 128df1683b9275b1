use crate::client::RequestExecutor;
use crate::errors::WatsonResult;
use crate::services::assistant::{MessageRequest, MessageResponse, SessionResponse};
use crate::services::require_non_empty;
use crate::transport::ServiceInfo;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("conversation", "V2");

#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Creates a session, the handle for one stateful conversation.
    async fn create_session(&self, assistant_id: &str) -> WatsonResult<SessionResponse>;

    async fn delete_session(&self, assistant_id: &str, session_id: &str) -> WatsonResult<()>;

    /// Sends one turn within a session. `None` (or an empty request) sends no body.
    async fn message(
        &self,
        assistant_id: &str,
        session_id: &str,
        request: Option<MessageRequest>,
    ) -> WatsonResult<MessageResponse>;

    /// Sends one turn without a session; state travels in `context`.
    async fn message_stateless(
        &self,
        assistant_id: &str,
        request: Option<MessageRequest>,
    ) -> WatsonResult<MessageResponse>;
}

pub struct AssistantServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl AssistantServiceImpl {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self {
            executor,
            headers: HeaderMap::new(),
        }
    }

    /// Headers added to every call made through this handle.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

#[async_trait]
impl AssistantService for AssistantServiceImpl {
    async fn create_session(&self, assistant_id: &str) -> WatsonResult<SessionResponse> {
        require_non_empty("assistant_id", assistant_id)?;

        let endpoint = SERVICE
            .endpoint(Method::POST, "/v2/assistants/{assistant_id}/sessions", "createSession")
            .path_param("assistant_id", assistant_id)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn delete_session(&self, assistant_id: &str, session_id: &str) -> WatsonResult<()> {
        require_non_empty("assistant_id", assistant_id)?;
        require_non_empty("session_id", session_id)?;

        let endpoint = SERVICE
            .endpoint(
                Method::DELETE,
                "/v2/assistants/{assistant_id}/sessions/{session_id}",
                "deleteSession",
            )
            .path_param("assistant_id", assistant_id)
            .path_param("session_id", session_id)
            .headers(&self.headers);

        self.executor.execute_empty(endpoint).await
    }

    async fn message(
        &self,
        assistant_id: &str,
        session_id: &str,
        request: Option<MessageRequest>,
    ) -> WatsonResult<MessageResponse> {
        require_non_empty("assistant_id", assistant_id)?;
        require_non_empty("session_id", session_id)?;

        let endpoint = SERVICE
            .endpoint(
                Method::POST,
                "/v2/assistants/{assistant_id}/sessions/{session_id}/message",
                "message",
            )
            .path_param("assistant_id", assistant_id)
            .path_param("session_id", session_id)
            .headers(&self.headers)
            .optional_json_body(&request)?;

        self.executor.execute(endpoint).await
    }

    async fn message_stateless(
        &self,
        assistant_id: &str,
        request: Option<MessageRequest>,
    ) -> WatsonResult<MessageResponse> {
        require_non_empty("assistant_id", assistant_id)?;

        let endpoint = SERVICE
            .endpoint(Method::POST, "/v2/assistants/{assistant_id}/message", "messageStateless")
            .path_param("assistant_id", assistant_id)
            .headers(&self.headers)
            .optional_json_body(&request)?;

        self.executor.execute(endpoint).await
    }
}
