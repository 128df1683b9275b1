use crate::client::RequestExecutor;
use crate::errors::{ValidationError, WatsonResult};
use crate::services::dialog::{
    ConversationResponse, DialogContent, DialogFileFormat, DialogId, DialogList, Profile,
};
use crate::services::require_non_empty;
use crate::transport::{ArrayFormat, MultipartForm, ServiceInfo};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("dialog", "V1");

#[async_trait]
pub trait DialogService: Send + Sync {
    async fn list_dialogs(&self) -> WatsonResult<DialogList>;

    /// Uploads a dialog file under a new name.
    async fn create_dialog(&self, name: &str, file: &Path) -> WatsonResult<DialogId>;

    async fn update_dialog(&self, dialog_id: &str, file: &Path, format: DialogFileFormat) -> WatsonResult<()>;

    async fn delete_dialog(&self, dialog_id: &str) -> WatsonResult<()>;

    /// Writes the dialog file in `format` to `destination`.
    async fn download_dialog_file(
        &self,
        dialog_id: &str,
        format: DialogFileFormat,
        destination: &Path,
    ) -> WatsonResult<PathBuf>;

    async fn get_content(&self, dialog_id: &str) -> WatsonResult<Vec<DialogContent>>;

    async fn update_content(&self, dialog_id: &str, content: Vec<DialogContent>) -> WatsonResult<()>;

    /// Sends one conversation turn. Omit both ids to start a new conversation.
    async fn converse(
        &self,
        dialog_id: &str,
        conversation_id: Option<i64>,
        client_id: Option<i64>,
        input: Option<&str>,
    ) -> WatsonResult<ConversationResponse>;

    /// Reads profile variables; an empty `names` returns all of them.
    async fn get_profile(&self, dialog_id: &str, client_id: i64, names: &[String]) -> WatsonResult<Profile>;

    async fn update_profile(&self, dialog_id: &str, profile: Profile) -> WatsonResult<()>;
}

pub struct DialogServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl DialogServiceImpl {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self {
            executor,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

#[async_trait]
impl DialogService for DialogServiceImpl {
    async fn list_dialogs(&self) -> WatsonResult<DialogList> {
        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/dialogs", "listDialogs")
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn create_dialog(&self, name: &str, file: &Path) -> WatsonResult<DialogId> {
        require_non_empty("name", name)?;

        let form = MultipartForm::new()
            .text("name", name)
            .file("file", file, content_type_for(file));

        let endpoint = SERVICE
            .endpoint(Method::POST, "/v1/dialogs", "createDialog")
            .headers(&self.headers)
            .multipart(form);

        self.executor.execute(endpoint).await
    }

    async fn update_dialog(&self, dialog_id: &str, file: &Path, format: DialogFileFormat) -> WatsonResult<()> {
        require_non_empty("dialog_id", dialog_id)?;

        let form = MultipartForm::new().file("file", file, format.media_type());

        let endpoint = SERVICE
            .endpoint(Method::PUT, "/v1/dialogs/{dialog_id}", "updateDialog")
            .path_param("dialog_id", dialog_id)
            .headers(&self.headers)
            .multipart(form);

        self.executor.execute_empty(endpoint).await
    }

    async fn delete_dialog(&self, dialog_id: &str) -> WatsonResult<()> {
        require_non_empty("dialog_id", dialog_id)?;

        let endpoint = SERVICE
            .endpoint(Method::DELETE, "/v1/dialogs/{dialog_id}", "deleteDialog")
            .path_param("dialog_id", dialog_id)
            .headers(&self.headers);

        self.executor.execute_empty(endpoint).await
    }

    async fn download_dialog_file(
        &self,
        dialog_id: &str,
        format: DialogFileFormat,
        destination: &Path,
    ) -> WatsonResult<PathBuf> {
        require_non_empty("dialog_id", dialog_id)?;

        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/dialogs/{dialog_id}", "getDialogFile")
            .path_param("dialog_id", dialog_id)
            .headers(&self.headers)
            .accept(format.media_type());

        self.executor.download(endpoint, destination).await
    }

    async fn get_content(&self, dialog_id: &str) -> WatsonResult<Vec<DialogContent>> {
        require_non_empty("dialog_id", dialog_id)?;

        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/dialogs/{dialog_id}/content", "getContent")
            .path_param("dialog_id", dialog_id)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn update_content(&self, dialog_id: &str, content: Vec<DialogContent>) -> WatsonResult<()> {
        require_non_empty("dialog_id", dialog_id)?;

        let endpoint = SERVICE
            .endpoint(Method::PUT, "/v1/dialogs/{dialog_id}/content", "updateContent")
            .path_param("dialog_id", dialog_id)
            .headers(&self.headers)
            .json_body(&content)?;

        self.executor.execute_empty(endpoint).await
    }

    async fn converse(
        &self,
        dialog_id: &str,
        conversation_id: Option<i64>,
        client_id: Option<i64>,
        input: Option<&str>,
    ) -> WatsonResult<ConversationResponse> {
        require_non_empty("dialog_id", dialog_id)?;

        let endpoint = SERVICE
            .endpoint(Method::POST, "/v1/dialogs/{dialog_id}/conversation", "converse")
            .path_param("dialog_id", dialog_id)
            .query_opt("conversation_id", conversation_id)
            .query_opt("client_id", client_id)
            .query_opt("input", input)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn get_profile(&self, dialog_id: &str, client_id: i64, names: &[String]) -> WatsonResult<Profile> {
        require_non_empty("dialog_id", dialog_id)?;

        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/dialogs/{dialog_id}/profile", "getProfile")
            .path_param("dialog_id", dialog_id)
            .query("client_id", client_id)
            .query_list("name", names, ArrayFormat::Repeated)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn update_profile(&self, dialog_id: &str, profile: Profile) -> WatsonResult<()> {
        require_non_empty("dialog_id", dialog_id)?;
        if profile.name_values.is_empty() {
            return Err(ValidationError::MissingRequiredParameter("name_values".to_string()).into());
        }

        let endpoint = SERVICE
            .endpoint(Method::PUT, "/v1/dialogs/{dialog_id}/profile", "updateProfile")
            .path_param("dialog_id", dialog_id)
            .headers(&self.headers)
            .json_body(&profile)?;

        self.executor.execute_empty(endpoint).await
    }
}

fn content_type_for(file: &Path) -> &'static str {
    file.extension()
        .and_then(|e| e.to_str())
        .and_then(DialogFileFormat::from_extension)
        .unwrap_or(DialogFileFormat::Mct)
        .media_type()
}
