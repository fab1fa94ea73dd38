use crate::{EstimateResult, ProjectType, RequestId};

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both API Key and Base ID";

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    token: String,
    dataset_id: String,
    configured: bool,
    show_config: bool,
    loading: bool,
    /// Id of the outstanding connect attempt, if any.
    pending_request: Option<RequestId>,
    next_request_id: RequestId,
    project_types: Vec<ProjectType>,
    selected_type_id: Option<String>,
    area_input: String,
    error: Option<String>,
    result: Option<EstimateResult>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            token: String::new(),
            dataset_id: String::new(),
            configured: false,
            show_config: true,
            loading: false,
            pending_request: None,
            next_request_id: 1,
            project_types: Vec::new(),
            selected_type_id: None,
            area_input: String::new(),
            error: None,
            result: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn project_types(&self) -> &[ProjectType] {
        &self.project_types
    }

    pub fn selected_type_id(&self) -> Option<&str> {
        self.selected_type_id.as_deref()
    }

    pub fn area_input(&self) -> &str {
        &self.area_input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&EstimateResult> {
        self.result.as_ref()
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub(crate) fn show_config(&self) -> bool {
        self.show_config
    }

    pub(crate) fn set_token(&mut self, token: String) {
        if self.token != token {
            self.token = token;
            self.dirty = true;
        }
    }

    pub(crate) fn set_dataset_id(&mut self, dataset_id: String) {
        if self.dataset_id != dataset_id {
            self.dataset_id = dataset_id;
            self.dirty = true;
        }
    }

    pub(crate) fn has_credentials(&self) -> bool {
        !self.token.trim().is_empty() && !self.dataset_id.trim().is_empty()
    }

    /// Marks a connect attempt as outstanding and returns its id.
    pub(crate) fn begin_connect(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_request = Some(request_id);
        self.loading = true;
        self.error = None;
        self.dirty = true;
        request_id
    }

    /// Returns true when `request_id` is the attempt we are waiting for.
    pub(crate) fn finish_connect(&mut self, request_id: RequestId) -> bool {
        if self.pending_request != Some(request_id) {
            return false;
        }
        self.pending_request = None;
        self.loading = false;
        self.dirty = true;
        true
    }

    /// Replaces the whole list; a selection that no longer resolves is dropped.
    pub(crate) fn replace_project_types(&mut self, project_types: Vec<ProjectType>) {
        self.project_types = project_types;
        if let Some(selected) = self.selected_type_id.as_deref() {
            if !self.project_types.iter().any(|t| t.id == selected) {
                self.selected_type_id = None;
            }
        }
        self.configured = true;
        self.show_config = false;
        self.error = None;
        self.dirty = true;
    }

    pub(crate) fn toggle_config(&mut self) -> bool {
        if !self.configured {
            return false;
        }
        self.show_config = !self.show_config;
        self.dirty = true;
        true
    }

    pub(crate) fn select_type(&mut self, selected: Option<String>) {
        if self.selected_type_id != selected {
            self.selected_type_id = selected;
            self.dirty = true;
        }
    }

    pub(crate) fn set_area_input(&mut self, area: String) {
        if self.area_input != area {
            self.area_input = area;
            self.dirty = true;
        }
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.dirty = true;
    }

    pub(crate) fn set_result(&mut self, result: EstimateResult) {
        self.result = Some(result);
        self.error = None;
        self.dirty = true;
    }
}
