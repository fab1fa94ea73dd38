#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the access token field.
    TokenChanged(String),
    /// User edited the dataset (base) id field.
    DatasetIdChanged(String),
    /// User pressed Connect / Reconnect.
    ConnectClicked,
    /// Engine finished a connect attempt successfully.
    ConnectSucceeded {
        request_id: crate::RequestId,
        project_types: Vec<crate::ProjectType>,
    },
    /// Engine finished a connect attempt with a user-facing error.
    ConnectFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// Show or hide the configuration panel.
    ToggleConfig,
    /// User picked a project type (or cleared the selection).
    TypeSelected(Option<String>),
    /// User edited the area input.
    AreaChanged(String),
    /// User pressed Calculate.
    CalculateClicked,
    /// UI/render tick.
    Tick,
}
