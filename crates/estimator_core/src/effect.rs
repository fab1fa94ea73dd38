#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the project-type table with the given credentials.
    Connect {
        request_id: crate::RequestId,
        token: String,
        dataset_id: String,
    },
}
