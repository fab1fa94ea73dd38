//! Estimator engine: remote connector and effect execution.
mod connector;
mod engine;
mod records;
mod settings;
mod types;

pub use connector::{Connector, ReqwestConnector};
pub use engine::EngineHandle;
pub use records::{parse_error_message, parse_records_body, project_type_from_record};
pub use settings::ConnectorSettings;
pub use types::{ConnectError, EngineEvent};
