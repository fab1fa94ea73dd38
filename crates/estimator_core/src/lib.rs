//! Estimator core: pure state machine, cost estimator and view-model helpers.
mod effect;
mod estimate;
mod format;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use estimate::{estimate, parse_area, EstimateError};
pub use format::{format_count, format_currency};
pub use model::{EstimateResult, ProjectType, RequestId};
pub use msg::Msg;
pub use state::{AppState, MISSING_CREDENTIALS_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, ConnectButtonLabel, EstimateView, TypeOptionView};
