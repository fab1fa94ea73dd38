use crate::{estimate, AppState, Effect, Msg, MISSING_CREDENTIALS_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TokenChanged(token) => {
            state.set_token(token);
            Vec::new()
        }
        Msg::DatasetIdChanged(dataset_id) => {
            state.set_dataset_id(dataset_id);
            Vec::new()
        }
        Msg::ConnectClicked => {
            // The connect control is disabled while an attempt is outstanding.
            if state.is_loading() {
                return (state, Vec::new());
            }
            if !state.has_credentials() {
                state.set_error(MISSING_CREDENTIALS_MESSAGE);
                return (state, Vec::new());
            }
            let request_id = state.begin_connect();
            vec![Effect::Connect {
                request_id,
                token: state.token().trim().to_string(),
                dataset_id: state.dataset_id().trim().to_string(),
            }]
        }
        Msg::ConnectSucceeded {
            request_id,
            project_types,
        } => {
            if state.finish_connect(request_id) {
                state.replace_project_types(project_types);
            }
            Vec::new()
        }
        Msg::ConnectFailed {
            request_id,
            message,
        } => {
            if state.finish_connect(request_id) {
                state.set_error(message);
            }
            Vec::new()
        }
        Msg::ToggleConfig => {
            state.toggle_config();
            Vec::new()
        }
        Msg::TypeSelected(selected) => {
            state.select_type(selected);
            Vec::new()
        }
        Msg::AreaChanged(area) => {
            state.set_area_input(area);
            Vec::new()
        }
        Msg::CalculateClicked => {
            match estimate(
                state.project_types(),
                state.selected_type_id(),
                state.area_input(),
            ) {
                Ok(result) => state.set_result(result),
                Err(err) => state.set_error(err.to_string()),
            }
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
