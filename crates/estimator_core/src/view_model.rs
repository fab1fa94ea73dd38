use crate::{format_count, format_currency, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectButtonLabel {
    #[default]
    Connect,
    Connecting,
    Reconnect,
}

impl ConnectButtonLabel {
    pub fn text(self) -> &'static str {
        match self {
            ConnectButtonLabel::Connect => "Connect to Airtable",
            ConnectButtonLabel::Connecting => "Connecting...",
            ConnectButtonLabel::Reconnect => "Reconnect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOptionView {
    pub id: String,
    pub label: String,
}

/// Estimate with every figure already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateView {
    pub project_type: String,
    pub area: String,
    pub avg_cost_per_gsf: String,
    pub base_cost: String,
    pub change_order_percent: String,
    pub change_order_amount: String,
    pub total_with_change_orders: String,
    pub num_projects: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub show_config: bool,
    pub show_calculator: bool,
    /// Token rendered as bullets; the raw value never leaves the state.
    pub token_masked: String,
    pub token_len: usize,
    pub dataset_id: String,
    pub connect_label: ConnectButtonLabel,
    pub connect_enabled: bool,
    pub type_options: Vec<TypeOptionView>,
    pub selected_index: Option<usize>,
    pub area_input: String,
    pub error: Option<String>,
    pub estimate: Option<EstimateView>,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let connect_label = if self.is_loading() {
            ConnectButtonLabel::Connecting
        } else if self.is_configured() {
            ConnectButtonLabel::Reconnect
        } else {
            ConnectButtonLabel::Connect
        };

        let type_options = self
            .project_types()
            .iter()
            .map(|t| TypeOptionView {
                id: t.id.clone(),
                label: format!("{} ({} projects)", t.name, t.num_projects),
            })
            .collect();

        let selected_index = self
            .selected_type_id()
            .and_then(|id| self.project_types().iter().position(|t| t.id == id));

        let token_len = self.token().chars().count();

        AppViewModel {
            show_config: self.show_config(),
            show_calculator: self.is_configured(),
            token_masked: "•".repeat(token_len),
            token_len,
            dataset_id: self.dataset_id().to_string(),
            connect_label,
            connect_enabled: !self.is_loading(),
            type_options,
            selected_index,
            area_input: self.area_input().to_string(),
            error: self.error().map(str::to_string),
            estimate: self.result().map(|r| EstimateView {
                project_type: r.project_type_name.clone(),
                area: format!("{} GSF", format_count(r.area_gsf)),
                avg_cost_per_gsf: format_currency(r.avg_cost_per_gsf),
                base_cost: format_currency(r.base_cost),
                change_order_percent: format!("{}%", r.change_order_percent),
                change_order_amount: format_currency(r.change_order_amount),
                total_with_change_orders: format_currency(r.total_with_change_orders),
                num_projects: format_count(r.num_projects as f64),
            }),
        }
    }
}
