/// Identifies one connect attempt so late completions can be discarded.
pub type RequestId = u64;

/// One row of the remote "Project Types" table after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectType {
    pub id: String,
    pub name: String,
    pub num_projects: u64,
    /// Currency per gross square foot.
    pub avg_cost_per_gsf: f64,
    /// Percentage, e.g. `10.0` for 10%.
    pub avg_change_order_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateResult {
    pub project_type_name: String,
    pub area_gsf: f64,
    pub avg_cost_per_gsf: f64,
    pub base_cost: f64,
    pub change_order_percent: f64,
    pub change_order_amount: f64,
    pub total_with_change_orders: f64,
    pub num_projects: u64,
}
