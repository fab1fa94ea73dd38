use thiserror::Error;

use crate::{EstimateResult, ProjectType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("Please select a project type and enter a valid GSF")]
    InvalidInput,
    /// The selection points at an id that is not in the current list,
    /// typically after a reconnect replaced it.
    #[error("Selected project type is no longer available; please select it again")]
    UnknownProjectType(String),
}

/// Parse user-entered area text. Accepts only finite numbers strictly above zero.
pub fn parse_area(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Compute a cost estimate for the selected project type.
///
/// Input validation runs before the lookup, so a missing selection or a bad
/// area is always reported as [`EstimateError::InvalidInput`] whatever the
/// list contains. No rounding is applied here.
pub fn estimate(
    project_types: &[ProjectType],
    selected_type_id: Option<&str>,
    area_input: &str,
) -> Result<EstimateResult, EstimateError> {
    let selected = selected_type_id
        .filter(|id| !id.is_empty())
        .ok_or(EstimateError::InvalidInput)?;
    let area_gsf = parse_area(area_input).ok_or(EstimateError::InvalidInput)?;

    let project_type = project_types
        .iter()
        .find(|t| t.id == selected)
        .ok_or_else(|| EstimateError::UnknownProjectType(selected.to_string()))?;

    Ok(compute(project_type, area_gsf))
}

fn compute(project_type: &ProjectType, area_gsf: f64) -> EstimateResult {
    let base_cost = project_type.avg_cost_per_gsf * area_gsf;
    let change_order_amount = base_cost * (project_type.avg_change_order_percent / 100.0);
    EstimateResult {
        project_type_name: project_type.name.clone(),
        area_gsf,
        avg_cost_per_gsf: project_type.avg_cost_per_gsf,
        base_cost,
        change_order_percent: project_type.avg_change_order_percent,
        change_order_amount,
        total_with_change_orders: base_cost + change_order_amount,
        num_projects: project_type.num_projects,
    }
}
