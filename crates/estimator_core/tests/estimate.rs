use estimator_core::{estimate, EstimateError, ProjectType};
use pretty_assertions::assert_eq;

fn office() -> ProjectType {
    ProjectType {
        id: "rec1".to_string(),
        name: "Office".to_string(),
        num_projects: 5,
        avg_cost_per_gsf: 200.0,
        avg_change_order_percent: 10.0,
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn office_at_one_thousand_gsf() {
    let result = estimate(&[office()], Some("rec1"), "1000").expect("estimate");

    assert_eq!(result.project_type_name, "Office");
    assert_eq!(result.area_gsf, 1000.0);
    assert_eq!(result.avg_cost_per_gsf, 200.0);
    assert_eq!(result.base_cost, 200_000.0);
    assert_eq!(result.change_order_percent, 10.0);
    assert_eq!(result.change_order_amount, 20_000.0);
    assert_eq!(result.total_with_change_orders, 220_000.0);
    assert_eq!(result.num_projects, 5);
}

#[test]
fn base_and_total_follow_formula_across_inputs() {
    let costs = [0.0, 1.25, 87.5, 200.0, 1234.56];
    let percents = [0.0, 3.3, 10.0, 42.0, -5.0];
    let areas = [0.5, 1.0, 999.9, 25_000.0, 1.0e7];

    for cost in costs {
        for pct in percents {
            for area in areas {
                let t = ProjectType {
                    avg_cost_per_gsf: cost,
                    avg_change_order_percent: pct,
                    ..office()
                };
                let r = estimate(&[t], Some("rec1"), &area.to_string()).expect("estimate");
                let base = cost * area;
                assert!(close(r.base_cost, base), "base {cost} x {area}");
                assert!(
                    close(r.total_with_change_orders, base + base * pct / 100.0),
                    "total {cost} x {area} @ {pct}%"
                );
            }
        }
    }
}

#[test]
fn missing_selection_is_invalid_input() {
    assert_eq!(
        estimate(&[office()], None, "1000"),
        Err(EstimateError::InvalidInput)
    );
    assert_eq!(
        estimate(&[office()], Some(""), "1000"),
        Err(EstimateError::InvalidInput)
    );
}

#[test]
fn bad_area_is_invalid_input_regardless_of_list() {
    for area in ["", "   ", "0", "-1", "abc", "NaN"] {
        assert_eq!(
            estimate(&[office()], Some("rec1"), area),
            Err(EstimateError::InvalidInput),
            "area {area:?}"
        );
        assert_eq!(
            estimate(&[], Some("rec1"), area),
            Err(EstimateError::InvalidInput),
            "area {area:?} with empty list"
        );
    }
}

#[test]
fn unknown_selection_is_reported() {
    assert_eq!(
        estimate(&[office()], Some("recGone"), "1000"),
        Err(EstimateError::UnknownProjectType("recGone".to_string()))
    );
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        EstimateError::InvalidInput.to_string(),
        "Please select a project type and enter a valid GSF"
    );
}
