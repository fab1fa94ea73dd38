use estimator_core::{AppViewModel, EstimateView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::input::Focus;

const ACCENT: Color = Color::Indexed(63);
const MAX_LIST_ROWS: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Header,
    Config,
    ShowConfigHint,
    Error,
    Calculator,
    Results,
    Help,
}

pub fn render(frame: &mut Frame, view: &AppViewModel, focus: Focus) {
    let panels = visible_panels(view);
    let constraints: Vec<Constraint> = panels
        .iter()
        .map(|panel| panel_constraint(*panel, view))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    for (panel, area) in panels.iter().zip(chunks.iter()) {
        match panel {
            Panel::Header => render_header(frame, *area),
            Panel::Config => render_config(frame, *area, view, focus),
            Panel::ShowConfigHint => frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "F2: Show Configuration",
                    Style::default().fg(ACCENT),
                ))),
                *area,
            ),
            Panel::Error => render_error(frame, *area, view.error.as_deref().unwrap_or_default()),
            Panel::Calculator => render_calculator(frame, *area, view, focus),
            Panel::Results => {
                if let Some(estimate) = &view.estimate {
                    render_results(frame, *area, estimate);
                }
            }
            Panel::Help => render_help(frame, *area),
        }
    }
}

fn visible_panels(view: &AppViewModel) -> Vec<Panel> {
    let mut panels = vec![Panel::Header];
    if view.show_config {
        panels.push(Panel::Config);
    } else if view.show_calculator {
        panels.push(Panel::ShowConfigHint);
    }
    if view.error.is_some() {
        panels.push(Panel::Error);
    }
    if view.show_calculator {
        panels.push(Panel::Calculator);
    }
    if view.estimate.is_some() {
        panels.push(Panel::Results);
    }
    panels.push(Panel::Help);
    panels
}

fn panel_constraint(panel: Panel, view: &AppViewModel) -> Constraint {
    match panel {
        Panel::Header => Constraint::Length(4),
        Panel::Config => Constraint::Length(11),
        Panel::ShowConfigHint | Panel::Help => Constraint::Length(1),
        Panel::Error => Constraint::Length(3),
        Panel::Calculator => Constraint::Length(2 + list_rows(view) + 2 + 3 + 1),
        Panel::Results => Constraint::Min(10),
    }
}

fn list_rows(view: &AppViewModel) -> u16 {
    (view.type_options.len() as u16).clamp(1, MAX_LIST_ROWS)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Project Cost Calculator",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Estimate construction costs based on historical project data",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_config(frame: &mut Frame, area: Rect, view: &AppViewModel, focus: Focus) {
    let title = if view.show_calculator {
        "Airtable Configuration (F2 to hide)"
    } else {
        "Airtable Configuration"
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

    render_text_field(
        frame,
        rows[0],
        "Airtable Personal Access Token",
        &view.token_masked,
        "pat...",
        focus == Focus::Token,
    );
    render_text_field(
        frame,
        rows[1],
        "Base ID",
        &view.dataset_id,
        "app...",
        focus == Focus::DatasetId,
    );
    render_button(
        frame,
        rows[2],
        view.connect_label.text(),
        focus == Focus::ConnectButton,
        view.connect_enabled,
    );
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Token must have \"data.records:read\" scope and access to your base"),
            Line::from("Base ID is found in your Airtable URL after \"airtable.com/\""),
        ])
        .style(Style::default().fg(Color::Gray)),
        rows[3],
    );
}

fn render_calculator(frame: &mut Frame, area: Rect, view: &AppViewModel, focus: Focus) {
    let block = Block::default()
        .title("Calculate Estimate")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(list_rows(view) + 2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let items: Vec<ListItem> = if view.type_options.is_empty() {
        vec![ListItem::new(Span::styled(
            "No project types found",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        view.type_options
            .iter()
            .map(|option| ListItem::new(option.label.clone()))
            .collect()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title("Project Type")
                .borders(Borders::ALL)
                .border_style(focus_style(focus == Focus::TypeList)),
        )
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(view.selected_index);
    frame.render_stateful_widget(list, rows[0], &mut list_state);

    render_text_field(
        frame,
        rows[1],
        "Project Area (GSF)",
        &view.area_input,
        "Enter gross square feet",
        focus == Focus::Area,
    );
    render_button(
        frame,
        rows[2],
        "Calculate Estimate",
        focus == Focus::CalculateButton,
        true,
    );
}

fn render_results(frame: &mut Frame, area: Rect, estimate: &EstimateView) {
    let value = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        row("Project Type", &estimate.project_type, value),
        row("Project Area", &estimate.area, value),
        row("Historical Projects", &estimate.num_projects, value),
        row("Avg Cost / GSF", &estimate.avg_cost_per_gsf, value),
        Line::from(""),
        row("Base Estimated Cost", &estimate.base_cost, value),
        row(
            "Change Orders",
            &format!("{} ({})", estimate.change_order_amount, estimate.change_order_percent),
            value,
        ),
        row(
            "Total with Change Orders",
            &estimate.total_with_change_orders,
            value.fg(Color::Green),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("Cost Estimate")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            ),
        area,
    );
}

fn row(name: &str, text: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<28}"), Style::default().fg(Color::Gray)),
        Span::styled(text.to_string(), style),
    ])
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            ),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(
            "Tab/Shift-Tab: move  Enter: activate  Up/Down: select type  F2: config  Esc: quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    placeholder: &str,
    focused: bool,
) {
    let content = if text.is_empty() && !focused {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else if focused {
        Line::from(vec![Span::raw(text.to_string()), Span::styled("_", focus_style(true))])
    } else {
        Line::from(text.to_string())
    };
    frame.render_widget(
        Paragraph::new(content).block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        ),
        area,
    );
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, enabled: bool) {
    let style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!("[ {label} ]"), style))),
        area,
    );
}
