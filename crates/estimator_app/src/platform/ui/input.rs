use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use estimator_core::{AppViewModel, Msg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Token,
    DatasetId,
    ConnectButton,
    TypeList,
    Area,
    CalculateButton,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Dispatch(Msg),
    /// Only local widget state changed; redraw without touching the app state.
    Redraw,
    Quit,
    Ignored,
}

/// Widget-side state: focus and the raw text of each input box.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    token: String,
    dataset_id: String,
    area: String,
}

impl UiState {
    pub fn handle_key(&mut self, key: KeyEvent, view: &AppViewModel) -> UiAction {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return UiAction::Quit;
        }

        match key.code {
            KeyCode::Tab => {
                self.move_focus(view, 1);
                UiAction::Redraw
            }
            KeyCode::BackTab => {
                self.move_focus(view, -1);
                UiAction::Redraw
            }
            KeyCode::F(2) => UiAction::Dispatch(Msg::ToggleConfig),
            KeyCode::Enter => self.activate(view),
            KeyCode::Up if self.focus == Focus::TypeList => select_relative(view, -1),
            KeyCode::Down if self.focus == Focus::TypeList => select_relative(view, 1),
            KeyCode::Backspace => self.edit(|text| {
                text.pop();
            }),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(|text| text.push(ch))
            }
            _ => UiAction::Ignored,
        }
    }

    /// Bracketed paste into the focused text box.
    pub fn handle_paste(&mut self, pasted: &str) -> UiAction {
        let pasted = pasted.trim_end_matches(['\r', '\n']);
        self.edit(|text| text.push_str(pasted))
    }

    /// Keeps focus on a control that is currently visible.
    pub fn sync_focus(&mut self, view: &AppViewModel) {
        let order = focus_order(view);
        if !order.contains(&self.focus) {
            if let Some(first) = order.first() {
                self.focus = *first;
            }
        }
    }

    fn activate(&mut self, view: &AppViewModel) -> UiAction {
        match self.focus {
            Focus::Token | Focus::DatasetId | Focus::ConnectButton => {
                if view.connect_enabled {
                    UiAction::Dispatch(Msg::ConnectClicked)
                } else {
                    UiAction::Ignored
                }
            }
            Focus::TypeList => {
                self.focus = Focus::Area;
                UiAction::Redraw
            }
            Focus::Area | Focus::CalculateButton => UiAction::Dispatch(Msg::CalculateClicked),
        }
    }

    fn edit(&mut self, apply: impl FnOnce(&mut String)) -> UiAction {
        let msg = match self.focus {
            Focus::Token => {
                apply(&mut self.token);
                Msg::TokenChanged(self.token.clone())
            }
            Focus::DatasetId => {
                apply(&mut self.dataset_id);
                Msg::DatasetIdChanged(self.dataset_id.clone())
            }
            Focus::Area => {
                apply(&mut self.area);
                Msg::AreaChanged(self.area.clone())
            }
            Focus::ConnectButton | Focus::TypeList | Focus::CalculateButton => {
                return UiAction::Ignored
            }
        };
        UiAction::Dispatch(msg)
    }

    fn move_focus(&mut self, view: &AppViewModel, step: isize) {
        let order = focus_order(view);
        if order.is_empty() {
            return;
        }
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let len = order.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.focus = order[next];
    }
}

fn focus_order(view: &AppViewModel) -> Vec<Focus> {
    let mut order = Vec::with_capacity(6);
    if view.show_config {
        order.extend([Focus::Token, Focus::DatasetId, Focus::ConnectButton]);
    }
    if view.show_calculator {
        order.extend([Focus::TypeList, Focus::Area, Focus::CalculateButton]);
    }
    order
}

fn select_relative(view: &AppViewModel, step: isize) -> UiAction {
    if view.type_options.is_empty() {
        return UiAction::Ignored;
    }
    let last = view.type_options.len() as isize - 1;
    let next = match view.selected_index {
        Some(index) => (index as isize + step).clamp(0, last),
        None if step > 0 => 0,
        None => last,
    } as usize;
    UiAction::Dispatch(Msg::TypeSelected(Some(view.type_options[next].id.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimator_core::TypeOptionView;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn config_view() -> AppViewModel {
        AppViewModel {
            show_config: true,
            connect_enabled: true,
            ..AppViewModel::default()
        }
    }

    fn calculator_view(selected_index: Option<usize>) -> AppViewModel {
        AppViewModel {
            show_calculator: true,
            connect_enabled: true,
            type_options: vec![
                TypeOptionView {
                    id: "rec1".to_string(),
                    label: "Office (5 projects)".to_string(),
                },
                TypeOptionView {
                    id: "rec2".to_string(),
                    label: "Lab (2 projects)".to_string(),
                },
            ],
            selected_index,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn typing_sends_full_field_text() {
        let mut ui = UiState::default();
        let view = config_view();

        ui.handle_key(key(KeyCode::Char('p')), &view);
        let action = ui.handle_key(key(KeyCode::Char('a')), &view);
        assert_eq!(action, UiAction::Dispatch(Msg::TokenChanged("pa".to_string())));

        let action = ui.handle_key(key(KeyCode::Backspace), &view);
        assert_eq!(action, UiAction::Dispatch(Msg::TokenChanged("p".to_string())));

        ui.handle_key(key(KeyCode::Tab), &view);
        let action = ui.handle_paste("appABC\n");
        assert_eq!(
            action,
            UiAction::Dispatch(Msg::DatasetIdChanged("appABC".to_string()))
        );
    }

    #[test]
    fn enter_connects_unless_loading() {
        let mut ui = UiState::default();
        assert_eq!(
            ui.handle_key(key(KeyCode::Enter), &config_view()),
            UiAction::Dispatch(Msg::ConnectClicked)
        );

        let loading = AppViewModel {
            connect_enabled: false,
            ..config_view()
        };
        assert_eq!(ui.handle_key(key(KeyCode::Enter), &loading), UiAction::Ignored);
    }

    #[test]
    fn focus_moves_to_calculator_when_config_hides() {
        let mut ui = UiState::default();
        let view = calculator_view(None);
        ui.sync_focus(&view);
        assert_eq!(ui.focus, Focus::TypeList);

        ui.handle_key(key(KeyCode::BackTab), &view);
        assert_eq!(ui.focus, Focus::CalculateButton);
    }

    #[test]
    fn arrows_select_project_types() {
        let mut ui = UiState {
            focus: Focus::TypeList,
            ..UiState::default()
        };

        assert_eq!(
            ui.handle_key(key(KeyCode::Down), &calculator_view(None)),
            UiAction::Dispatch(Msg::TypeSelected(Some("rec1".to_string())))
        );
        assert_eq!(
            ui.handle_key(key(KeyCode::Down), &calculator_view(Some(0))),
            UiAction::Dispatch(Msg::TypeSelected(Some("rec2".to_string())))
        );
        assert_eq!(
            ui.handle_key(key(KeyCode::Down), &calculator_view(Some(1))),
            UiAction::Dispatch(Msg::TypeSelected(Some("rec2".to_string())))
        );
    }

    #[test]
    fn enter_on_area_calculates_and_ctrl_c_quits() {
        let mut ui = UiState {
            focus: Focus::Area,
            ..UiState::default()
        };
        let view = calculator_view(Some(0));

        assert_eq!(
            ui.handle_key(key(KeyCode::Enter), &view),
            UiAction::Dispatch(Msg::CalculateClicked)
        );
        assert_eq!(
            ui.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &view),
            UiAction::Quit
        );
        assert_eq!(ui.handle_key(key(KeyCode::F(2)), &view), UiAction::Dispatch(Msg::ToggleConfig));
    }
}
