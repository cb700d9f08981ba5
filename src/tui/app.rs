//! Application state for the calculator.
//!
//! The imperative shell: executes the actions determined by `actions` and
//! owns the inputs, the derived outputs, and the per-field edit buffers.

use crossterm::event::KeyEvent;

use crate::core::{
    derive_outputs, input_field_spec, set_field, FunnelInputs, FunnelOutputs, InputField,
    RecalcMode,
};

use super::actions::{determine_action, ActionContext, CalcAction};
use super::input::NumericInput;
use super::theme::ThemeMode;

pub struct App {
    inputs: FunnelInputs,
    outputs: FunnelOutputs,
    editors: [NumericInput; 5],
    focused: usize,
    mode: RecalcMode,
    theme_mode: ThemeMode,
    /// Deferred mode only: inputs have changed since the last derivation.
    stale: bool,
}

impl App {
    pub fn new(mode: RecalcMode, theme_mode: ThemeMode) -> Self {
        Self {
            inputs: FunnelInputs::default(),
            outputs: FunnelOutputs::default(),
            editors: Default::default(),
            focused: 0,
            mode,
            theme_mode,
            stale: false,
        }
    }

    pub fn inputs(&self) -> &FunnelInputs {
        &self.inputs
    }

    pub fn outputs(&self) -> &FunnelOutputs {
        &self.outputs
    }

    pub fn mode(&self) -> RecalcMode {
        self.mode
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn editor(&self, index: usize) -> &NumericInput {
        &self.editors[index]
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Handle a key event; returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctx = ActionContext { mode: self.mode };
        let Some(action) = determine_action(key, ctx) else {
            return false;
        };
        self.execute_action(action)
    }

    fn execute_action(&mut self, action: CalcAction) -> bool {
        match action {
            CalcAction::Quit => return true,

            CalcAction::FocusNext => {
                self.focused = (self.focused + 1) % InputField::ALL.len();
            }

            CalcAction::FocusPrev => {
                self.focused = (self.focused + InputField::ALL.len() - 1) % InputField::ALL.len();
            }

            CalcAction::InsertChar(c) => {
                if self.editors[self.focused].insert(c) {
                    self.commit_focused();
                }
            }

            CalcAction::DeleteChar => {
                if self.editors[self.focused].backspace() {
                    self.commit_focused();
                }
            }

            CalcAction::StepUp => self.step_focused(1.0),
            CalcAction::StepDown => self.step_focused(-1.0),

            CalcAction::Recalculate => self.recalculate(),
            CalcAction::Reset => self.reset(),

            CalcAction::ToggleTheme => self.theme_mode = self.theme_mode.toggled(),
        }

        false
    }

    /// Store the focused editor's text into the inputs. Reactive mode
    /// re-derives immediately; deferred mode only marks the outputs stale.
    fn commit_focused(&mut self) {
        let field = InputField::ALL[self.focused];
        self.inputs = set_field(&self.inputs, field, self.editors[self.focused].text());

        match self.mode {
            RecalcMode::Reactive => self.outputs = derive_outputs(&self.inputs),
            RecalcMode::Deferred => self.stale = true,
        }
    }

    fn step_focused(&mut self, direction: f64) {
        let field = InputField::ALL[self.focused];
        let spec = input_field_spec(field);
        let stepped = (self.inputs.get(field) + direction * spec.step).max(spec.min);

        self.editors[self.focused].set_value(stepped);
        self.commit_focused();
    }

    fn recalculate(&mut self) {
        self.outputs = derive_outputs(&self.inputs);
        self.stale = false;
    }

    /// Return to the all-zero defaults. The deferred mode zeroes the outputs
    /// by assignment rather than recomputation.
    fn reset(&mut self) {
        self.inputs = FunnelInputs::default();
        for editor in &mut self.editors {
            editor.clear();
        }

        match self.mode {
            RecalcMode::Reactive => self.outputs = derive_outputs(&self.inputs),
            RecalcMode::Deferred => self.outputs = FunnelOutputs::default(),
        }

        self.stale = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(app: &mut App, field_index: usize, text: &str) {
        app.focused = field_index;
        for c in text.chars() {
            app.execute_action(CalcAction::InsertChar(c));
        }
    }

    fn fill_sample(app: &mut App) {
        type_into(app, 0, "100");
        type_into(app, 1, "10");
        type_into(app, 2, "20");
        type_into(app, 3, "5");
        type_into(app, 4, "1000");
    }

    #[test]
    fn test_reactive_mode_recomputes_on_every_edit() {
        let mut app = App::new(RecalcMode::Reactive, ThemeMode::Dark);
        fill_sample(&mut app);

        assert_eq!(app.outputs().budget_required, 25000.0);
        assert_eq!(app.outputs().roi_percent, 300.0);
        assert!(!app.is_stale());
    }

    #[test]
    fn test_deferred_mode_waits_for_recalculate() {
        let mut app = App::new(RecalcMode::Deferred, ThemeMode::Dark);
        fill_sample(&mut app);

        // Inputs are live, outputs are not.
        assert_eq!(app.inputs().target_sales, 100.0);
        assert_eq!(app.outputs().budget_required, 0.0);
        assert!(app.is_stale());

        app.execute_action(CalcAction::Recalculate);
        assert_eq!(app.outputs().budget_required, 25000.0);
        assert!(!app.is_stale());
    }

    #[test]
    fn test_deferred_outputs_stay_stale_across_edits() {
        let mut app = App::new(RecalcMode::Deferred, ThemeMode::Dark);
        fill_sample(&mut app);
        app.execute_action(CalcAction::Recalculate);

        type_into(&mut app, 3, "0");
        assert_eq!(app.outputs().budget_required, 25000.0);
        assert!(app.is_stale());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = App::new(RecalcMode::Reactive, ThemeMode::Dark);
        fill_sample(&mut app);

        app.execute_action(CalcAction::Reset);

        assert_eq!(app.inputs(), &FunnelInputs::default());
        assert_eq!(app.outputs(), &FunnelOutputs::default());
        for i in 0..InputField::ALL.len() {
            assert!(app.editor(i).is_empty());
        }
    }

    #[test]
    fn test_reset_in_deferred_mode_zeroes_outputs() {
        let mut app = App::new(RecalcMode::Deferred, ThemeMode::Dark);
        fill_sample(&mut app);
        app.execute_action(CalcAction::Recalculate);
        assert!(app.outputs().budget_required > 0.0);

        app.execute_action(CalcAction::Reset);
        assert_eq!(app.outputs(), &FunnelOutputs::default());
        assert!(!app.is_stale());
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut app = App::new(RecalcMode::Reactive, ThemeMode::Dark);

        app.execute_action(CalcAction::FocusPrev);
        assert_eq!(app.focused_index(), InputField::ALL.len() - 1);

        app.execute_action(CalcAction::FocusNext);
        assert_eq!(app.focused_index(), 0);
    }

    #[test]
    fn test_step_up_from_empty_lands_on_minimum() {
        let mut app = App::new(RecalcMode::Reactive, ThemeMode::Dark);

        // Target sales steps by 1 with a minimum of 1.
        app.execute_action(CalcAction::StepUp);
        assert_eq!(app.inputs().target_sales, 1.0);

        // Stepping down clamps at the minimum.
        app.execute_action(CalcAction::StepDown);
        assert_eq!(app.inputs().target_sales, 1.0);
    }

    #[test]
    fn test_theme_toggle_never_touches_data() {
        let mut app = App::new(RecalcMode::Reactive, ThemeMode::Dark);
        fill_sample(&mut app);
        let before = *app.outputs();

        app.execute_action(CalcAction::ToggleTheme);
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        assert_eq!(app.outputs(), &before);
    }
}
