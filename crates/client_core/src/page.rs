//! Binding between the controller and a concrete UI surface.

use crate::render::View;

/// The UI anchors the controller drives: a text input, a submit control, the
/// output region, and the history region.
pub trait Page {
    fn input_value(&self) -> String;
    fn clear_input(&mut self);
    /// Enables or disables the input field and the submit control together.
    fn set_controls_enabled(&mut self, enabled: bool);
    /// Replaces the whole output region.
    fn show_output(&mut self, view: View);
    /// Replaces the whole history region.
    fn show_history(&mut self, view: View);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageUpdate {
    ControlsEnabled(bool),
    InputCleared,
    Output(View),
    History(View),
}

/// In-memory page that keeps the current state of every anchor plus the
/// ordered list of updates it received.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    pub input: String,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub output: Option<View>,
    pub history: Option<View>,
    updates: Vec<PageUpdate>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self {
            input: String::new(),
            input_enabled: true,
            submit_enabled: true,
            output: None,
            history: None,
            updates: Vec::new(),
        }
    }
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn updates(&self) -> &[PageUpdate] {
        &self.updates
    }

    /// Drains the recorded updates, leaving the current state untouched.
    pub fn take_updates(&mut self) -> Vec<PageUpdate> {
        std::mem::take(&mut self.updates)
    }

    pub fn output_html(&self) -> Option<String> {
        self.output.as_ref().map(View::to_html)
    }

    pub fn history_html(&self) -> Option<String> {
        self.history.as_ref().map(View::to_html)
    }
}

impl Page for MemoryPage {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.updates.push(PageUpdate::InputCleared);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        self.submit_enabled = enabled;
        self.updates.push(PageUpdate::ControlsEnabled(enabled));
    }

    fn show_output(&mut self, view: View) {
        self.updates.push(PageUpdate::Output(view.clone()));
        self.output = Some(view);
    }

    fn show_history(&mut self, view: View) {
        self.updates.push(PageUpdate::History(view.clone()));
        self.history = Some(view);
    }
}
