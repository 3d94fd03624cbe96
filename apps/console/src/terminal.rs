//! Terminal binding of the page anchors.

use std::io::Write;

use client_core::{Page, View};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    History,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":history" | ":h" => Command::History,
            ":help" | ":?" => Command::Help,
            ":quit" | ":q" | ":exit" => Command::Quit,
            other => Command::Search(other.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type a film number (1-7) and press Enter to look it up.
  :history  show the films consulted in this session
  :help     show this message
  :quit     exit";

/// Page whose regions are printed to a writer, as plain text or as HTML
/// fragments.
pub struct TerminalPage<W: Write> {
    out: W,
    html: bool,
    input: String,
    controls_enabled: bool,
}

impl<W: Write> TerminalPage<W> {
    pub fn new(out: W, html: bool) -> Self {
        Self {
            out,
            html,
            input: String::new(),
            controls_enabled: true,
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn print_line(&mut self, text: &str) {
        if let Err(error) = writeln!(self.out, "{text}") {
            warn!(%error, "terminal: write failed");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_view(&mut self, region: &str, view: &View) {
        let written = if self.html {
            writeln!(self.out, "<!-- {region} -->\n{}", view.to_html())
        } else {
            write!(self.out, "{view}")
        };
        if let Err(error) = written.and_then(|()| self.out.flush()) {
            warn!(%error, region, "terminal: write failed");
        }
    }
}

impl<W: Write> Page for TerminalPage<W> {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        debug!(enabled, "terminal: controls toggled");
        self.controls_enabled = enabled;
    }

    fn show_output(&mut self, view: View) {
        self.print_view("output", &view);
    }

    fn show_history(&mut self, view: View) {
        self.print_view("history", &view);
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
