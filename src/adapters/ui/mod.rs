//! Terminal UI: banner, prompt theme, spinner, and the inquire-driven session.

pub mod banner;
pub mod progress;
pub mod tui;

/// Banner naming the estimating model, then the prompt theme. Call once before `TuiInputPort::run`.
pub fn init_ui(model: &str) {
    banner::print_welcome(&format!("estimates by {}", model));
    tui::apply_theme();
}
