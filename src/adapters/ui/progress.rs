//! Spinner shown while an estimate is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a spinner labelled with the pending task name. Caller finishes it.
pub fn estimating_spinner(task: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(format!("Estimating \"{}\"", task));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
