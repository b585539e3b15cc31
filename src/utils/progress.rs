// file: src/utils/progress.rs
// description: spinner shown while waiting on the remote search service
// reference: uses indicatif, hidden automatically when stderr is not a terminal

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn request_spinner(message: &str, colored: bool) -> ProgressBar {
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] {msg}"
    } else {
        "{spinner} [{elapsed_precise}] {msg}"
    };

    let style = ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
