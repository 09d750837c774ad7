use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::output;

const TICKS: &[&str] = &["◐", "◓", "◑", "◒", "●"];
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Animated stderr line shown while a Glosbe lookup is in flight.
///
/// Nothing is drawn under `--quiet`. The line is cleared on `stop` or drop,
/// so the translation picker starts on a clean row.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let target = if output::is_quiet() {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let bar = ProgressBar::with_draw_target(None, target);

        let template = if output::is_no_color() {
            "{spinner} {msg}"
        } else {
            "{spinner:.cyan} {msg}"
        };
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style.tick_strings(TICKS));
        }

        bar.set_message(message.to_owned());
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar }
    }

    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
