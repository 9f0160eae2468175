//! Terminal implementation of the rendering surface.

use std::io::Write;

use riskgauge_app::{AssessmentView, RenderSurface};

/// Width of a full probability bar in terminal cells.
const BAR_WIDTH: usize = 30;

/// Renders results to stdout and status/errors to stderr.
///
/// The control-enabled and busy-indicator affordances have no persistent
/// visual in a line-oriented terminal; the busy indicator prints a one-line
/// status when shown, and the enabled flag is tracked so interactive mode
/// reflects the lifecycle faithfully.
#[derive(Debug)]
pub struct TerminalSurface {
    control_enabled: bool,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            control_enabled: true,
        }
    }

    fn draw_bar(value: f64) -> String {
        // Negative or oversized service data degrades to an empty/full bar;
        // the label still carries the unclamped number.
        let filled = (value.max(0.0).min(1.0) * BAR_WIDTH as f64).round() as usize;
        let mut bar = String::with_capacity(BAR_WIDTH);
        for index in 0..BAR_WIDTH {
            bar.push(if index < filled { '#' } else { '.' });
        }
        bar
    }
}

impl RenderSurface for TerminalSurface {
    fn set_control_enabled(&mut self, enabled: bool) {
        self.control_enabled = enabled;
    }

    fn set_busy_indicator(&mut self, visible: bool) {
        if visible {
            eprint!("analyzing ...");
        } else {
            eprint!("\r              \r");
        }
        let _ = std::io::stderr().flush();
    }

    fn hide_result(&mut self) {}

    fn hide_error(&mut self) {}

    fn show_assessment(&mut self, view: &AssessmentView) {
        println!("ticker        : {}", view.ticker);
        println!("risk          : {} [{}]", view.badge, view.tier.as_str());
        println!("volatility    : {}", view.volatility);
        println!("confidence    : {}", view.confidence);
        println!("recommendation: {}", view.recommendation);
        for bar in &view.bars {
            println!(
                "  {:<7}{} {}",
                bar.class.as_str(),
                Self::draw_bar(bar.value),
                bar.percent
            );
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}
