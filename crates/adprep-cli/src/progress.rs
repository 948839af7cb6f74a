//! Per-row progress display.

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};

use adprep_model::Progress;

const BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}";

/// How progress is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressMode {
    /// Progress bar on stderr.
    #[default]
    Bar,
    /// `PROGRESS:i/n` lines on stdout, for host processes.
    Lines,
    Off,
}

/// Marker line printed in [`ProgressMode::Lines`].
pub fn progress_line(progress: Progress) -> String {
    format!("PROGRESS:{progress}")
}

/// Renders progress callbacks for one stage.
#[derive(Debug)]
pub struct ProgressReporter {
    mode: ProgressMode,
    label: String,
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(mode: ProgressMode, label: impl Into<String>) -> Self {
        Self {
            mode,
            label: label.into(),
            bar: None,
        }
    }

    pub fn report(&mut self, progress: Progress) {
        match self.mode {
            ProgressMode::Bar => {
                let label = &self.label;
                let bar = self
                    .bar
                    .get_or_insert_with(|| create_progress_bar(progress.total, label));
                bar.set_position(progress.current as u64);
            }
            ProgressMode::Lines => {
                let mut stdout = io::stdout().lock();
                // A closed pipe must not abort the run.
                let _ = writeln!(stdout, "{}", progress_line(progress));
                let _ = stdout.flush();
            }
            ProgressMode::Off => {}
        }
    }

    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

fn create_progress_bar(len: usize, label: &str) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .map(|style| style.progress_chars("=> "))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message(label.to_string());
    bar
}
