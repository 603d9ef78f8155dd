//! Per-page progress: an optional terminal bar and an optional callback.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::download::DownloadOutcome;

/// Sent once for every page that finished, in download order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEvent {
    pub pid: String,
    pub file_name: String,
    pub outcome: DownloadOutcome,
    /// 1-based position of this page in the child list.
    pub index: usize,
    pub total: usize,
}

#[derive(Default)]
pub struct ProgressReporter {
    show_bar: bool,
    bar: Option<ProgressBar>,
    cb: Option<Box<dyn FnMut(&PageEvent) + Send>>,
}

impl ProgressReporter {
    /// Reports nothing.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Draws a bar on stdout while pages download.
    pub fn with_bar() -> Self {
        Self {
            show_bar: true,
            ..Self::default()
        }
    }

    pub fn on_page<F>(mut self, cb: F) -> Self
    where
        F: FnMut(&PageEvent) + Send + 'static,
    {
        self.cb = Some(Box::new(cb));
        self
    }

    pub(crate) fn start(&mut self, total: usize) {
        if !self.show_bar {
            return;
        }
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
        if let Ok(style) =
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}<{eta_precise}] {msg}")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        self.bar = Some(bar);
    }

    pub(crate) fn page_done(&mut self, event: PageEvent) {
        if let Some(bar) = self.bar.as_ref() {
            if event.outcome == DownloadOutcome::Skipped {
                bar.set_message(format!("{} exists, skipped", event.file_name));
            } else {
                bar.set_message(event.file_name.clone());
            }
            bar.inc(1);
        }
        if let Some(cb) = self.cb.as_mut() {
            cb(&event);
        }
    }

    /// Leaves a finished bar on screen.
    pub(crate) fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }

    /// Stops drawing without leaving a half-full bar behind the error message.
    pub(crate) fn abandon(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}
