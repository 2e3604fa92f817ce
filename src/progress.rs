//! Progress bar display for artifact downloads

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for a single download
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Create a bar for a download of `total` bytes, or a spinner when the
    /// server does not report a length
    pub fn new(file_name: &str, total: Option<u64>) -> Self {
        let bar = match total {
            Some(len) => {
                let bar = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar()
                    .template("  [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                {
                    bar.set_style(style.progress_chars("#>-"));
                }
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {bytes} {msg}")
                {
                    bar.set_style(style);
                }
                bar
            }
        };
        bar.set_message(truncate(file_name));

        Self { bar }
    }

    /// Underlying bar, for wrapping readers
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

/// Truncate long names for display
fn truncate(name: &str) -> String {
    let count = name.chars().count();
    if count > 50 {
        let tail: String = name.chars().skip(count - 47).collect();
        format!("...{tail}")
    } else {
        name.to_string()
    }
}
