// UI layer: asks for the video id with `dialoguer`, shows a spinner while
// the comments are fetched, then reports where the export went.

use crate::api::CommentSource;
use crate::fetch::export_comments;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Spinner shown while pages are fetched. Created up front so the log
/// writer can share it.
pub fn spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    Ok(spinner)
}

/// Log sink that hides the spinner while a line is written, so log output
/// and the spinner never share a terminal line.
pub struct SuspendingWriter<W> {
    bar: ProgressBar,
    inner: W,
}

impl<W> SuspendingWriter<W> {
    pub fn new(bar: ProgressBar, inner: W) -> Self {
        SuspendingWriter { bar, inner }
    }
}

impl<W: Write> Write for SuspendingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.flush())
    }
}

/// Prompt once for a video id and run the export into the working directory.
///
/// Whitespace around the entered id is trimmed; nothing else is validated.
pub fn run<S: CommentSource + ?Sized>(
    source: &S,
    today: NaiveDate,
    spinner: &ProgressBar,
) -> Result<()> {
    let video_id: String = Input::new()
        .with_prompt("Enter the video ID")
        .interact_text()?;
    let video_id = video_id.trim();

    let dir = std::env::current_dir().context("Failed to resolve working directory")?;

    spinner.set_message(format!("Fetching comments for {video_id}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = export_comments(source, video_id, today, &dir);
    spinner.finish_and_clear();
    let summary = result?;

    println!(
        "Finished fetching comments for video {}. {} comments found.",
        video_id, summary.count
    );
    println!(
        "Check out {} in the folder for your video comments.",
        summary.path.display()
    );
    Ok(())
}
