// Driver: pages through the comment threads of one video and exports them.

use crate::api::{ApiError, CommentSource};
use crate::comments::{flatten_page, CommentRecord};
use crate::export::{output_file_name, write_csv};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Outcome of a finished export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub count: usize,
}

/// Fetch every top-level comment for `video_id`, following continuation
/// tokens until a page comes back without one.
pub fn fetch_all_comments<S: CommentSource + ?Sized>(
    source: &S,
    video_id: &str,
) -> Result<Vec<CommentRecord>, ApiError> {
    let mut comments = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        tracing::debug!(video_id, page = pages + 1, token = ?page_token, "requesting comment threads");
        let page = source.list_comment_threads(video_id, page_token.as_deref())?;
        pages += 1;
        comments.extend(flatten_page(&page.items));

        match page.next_token() {
            Some(token) => page_token = Some(token.to_string()),
            None => break,
        }
    }

    tracing::info!(video_id, pages, count = comments.len(), "finished fetching comments");
    Ok(comments)
}

/// Fetch all comments and write them to `dir/comments_<video_id>_<date>.csv`.
/// Nothing is written if any request fails.
pub fn export_comments<S: CommentSource + ?Sized>(
    source: &S,
    video_id: &str,
    date: NaiveDate,
    dir: &Path,
) -> Result<ExportSummary> {
    let comments = fetch_all_comments(source, video_id)
        .with_context(|| format!("Failed to fetch comments for video {video_id}"))?;

    let path = dir.join(output_file_name(video_id, date));
    write_csv(&path, &comments)?;
    tracing::info!(path = %path.display(), "wrote export file");

    Ok(ExportSummary {
        path,
        count: comments.len(),
    })
}
