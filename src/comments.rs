// Flattening of comment-thread items into export rows.

use crate::api::CommentThread;
use serde::Serialize;

/// One exported comment. Field order is the column order of the CSV.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub author: String,
    pub comment: String,
    pub published_at: String,
}

impl From<&CommentThread> for CommentRecord {
    fn from(thread: &CommentThread) -> Self {
        let snippet = &thread.snippet.top_level_comment.snippet;
        CommentRecord {
            author: snippet.author_display_name.clone(),
            comment: snippet.text_original.clone(),
            published_at: snippet.published_at.clone(),
        }
    }
}

/// Turn one page of items into records, one per item, in order.
/// Replies are not expanded.
pub fn flatten_page(items: &[CommentThread]) -> Vec<CommentRecord> {
    let records: Vec<CommentRecord> = items.iter().map(CommentRecord::from).collect();
    tracing::info!(count = records.len(), "finished processing comments");
    records
}
