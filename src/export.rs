// Export module: names the output file and writes records to it as CSV.

use crate::comments::CommentRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tempfile::NamedTempFile;

/// Header row of every export, matching `CommentRecord`'s fields.
pub const HEADER: [&str; 3] = ["author", "comment", "published_at"];

/// `comments_<video_id>_<YYYY-MM-DD>.csv`
pub fn output_file_name(video_id: &str, date: NaiveDate) -> String {
    format!("comments_{}_{}.csv", video_id, date.format("%Y-%m-%d"))
}

/// Write the header and one row per record to `path`, replacing any
/// existing file. The header is written even when there are no records.
///
/// Rows go to a temporary file next to `path` that is renamed into place
/// once complete, so a failed write never leaves a partial export.
pub fn write_csv(path: &Path, records: &[CommentRecord]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut tmp);
        writer.write_record(HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    // Dropping the returned file removes the temporary on failure.
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, comment: &str, published_at: &str) -> CommentRecord {
        CommentRecord {
            author: author.into(),
            comment: comment.into(),
            published_at: published_at.into(),
        }
    }

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            output_file_name("dQw4w9WgXcQ", date),
            "comments_dQw4w9WgXcQ_2024-03-07.csv"
        );
    }

    #[test]
    fn empty_export_has_only_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &[]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "author,comment,published_at\n"
        );
    }

    #[test]
    fn quotes_commas_quotes_and_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            record("alice", "plain", "2024-01-01T00:00:00Z"),
            record("bob", "a, \"quoted\"\nline", "2024-01-02T00:00:00Z"),
        ];
        write_csv(&path, &records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap(), &csv::StringRecord::from(HEADER.to_vec()));
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "a, \"quoted\"\nline");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale\ncontent\nwith\nmore\nlines\n").unwrap();
        write_csv(&path, &[record("a", "b", "c")]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "author,comment,published_at\na,b,c\n"
        );
    }

    #[test]
    fn failed_persist_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("comments_vid_2024-03-07.csv");
        std::fs::create_dir(&target).unwrap();

        let err = write_csv(&target, &[record("a", "b", "c")]).unwrap_err();

        assert!(err.to_string().contains("comments_vid_2024-03-07.csv"));
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries, vec![target.clone()]);
        assert!(target.is_dir());
    }
}
