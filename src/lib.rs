// Library root
// -----------
// Fetches every top-level comment of a video from the public Data API and
// exports them to `comments_<video_id>_<date>.csv`.
//
// Module responsibilities:
// - `config`: reads the API key and endpoint from the environment.
// - `api`: blocking HTTP client and the typed listing response.
// - `comments`: flattens comment threads into `CommentRecord` rows.
// - `fetch`: follows continuation tokens and drives the export.
// - `export`: output file naming and CSV writing.
// - `ui`: the interactive prompt used by `main.rs`.
pub mod api;
pub mod comments;
pub mod config;
pub mod export;
pub mod fetch;
pub mod ui;
