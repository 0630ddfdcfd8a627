//! Concurrent multipart uploads to an import endpoint.

use std::path::{Path, PathBuf};

use clap::Args;
use thiserror::Error;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Target server URL (e.g. https://example.com/upload).
    pub url: String,
    /// Paths of the files to upload.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Error)]
enum UploadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Upload every file at once, one request per file, with no concurrency cap,
/// no retries, and no ordering guarantee on the printed results.
///
/// Failures are caught and reported per file; they never cancel sibling
/// uploads and never change the exit code.
pub async fn run_upload(args: UploadArgs) {
    let UploadArgs { url, files } = args;
    let client = reqwest::Client::new();

    let handles: Vec<_> = files
        .into_iter()
        .map(|path| {
            let client = client.clone();
            let url = url.clone();
            tokio::spawn(upload_file(client, url, path))
        })
        .collect();

    for handle in handles {
        if handle.await.is_err() {
            eprintln!("upload task aborted");
        }
    }
}

async fn upload_file(client: reqwest::Client, url: String, path: PathBuf) {
    match try_upload(&client, &url, &path).await {
        Ok((status, body)) => {
            println!("{}: [{status}] {}...", path.display(), truncate(&body, 100));
        }
        Err(err) => {
            eprintln!("error uploading {}: {err}", path.display());
        }
    }
}

async fn try_upload(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
) -> Result<(u16, String), UploadError> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("file")
        .to_string();

    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = client.post(url).multipart(form).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok((status, body))
}

/// First `limit` characters of `text`, cut on a char boundary.
fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
