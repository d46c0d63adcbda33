//! Reading submissions from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use formlab_actions::{ContentType, Submission};

/// Encoding of a payload read from disk or stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// A JSON object.
    Json,
    /// An `application/x-www-form-urlencoded` body.
    Form,
}

impl From<InputFormat> for ContentType {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => Self::Json,
            InputFormat::Form => Self::FormData,
        }
    }
}

/// Reads a submission from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_submission(path: Option<&Path>, format: InputFormat) -> anyhow::Result<Submission> {
    let body = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read stdin")?;
            body
        }
    };
    Ok(Submission::new(format.into(), body.trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_submission_from_file() {
        let path = std::env::temp_dir().join(format!("formlab-input-{}.txt", std::process::id()));
        std::fs::write(&path, "method=password&email=a%40b.co\n").unwrap();

        let submission = read_submission(Some(&path), InputFormat::Form).unwrap();
        assert_eq!(submission.content_type, ContentType::FormData);
        assert_eq!(submission.body, "method=password&email=a%40b.co");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = read_submission(Some(Path::new("/nonexistent/payload.json")), InputFormat::Json)
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/payload.json"));
    }
}
