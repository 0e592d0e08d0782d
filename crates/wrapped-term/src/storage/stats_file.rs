use std::{
    fs, io,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use log::{debug, info};
use thiserror::Error;
use wrapped_core::stats::{StatsProvider, StatsSnapshot};

pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum StatsFileError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Statistics document on disk, polled until it can be read.
///
/// A missing file is not an error: the presentation keeps showing its loading
/// state and the read is retried once per interval. A JSON `null` document is
/// treated the same way as a missing one.
#[derive(Debug)]
pub struct JsonStatsFile {
    path: PathBuf,
    retry_interval: Duration,
    last_attempt: Option<Instant>,
    delivered: bool,
}

impl JsonStatsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_retry_interval(path, DEFAULT_RETRY_INTERVAL)
    }

    pub fn with_retry_interval(path: impl Into<PathBuf>, retry_interval: Duration) -> Self {
        Self {
            path: path.into(),
            retry_interval,
            last_attempt: None,
            delivered: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn attempt_due(&self, now: Instant) -> bool {
        self.last_attempt
            .is_none_or(|last| now.duration_since(last) >= self.retry_interval)
    }

    /// One read of the document, without rate limiting.
    pub fn read_now(&self) -> Result<Option<StatsSnapshot>, StatsFileError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StatsFileError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice::<Option<StatsSnapshot>>(&bytes).map_err(|source| {
            StatsFileError::Parse {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl StatsProvider for JsonStatsFile {
    type Error = StatsFileError;

    fn poll_snapshot(&mut self) -> Result<Option<StatsSnapshot>, Self::Error> {
        let now = Instant::now();
        if self.delivered || !self.attempt_due(now) {
            return Ok(None);
        }
        self.last_attempt = Some(now);

        match self.read_now()? {
            Some(snapshot) => {
                info!(
                    "stats: loaded {} ({} messages, {} authors)",
                    self.path.display(),
                    snapshot.total_messages(),
                    snapshot.authors().len()
                );
                self.delivered = true;
                Ok(Some(snapshot))
            }
            None => {
                debug!("stats: {} not available yet", self.path.display());
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_doc(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_document_once() {
        let file = write_doc(
            r#"{
                "summary": { "total": 159935, "media_shared": 4210 },
                "authors": { "Zed Ortega": 81234, "Ana Lima": 78701 },
                "top_sender": "Zed Ortega",
                "top_words": [{ "text": "haha", "value": 3012 }],
                "peak_time": "11 PM"
            }"#,
        );
        let mut source = JsonStatsFile::with_retry_interval(file.path(), Duration::ZERO);

        let snapshot = source.poll_snapshot().unwrap().unwrap();
        assert_eq!(snapshot.total_messages(), 159_935);
        assert_eq!(snapshot.authors()[0].name.as_str(), "Zed Ortega");
        assert_eq!(snapshot.peak_time(), "11 PM");

        assert!(source.poll_snapshot().unwrap().is_none());
    }

    #[test]
    fn missing_file_is_absent_not_an_error() {
        let dir = TempDir::new().unwrap();
        let mut source =
            JsonStatsFile::with_retry_interval(dir.path().join("data.json"), Duration::ZERO);

        assert!(source.poll_snapshot().unwrap().is_none());
    }

    #[test]
    fn null_document_is_absent() {
        let file = write_doc("null");
        let source = JsonStatsFile::new(file.path());

        assert!(source.read_now().unwrap().is_none());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let file = write_doc("{ \"summary\": ");
        let mut source = JsonStatsFile::with_retry_interval(file.path(), Duration::ZERO);

        let err = source.poll_snapshot().unwrap_err();
        assert!(matches!(err, StatsFileError::Parse { .. }));
        assert!(err.to_string().starts_with("cannot parse"));
    }

    #[test]
    fn retries_are_rate_limited() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut source = JsonStatsFile::with_retry_interval(&path, Duration::from_secs(3600));

        assert!(source.poll_snapshot().unwrap().is_none());
        fs::write(&path, r#"{ "summary": { "total": 3 } }"#).unwrap();

        // Still inside the interval, so the new file is not looked at yet.
        assert!(source.poll_snapshot().unwrap().is_none());
        assert_eq!(source.read_now().unwrap().unwrap().total_messages(), 3);
    }
}
