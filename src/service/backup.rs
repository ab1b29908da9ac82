use crate::db::sqlite::Store;
use crate::error::DesignerError;
use chrono::{DateTime, Utc};
use futures::stream::{self, Stream};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::info;

const CHUNK_SIZE: usize = 64 * 1024;

/// An opened database file, ready to be streamed out as a download.
#[derive(Debug)]
pub struct BackupArtifact {
    pub file_name: String,
    /// File size when it was opened.
    pub len: u64,
    file: File,
}

impl BackupArtifact {
    /// The file contents in chunks, read lazily from disk.
    pub fn into_stream(self) -> impl Stream<Item = std::io::Result<Vec<u8>>> + Send + 'static {
        stream::try_unfold(self.file, |mut file| async move {
            let mut buf = vec![0; CHUNK_SIZE];
            match file.read(&mut buf).await {
                Ok(0) => Ok(None),
                Ok(n) => {
                    buf.truncate(n);
                    Ok(Some((buf, file)))
                }
                Err(e) => Err(e),
            }
        })
    }
}

/// Copies the live database file without taking any lock on it.
///
/// Writers may interleave with the read; the bytes reflect the file as it
/// is read, with no stronger consistency guarantee.
#[derive(Clone)]
pub struct BackupExporter {
    path: PathBuf,
    prefix: String,
}

impl BackupExporter {
    pub fn new(path: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            prefix: prefix.into(),
        }
    }

    pub fn for_store(store: &Store, prefix: impl Into<String>) -> Self {
        Self::new(store.path(), prefix)
    }

    pub async fn export(&self) -> Result<BackupArtifact, DesignerError> {
        self.export_at(Utc::now()).await
    }

    pub async fn export_at(&self, now: DateTime<Utc>) -> Result<BackupArtifact, DesignerError> {
        let file = match File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DesignerError::BackupSourceMissing(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        let len = file.metadata().await?.len();
        if len == 0 {
            return Err(DesignerError::BackupSourceMissing(self.path.clone()));
        }

        let file_name = self.file_name(now);
        info!(file = %file_name, size = len, "database backup exported");
        Ok(BackupArtifact {
            file_name,
            len,
            file,
        })
    }

    /// `<prefix>_<UTC timestamp>.db`; names sort chronologically.
    pub fn file_name(&self, now: DateTime<Utc>) -> String {
        format!("{}_{}.db", self.prefix, now.format("%Y-%m-%dT%H-%M-%S%.3fZ"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_names_sort_by_time() {
        let exporter = BackupExporter::new("unused.db", "pol_designer_backup");
        let early = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 11, 2, 3, 4, 5).unwrap();
        let a = exporter.file_name(early);
        let b = exporter.file_name(late);
        assert_eq!(a, "pol_designer_backup_2024-01-02T03-04-05.000Z.db");
        assert!(a < b);
    }
}
