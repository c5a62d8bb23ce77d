use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Filesystem storage rooted at the scanned directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn list_files(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.base_path).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            // 跟隨符號連結，連到檔案的連結也算
            match tokio::fs::metadata(entry.path()).await {
                Ok(metadata) if metadata.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    tracing::info!("Skipping unreadable entry {:?}: {}", entry.file_name(), e);
                    continue;
                }
            }
            match entry.file_name().into_string() {
                Ok(name) => files.push(name),
                Err(name) => tracing::debug!("Skipping non UTF-8 file name: {:?}", name),
            }
        }

        Ok(files)
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);
        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_lists_only_regular_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.csv"), "09123456789").unwrap();
        std::fs::create_dir(temp_dir.path().join("folder.csv")).unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let files = storage.list_files().await.unwrap();

        assert_eq!(files, vec!["a.csv"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_lists_symlinked_files() {
        let temp_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        let target = target_dir.path().join("contacts.csv");
        std::fs::write(&target, "09123456789").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("link.csv")).unwrap();
        std::os::unix::fs::symlink(
            target_dir.path().join("missing.csv"),
            temp_dir.path().join("dangling.csv"),
        )
        .unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let files = storage.list_files().await.unwrap();
        assert_eq!(files, vec!["link.csv"]);

        let data = storage.read_file("link.csv").await.unwrap();
        assert_eq!(data, b"09123456789");
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("processed_a.csv", b"09123456789\n").await.unwrap();
        let data = storage.read_file("processed_a.csv").await.unwrap();

        assert_eq!(data, b"09123456789\n");
    }

    #[tokio::test]
    async fn test_missing_directory_is_error() {
        let storage = LocalStorage::new("/definitely/not/here".to_string());
        assert!(storage.list_files().await.is_err());
    }
}
