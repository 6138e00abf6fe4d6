use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads a file into text. This is the only input channel of the tool;
    /// failures surface here, before any diff computation starts.
    pub async fn read_text(&self, file: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(file);

        // Check if the file_path exists
        if !file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", file_path);
        }

        if !file_path.is_file() {
            anyhow::bail!("The specified path is not a file: {:?}", file_path);
        }

        tokio::fs::read_to_string(&file_path)
            .await
            .with_context(|| format!("Failed to read file {}", file_path.display()))
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.path.join(file)
        }
    }
}
