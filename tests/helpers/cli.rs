use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// CLI test helper running the binary inside a throwaway project directory
pub struct CliTestHelper {
    pub temp_dir: TempDir,
    pub project_root: PathBuf,
}

impl CliTestHelper {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let project_root = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            project_root,
        }
    }

    /// Command for the pgddl binary, isolated from any ambient database URL
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pgddl").unwrap();
        cmd.current_dir(&self.project_root)
            .env_remove("DATABASE_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.project_root.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Default for CliTestHelper {
    fn default() -> Self {
        Self::new()
    }
}
