use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temp home with a task file; HOME points here so no user rc is read
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new(tasks: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tasks.txt"), tasks).unwrap();
        Self { dir }
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.path().join("tasks.txt")
    }

    pub fn write_rc(&self, content: &str) {
        let config_dir = self.dir.path().join(".nextup");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("rc"), content).unwrap();
    }

    /// Command reading tasks.txt with a fixed reference date
    pub fn cmd(&self, today: &str) -> Command {
        let mut cmd = Command::cargo_bin("nextup").unwrap();
        cmd.env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .current_dir(self.dir.path())
            .args(["--today", today]);
        cmd
    }

    pub fn stdout(&self, today: &str, args: &[&str]) -> String {
        let output = self.cmd(today)
            .arg("-i")
            .arg(self.tasks_path())
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(output).unwrap()
    }
}
