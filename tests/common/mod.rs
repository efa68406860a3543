#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the kanban binary against an isolated config location
pub struct KanbanTest {
    pub temp_dir: TempDir,
}

impl KanbanTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        KanbanTest { temp_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config").join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_kanban"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("KANBAN_CONFIG", self.config_path())
            .env_remove("KANBAN_ENDPOINT")
            .env_remove("KANBAN_LOG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .output()
            .expect("Failed to execute kanban command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write a payload file in the temp dir and return its path as a string
    pub fn write_payload(&self, name: &str, content: &str) -> String {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write payload file");
        path.to_string_lossy().to_string()
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config directory");
        fs::write(path, content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.config_path()).ok()
    }
}
