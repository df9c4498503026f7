use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// TestHarness runs the brew-tools binary against an isolated config file.
/// The config lives in a temporary directory that is removed on drop, and
/// stdin is closed so the binary never prompts.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness with no config file (first run).
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = dir.path().join("brewtools").join("brewtools.yaml");

        TestHarness {
            dir,
            config_path,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_brew-tools")),
        }
    }

    /// Creates a harness with the unit preference already stored.
    #[allow(dead_code)]
    pub fn with_unit(unit: &str) -> Self {
        Self::with_config(&format!("general:\n  unit: {}\n", unit))
    }

    /// Creates a harness with custom config content.
    #[allow(dead_code)]
    pub fn with_config(content: &str) -> Self {
        let harness = Self::new();
        fs::create_dir_all(harness.config_path.parent().unwrap())
            .expect("Failed to create config dir");
        fs::write(&harness.config_path, content).expect("Failed to write config");
        harness
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Builds the command for the binary with the given arguments.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .current_dir(self.path())
            .env("BREWTOOLS_CONFIG", &self.config_path)
            .env_remove("BREWTOOLS_LOG")
            .env_remove("BREWTOOLS_QUIET")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null());
        cmd
    }

    /// Executes the binary with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to run brew-tools")
    }

    /// Runs the binary and returns stdout, asserting it exited successfully.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "brew-tools {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout was not UTF-8")
    }
}
