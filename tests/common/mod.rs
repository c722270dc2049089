use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub root: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();

        run_git(&root, &["init"]);
        std::fs::create_dir_all(root.join(".git").join("hooks")).unwrap();

        Self { dir, root }
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.root.join(".git").join("hooks")
    }

    pub fn write_hook(&self, name: &str, content: &str) {
        let hooks = self.hooks_dir();
        std::fs::create_dir_all(&hooks).unwrap();
        std::fs::write(hooks.join(name), content).unwrap();
    }

    pub fn read_hook(&self, name: &str) -> String {
        std::fs::read_to_string(self.hooks_dir().join(name)).unwrap()
    }
}

/// Sorted file names in `dir`
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Command for the guppy binary, running in `cwd`. Repository discovery
/// stops at the system temp directory.
pub fn guppy(cwd: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("guppy").unwrap();
    cmd.current_dir(cwd)
        .env("GIT_CEILING_DIRECTORIES", std::env::temp_dir())
        .env("NO_COLOR", "1");
    cmd
}

fn run_git(cwd: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap();
    if !output.status.success() {
        panic!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
