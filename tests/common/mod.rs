//! Common test utilities

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// SSH remote the test repositories are configured with.
pub const REMOTE: &str = "git@github.com:acme/widget.git";

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Run git in `dir`, panicking with its stderr on failure. Returns stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("git output is UTF-8")
}

/// Initialize a git repository on `main` with a test identity
pub fn init_repo(path: &Path) {
    git(path, &["init", "--quiet"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
}

/// Write `content` to `relative` under `root`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// A working copy whose `origin` is [`REMOTE`], backed by a local bare repo.
///
/// `url.<bare>.insteadOf` makes fetch and push reach the bare repo while
/// `remote.origin.url` keeps the SSH form link generation reads.
pub struct RemoteFixture {
    #[allow(dead_code)] // Keeps the bare repository alive for the test
    pub bare: TempDir,
    pub work: TempDir,
}

impl RemoteFixture {
    /// Working copy with `src/lib.rs` committed and pushed to `origin/main`.
    pub fn pushed() -> Self {
        let bare = create_test_dir();
        git(bare.path(), &["init", "--bare", "--quiet"]);
        git(bare.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);

        let work = create_test_dir();
        init_repo(work.path());
        git(work.path(), &["remote", "add", "origin", REMOTE]);
        let bare_url = bare.path().to_string_lossy().to_string();
        git(
            work.path(),
            &["config", &format!("url.{bare_url}.insteadOf"), REMOTE],
        );

        write_file(work.path(), "src/lib.rs", "pub fn widget() {}\n");
        git(work.path(), &["add", "."]);
        git(work.path(), &["commit", "--quiet", "-m", "Initial commit"]);
        git(work.path(), &["push", "--quiet", "-u", "origin", "main"]);

        Self { bare, work }
    }

    /// Commit hash `revision` resolves to in the working copy.
    pub fn rev_parse(&self, revision: &str) -> String {
        git(self.work.path(), &["rev-parse", revision])
            .trim()
            .to_string()
    }
}
