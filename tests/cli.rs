use std::path::Path;
use std::process::Command;

fn bin() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("github-fetch-pullrequest").unwrap();
    cmd.env_remove("REPO_PATH");
    cmd
}

fn git(args: &[&str], dir: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn init_repo(dir: &Path) {
    git(&["init", "--initial-branch=master"], dir);
    git(&["config", "user.name", "tester"], dir);
    git(&["config", "user.email", "tester@example.com"], dir);
}

#[test]
fn help_mentions_pull_request_listing() {
    let output = bin().arg("--help").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(
        stdout.contains("lists open pull requests"),
        "help output: {stdout}"
    );
}

#[test]
fn fails_outside_a_git_repository() {
    let td = assert_fs::TempDir::new().unwrap();

    let output = bin().current_dir(td.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("not in a git repository"),
        "stderr: {stderr}"
    );
}

#[test]
fn fails_without_a_recognized_remote() {
    let td = assert_fs::TempDir::new().unwrap();
    init_repo(td.path());

    let output = bin().current_dir(td.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("upstream or origin"), "stderr: {stderr}");
}

#[test]
fn dirty_work_tree_blocks_the_fetch() {
    let td = assert_fs::TempDir::new().unwrap();
    init_repo(td.path());
    git(
        &[
            "remote",
            "add",
            "origin",
            "https://github.com/octocat/hello-world.git",
        ],
        td.path(),
    );

    std::fs::write(td.path().join("README"), "hello\n").unwrap();
    git(&["add", "-A"], td.path());
    git(&["commit", "-m", "initial"], td.path());

    // an untracked file is enough to make the work tree dirty
    std::fs::write(td.path().join("untracked.txt"), "scratch\n").unwrap();

    let output = bin()
        .args(["-n", "1"])
        .current_dir(td.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("dirty"), "stderr: {stderr}");
}
