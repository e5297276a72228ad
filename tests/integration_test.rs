use commitplot::git::extract_commit_dates;
use commitplot::plotting::render_chart;
use commitplot::types::MonthBucket;
use commitplot::utils::aggregate_by_month;
use commitplot::CommitplotError;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn has_git() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn run_git(repo_path: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(repo_path)
        .args(args)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn init_test_repo(repo_path: &Path) {
    run_git(repo_path, &["init", "--quiet"]);
    run_git(repo_path, &["config", "user.name", "Test User"]);
    run_git(repo_path, &["config", "user.email", "test@example.com"]);
    run_git(repo_path, &["config", "commit.gpgsign", "false"]);
}

fn commit_on(repo_path: &Path, date: &str, message: &str) {
    let timestamp = format!("{date} 12:00:00 +0000");
    let status = Command::new("git")
        .current_dir(repo_path)
        .args(["commit", "--quiet", "--allow-empty", "-m", message])
        .env("GIT_AUTHOR_DATE", &timestamp)
        .env("GIT_COMMITTER_DATE", &timestamp)
        .status()
        .expect("failed to run git commit");
    assert!(status.success(), "commit on {date} failed");
}

#[test]
fn test_full_pipeline() {
    if !has_git() {
        eprintln!("git not available, skipping");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    init_test_repo(temp_dir.path());
    commit_on(temp_dir.path(), "2024-01-05", "first");
    commit_on(temp_dir.path(), "2024-01-20", "second");
    commit_on(temp_dir.path(), "2024-02-03", "third");

    let records = extract_commit_dates(temp_dir.path()).unwrap();
    assert_eq!(records.len(), 3);

    let series = aggregate_by_month(&records);
    assert_eq!(
        series.points,
        vec![
            (MonthBucket { year: 2024, month: 1 }, 2),
            (MonthBucket { year: 2024, month: 2 }, 1),
        ]
    );

    let chart_path = temp_dir.path().join("chart.png");
    render_chart(&series, &chart_path).unwrap();

    let metadata = fs::metadata(&chart_path).unwrap();
    assert!(metadata.len() > 0);
    let bytes = fs::read(&chart_path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_extraction_preserves_git_log_order() {
    if !has_git() {
        eprintln!("git not available, skipping");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    init_test_repo(temp_dir.path());
    commit_on(temp_dir.path(), "2023-05-01", "older");
    commit_on(temp_dir.path(), "2023-06-15", "newer");

    let records = extract_commit_dates(temp_dir.path()).unwrap();

    // git log lists newest first
    assert_eq!(records[0].date.to_string(), "2023-06-15");
    assert_eq!(records[1].date.to_string(), "2023-05-01");
}

#[test]
fn test_repo_with_no_commits_is_an_extraction_error() {
    if !has_git() {
        eprintln!("git not available, skipping");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    init_test_repo(temp_dir.path());

    // git log exits non-zero before the first commit
    let result = extract_commit_dates(temp_dir.path());
    assert!(matches!(result, Err(CommitplotError::Extraction(_))));
}

#[test]
fn test_missing_workdir_is_an_extraction_error() {
    let result = extract_commit_dates(Path::new("/nonexistent/path"));
    assert!(matches!(result, Err(CommitplotError::Extraction(_))));
}
