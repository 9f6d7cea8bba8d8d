//! End-to-end tests: git history and a mocked GitHub API in, files out.

mod common;

use common::{TestRepo, mock_octocrab, sample_config, temp_test_dir};
use relnotes::error::{GitHubError, NotesError};
use relnotes::git::GitCommitSource;
use relnotes::github::{GitHubClient, GitHubRepo};
use relnotes::notes::{
    LinkTargets, NoteSettings, ReleaseDocumentBuilder, ReleaseNoteSource, RenderMode, SubjectOrigin,
};
use relnotes::output::{DocumentSink, FileSink};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings() -> NoteSettings {
    let config = sample_config();
    let links = LinkTargets::for_repository(&config.github_url, "owner", "repo");
    NoteSettings::new(&config, links)
}

async fn mount_echo_markdown(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/markdown"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>rendered</p>"))
        .mount(server)
        .await;
}

async fn mount_pull(server: &MockServer, number: u64, title: &str, body: Option<&str>) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/owner/repo/pulls/{}", number)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": number,
            "title": title,
            "body": body
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_commit_messages_release_notes() {
    let config = sample_config();
    let settings = settings();
    let test_repo = TestRepo::new();

    let start = test_repo.commit("chore: initial");
    test_repo.tag_lightweight("v1.0.0", start);
    test_repo.commits(&[
        "feat: add export",
        "fix(parser): handle empty input",
        "docs: update readme",
        "fix: typo in help",
        "wip: not conventional",
    ]);

    let server = MockServer::start().await;
    mount_echo_markdown(&server).await;
    let client = GitHubClient::with_client(mock_octocrab(&server), GitHubRepo::new("owner", "repo"));

    let commits = GitCommitSource::new(test_repo.reopen(), "v1.0.0", "HEAD").unwrap();
    let builder =
        ReleaseDocumentBuilder::new(&config.commit_types, &settings, &commits, &client, &client);

    let document = builder
        .build(ReleaseNoteSource::CommitMessages, RenderMode::Short)
        .await
        .unwrap();

    let expected = "\n## ✨ New Features\n- Add export\n\n## 🐛 Bug Fixes\n- Typo in help\n- (Parser Related) Handle empty input\n\n## 📚 Documentation\n- Update readme\n";
    assert_eq!(document.markdown, expected);
    assert_eq!(document.html, "<p>rendered</p>");

    let out = temp_test_dir();
    let sink = FileSink::new(
        out.path(),
        &config.markdown_output_file_name,
        &config.html_output_file_name,
    );
    sink.write(&document).unwrap();

    assert_eq!(std::fs::read_to_string(sink.markdown_path()).unwrap(), expected);
    assert_eq!(std::fs::read_to_string(sink.html_path()).unwrap(), "<p>rendered</p>");
}

#[tokio::test]
async fn test_pull_request_release_notes_full_mode() {
    let config = sample_config();
    let settings = settings();
    let test_repo = TestRepo::new();

    let start = test_repo.commit("chore: initial");
    test_repo.commits(&[
        "feat: add export (#21)",
        "feat: direct push without PR",
        "fix: crash on exit (#22)",
    ]);

    let server = MockServer::start().await;
    mount_echo_markdown(&server).await;
    mount_pull(
        &server,
        21,
        "feat(cli): add export command",
        Some("adds `--export`\r\nfollow-up to #20"),
    )
    .await;
    mount_pull(&server, 22, "fix: crash on exit", None).await;
    let client = GitHubClient::with_client(mock_octocrab(&server), GitHubRepo::new("owner", "repo"));

    let commits = GitCommitSource::new(test_repo.reopen(), &start.to_string(), "HEAD").unwrap();
    let builder =
        ReleaseDocumentBuilder::new(&config.commit_types, &settings, &commits, &client, &client);

    let markdown = builder
        .build_markdown(SubjectOrigin::PullRequests, RenderMode::Full)
        .await
        .unwrap();

    assert_eq!(
        markdown,
        "\n## ✨ New Features\n### (Cli Related) Add export command\n    Adds `--export`  \n    follow-up to [#20](https://github.com/owner/repo/issues/20)\n\n## 🐛 Bug Fixes\n### Crash on exit\n"
    );
}

#[tokio::test]
async fn test_no_matching_commits_is_empty_error() {
    let config = sample_config();
    let settings = settings();
    let test_repo = TestRepo::new();

    let start = test_repo.commit("chore: initial");
    test_repo.commits(&["Merge branch 'main'", "wip"]);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/markdown"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p></p>"))
        .expect(0)
        .mount(&server)
        .await;
    let client = GitHubClient::with_client(mock_octocrab(&server), GitHubRepo::new("owner", "repo"));

    let commits = GitCommitSource::new(test_repo.reopen(), &start.to_string(), "HEAD").unwrap();
    let builder =
        ReleaseDocumentBuilder::new(&config.commit_types, &settings, &commits, &client, &client);

    let err = builder
        .build(ReleaseNoteSource::CommitMessages, RenderMode::Short)
        .await
        .unwrap_err();

    assert!(matches!(err, NotesError::EmptyReleaseNotes));
}

#[tokio::test]
async fn test_pull_request_failure_aborts_run() {
    let config = sample_config();
    let settings = settings();
    let test_repo = TestRepo::new();

    let start = test_repo.commit("chore: initial");
    test_repo.commit("fix: something (#5)");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/pulls/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&server)
        .await;
    let client = GitHubClient::with_client(mock_octocrab(&server), GitHubRepo::new("owner", "repo"));

    let commits = GitCommitSource::new(test_repo.reopen(), &start.to_string(), "HEAD").unwrap();
    let builder =
        ReleaseDocumentBuilder::new(&config.commit_types, &settings, &commits, &client, &client);

    let err = builder
        .build(ReleaseNoteSource::PullRequests, RenderMode::Short)
        .await
        .unwrap_err();

    match err {
        NotesError::PullRequest {
            commit_type,
            number,
            source: GitHubError::NotFound { .. },
        } => {
            assert_eq!(commit_type, "fix");
            assert_eq!(number, 5);
        }
        other => panic!("Expected PullRequest error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_single_pull_request_release_notes() {
    let config = sample_config();
    let settings = settings();

    let server = MockServer::start().await;
    mount_echo_markdown(&server).await;
    mount_pull(&server, 40, "perf: faster startup", Some("see 1a2b3c4d for details")).await;
    let client = GitHubClient::with_client(mock_octocrab(&server), GitHubRepo::new("owner", "repo"));

    let commits: Vec<String> = Vec::new();
    let builder =
        ReleaseDocumentBuilder::new(&config.commit_types, &settings, &commits, &client, &client);

    let document = builder
        .build(ReleaseNoteSource::SinglePullRequest(40), RenderMode::Short)
        .await
        .unwrap();

    let perf_title = &config
        .commit_types
        .iter()
        .find(|spec| spec.conventional_name == "perf")
        .unwrap()
        .section_title;
    assert_eq!(
        document.markdown,
        format!(
            "\n{}\n### Faster startup\n    See [1a2b3c](https://github.com/owner/repo/commit/1a2b3c4d) for details\n",
            perf_title
        )
    );
}
