use std::path::PathBuf;

use gantry_docker::client::{BuildImageError, DockerClient};
use gantry_docker::docker::DockerError;
use gantry_docker::executor::DockerExecutor;
use mockall::mock;

mock! {
    Executor {}

    impl DockerExecutor for Executor {
        async fn exec(&self, args: &[String]) -> Result<String, DockerError>;
        async fn exec_streaming(&self, args: &[String]) -> Result<(), DockerError>;
    }
}

// ── Build Tests ──

#[tokio::test]
async fn build_image_invokes_docker_build_with_tag_and_context() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_streaming()
        .withf(|args| {
            args[0] == "build"
                && args.contains(&"-t".to_owned())
                && args.contains(&"face-encoder:latest".to_owned())
                && args.contains(&"/tmp/ctx".to_owned())
        })
        .returning(|_| Ok(()));

    let client = DockerClient::with_executor(mock);
    client
        .build_image(&PathBuf::from("/tmp/ctx"), "face-encoder:latest")
        .await
        .unwrap();
}

#[tokio::test]
async fn build_image_failure_is_terminal() {
    let mut mock = MockExecutor::new();

    // A single failing attempt, never retried
    mock.expect_exec_streaming().times(1).returning(|args| {
        Err(DockerError::CommandFailed {
            args: args.to_vec(),
            stderr: "exit code: 1".to_owned(),
        })
    });

    let client = DockerClient::with_executor(mock);
    let result = client
        .build_image(&PathBuf::from("/tmp/ctx"), "face-encoder:latest")
        .await;

    assert!(matches!(result, Err(BuildImageError::Build { .. })));
}

// ── Doctor Tests ──

#[tokio::test]
async fn doctor_all_docker_checks_pass() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| args.contains(&"version".to_owned()))
        .returning(|_| Ok("27.3.1\n".to_owned()));
    mock.expect_exec()
        .withf(|args| args.contains(&"info".to_owned()))
        .returning(|_| Ok("27.3.1\n".to_owned()));

    let client = DockerClient::with_executor(mock);
    let report = client.doctor().await;

    assert!(report.docker.passed);
    assert_eq!(report.docker.detail, "27.3.1");
    assert!(report.daemon.passed);
    assert_eq!(report.daemon.detail, "server 27.3.1");
}

#[tokio::test]
async fn doctor_reports_missing_cli_without_early_return() {
    let mut mock = MockExecutor::new();

    mock.expect_exec().returning(|_| {
        Err(DockerError::NotFound {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    });

    let client = DockerClient::with_executor(mock);
    let report = client.doctor().await;

    assert!(!report.docker.passed);
    assert!(!report.daemon.passed);
    assert!(!report.all_passed());
}

#[tokio::test]
async fn doctor_daemon_down_cli_present() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| args.contains(&"version".to_owned()))
        .returning(|_| Ok("27.3.1\n".to_owned()));
    mock.expect_exec()
        .withf(|args| args.contains(&"info".to_owned()))
        .returning(|args| {
            Err(DockerError::CommandFailed {
                args: args.to_vec(),
                stderr: "Cannot connect to the Docker daemon".to_owned(),
            })
        });

    let client = DockerClient::with_executor(mock);
    let report = client.doctor().await;

    assert!(report.docker.passed);
    assert!(!report.daemon.passed);
    assert_eq!(report.daemon.detail, "daemon not reachable");
}
