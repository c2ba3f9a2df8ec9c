//! Focused unit tests covering error classification and exit codes.

use super::*;
use algorithms_core::ValidationError;
use rstest::rstest;

fn limit_exceeded() -> CliError {
    CliError::LimitExceeded {
        field: "n",
        value: 65,
        limit: 64,
    }
}

#[rstest]
#[case::missing_argument(CliError::MissingArgument { field: ARG_PROBLEM, env: ENV_PROBLEM })]
#[case::limit(limit_exceeded())]
#[case::validation(CliError::from(ValidationError::ZeroWeight { index: 1 }))]
#[case::missing_file(CliError::MissingRequestFile { path: "absent.json".into() })]
fn caller_mistakes_are_client_errors(#[case] err: CliError) {
    assert!(err.is_client_error());
    assert_eq!(err.exit_code(), EXIT_CLIENT_ERROR);
}

#[rstest]
#[case::write(CliError::WriteOutput(std::io::Error::other("broken pipe")))]
#[case::open(CliError::OpenRequest {
    path: "request.json".into(),
    source: std::io::Error::other("permission denied"),
})]
fn environment_failures_exit_with_failure(#[case] err: CliError) {
    assert!(!err.is_client_error());
    assert_eq!(err.exit_code(), EXIT_FAILURE);
}

#[rstest]
fn validation_errors_render_their_own_message() {
    let err = CliError::from(ValidationError::NegativeEdgeWeight {
        from: 0,
        to: 1,
        weight: -3,
    });
    assert_eq!(
        err.to_string(),
        ValidationError::NegativeEdgeWeight {
            from: 0,
            to: 1,
            weight: -3,
        }
        .to_string()
    );
}

#[rstest]
fn limit_errors_name_the_field() {
    assert_eq!(
        limit_exceeded().to_string(),
        "n 65 exceeds the configured limit of 64"
    );
}

#[rstest]
fn status_command_reports_ok() {
    let mut stdout = Vec::new();
    run_with(["algorithms", "status"], &mut stdout).expect("status succeeds");
    assert_eq!(stdout, STATUS_OK.as_bytes());
}

#[rstest]
fn unknown_subcommands_fail_parsing() {
    let mut stdout = Vec::new();
    let err = run_with(["algorithms", "frobnicate"], &mut stdout).expect_err("unknown command");
    assert_eq!(err.exit_code(), EXIT_CLIENT_ERROR);
    match err {
        CliError::ArgumentParsing(_) => {}
        other => panic!("expected ArgumentParsing, found {other:?}"),
    }
}
