//! Supervised launch of a real child process.
#![cfg(unix)]

use std::fs;

use order_tracker_launcher::config::LaunchMode;
use order_tracker_launcher::error::LauncherError;
use order_tracker_launcher::lifecycle::launch::supervise;
use order_tracker_launcher::{prepare, run};

mod common;

#[test]
fn test_child_receives_env_and_args() {
    let dir = tempfile::tempdir().unwrap();
    let options = common::write(
        &dir,
        "options.json",
        r#"{"SURREAL_URL":"ws://db:8000","ETSY_SHOP_ID":"","UNLISTED":"x"}"#,
    );
    let report = dir.path().join("report.txt");
    let program = common::write_script(
        &dir,
        "order-tracker",
        &format!(
            r#"{{
  echo "args=$*"
  echo "SURREAL_URL=${{SURREAL_URL-unset}}"
  echo "ETSY_SHOP_ID=${{ETSY_SHOP_ID-unset}}"
  echo "UNLISTED=${{UNLISTED-unset}}"
}} > "{}"
exit 7"#,
            report.display()
        ),
    );

    let config = common::config_for(&options, &program);
    let code = run(&config).unwrap();
    assert_eq!(code, 7);

    let report = fs::read_to_string(report).unwrap();
    assert!(report.contains("args=--addr 0.0.0.0 --port 8099"), "{report}");
    assert!(report.contains("SURREAL_URL=ws://db:8000"), "{report}");
    assert!(report.contains("ETSY_SHOP_ID=unset"), "{report}");
    assert!(report.contains("UNLISTED=unset"), "{report}");
}

#[test]
fn test_missing_options_still_launches() {
    let dir = tempfile::tempdir().unwrap();
    let program = common::write_script(&dir, "order-tracker", "exit 0");

    let config = common::config_for(&dir.path().join("absent.json"), &program);
    assert_eq!(run(&config).unwrap(), 0);
}

#[test]
fn test_launcher_env_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let options = common::write(&dir, "options.json", r#"{"ETSY_KEYSTRING":"from-options"}"#);
    let program = common::write_script(&dir, "order-tracker", "exit 0");

    let config = common::config_for(&options, &program);
    run(&config).unwrap();
    assert!(std::env::var_os("ETSY_KEYSTRING").is_none());
}

#[test]
fn test_spawn_failure_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_for(&dir.path().join("absent.json"), &dir.path().join("missing-binary"));

    let err = run(&config).unwrap_err();
    assert!(matches!(err, LauncherError::Launch(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_supervise_propagates_signal_death() {
    let dir = tempfile::tempdir().unwrap();
    let program = common::write_script(&dir, "order-tracker", "kill -TERM $$");

    let config = common::config_for(&dir.path().join("absent.json"), &program);
    let plan = prepare(&config).unwrap();
    assert_eq!(plan.mode, LaunchMode::Supervise);

    assert_eq!(supervise(&plan).await.unwrap(), 128 + 15);
}
