use pclass_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("integration-file-logging")
        .console(false)
        .path(&log_dir)
        .json()
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.guard().is_some());

    tracing::info!(classes = "ua-chrome90 pd--decorated", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("\"classes\":\"ua-chrome90 pd--decorated\""));

    Ok(())
}
