//! Loading `PlayConfig` from TOML files

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    sync::{Arc, Mutex},
};

use tempfile::TempDir;
use tttree::{
    Error,
    app::{
        OpponentKind, PlayConfig, load_config,
        loader::{apply_overrides_from, load_from_path},
    },
    tictactoe::Player,
};

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tttree.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn explicit_file_is_loaded() {
    let (_dir, path) = write_config(
        r#"
        ai_mark = "O"
        first_player = "O"
        opponent = "random"
        seed = 1234
        games = 25
        inspect_depth = 3
        progress = false
        "#,
    );

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.ai_mark, Player::O);
    assert_eq!(config.first_player, Player::O);
    assert_eq!(config.opponent, OpponentKind::Random);
    assert_eq!(config.seed, Some(1234));
    assert_eq!(config.games, 25);
    assert_eq!(config.inspect_depth, 3);
    assert!(!config.progress);
    assert_eq!(config.log_level, "info");
}

#[test]
fn empty_file_gives_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(load_from_path(&path).unwrap(), PlayConfig::default());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        load_config(Some(&missing)),
        Err(Error::Io { .. })
    ));
}

#[test]
fn malformed_file_is_an_error() {
    let (_dir, path) = write_config("games = \"many\"\n");
    assert!(matches!(
        load_config(Some(&path)),
        Err(Error::ConfigParse(_))
    ));

    let (_dir, path) = write_config("opponent = \"oracle\"\n");
    assert!(matches!(
        load_from_path(&path),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn loaded_config_is_validated() {
    let (_dir, path) = write_config("games = 0\n");
    assert!(matches!(
        load_config(Some(&path)),
        Err(Error::InvalidConfiguration { .. })
    ));
}

#[test]
fn overrides_apply_over_file_values() {
    let (_dir, path) = write_config("games = 5\nseed = 1\n");
    let config = apply_overrides_from(load_from_path(&path).unwrap(), |key| match key {
        "TTTREE_SEED" => Some("2".to_string()),
        "TTTREE_AI_MARK" => Some("o".to_string()),
        _ => None,
    });

    assert_eq!(config.games, 5);
    assert_eq!(config.seed, Some(2));
    assert_eq!(config.ai_mark, Player::O);
}

/// Log sink shared between a test and its subscriber
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn rejected_override_is_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let config = tracing::subscriber::with_default(subscriber, || {
        apply_overrides_from(PlayConfig::default(), |key| {
            (key == "TTTREE_GAMES").then(|| "lots".to_string())
        })
    });

    assert_eq!(config.games, PlayConfig::default().games);
    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("Ignoring TTTREE_GAMES=lots"), "{output}");
}

#[test]
fn loading_an_explicit_file_is_logged() {
    let (_dir, path) = write_config("games = 2\n");
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let config = tracing::subscriber::with_default(subscriber, || load_config(Some(&path)));

    assert_eq!(config.unwrap().games, 2);
    assert!(logs.contents().contains("Loading config from"));
}
