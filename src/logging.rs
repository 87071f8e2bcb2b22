use std::{
    fs::{self, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};
use tracing_subscriber::EnvFilter;

/// Sends tracing output to a file; the terminal belongs to the game.
/// The level defaults to `info` and follows `RUST_LOG` when set.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // a subscriber may already be installed (tests, embedding); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_log_file_and_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("azertype.log");
        init_file_logging(&path).unwrap();
        assert!(path.exists());

        // a second call is harmless
        init_file_logging(&path).unwrap();
    }
}
