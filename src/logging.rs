use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Sends `log` output to `path`, truncating it first. The TUI owns stdout,
/// so nothing is written to the terminal. Filtering follows `RUST_LOG`.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}
