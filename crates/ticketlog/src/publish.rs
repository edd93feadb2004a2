//! Publishing results to GitHub Actions

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Resolve the step output file, preferring an explicit path over `GITHUB_OUTPUT`
pub fn github_output_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from))
}

/// Append a named output using the multiline `name<<DELIMITER` syntax
pub fn write_github_output(path: &Path, name: &str, value: &str) -> std::io::Result<()> {
    let delimiter = delimiter_for(value);
    info!(path = %path.display(), name, "writing step output");

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}<<{}", name, delimiter)?;
    write!(file, "{}", value)?;
    if !value.ends_with('\n') {
        writeln!(file)?;
    }
    writeln!(file, "{}", delimiter)?;
    Ok(())
}

/// Emit an `::error::` workflow command when running under GitHub Actions
pub fn report_failure(err: &anyhow::Error) {
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        println!("::error::{}", escape_command_data(&format!("{:#}", err)));
    }
}

fn delimiter_for(value: &str) -> String {
    let mut delimiter = "EOF".to_string();
    let mut attempt = 0;
    while value.lines().any(|line| line == delimiter) {
        attempt += 1;
        delimiter = format!("EOF_{}", attempt);
    }
    debug!(delimiter = %delimiter, "chose output delimiter");
    delimiter
}

fn escape_command_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
