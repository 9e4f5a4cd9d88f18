use std::path::PathBuf;
use std::{env, fs};

const CONFIG_FILE: &str = ".pr-review.toml";

/// Load config file content from the first location that has one
///
/// Candidates, in priority order: `.pr-review.toml` in the current working
/// directory, then in the home directory. Returns the file content if
/// found, None otherwise.
pub fn load_config_file() -> Option<String> {
    for path in candidate_paths() {
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                return Some(content);
            }
            Err(_) => continue,
        }
    }

    None
}

/// Candidate config file locations, in priority order
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    paths
}
