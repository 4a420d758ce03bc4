//! Persisted command-line defaults.
//!
//! A flags file holds command-line flags, one per line, with `#` comments.
//! Everything after the flag name on a line is its value, spaces included.
//! The global file is merged with a local `.mdpadrc`, and flags given on the
//! command line win over both.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_line_numbers: bool,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub extension: Option<String>,
    pub dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: booleans are or-ed, options from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_line_numbers: self.no_line_numbers || other.no_line_numbers,
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            extension: other.extension.clone().or_else(|| self.extension.clone()),
            dir: other.dir.clone().or_else(|| self.dir.clone()),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("mdpad").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("mdpad")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("mdpad").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("mdpad").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".mdpadrc")
}

/// Read a flags file. A missing file yields the defaults.
///
/// Each line is a flag followed by the rest of the line as its value, so
/// paths with spaces survive a save and load.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| match line.split_once(char::is_whitespace) {
            Some((flag, value)) => vec![flag.to_owned(), value.trim().to_owned()],
            None => vec![line.to_owned()],
        })
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write `flags` as a flags file, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# mdpad defaults (saved with --save)".to_string()];
    if flags.no_line_numbers {
        lines.push("--no-line-numbers".to_string());
    }
    if let Some(width) = flags.width {
        lines.push(format!("--width {width}"));
    }
    if let Some(height) = flags.height {
        lines.push(format!("--height {height}"));
    }
    if let Some(extension) = &flags.extension {
        lines.push(format!("--extension {extension}"));
    }
    if let Some(dir) = &flags.dir {
        lines.push(format!("--dir {}", dir.display()));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove a flags file if present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of a token list.
///
/// Unknown tokens and positional arguments are skipped, so raw process
/// arguments can be passed as-is. Values are accepted as `--flag value` or
/// `--flag=value`; values that fail to parse are dropped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--no-line-numbers" {
            flags.no_line_numbers = true;
            i += 1;
            continue;
        }

        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        if !matches!(
            name,
            "--width" | "--height" | "--extension" | "--dir" | "--log-file"
        ) {
            i += 1;
            continue;
        }
        let value = match inline_value {
            Some(value) => Some(value),
            None => {
                i += 1;
                tokens.get(i).map(String::as_str)
            }
        };
        if let Some(value) = value {
            match name {
                "--width" => flags.width = value.parse().ok(),
                "--height" => flags.height = value.parse().ok(),
                "--extension" => flags.extension = Some(value.trim_start_matches('.').to_string()),
                "--dir" => flags.dir = Some(PathBuf::from(value)),
                _ => flags.log_file = Some(PathBuf::from(value)),
            }
        }
        i += 1;
    }
    flags
}
