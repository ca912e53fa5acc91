//! Home vars: short aliases for directory prefixes
//!
//! `~` usually stands for the user's home dir, `~src` for some project root. Encoding picks the
//! longest path prefix that has an alias; decoding picks the longest alias. Matches only count
//! at path separator boundaries, so `/home/user` never abbreviates `/home/username`.

use serde::{Deserialize, Serialize};

use super::vars::VarMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeVar {
    pub key: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeVars {
    entries: Vec<HomeVar>,
}

impl HomeVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Home vars for every `~` declaration in `vars`.
    pub fn from_var_map(vars: &VarMap) -> Self {
        let mut hv = Self::new();
        for (key, path) in vars.iter().filter(|(k, _)| k.starts_with('~')) {
            hv.append(key, path);
        }
        hv
    }

    /// Add or replace `key`. Trailing separators on `path` are dropped; entries whose key or
    /// path ends up empty are ignored.
    pub fn append(&mut self, key: &str, path: &str) {
        let path = trim_separators(path);
        if key.is_empty() || path.is_empty() {
            return;
        }
        self.entries.retain(|e| e.key != key);
        self.entries.push(HomeVar {
            key: key.to_string(),
            path: path.to_string(),
        });
    }

    pub fn entries(&self) -> &[HomeVar] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the longest known directory prefix of `filename` with its key.
    pub fn encode(&self, filename: &str) -> String {
        self.entries
            .iter()
            .filter(|e| has_path_prefix(filename, &e.path))
            .max_by_key(|e| e.path.len())
            .map_or_else(
                || filename.to_string(),
                |e| {
                    // a root path keeps its separator after the key
                    let cut = if e.path.ends_with(is_separator) {
                        e.path.len() - 1
                    } else {
                        e.path.len()
                    };
                    format!("{}{}", e.key, &filename[cut..])
                },
            )
    }

    /// Replace a leading key with its directory.
    pub fn decode(&self, filename: &str) -> String {
        self.entries
            .iter()
            .filter(|e| has_path_prefix(filename, &e.key))
            .max_by_key(|e| e.key.len())
            .map_or_else(
                || filename.to_string(),
                |e| {
                    let rest = &filename[e.key.len()..];
                    match rest.strip_prefix(is_separator) {
                        Some(tail) if e.path.ends_with(is_separator) => {
                            format!("{}{}", e.path, tail)
                        }
                        _ => format!("{}{}", e.path, rest),
                    }
                },
            )
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

fn trim_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    // the root dir keeps its separator
    if trimmed.is_empty() && !path.is_empty() {
        &path[..1]
    } else {
        trimmed
    }
}

fn has_path_prefix(s: &str, prefix: &str) -> bool {
    match s.strip_prefix(prefix) {
        Some(rest) => {
            rest.is_empty() || rest.starts_with(is_separator) || prefix.ends_with(is_separator)
        }
        None => false,
    }
}
