use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

/// Runtime configuration: defaults, overlaid by `.cleorc`, overlaid by
/// environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(default_config_path())
    }

    pub fn load_from(config_path: PathBuf) -> Self {
        let mut map = default_map();

        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Environment variables take precedence over the file
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    /// Origin of the Cleopatra backend, no trailing slash.
    pub fn api_base_url(&self) -> String {
        self.get("API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string()
    }
}

const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &["API_BASE_URL"];
    KEYS.contains(&k) || k.starts_with("CLEOVIEW_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("cleoview").join(".cleorc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("API_BASE_URL".into(), DEFAULT_API_BASE.into());
    m
}
