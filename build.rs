use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Settings read by `AppConfig::from_env` through `option_env!`
const KNOWN_KEYS: [&str; 5] = [
    "API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "LOGIN_REDIRECT_DELAY_MS",
];

fn parse_env_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            (key.to_string(), value.trim().trim_matches('"').to_string())
        })
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found, using built-in defaults. Copy .env.example to .env to override.");
        return;
    };

    let values = parse_env_file(&contents);
    for key in values.keys().filter(|key| !KNOWN_KEYS.contains(&key.as_str())) {
        println!("cargo:warning=.env: unknown setting '{}' ignored", key);
    }

    // an exported variable wins over .env
    for key in KNOWN_KEYS {
        if env::var(key).is_ok() {
            continue;
        }
        if let Some(value) = values.get(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
