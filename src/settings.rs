use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

use crate::parser::Boundaries;

const MANUAL_URL: &str =
    "https://www.lexaloffle.com/dl/docs/pico-8_manual.html#PICO_8_User_Manual";
const FALLBACK_PATH: &str = "fallback/PICO-8 Manual.htm";
const OUTPUT_PATH: &str = "data/api.json";
const DEFINITIONS_PATH: &str = "data/meta/pico8.lua";
const START_MARKER: &str = "API_Reference";
const END_MARKER: &str = "Appendix";

/// Paths and markers, overridable through `P8_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub manual_url: String,
    pub fallback_path: PathBuf,
    /// JSON extract written by `scrape`, read by `render`.
    pub output_path: PathBuf,
    pub definitions_path: PathBuf,
    pub start_marker: String,
    pub end_marker: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("P8"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("manual_url", MANUAL_URL)?
            .set_default("fallback_path", FALLBACK_PATH)?
            .set_default("output_path", OUTPUT_PATH)?
            .set_default("definitions_path", DEFINITIONS_PATH)?
            .set_default("start_marker", START_MARKER)?
            .set_default("end_marker", END_MARKER)?
            .add_source(env)
            .build()?
            .try_deserialize()
            .context("Invalid P8_* configuration")
    }

    pub fn boundaries(&self) -> Boundaries {
        Boundaries {
            start: self.start_marker.clone(),
            end: self.end_marker.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("P8").source(Some(map))
    }

    #[test]
    fn defaults() {
        let s = Settings::from_env(env(&[])).unwrap();
        assert_eq!(s.output_path, PathBuf::from("data/api.json"));
        assert_eq!(s.definitions_path, PathBuf::from("data/meta/pico8.lua"));
        assert_eq!(s.start_marker, "API_Reference");
        assert_eq!(s.end_marker, "Appendix");
        assert!(s.manual_url.starts_with("https://www.lexaloffle.com/"));
    }

    #[test]
    fn env_overrides() {
        let s = Settings::from_env(env(&[
            ("P8_OUTPUT_PATH", "/tmp/x.json"),
            ("P8_END_MARKER", "Index"),
        ]))
        .unwrap();
        assert_eq!(s.output_path, PathBuf::from("/tmp/x.json"));
        assert_eq!(s.boundaries().end, "Index");
        assert_eq!(s.boundaries().start, "API_Reference");
    }
}
