//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Config;

/// 명시 경로를 지정하는 환경변수.
pub const CONFIG_ENV: &str = "TFTP_SHELL_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();
    let paths = config_paths(explicit);

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        debug!("loaded config from {}", path.display());
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 환경변수 + 명령행 경로 순으로 병합 경로를 구성한다.
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/tftp-shell/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("tftp-shell").join("config.json"));
    }

    paths.push(PathBuf::from(".tftp-shell/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(path));
    }

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_has_highest_priority() {
        let explicit = PathBuf::from("/tmp/custom-tftp.json");
        let paths = config_paths(Some(&explicit));
        assert_eq!(paths.first(), Some(&PathBuf::from("/etc/tftp-shell/config.json")));
        assert_eq!(paths.last(), Some(&explicit));
    }

    #[test]
    fn duplicate_paths_are_searched_once() {
        let paths = dedup_paths(vec![
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
            PathBuf::from("a.json"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
    }

    #[test]
    fn explicit_file_overrides_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"defaults":{"prompt":"boot> ","trace":true}}"#).unwrap();

        let loaded = load_merged_config(Some(&path)).unwrap();
        assert_eq!(loaded.loaded_paths.last(), Some(&path));
        assert_eq!(loaded.config.prompt(), "boot> ");
        assert_eq!(loaded.config.defaults.trace, Some(true));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_merged_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse JSON"));
    }
}
