//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::DefaultsConfig;
use crate::infrastructure::bootstrap::resolve_service_port;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub prompt: String,
    /// 설정과 서비스 데이터베이스 모두에서 찾지 못하면 null
    pub service_port: Option<u16>,
    pub rexmt_seconds: u32,
    pub max_timeout_seconds: u32,
    pub mode: String,
    pub verbose: bool,
    pub trace: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> anyhow::Result<Self> {
        let session = loaded.config.session_defaults()?;

        Ok(Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: loaded.config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                prompt: loaded.config.prompt(),
                service_port: resolve_service_port(&loaded.config).ok(),
                rexmt_seconds: session.rexmt_seconds,
                max_timeout_seconds: session.max_timeout_seconds,
                mode: session.mode.to_string(),
                verbose: session.verbose,
                trace: session.trace,
            },
        })
    }
}
