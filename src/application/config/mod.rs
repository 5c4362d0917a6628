//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::domain::session::{
    DEFAULT_MAX_TIMEOUT_SECONDS, DEFAULT_REXMT_SECONDS, SessionDefaults, TransferMode,
};

pub const DEFAULT_PROMPT: &str = "tftp> ";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 입력 프롬프트
    pub prompt: Option<String>,
    /// 잘 알려진 서비스 포트(없으면 서비스 데이터베이스 조회)
    pub service_port: Option<u16>,
    /// 패킷당 재전송 간격(초)
    pub rexmt_seconds: Option<u32>,
    /// 전체 재전송 제한 시간(초)
    pub max_timeout_seconds: Option<u32>,
    /// 시작 전송 모드(ascii/netascii/binary/image/octet)
    pub mode: Option<String>,
    pub verbose: Option<bool>,
    pub trace: Option<bool>,
}

impl Config {
    pub fn prompt(&self) -> String {
        self.defaults
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    /// 세션 기본값으로 해석한다. 알 수 없는 모드 이름은 오류.
    pub fn session_defaults(&self) -> Result<SessionDefaults> {
        let mode = match self.defaults.mode.as_deref() {
            None => TransferMode::default(),
            Some(name) => match TransferMode::from_name(name) {
                Some(mode) => mode,
                None => bail!("unknown transfer mode in config: {name}"),
            },
        };

        Ok(SessionDefaults {
            mode,
            rexmt_seconds: self.defaults.rexmt_seconds.unwrap_or(DEFAULT_REXMT_SECONDS),
            max_timeout_seconds: self
                .defaults
                .max_timeout_seconds
                .unwrap_or(DEFAULT_MAX_TIMEOUT_SECONDS),
            verbose: self.defaults.verbose.unwrap_or(false),
            trace: self.defaults.trace.unwrap_or(false),
        })
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.service_port.is_some() {
            self.service_port = other.service_port;
        }
        if other.rexmt_seconds.is_some() {
            self.rexmt_seconds = other.rexmt_seconds;
        }
        if other.max_timeout_seconds.is_some() {
            self.max_timeout_seconds = other.max_timeout_seconds;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.trace.is_some() {
            self.trace = other.trace;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_override_earlier_ones() {
        let mut merged: Config =
            serde_json::from_str(r#"{"defaults":{"prompt":"a> ","rexmt_seconds":3}}"#).unwrap();
        let later: Config =
            serde_json::from_str(r#"{"defaults":{"rexmt_seconds":9,"mode":"binary"}}"#).unwrap();
        merged.merge_from(later);

        assert_eq!(merged.prompt(), "a> ");
        let defaults = merged.session_defaults().unwrap();
        assert_eq!(defaults.rexmt_seconds, 9);
        assert_eq!(defaults.max_timeout_seconds, DEFAULT_MAX_TIMEOUT_SECONDS);
        assert_eq!(defaults.mode, TransferMode::Octet);
    }

    #[test]
    fn empty_config_uses_builtin_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt(), DEFAULT_PROMPT);
        assert_eq!(config.session_defaults().unwrap(), SessionDefaults::default());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let config: Config = serde_json::from_str(r#"{"defaults":{"mode":"mail"}}"#).unwrap();
        assert!(config.session_defaults().is_err());
    }
}
