//! 접속 대상/전송 모드/타임아웃 등 셸 세션 상태.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// 재전송 간격 기본값(초).
pub const DEFAULT_REXMT_SECONDS: u32 = 5;
/// 전체 재전송 타임아웃 기본값(초).
pub const DEFAULT_MAX_TIMEOUT_SECONDS: u32 = 5 * DEFAULT_REXMT_SECONDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    /// 줄끝 변환 텍스트 전송
    #[default]
    Netascii,
    /// 바이트 그대로 전송
    Octet,
}

/// `mode` 명령이 받는 이름과 실제 모드의 대응표(출력 순서 유지).
pub const MODE_NAMES: [(&str, TransferMode); 5] = [
    ("ascii", TransferMode::Netascii),
    ("netascii", TransferMode::Netascii),
    ("binary", TransferMode::Octet),
    ("image", TransferMode::Octet),
    ("octet", TransferMode::Octet),
];

impl TransferMode {
    pub fn from_name(name: &str) -> Option<Self> {
        MODE_NAMES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, mode)| *mode)
    }

    /// 프로토콜에서 쓰는 모드 이름.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMode::Netascii => "netascii",
            TransferMode::Octet => "octet",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 이름 해석이 끝난 접속 대상.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    pub addr: IpAddr,
    /// 화면 표시용 이름
    pub label: String,
}

/// 세션 생성 시 적용할 기본값.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub mode: TransferMode,
    pub rexmt_seconds: u32,
    pub max_timeout_seconds: u32,
    pub verbose: bool,
    pub trace: bool,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            mode: TransferMode::default(),
            rexmt_seconds: DEFAULT_REXMT_SECONDS,
            max_timeout_seconds: DEFAULT_MAX_TIMEOUT_SECONDS,
            verbose: false,
            trace: false,
        }
    }
}

/// 프로세스 수명 동안 유지되는 셸 세션.
///
/// 핸들러는 복사본을 고친 뒤 완료 시점에만 통째로 반영된다.
/// `connected`가 참이면 `peer`는 항상 값을 가진다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub peer: Option<Peer>,
    /// 0이면 아직 정해지지 않음
    pub port: u16,
    pub connected: bool,
    pub mode: TransferMode,
    pub rexmt_seconds: u32,
    pub max_timeout_seconds: u32,
    pub verbose: bool,
    pub trace: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionDefaults::default())
    }
}

impl Session {
    pub fn new(defaults: &SessionDefaults) -> Self {
        Self {
            peer: None,
            port: 0,
            connected: false,
            mode: defaults.mode,
            rexmt_seconds: defaults.rexmt_seconds,
            max_timeout_seconds: defaults.max_timeout_seconds,
            verbose: defaults.verbose,
            trace: defaults.trace,
        }
    }

    /// 새 접속 대상을 한 번에 반영한다.
    pub fn attach(&mut self, peer: Peer, port: u16) {
        self.peer = Some(peer);
        self.port = port;
        self.connected = true;
    }

    /// 접속 중인 대상의 소켓 주소.
    pub fn peer_socket(&self) -> Option<SocketAddr> {
        if !self.connected {
            return None;
        }
        self.peer
            .as_ref()
            .map(|peer| SocketAddr::new(peer.addr, self.port))
    }

    pub fn peer_label(&self) -> &str {
        self.peer.as_ref().map(|peer| peer.label.as_str()).unwrap_or("")
    }

    /// `status` 명령 출력.
    pub fn status_lines(&self) -> Vec<String> {
        let connection = if self.connected {
            format!("Connected to {}.", self.peer_label())
        } else {
            "Not connected.".to_string()
        };

        vec![
            connection,
            format!(
                "Mode: {} Verbose: {} Tracing: {}",
                self.mode,
                on_off(self.verbose),
                on_off(self.trace)
            ),
            format!(
                "Rexmt-interval: {} seconds, Max-timeout: {} seconds",
                self.rexmt_seconds, self.max_timeout_seconds
            ),
        ]
    }
}

pub fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
