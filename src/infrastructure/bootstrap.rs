//! 프로세스 시작 단계: 서비스 포트 조회와 로컬 UDP 소켓 준비.

use std::fs;
use std::io;
use std::net::{Ipv4Addr, UdpSocket};

use thiserror::Error;
use tracing::debug;

use crate::application::config::Config;

pub const SERVICES_DB: &str = "/etc/services";

/// 복구하지 않고 종료 코드로 끝나는 시작 오류.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("udp/tftp: unknown service")]
    UnknownService,
    #[error("socket: {0}")]
    Socket(#[source] io::Error),
    #[error("bind: {0}")]
    Bind(#[source] io::Error),
}

impl BootstrapError {
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::UnknownService => 1,
            BootstrapError::Socket(_) => 3,
            BootstrapError::Bind(_) => 1,
        }
    }
}

/// 설정값이 있으면 그것을, 없으면 서비스 데이터베이스의 `tftp/udp` 항목을 쓴다.
pub fn resolve_service_port(config: &Config) -> Result<u16, BootstrapError> {
    if let Some(port) = config.defaults.service_port.filter(|port| *port != 0) {
        return Ok(port);
    }

    let db = fs::read_to_string(SERVICES_DB).map_err(|err| {
        debug!("cannot read {SERVICES_DB}: {err}");
        BootstrapError::UnknownService
    })?;
    lookup_service(&db, "tftp", "udp").ok_or(BootstrapError::UnknownService)
}

/// services(5) 형식에서 이름 또는 별칭으로 포트를 찾는다.
pub fn lookup_service(db: &str, name: &str, proto: &str) -> Option<u16> {
    for line in db.lines() {
        let line = line.split('#').next().unwrap_or_default();
        let mut fields = line.split_whitespace();
        let (Some(service), Some(port_proto)) = (fields.next(), fields.next()) else {
            continue;
        };
        let Some((port, entry_proto)) = port_proto.split_once('/') else {
            continue;
        };
        if entry_proto != proto {
            continue;
        }
        if (service == name || fields.any(|alias| alias == name))
            && let Ok(port) = port.parse()
        {
            return Some(port);
        }
    }
    None
}

/// 임의 포트에 바인딩한 로컬 UDP 소켓을 연다.
pub fn bind_local_socket() -> Result<UdpSocket, BootstrapError> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(classify)?;
    if let Ok(addr) = socket.local_addr() {
        debug!("local socket bound to {addr}");
    }
    Ok(socket)
}

fn classify(err: io::Error) -> BootstrapError {
    match err.kind() {
        io::ErrorKind::AddrInUse
        | io::ErrorKind::AddrNotAvailable
        | io::ErrorKind::PermissionDenied => BootstrapError::Bind(err),
        _ => BootstrapError::Socket(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Network services
echo            7/tcp
tftp            69/tcp
tftp            69/udp          # Trivial File Transfer
bootps          67/udp          dhcps
";

    #[test]
    fn finds_service_by_protocol() {
        assert_eq!(lookup_service(SAMPLE, "tftp", "udp"), Some(69));
        assert_eq!(lookup_service(SAMPLE, "echo", "udp"), None);
    }

    #[test]
    fn finds_service_by_alias() {
        assert_eq!(lookup_service(SAMPLE, "dhcps", "udp"), Some(67));
    }

    #[test]
    fn configured_port_skips_lookup() {
        let mut config = Config::default();
        config.defaults.service_port = Some(6969);
        assert_eq!(resolve_service_port(&config).unwrap(), 6969);
    }

    #[test]
    fn exit_codes_follow_failure_kind() {
        assert_eq!(BootstrapError::UnknownService.exit_code(), 1);
        let socket = BootstrapError::Socket(io::Error::other("no buffers"));
        assert_eq!(socket.exit_code(), 3);
        let bind = classify(io::Error::from(io::ErrorKind::AddrInUse));
        assert_eq!(bind.exit_code(), 1);
        assert!(bind.to_string().starts_with("bind:"));
    }
}
