//! `connect host [port]` 유스케이스와 암묵적 접속 처리.

use std::net::IpAddr;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::ports::{HostResolver, LineSource, Reporter};
use crate::application::usecases::fill_missing_args;
use crate::domain::argv::ArgumentVector;
use crate::domain::session::{Peer, Session};

/// 접속 대상을 설정한다.
pub struct ConnectUseCase<'a> {
    pub line_source: &'a dyn LineSource,
    pub resolver: &'a dyn HostResolver,
    pub reporter: &'a dyn Reporter,
    pub service_port: u16,
}

impl<'a> ConnectUseCase<'a> {
    /// 숫자 주소는 그대로 쓰고, 아니면 이름을 해석한다.
    /// 해석 실패 시 세션은 그대로 둔다.
    pub async fn execute(&self, argv: &ArgumentVector, session: &mut Session) -> Result<()> {
        let argv = fill_missing_args(self.line_source, argv, "(to) ", "Connect").await?;
        if argv.len() < 2 || argv.len() > 3 {
            self.reporter
                .line(&format!("usage: {} host-name [port]", argv.command()));
            return Ok(());
        }

        let host = argv.get(1).unwrap_or_default();
        let peer = match host.parse::<IpAddr>() {
            Ok(addr) => Peer {
                addr,
                label: host.to_string(),
            },
            Err(_) => match self.resolver.lookup(host).await {
                Ok(resolved) => Peer {
                    addr: resolved.addr,
                    label: resolved.label,
                },
                Err(err) => {
                    debug!("lookup of {host} failed: {err:#}");
                    self.reporter.line(&format!("{host}: unknown host"));
                    return Ok(());
                }
            },
        };

        let port = match argv.get(2) {
            None => self.service_port,
            Some(raw) => match parse_port(raw) {
                Some(port) => port,
                None => {
                    self.reporter.line(&format!("{raw}: bad port number"));
                    session.connected = false;
                    return Ok(());
                }
            },
        };

        info!(peer = %peer.addr, port, "connected to {}", peer.label);
        session.attach(peer, port);
        Ok(())
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.parse::<u16>().ok().filter(|port| *port != 0)
}

/// `host:path` 인자로 접속 대상을 바꾼다. 실패하면 진단을 출력하고 `false`.
///
/// 포트가 한 번도 정해지지 않았다면 기본 서비스 포트를 쓴다.
pub(crate) async fn implicit_connect(
    resolver: &dyn HostResolver,
    reporter: &dyn Reporter,
    session: &mut Session,
    host: &str,
    service_port: u16,
) -> bool {
    let resolved = match resolver.lookup(host).await {
        Ok(resolved) => resolved,
        Err(err) => {
            debug!("lookup of {host} failed: {err:#}");
            reporter.error(&format!("tftp: {host}: Unknown host"));
            return false;
        }
    };

    let port = if session.port == 0 {
        service_port
    } else {
        session.port
    };
    debug!(peer = %resolved.addr, port, "implicit connect to {}", resolved.label);
    session.attach(
        Peer {
            addr: resolved.addr,
            label: resolved.label,
        },
        port,
    );
    true
}
