//! 전송 엔진 포트 구현 어댑터(dry-run).
//!
//! 실제 패킷 교환은 외부 엔진의 몫이다. 이 어댑터는 바인딩된 로컬 소켓을
//! 소유한 채 어떤 교환을 수행할지만 보고하고 파일 핸들을 닫는다.

use std::fs::File;
use std::net::UdpSocket;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Reporter, TransferEngine, TransferRequest};
use crate::infrastructure::adapters::ConsoleReporter;

pub struct DryRunTransferEngine {
    socket: UdpSocket,
    reporter: ConsoleReporter,
    disarmed: AtomicU64,
}

impl DryRunTransferEngine {
    pub fn new(socket: UdpSocket) -> Self {
        Self {
            socket,
            reporter: ConsoleReporter,
            disarmed: AtomicU64::new(0),
        }
    }

    /// 인터럽트로 타이머가 해제된 횟수.
    pub fn disarm_count(&self) -> u64 {
        self.disarmed.load(Ordering::Relaxed)
    }

    fn local_label(&self) -> String {
        self.socket
            .local_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unbound".to_string())
    }

    fn trace(&self, opcode: &str, request: &TransferRequest) {
        if request.trace {
            self.reporter.line(&format!(
                "dry-run: {opcode} <file={}, mode={}> {} -> {} (rexmt {}s, timeout {}s)",
                request.remote_path,
                request.mode,
                self.local_label(),
                request.peer,
                request.rexmt_seconds,
                request.max_timeout_seconds
            ));
        }
    }
}

#[async_trait]
impl TransferEngine for DryRunTransferEngine {
    async fn send_file(&self, file: File, request: &TransferRequest) {
        self.trace("WRQ", request);
        let size = file.metadata().map(|meta| meta.len()).unwrap_or(0);
        self.reporter.line(&format!(
            "dry-run: would send {} ({size} bytes) to {}:{} [{}]",
            request.local_name, request.peer_label, request.remote_path, request.mode
        ));
        debug!(peer = %request.peer, "send request reported");
        drop(file);
    }

    async fn receive_file(&self, file: File, request: &TransferRequest) {
        self.trace("RRQ", request);
        self.reporter.line(&format!(
            "dry-run: would receive {}:{} into {} [{}]",
            request.peer_label, request.remote_path, request.local_name, request.mode
        ));
        debug!(peer = %request.peer, "receive request reported");
        drop(file);
    }

    fn disarm_timers(&self) {
        self.disarmed.fetch_add(1, Ordering::Relaxed);
        debug!("retransmission timers disarmed");
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::domain::session::TransferMode;

    fn request() -> TransferRequest {
        TransferRequest {
            peer: "127.0.0.1:69".parse().unwrap(),
            peer_label: "localhost".to_string(),
            remote_path: "boot/pxelinux.0".to_string(),
            local_name: "pxelinux.0".to_string(),
            mode: TransferMode::Octet,
            rexmt_seconds: 5,
            max_timeout_seconds: 25,
            trace: true,
        }
    }

    #[tokio::test]
    async fn consumes_handles_and_counts_disarms() {
        let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let engine = DryRunTransferEngine::new(socket);
        let file = tempfile::tempfile().unwrap();

        engine.send_file(file, &request()).await;
        engine.receive_file(tempfile::tempfile().unwrap(), &request()).await;
        assert_eq!(engine.disarm_count(), 0);

        engine.disarm_timers();
        engine.disarm_timers();
        assert_eq!(engine.disarm_count(), 2);
        assert!(engine.local_label().starts_with("127.0.0.1:"));
    }
}
