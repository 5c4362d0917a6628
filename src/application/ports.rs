//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::fs::File;
use std::io;
use std::net::{IpAddr, SocketAddr};

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::session::TransferMode;

/// 대화형 입력 한 줄을 공급하는 포트.
///
/// 구현체는 취소에 안전해야 한다. 읽기 도중 future가 버려져도
/// 다음 호출에서 입력을 계속 받을 수 있어야 한다.
#[async_trait]
pub trait LineSource: Send + Sync {
    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력 끝이면 `None`.
    async fn read_line(&self, prompt: &str) -> Result<Option<String>>;
}

/// 호스트 이름 해석 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    pub addr: IpAddr,
    pub label: String,
}

/// 호스트 이름 해석 포트.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup(&self, host: &str) -> Result<ResolvedHost>;
}

/// 로컬 파일 열기/생성 포트.
pub trait LocalFiles: Send + Sync {
    fn open(&self, name: &str) -> io::Result<File>;
    /// 기존 파일은 비우고 새로 만든다.
    fn create(&self, name: &str) -> io::Result<File>;
}

/// 전송 엔진에 넘기는 요청 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub peer: SocketAddr,
    pub peer_label: String,
    pub remote_path: String,
    pub local_name: String,
    pub mode: TransferMode,
    pub rexmt_seconds: u32,
    pub max_timeout_seconds: u32,
    pub trace: bool,
}

/// 실제 프로토콜 교환을 수행하는 전송 엔진 포트.
///
/// 파일 핸들의 소유권을 넘겨받으며, 성공/실패와 관계없이 닫는 책임과
/// 실패 보고 책임도 엔진에 있다.
#[async_trait]
pub trait TransferEngine: Send + Sync {
    async fn send_file(&self, file: File, request: &TransferRequest);
    async fn receive_file(&self, file: File, request: &TransferRequest);
    /// 인터럽트 시 대기 중인 재전송 타이머를 해제한다.
    fn disarm_timers(&self);
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    /// 일반 출력 한 줄(stdout)
    fn line(&self, text: &str);
    /// 진단 출력 한 줄(stderr)
    fn error(&self, text: &str);
}
