//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::shell::Shell;
use crate::infrastructure::adapters::{
    ConsoleReporter, DnsHostResolver, DryRunTransferEngine, FsLocalFiles, StdinLineSource,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    line_source: StdinLineSource,
    resolver: DnsHostResolver,
    files: FsLocalFiles,
    engine: DryRunTransferEngine,
    reporter: ConsoleReporter,
    service_port: u16,
}

impl AppComposition {
    /// 부트스트랩에서 준비한 엔진과 서비스 포트로 조합을 만든다.
    pub fn new(engine: DryRunTransferEngine, service_port: u16) -> Result<Self> {
        Ok(Self {
            line_source: StdinLineSource::spawn()?,
            resolver: DnsHostResolver,
            files: FsLocalFiles::default(),
            engine,
            reporter: ConsoleReporter,
            service_port,
        })
    }

    /// 셸(명령 디스패처)을 생성한다.
    pub fn shell(&self) -> Shell<'_> {
        Shell {
            line_source: &self.line_source,
            resolver: &self.resolver,
            files: &self.files,
            engine: &self.engine,
            reporter: &self.reporter,
            service_port: self.service_port,
        }
    }
}
