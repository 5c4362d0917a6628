//! `get [host:]file... [localfile]` 유스케이스.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{HostResolver, LineSource, LocalFiles, Reporter, TransferEngine};
use crate::application::usecases::connect::implicit_connect;
use crate::application::usecases::{fill_missing_args, transfer_request};
use crate::domain::argv::ArgumentVector;
use crate::domain::session::Session;
use crate::domain::transfer::plan_get;

/// 원격 파일을 받아 로컬에 만든다.
pub struct GetUseCase<'a> {
    pub line_source: &'a dyn LineSource,
    pub resolver: &'a dyn HostResolver,
    pub files: &'a dyn LocalFiles,
    pub engine: &'a dyn TransferEngine,
    pub reporter: &'a dyn Reporter,
    pub service_port: u16,
}

impl<'a> GetUseCase<'a> {
    /// 항목별로 암묵적 접속을 처리한다.
    /// 단일 항목이면 실패가 명령을 끝내고, 여러 항목이면 해당 항목만 건너뛴다.
    pub async fn execute(&self, argv: &ArgumentVector, session: &mut Session) -> Result<()> {
        let argv = fill_missing_args(self.line_source, argv, "(files) ", "get").await?;
        let Ok(plan) = plan_get(&argv, session.connected) else {
            self.usage(argv.command());
            return Ok(());
        };

        for item in &plan.items {
            if let Some(host) = item.host.as_deref()
                && !implicit_connect(self.resolver, self.reporter, session, host, self.service_port)
                    .await
            {
                if plan.single {
                    return Ok(());
                }
                continue;
            }

            let Some(peer) = session.peer_socket() else {
                self.reporter.line("No target machine specified.");
                return Ok(());
            };

            let file = match self.files.create(&item.local) {
                Ok(file) => file,
                Err(err) => {
                    self.reporter
                        .error(&format!("tftp: {}: {err}", item.local));
                    if plan.single {
                        return Ok(());
                    }
                    continue;
                }
            };

            if session.verbose {
                self.reporter.line(&format!(
                    "getting from {}:{} to {} [{}]",
                    session.peer_label(),
                    item.remote,
                    item.local,
                    session.mode
                ));
            }
            debug!(remote = %item.remote, local = %item.local, "receiving file");
            let request = transfer_request(session, peer, &item.remote, &item.local);
            self.engine.receive_file(file, &request).await;
        }

        Ok(())
    }

    fn usage(&self, argv0: &str) {
        self.reporter
            .line(&format!("usage: {argv0} host:file host:file ... file, or"));
        self.reporter
            .line(&format!("       {argv0} file file ... file if connected"));
    }
}
