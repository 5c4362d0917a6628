//! `put file... [host:]target` 유스케이스.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{HostResolver, LineSource, LocalFiles, Reporter, TransferEngine};
use crate::application::usecases::connect::implicit_connect;
use crate::application::usecases::{fill_missing_args, transfer_request};
use crate::domain::argv::ArgumentVector;
use crate::domain::session::Session;
use crate::domain::transfer::plan_put;

/// 로컬 파일을 원격으로 보낸다.
pub struct PutUseCase<'a> {
    pub line_source: &'a dyn LineSource,
    pub resolver: &'a dyn HostResolver,
    pub files: &'a dyn LocalFiles,
    pub engine: &'a dyn TransferEngine,
    pub reporter: &'a dyn Reporter,
    pub service_port: u16,
}

impl<'a> PutUseCase<'a> {
    pub async fn execute(&self, argv: &ArgumentVector, session: &mut Session) -> Result<()> {
        let argv = fill_missing_args(self.line_source, argv, "(file) ", "send").await?;
        let Ok(plan) = plan_put(&argv) else {
            self.usage(argv.command());
            return Ok(());
        };

        if let Some(host) = plan.host.as_deref()
            && !implicit_connect(self.resolver, self.reporter, session, host, self.service_port)
                .await
        {
            return Ok(());
        }

        let Some(peer) = session.peer_socket() else {
            self.reporter.line("No target machine specified.");
            return Ok(());
        };

        for item in &plan.items {
            // 여러 파일 중 하나를 못 열면 그 파일만 건너뛴다.
            let file = match self.files.open(&item.local) {
                Ok(file) => file,
                Err(err) => {
                    self.reporter
                        .error(&format!("tftp: {}: {err}", item.local));
                    continue;
                }
            };

            if session.verbose {
                self.reporter.line(&format!(
                    "putting {} to {}:{} [{}]",
                    item.local,
                    session.peer_label(),
                    item.remote,
                    session.mode
                ));
            }
            debug!(local = %item.local, remote = %item.remote, "sending file");
            let request = transfer_request(session, peer, &item.remote, &item.local);
            self.engine.send_file(file, &request).await;
        }

        Ok(())
    }

    fn usage(&self, argv0: &str) {
        self.reporter
            .line(&format!("usage: {argv0} file ... host:target, or"));
        self.reporter.line(&format!(
            "       {argv0} file ... target (when already connected)"
        ));
    }
}
