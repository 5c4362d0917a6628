//! 명령 디스패치와 세션 반영 단위.
//!
//! 핸들러는 세션 복사본에서 작업하고, 끝까지 실행된 경우에만
//! 결과 세션이 호출자에게 돌아간다.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{HostResolver, LineSource, LocalFiles, Reporter, TransferEngine};
use crate::application::usecases::connect::ConnectUseCase;
use crate::application::usecases::get::GetUseCase;
use crate::application::usecases::help::HelpUseCase;
use crate::application::usecases::put::PutUseCase;
use crate::application::usecases::settings::SettingsUseCase;
use crate::domain::argv::ArgumentVector;
use crate::domain::command::{CommandEntry, CommandKind, Lookup, resolve};
use crate::domain::session::{Session, TransferMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 명령 하나를 끝까지 실행한 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    pub flow: Flow,
}

/// 입력 한 줄을 처리한 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// 빈 줄이거나 디스패치 오류
    Idle,
    Executed(Step),
}

/// 셸이 쓰는 포트 묶음.
pub struct Shell<'a> {
    pub line_source: &'a dyn LineSource,
    pub resolver: &'a dyn HostResolver,
    pub files: &'a dyn LocalFiles,
    pub engine: &'a dyn TransferEngine,
    pub reporter: &'a dyn Reporter,
    /// 기본 서비스 포트
    pub service_port: u16,
}

impl<'a> Shell<'a> {
    pub fn connect_usecase(&self) -> ConnectUseCase<'_> {
        ConnectUseCase {
            line_source: self.line_source,
            resolver: self.resolver,
            reporter: self.reporter,
            service_port: self.service_port,
        }
    }

    pub fn put_usecase(&self) -> PutUseCase<'_> {
        PutUseCase {
            line_source: self.line_source,
            resolver: self.resolver,
            files: self.files,
            engine: self.engine,
            reporter: self.reporter,
            service_port: self.service_port,
        }
    }

    pub fn get_usecase(&self) -> GetUseCase<'_> {
        GetUseCase {
            line_source: self.line_source,
            resolver: self.resolver,
            files: self.files,
            engine: self.engine,
            reporter: self.reporter,
            service_port: self.service_port,
        }
    }

    pub fn settings_usecase(&self) -> SettingsUseCase<'_> {
        SettingsUseCase {
            line_source: self.line_source,
            reporter: self.reporter,
        }
    }

    pub fn help_usecase(&self) -> HelpUseCase<'_> {
        HelpUseCase {
            reporter: self.reporter,
        }
    }

    /// 입력 한 줄을 토큰화하고 명령을 찾아 실행한다.
    pub async fn run_line(&self, line: &str, session: &Session) -> Result<LineOutcome> {
        let argv = ArgumentVector::tokenize(line);
        if argv.is_empty() {
            return Ok(LineOutcome::Idle);
        }

        match resolve(argv.command()) {
            Lookup::Ambiguous => {
                self.reporter.line("?Ambiguous command");
                Ok(LineOutcome::Idle)
            }
            Lookup::NotFound => {
                self.reporter.line("?Invalid command");
                Ok(LineOutcome::Idle)
            }
            Lookup::Found(entry) => {
                let step = self.execute(entry, &argv, session).await?;
                Ok(LineOutcome::Executed(step))
            }
        }
    }

    /// 명령 핸들러를 세션 복사본 위에서 실행한다.
    pub async fn execute(
        &self,
        entry: &CommandEntry,
        argv: &ArgumentVector,
        session: &Session,
    ) -> Result<Step> {
        debug!(command = entry.name, argc = argv.len(), "dispatch");
        let mut draft = session.clone();
        let settings = self.settings_usecase();

        let flow = match entry.kind {
            CommandKind::Connect => {
                self.connect_usecase().execute(argv, &mut draft).await?;
                Flow::Continue
            }
            CommandKind::Put => {
                self.put_usecase().execute(argv, &mut draft).await?;
                Flow::Continue
            }
            CommandKind::Get => {
                self.get_usecase().execute(argv, &mut draft).await?;
                Flow::Continue
            }
            CommandKind::Mode => {
                settings.mode(argv, &mut draft);
                Flow::Continue
            }
            CommandKind::Binary => {
                settings.set_mode(TransferMode::Octet, &mut draft);
                Flow::Continue
            }
            CommandKind::Ascii => {
                settings.set_mode(TransferMode::Netascii, &mut draft);
                Flow::Continue
            }
            CommandKind::Verbose => {
                settings.toggle_verbose(&mut draft);
                Flow::Continue
            }
            CommandKind::Trace => {
                settings.toggle_trace(&mut draft);
                Flow::Continue
            }
            CommandKind::Rexmt => {
                settings.rexmt(argv, &mut draft).await?;
                Flow::Continue
            }
            CommandKind::Timeout => {
                settings.timeout(argv, &mut draft).await?;
                Flow::Continue
            }
            CommandKind::Status => {
                settings.status(&draft);
                Flow::Continue
            }
            CommandKind::Help => {
                self.help_usecase().execute(argv);
                Flow::Continue
            }
            CommandKind::Quit => Flow::Quit,
        };

        Ok(Step {
            session: draft,
            flow,
        })
    }
}
