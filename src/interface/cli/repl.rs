//! `tftp>` 대화형 쉘(REPL) 드라이버.
//!
//! 매 반복은 재개 지점 아래에서 실행된다. 인터럽트가 오면 입력 대기나
//! 명령 처리를 버리고 새 프롬프트로 돌아간다.

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::interrupt::{InterruptController, Resumed};
use crate::application::shell::{Flow, LineOutcome, Shell};
use crate::domain::argv::ArgumentVector;
use crate::domain::session::Session;

/// 루프가 끝난 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplExit {
    #[default]
    EndOfInput,
    Quit,
    /// 시작 시 자동 접속 중 인터럽트
    InterruptedStartup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplSummary {
    pub commands_executed: u64,
    pub interrupts: u64,
    pub exit: ReplExit,
}

enum Iteration {
    EndOfInput,
    Line(LineOutcome),
}

pub struct Repl<'a> {
    shell: Shell<'a>,
    prompt: String,
}

impl<'a> Repl<'a> {
    pub fn new(shell: Shell<'a>, prompt: impl Into<String>) -> Self {
        Self {
            shell,
            prompt: prompt.into(),
        }
    }

    /// 입력 끝 또는 `quit`까지 명령을 처리한다.
    pub async fn run(
        &self,
        session: &mut Session,
        interrupts: &mut InterruptController,
        initial_connect: Option<ArgumentVector>,
    ) -> Result<ReplSummary> {
        let mut summary = ReplSummary::default();
        interrupts.discard_pending();

        if let Some(argv) = initial_connect {
            let mut draft = session.clone();
            let connect = self.shell.connect_usecase();
            let resumed = interrupts.guard(connect.execute(&argv, &mut draft)).await;
            match resumed {
                Resumed::Interrupted => {
                    self.shell.engine.disarm_timers();
                    summary.interrupts += 1;
                    summary.exit = ReplExit::InterruptedStartup;
                    return Ok(summary);
                }
                Resumed::Completed(result) => {
                    result?;
                    *session = draft;
                }
            }
        }

        loop {
            let resumed = interrupts.guard(self.iteration(session)).await;
            match resumed {
                Resumed::Interrupted => {
                    self.shell.engine.disarm_timers();
                    self.shell.reporter.line("");
                    summary.interrupts += 1;
                    debug!("interrupted; back to prompt");
                }
                Resumed::Completed(Err(err)) => {
                    warn!("command aborted: {err:#}");
                }
                Resumed::Completed(Ok(Iteration::EndOfInput)) => {
                    summary.exit = ReplExit::EndOfInput;
                    break;
                }
                Resumed::Completed(Ok(Iteration::Line(LineOutcome::Idle))) => {}
                Resumed::Completed(Ok(Iteration::Line(LineOutcome::Executed(step)))) => {
                    summary.commands_executed += 1;
                    *session = step.session;
                    if step.flow == Flow::Quit {
                        summary.exit = ReplExit::Quit;
                        break;
                    }
                }
            }
        }

        Ok(summary)
    }

    async fn iteration(&self, session: &Session) -> Result<Iteration> {
        let Some(line) = self.shell.line_source.read_line(&self.prompt).await? else {
            return Ok(Iteration::EndOfInput);
        };
        let outcome = self.shell.run_line(&line, session).await?;
        Ok(Iteration::Line(outcome))
    }
}
