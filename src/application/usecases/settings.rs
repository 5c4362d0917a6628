//! 전송 모드/플래그/타임아웃 설정과 상태 출력.

use anyhow::Result;

use crate::application::ports::{LineSource, Reporter};
use crate::application::usecases::fill_missing_args;
use crate::domain::argv::ArgumentVector;
use crate::domain::session::{MODE_NAMES, Session, TransferMode, on_off};

pub struct SettingsUseCase<'a> {
    pub line_source: &'a dyn LineSource,
    pub reporter: &'a dyn Reporter,
}

impl<'a> SettingsUseCase<'a> {
    /// `mode [name]`
    pub fn mode(&self, argv: &ArgumentVector, session: &mut Session) {
        match argv.operands() {
            [] => {
                self.reporter
                    .line(&format!("Using {} mode to transfer files.", session.mode));
                return;
            }
            [name] => {
                if let Some(mode) = TransferMode::from_name(name) {
                    self.set_mode(mode, session);
                    return;
                }
                self.reporter.line(&format!("{name}: unknown mode"));
            }
            _ => {}
        }

        let names: Vec<&str> = MODE_NAMES.iter().map(|(name, _)| *name).collect();
        self.reporter.line(&format!(
            "usage: {} [ {} ]",
            argv.command(),
            names.join(" | ")
        ));
    }

    pub fn set_mode(&self, mode: TransferMode, session: &mut Session) {
        session.mode = mode;
        if session.verbose {
            self.reporter.line(&format!("mode set to {mode}"));
        }
    }

    pub fn toggle_verbose(&self, session: &mut Session) {
        session.verbose = !session.verbose;
        self.reporter
            .line(&format!("Verbose mode {}.", on_off(session.verbose)));
    }

    pub fn toggle_trace(&self, session: &mut Session) {
        session.trace = !session.trace;
        self.reporter
            .line(&format!("Packet tracing {}.", on_off(session.trace)));
    }

    /// `rexmt value`: 패킷당 재전송 간격.
    pub async fn rexmt(&self, argv: &ArgumentVector, session: &mut Session) -> Result<()> {
        let argv = fill_missing_args(self.line_source, argv, "(value) ", "Rexmt-timeout").await?;
        if let Some(seconds) = self.seconds_argument(&argv) {
            session.rexmt_seconds = seconds;
        }
        Ok(())
    }

    /// `timeout value`: 전체 재전송 제한 시간.
    pub async fn timeout(&self, argv: &ArgumentVector, session: &mut Session) -> Result<()> {
        let argv = fill_missing_args(self.line_source, argv, "(value) ", "Maximum-timeout").await?;
        if let Some(seconds) = self.seconds_argument(&argv) {
            session.max_timeout_seconds = seconds;
        }
        Ok(())
    }

    pub fn status(&self, session: &Session) {
        for line in session.status_lines() {
            self.reporter.line(&line);
        }
    }

    // 음수나 숫자가 아닌 값은 거부하고 입력값을 그대로 보여준다.
    fn seconds_argument(&self, argv: &ArgumentVector) -> Option<u32> {
        let [raw] = argv.operands() else {
            self.reporter
                .line(&format!("usage: {} value", argv.command()));
            return None;
        };

        match raw.parse::<u32>() {
            Ok(seconds) => Some(seconds),
            Err(_) => {
                self.reporter.line(&format!("{raw}: bad value"));
                None
            }
        }
    }
}
