//! 표준 입력 라인 공급 어댑터.
//!
//! 전용 스레드가 stdin을 읽어 채널로 넘긴다. 읽기 대기 future가
//! 인터럽트로 버려져도 리더 스레드와 다음 입력은 그대로 남는다.

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

use crate::application::ports::LineSource;

pub struct StdinLineSource {
    lines: Mutex<mpsc::UnboundedReceiver<io::Result<String>>>,
}

impl StdinLineSource {
    /// 리더 스레드를 띄운다.
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || read_stdin(tx))
            .context("failed to start stdin reader")?;

        Ok(Self {
            lines: Mutex::new(rx),
        })
    }
}

fn read_stdin(tx: mpsc::UnboundedSender<io::Result<String>>) {
    read_lines(io::stdin().lock(), &tx);
}

/// 줄 단위로 읽어 보낸다. UTF-8이 아닌 바이트는 대체 문자로 바꾼다.
fn read_lines<R: BufRead>(mut reader: R, tx: &mpsc::UnboundedSender<io::Result<String>>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                debug!("stdin reached end of input");
                return;
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf).into_owned();
                if tx.send(Ok(line)).is_err() {
                    return;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                // 읽기 오류 뒤에는 입력 끝으로 취급한다.
                warn!("stdin read failed: {err}");
                let _ = tx.send(Err(err));
                return;
            }
        }
    }
}

#[async_trait]
impl LineSource for StdinLineSource {
    async fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut lines = self.lines.lock().await;
        match lines.recv().await {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(err)) => Err(err).context("failed to read input line"),
            None => Ok(None),
        }
    }
}
