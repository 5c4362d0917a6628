//! 비동기 인터럽트(Ctrl-C)를 재개 지점으로 되돌리는 제어기.
//!
//! 진행 중인 입력 대기나 명령 처리는 future째 버려진다. 세션은 명령이
//! 끝났을 때만 반영되므로 중간 상태가 남지 않는다.

use std::future::Future;
use std::io;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
#[cfg(not(unix))]
use tracing::warn;
use tracing::debug;

/// 재개 지점에서 실행한 작업의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resumed<T> {
    Completed(T),
    Interrupted,
}

/// 인터럽트를 보내는 쪽 핸들. 신호 처리 태스크나 테스트에서 쓴다.
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    tx: mpsc::UnboundedSender<()>,
}

impl InterruptHandle {
    pub fn trigger(&self) {
        // 수신 측이 사라졌다면 더 돌아갈 재개 지점도 없다.
        let _ = self.tx.send(());
    }
}

#[derive(Debug)]
pub struct InterruptController {
    tx: mpsc::UnboundedSender<()>,
    rx: mpsc::UnboundedReceiver<()>,
}

impl Default for InterruptController {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptController {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn handle(&self) -> InterruptHandle {
        InterruptHandle {
            tx: self.tx.clone(),
        }
    }

    /// Ctrl-C 신호를 인터럽트로 연결한다.
    ///
    /// 신호 스트림은 반환 전에 한 번만 등록되고, 연달아 오는 신호도
    /// 같은 스트림에서 받는다.
    #[cfg(unix)]
    pub fn listen_ctrl_c(&self) -> io::Result<JoinHandle<()>> {
        use tokio::signal::unix::{SignalKind, signal};

        let mut interrupts = signal(SignalKind::interrupt())?;
        let handle = self.handle();
        Ok(tokio::spawn(async move {
            while interrupts.recv().await.is_some() {
                debug!("interrupt signal received");
                handle.trigger();
            }
        }))
    }

    #[cfg(not(unix))]
    pub fn listen_ctrl_c(&self) -> io::Result<JoinHandle<()>> {
        let handle = self.handle();
        Ok(tokio::spawn(async move {
            loop {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    warn!("failed to listen for interrupt signal: {err}");
                    return;
                }
                debug!("interrupt signal received");
                handle.trigger();
            }
        }))
    }

    /// 재개 지점을 세우기 전에 쌓여 있던 인터럽트를 버린다.
    pub fn discard_pending(&mut self) -> usize {
        let mut discarded = 0;
        while self.rx.try_recv().is_ok() {
            discarded += 1;
        }
        discarded
    }

    /// `work`를 재개 지점 아래에서 실행한다.
    ///
    /// 인터럽트가 먼저 오면 `work`는 완료되지 않은 채 버려진다.
    pub async fn guard<F>(&mut self, work: F) -> Resumed<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.rx.recv() => Resumed::Interrupted,
            output = work => Resumed::Completed(output),
        }
    }
}
