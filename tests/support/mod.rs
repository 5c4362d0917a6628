//! 통합 테스트용 가짜 포트 구현.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::net::IpAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Notify;

use tftp_shell::application::ports::{
    HostResolver, LineSource, Reporter, ResolvedHost, TransferEngine, TransferRequest,
};
use tftp_shell::application::shell::Shell;
use tftp_shell::infrastructure::adapters::FsLocalFiles;

pub const SERVICE_PORT: u16 = 69;

/// 스크립트 입력 한 항목.
pub enum Input {
    Line(String),
    /// 입력 대기에서 멈춘다(인터럽트 전용).
    Block,
}

pub fn line(text: &str) -> Input {
    Input::Line(text.to_string())
}

/// 미리 정한 줄을 차례로 돌려주고, 끝나면 입력 끝을 알린다.
#[derive(Default)]
pub struct ScriptedLineSource {
    script: Mutex<VecDeque<Input>>,
    prompts: Mutex<Vec<String>>,
    blocked: Notify,
}

impl ScriptedLineSource {
    pub fn new(script: Vec<Input>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }

    /// `Block` 항목에 도달할 때까지 기다린다.
    pub async fn wait_blocked(&self) {
        self.blocked.notified().await;
    }
}

#[async_trait]
impl LineSource for ScriptedLineSource {
    async fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Input::Line(text)) => Ok(Some(text)),
            Some(Input::Block) => {
                self.blocked.notify_one();
                std::future::pending().await
            }
            None => Ok(None),
        }
    }
}

/// 고정 테이블 기반 이름 해석기. `stall` 호스트는 응답하지 않는다.
#[derive(Default)]
pub struct FakeResolver {
    hosts: HashMap<String, IpAddr>,
    stalled_hosts: HashSet<String>,
    stalled: Notify,
}

impl FakeResolver {
    pub fn with_host(mut self, name: &str, addr: &str) -> Self {
        self.hosts
            .insert(name.to_string(), addr.parse().expect("test address"));
        self
    }

    pub fn with_stalled_host(mut self, name: &str) -> Self {
        self.stalled_hosts.insert(name.to_string());
        self
    }

    pub async fn wait_stalled(&self) {
        self.stalled.notified().await;
    }
}

#[async_trait]
impl HostResolver for FakeResolver {
    async fn lookup(&self, host: &str) -> Result<ResolvedHost> {
        if self.stalled_hosts.contains(host) {
            self.stalled.notify_one();
            std::future::pending::<()>().await;
        }
        let addr = self
            .hosts
            .get(host)
            .copied()
            .ok_or_else(|| anyhow!("no such host: {host}"))?;
        Ok(ResolvedHost {
            addr,
            label: host.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Send,
    Receive,
}

/// 엔진 호출을 기록만 한다.
#[derive(Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<(Direction, TransferRequest)>>,
    disarmed: AtomicUsize,
}

impl RecordingEngine {
    pub fn calls(&self) -> Vec<(Direction, TransferRequest)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn remote_paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|(_, request)| request.remote_path)
            .collect()
    }

    pub fn disarm_count(&self) -> usize {
        self.disarmed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransferEngine for RecordingEngine {
    async fn send_file(&self, _file: std::fs::File, request: &TransferRequest) {
        self.calls
            .lock()
            .unwrap()
            .push((Direction::Send, request.clone()));
    }

    async fn receive_file(&self, _file: std::fs::File, request: &TransferRequest) {
        self.calls
            .lock()
            .unwrap()
            .push((Direction::Receive, request.clone()));
    }

    fn disarm_timers(&self) {
        self.disarmed.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct BufferReporter {
    out: Mutex<Vec<String>>,
    err: Mutex<Vec<String>>,
}

impl BufferReporter {
    pub fn out(&self) -> Vec<String> {
        self.out.lock().unwrap().clone()
    }

    pub fn err(&self) -> Vec<String> {
        self.err.lock().unwrap().clone()
    }
}

impl Reporter for BufferReporter {
    fn line(&self, text: &str) {
        self.out.lock().unwrap().push(text.to_string());
    }

    fn error(&self, text: &str) {
        self.err.lock().unwrap().push(text.to_string());
    }
}

/// 가짜 포트와 임시 작업 디렉터리 묶음.
pub struct Harness {
    pub lines: ScriptedLineSource,
    pub resolver: FakeResolver,
    pub files: FsLocalFiles,
    pub engine: RecordingEngine,
    pub reporter: BufferReporter,
    pub dir: TempDir,
}

impl Harness {
    pub fn new(script: Vec<Input>) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        Self {
            lines: ScriptedLineSource::new(script),
            resolver: FakeResolver::default()
                .with_host("boot", "10.0.0.5")
                .with_host("mirror", "10.0.0.6"),
            files: FsLocalFiles::new(dir.path()),
            engine: RecordingEngine::default(),
            reporter: BufferReporter::default(),
            dir,
        }
    }

    pub fn with_resolver(mut self, resolver: FakeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// 작업 디렉터리에 로컬 파일을 만든다.
    pub fn touch(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("write fixture");
    }

    /// 같은 이름의 파일을 만들 수 없도록 디렉터리를 둔다.
    pub fn mkdir(&self, name: &str) {
        std::fs::create_dir(self.dir.path().join(name)).expect("create fixture dir");
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    pub fn shell(&self) -> Shell<'_> {
        Shell {
            line_source: &self.lines,
            resolver: &self.resolver,
            files: &self.files,
            engine: &self.engine,
            reporter: &self.reporter,
            service_port: SERVICE_PORT,
        }
    }
}
