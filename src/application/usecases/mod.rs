//! 셸 명령별 유스케이스.

pub mod connect;
pub mod get;
pub mod help;
pub mod put;
pub mod settings;

use std::net::SocketAddr;

use anyhow::Result;

use crate::application::ports::{LineSource, TransferRequest};
use crate::domain::argv::ArgumentVector;
use crate::domain::session::Session;

/// 인자 없이 호출된 명령이면 하위 프롬프트로 나머지 인자를 묻는다.
/// 응답 앞에 `verb`를 붙여 다시 토큰화하며, 입력 끝은 빈 응답으로 본다.
pub(crate) async fn fill_missing_args(
    line_source: &dyn LineSource,
    argv: &ArgumentVector,
    prompt: &str,
    verb: &str,
) -> Result<ArgumentVector> {
    if argv.len() >= 2 {
        return Ok(argv.clone());
    }

    let answer = line_source.read_line(prompt).await?.unwrap_or_default();
    Ok(ArgumentVector::with_verb(verb, &answer))
}

pub(crate) fn transfer_request(
    session: &Session,
    peer: SocketAddr,
    remote_path: &str,
    local_name: &str,
) -> TransferRequest {
    TransferRequest {
        peer,
        peer_label: session.peer_label().to_string(),
        remote_path: remote_path.to_string(),
        local_name: local_name.to_string(),
        mode: session.mode,
        rexmt_seconds: session.rexmt_seconds,
        max_timeout_seconds: session.max_timeout_seconds,
        trace: session.trace,
    }
}
