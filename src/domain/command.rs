//! 명령 테이블과 축약 이름 해석 규칙.

/// 등록된 명령의 종류. 디스패치는 이 태그로 분기한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Connect,
    Mode,
    Put,
    Get,
    Quit,
    Verbose,
    Trace,
    Status,
    Binary,
    Ascii,
    Rexmt,
    Timeout,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: CommandKind,
}

/// help 목록에서 이름 칸 너비("connect" + 종료 문자).
pub const HELP_INDENT: usize = "connect".len() + 1;

/// 선언 순서가 곧 탐색 순서다.
pub const COMMANDS: [CommandEntry; 14] = [
    entry("connect", "connect to remote tftp", CommandKind::Connect),
    entry("mode", "set file transfer mode", CommandKind::Mode),
    entry("put", "send file", CommandKind::Put),
    entry("get", "receive file", CommandKind::Get),
    entry("quit", "exit tftp", CommandKind::Quit),
    entry("verbose", "toggle verbose mode", CommandKind::Verbose),
    entry("trace", "toggle packet tracing", CommandKind::Trace),
    entry("status", "show current status", CommandKind::Status),
    entry("binary", "set mode to octet", CommandKind::Binary),
    entry("ascii", "set mode to netascii", CommandKind::Ascii),
    entry("rexmt", "set per-packet transmission timeout", CommandKind::Rexmt),
    entry("timeout", "set total retransmission timeout", CommandKind::Timeout),
    entry("?", "print help information", CommandKind::Help),
    entry("help", "print help information", CommandKind::Help),
];

const fn entry(name: &'static str, help: &'static str, kind: CommandKind) -> CommandEntry {
    CommandEntry { name, help, kind }
}

/// 이름 해석 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a CommandEntry),
    Ambiguous,
    NotFound,
}

/// 기본 명령 테이블에서 이름을 찾는다.
pub fn resolve(name: &str) -> Lookup<'static> {
    resolve_in(&COMMANDS, name)
}

/// 축약 이름을 테이블에서 찾는다.
///
/// 테이블 순서대로 훑으며 정확히 일치하는 항목을 만나면 즉시 반환한다.
/// 그 외에는 `name`이 접두사인 항목 중 일치 길이가 가장 긴 것을 고르고,
/// 최장 길이에서 둘 이상이 겹치면 `Ambiguous`다.
pub fn resolve_in<'a>(table: &'a [CommandEntry], name: &str) -> Lookup<'a> {
    let mut longest = 0usize;
    let mut matches = 0usize;
    let mut found = None;

    for candidate in table {
        if candidate.name == name {
            return Lookup::Found(candidate);
        }
        if !candidate.name.starts_with(name) {
            continue;
        }

        let matched = name.len();
        if matched > longest {
            longest = matched;
            matches = 1;
            found = Some(candidate);
        } else if matched == longest {
            matches += 1;
        }
    }

    match found {
        _ if matches > 1 => Lookup::Ambiguous,
        Some(entry) => Lookup::Found(entry),
        None => Lookup::NotFound,
    }
}
