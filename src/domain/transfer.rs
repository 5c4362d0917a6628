//! `put`/`get` 인자를 전송 계획으로 해석하는 규칙.
//!
//! 이름 해석이나 파일 열기 같은 부수 효과 없이, 어떤 파일을 어디로
//! 보낼지만 결정한다.

use crate::domain::argv::ArgumentVector;
use crate::domain::path::{has_host_prefix, remote_child, single_remote_target, split_host_path, tail};

/// 인자 모양이 맞지 않아 사용법을 출력해야 하는 경우.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageError;

/// 로컬 파일 하나를 원격 경로로 보내는 단위 작업.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutItem {
    pub local: String,
    pub remote: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutPlan {
    /// 마지막 인자에 `host:`가 붙어 있으면 암묵적 접속 대상
    pub host: Option<String>,
    pub items: Vec<PutItem>,
    /// 여러 파일을 디렉터리로 보내는 경우
    pub fan_out: bool,
}

/// `put file... [host:]target` 인자를 해석한다.
pub fn plan_put(argv: &ArgumentVector) -> Result<PutPlan, UsageError> {
    let operands = argv.operands();
    let Some((last, locals)) = operands.split_last() else {
        return Err(UsageError);
    };

    let (host, target) = match split_host_path(last) {
        Some((host, target)) => {
            // 대상이 아닌 인자에 콜론이 있으면 안 된다.
            if locals.iter().any(|arg| has_host_prefix(arg)) {
                return Err(UsageError);
            }
            (Some(host.to_string()), target)
        }
        None => (None, last.as_str()),
    };

    let items = match locals {
        [] => vec![PutItem {
            local: tail(target).to_string(),
            remote: target.to_string(),
        }],
        [local] => vec![PutItem {
            local: local.clone(),
            remote: single_remote_target(target, local),
        }],
        many => many
            .iter()
            .map(|local| PutItem {
                local: local.clone(),
                remote: remote_child(target, local),
            })
            .collect(),
    };

    Ok(PutPlan {
        host,
        fan_out: locals.len() > 1,
        items,
    })
}

/// 원격 파일 하나를 받는 단위 작업.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetItem {
    pub host: Option<String>,
    pub remote: String,
    pub local: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPlan {
    pub items: Vec<GetItem>,
    /// 단일 항목 모드에서는 실패가 명령 전체를 중단시킨다.
    pub single: bool,
}

/// `get [host:]file... [localfile]` 인자를 해석한다.
///
/// 인자가 두 개 이하면 첫 인자만 원격 항목이고 두 번째는 로컬 이름이다.
/// 접속 전이라면 모든 인자가 `host:` 형식이어야 한다.
pub fn plan_get(argv: &ArgumentVector, connected: bool) -> Result<GetPlan, UsageError> {
    let operands = argv.operands();
    if operands.is_empty() {
        return Err(UsageError);
    }
    if !connected && !operands.iter().all(|arg| has_host_prefix(arg)) {
        return Err(UsageError);
    }

    if operands.len() <= 2 {
        let (host, remote) = get_source(&operands[0]);
        let local = match operands.get(1) {
            Some(explicit) => explicit.clone(),
            None => tail(&remote).to_string(),
        };
        return Ok(GetPlan {
            items: vec![GetItem { host, remote, local }],
            single: true,
        });
    }

    let items = operands
        .iter()
        .map(|arg| {
            let (host, remote) = get_source(arg);
            let local = tail(&remote).to_string();
            GetItem { host, remote, local }
        })
        .collect();

    Ok(GetPlan {
        items,
        single: false,
    })
}

fn get_source(arg: &str) -> (Option<String>, String) {
    match split_host_path(arg) {
        Some((host, remote)) => (Some(host.to_string()), remote.to_string()),
        None => (None, arg.to_string()),
    }
}
