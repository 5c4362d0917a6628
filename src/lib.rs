//! tftp-shell library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use tracing::{debug, info, warn};

use application::interrupt::InterruptController;
use domain::argv::ArgumentVector;
use domain::session::Session;
use infrastructure::adapters::DryRunTransferEngine;
use infrastructure::bootstrap::{bind_local_socket, resolve_service_port};
use interface::cli::{AppComposition, Repl, ReplExit, ShellOptions};

/// 대화형 셸을 실행하고 프로세스 종료 코드를 돌려준다.
pub async fn run(options: ShellOptions) -> i32 {
    let config = match infrastructure::config::load(options.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("tftp: {err:#}");
            return 1;
        }
    };
    let defaults = match config.session_defaults() {
        Ok(defaults) => defaults,
        Err(err) => {
            eprintln!("tftp: {err:#}");
            return 1;
        }
    };

    let service_port = match resolve_service_port(&config) {
        Ok(port) => port,
        Err(err) => {
            eprintln!("tftp: {err}");
            return err.exit_code();
        }
    };
    let socket = match bind_local_socket() {
        Ok(socket) => socket,
        Err(err) => {
            eprintln!("tftp: {err}");
            return err.exit_code();
        }
    };
    info!(service_port, "local socket bound");

    let composition = match AppComposition::new(DryRunTransferEngine::new(socket), service_port) {
        Ok(composition) => composition,
        Err(err) => {
            eprintln!("tftp: {err:#}");
            return 1;
        }
    };

    let mut interrupts = InterruptController::new();
    let _signals = match interrupts.listen_ctrl_c() {
        Ok(listener) => Some(listener),
        Err(err) => {
            warn!("failed to listen for interrupt signal: {err}");
            None
        }
    };
    let mut session = Session::new(&defaults);
    let initial_connect = options.initial_connect.map(ArgumentVector::from_iter);

    let repl = Repl::new(composition.shell(), config.prompt());
    match repl.run(&mut session, &mut interrupts, initial_connect).await {
        Ok(summary) => {
            debug!(
                commands = summary.commands_executed,
                interrupts = summary.interrupts,
                "shell finished"
            );
            if summary.exit == ReplExit::InterruptedStartup {
                info!("interrupted during start-up connect");
            }
            0
        }
        Err(err) => {
            eprintln!("tftp: {err:#}");
            1
        }
    }
}
