//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "tftp")]
#[command(about = "Interactive TFTP client shell")]
pub struct Cli {
    /// Host and optional port to connect to on start-up
    #[arg(value_name = "HOST [PORT]")]
    peer: Vec<String>,

    /// Extra JSON config file (highest priority)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show effective merged config and exit
    #[arg(long)]
    print_config: bool,
}

/// 시작 옵션을 해석한 실행 동작.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    InspectConfig { config: Option<PathBuf> },
    Interactive(ShellOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOptions {
    pub config: Option<PathBuf>,
    /// 시작 시 `connect`에 넘길 인자(`tftp` 포함)
    pub initial_connect: Option<Vec<String>>,
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        if self.print_config {
            return CliAction::InspectConfig {
                config: self.config,
            };
        }

        let initial_connect = (!self.peer.is_empty()).then(|| {
            std::iter::once("tftp".to_string())
                .chain(self.peer)
                .collect()
        });

        CliAction::Interactive(ShellOptions {
            config: self.config,
            initial_connect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> CliAction {
        Cli::try_parse_from(args).unwrap().into_action()
    }

    #[test]
    fn no_arguments_starts_disconnected() {
        assert_eq!(
            action(&["tftp"]),
            CliAction::Interactive(ShellOptions::default())
        );
    }

    #[test]
    fn positional_peer_becomes_connect_arguments() {
        let CliAction::Interactive(options) = action(&["tftp", "boot.lan", "6969"]) else {
            panic!("expected interactive action");
        };
        assert_eq!(
            options.initial_connect,
            Some(vec![
                "tftp".to_string(),
                "boot.lan".to_string(),
                "6969".to_string()
            ])
        );
    }

    #[test]
    fn print_config_takes_precedence() {
        assert_eq!(
            action(&["tftp", "--config", "x.json", "--print-config", "host"]),
            CliAction::InspectConfig {
                config: Some(PathBuf::from("x.json"))
            }
        );
    }
}
