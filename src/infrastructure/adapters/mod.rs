//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod host_resolver;
mod line_source;
mod local_files;
mod reporter;
mod transfer_engine;

pub use host_resolver::DnsHostResolver;
pub use line_source::StdinLineSource;
pub use local_files::FsLocalFiles;
pub use reporter::ConsoleReporter;
pub use transfer_engine::DryRunTransferEngine;
