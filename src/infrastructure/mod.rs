//! Infrastructure layer
//! 외부 시스템(stdin/DNS/파일시스템/소켓)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod bootstrap;
pub mod config;
