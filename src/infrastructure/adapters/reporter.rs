//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, Write};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn error(&self, text: &str) {
        // stdout에 남은 출력과 순서가 뒤섞이지 않도록 먼저 비운다.
        let _ = io::stdout().flush();
        eprintln!("{text}");
    }
}
