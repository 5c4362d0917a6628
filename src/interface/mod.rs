//! Interface layer
//! 명령행 인자와 대화형 쉘을 애플리케이션 계층에 연결한다.

pub mod cli;
