//! Domain layer
//! 셸 규칙(토큰화/명령 해석/경로/세션/전송 계획)을 외부 의존성 없이 표현한다.

pub mod argv;
pub mod command;
pub mod path;
pub mod session;
pub mod transfer;
