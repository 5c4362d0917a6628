//! 입력 한 줄을 인자 벡터로 자르는 토크나이저.
//! 따옴표/이스케이프 없이 공백만으로 구분한다.

/// 종료 슬롯을 포함한 인자 벡터 최대 크기.
pub const MAX_ARGS: usize = 20;

/// 실제로 담을 수 있는 토큰 수(종료 슬롯 제외).
pub const MAX_TOKENS: usize = MAX_ARGS - 1;

/// 입력 한 줄에서 만들어진 명령 인자 목록.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector {
    args: Vec<String>,
}

impl ArgumentVector {
    /// 한 줄을 토큰으로 분리한다. 상한을 넘는 토큰은 버린다.
    pub fn tokenize(line: &str) -> Self {
        let args = line
            .split(is_space)
            .filter(|token| !token.is_empty())
            .take(MAX_TOKENS)
            .map(ToString::to_string)
            .collect();
        Self { args }
    }

    /// 하위 프롬프트 응답 앞에 명령 이름을 붙여 다시 토큰화한다.
    pub fn with_verb(verb: &str, answer: &str) -> Self {
        Self::tokenize(&format!("{verb} {answer}"))
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// 명령 이름(argv[0]). 비어 있으면 빈 문자열.
    pub fn command(&self) -> &str {
        self.get(0).unwrap_or("")
    }

    /// argv[1..]
    pub fn operands(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().map(Into::into).take(MAX_TOKENS).collect(),
        }
    }
}

// C isspace 집합과 동일하게 맞춘다.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("get a b\n", &["get", "a", "b"])]
    #[case("   put\tfile   host:dir  ", &["put", "file", "host:dir"])]
    #[case("status", &["status"])]
    #[case("mode\u{0b}octet\r\n", &["mode", "octet"])]
    #[case("connect \"quoted host\"", &["connect", "\"quoted", "host\""])]
    fn splits_on_whitespace(#[case] line: &str, #[case] expected: &[&str]) {
        let argv = ArgumentVector::tokenize(line);
        assert_eq!(argv.iter().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("\n")]
    #[case(" \t \r\n")]
    fn blank_lines_yield_no_tokens(#[case] line: &str) {
        let argv = ArgumentVector::tokenize(line);
        assert!(argv.is_empty());
        assert_eq!(argv.command(), "");
        assert!(argv.operands().is_empty());
    }

    #[test]
    fn caps_token_count() {
        let line = (0..40).map(|i| format!("t{i}")).collect::<Vec<_>>().join(" ");
        let argv = ArgumentVector::tokenize(&line);
        assert_eq!(argv.len(), MAX_TOKENS);
        assert_eq!(argv.get(MAX_TOKENS - 1), Some("t18"));
        assert_eq!(argv.get(MAX_TOKENS), None);
    }

    #[test]
    fn verb_prefix_becomes_argv0() {
        let argv = ArgumentVector::with_verb("Connect", "example.org 6969\n");
        assert_eq!(argv.command(), "Connect");
        assert_eq!(argv.operands(), ["example.org", "6969"]);

        let empty = ArgumentVector::with_verb("send", "");
        assert_eq!(empty.len(), 1);
    }
}
