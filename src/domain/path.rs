//! 원격/로컬 경로 문자열 규칙(`host:path` 분리, 마지막 경로 요소).

/// `host:path` 인자를 첫 번째 콜론에서 나눈다.
pub fn split_host_path(arg: &str) -> Option<(&str, &str)> {
    arg.split_once(':')
}

pub fn has_host_prefix(arg: &str) -> bool {
    arg.contains(':')
}

/// 경로의 마지막 요소를 구한다.
///
/// 끝의 `/`는 반복해서 걷어낸 뒤 마지막 `/` 뒤를 돌려준다.
/// `/`만으로 된 경로는 그대로 돌려준다.
pub fn tail(path: &str) -> &str {
    let mut rest = path;
    while !rest.is_empty() {
        let Some(idx) = rest.rfind('/') else {
            break;
        };
        if idx + 1 < rest.len() {
            return &rest[idx + 1..];
        }
        if idx == 0 {
            // 남은 것이 "/" 하나뿐이면 원래 입력을 돌려준다.
            return path;
        }
        rest = &rest[..idx];
    }
    rest
}

/// 원격 디렉터리 아래 파일 경로를 만든다.
pub fn remote_child(dir: &str, local: &str) -> String {
    format!("{dir}/{}", tail(local))
}

/// 단일 전송 대상이 마지막 요소 없이 끝나면 로컬 파일 이름을 붙인다.
pub fn single_remote_target(target: &str, local: &str) -> String {
    if target.is_empty() || target.ends_with('/') {
        format!("{target}{}", tail(local))
    } else {
        target.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/a/b/", "b")]
    #[case("/a/b", "b")]
    #[case("noslash", "noslash")]
    #[case("/", "/")]
    #[case("///", "///")]
    #[case("dir//file", "file")]
    #[case("a/b//", "b")]
    #[case("", "")]
    fn tail_takes_final_component(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(tail(path), expected);
    }

    #[rstest]
    #[case("host:path", Some(("host", "path")))]
    #[case("host:/a:b", Some(("host", "/a:b")))]
    #[case(":path", Some(("", "path")))]
    #[case("plain", None)]
    fn splits_at_first_colon(#[case] arg: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_host_path(arg), expected);
    }

    #[rstest]
    #[case("target", "src/file.txt", "target")]
    #[case("/upload/", "src/file.txt", "/upload/file.txt")]
    #[case("", "file.txt", "file.txt")]
    fn single_target_appends_basename_only_when_needed(
        #[case] target: &str,
        #[case] local: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(single_remote_target(target, local), expected);
    }

    #[test]
    fn child_paths_use_local_basename() {
        assert_eq!(remote_child("dir", "/tmp/fileA"), "dir/fileA");
        assert_eq!(remote_child("", "fileB"), "/fileB");
    }
}
