//! LaTeX 소스 스캔 도우미
//!
//! 중괄호 짝 찾기와 명령어(`\name`) 읽기. 재귀 없이 깊이 카운터로만 동작한다.

/// `start` 위치의 `{`와 짝이 맞는 그룹을 찾는다.
///
/// 반환: (괄호 안 내용, 닫는 괄호 다음 바이트 위치)
/// `start`가 `{`가 아니거나 닫히지 않으면 None
pub fn balanced_group(text: &str, start: usize) -> Option<(&str, usize)> {
    let rest = text.get(start..)?;
    if !rest.starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[start + 1..start + i], start + i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// `start` 위치의 `\`에서 시작하는 명령어 이름을 읽는다.
///
/// 반환: (이름, 명령어 다음 바이트 위치). 이름이 영문자가 아니면 빈 이름.
pub fn command_at(text: &str, start: usize) -> Option<(&str, usize)> {
    let rest = text.get(start..)?;
    if !rest.starts_with('\\') {
        return None;
    }
    let name_len = rest[1..]
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(rest.len() - 1);
    Some((&rest[1..1 + name_len], start + 1 + name_len))
}

/// 공백을 건너뛴 다음 위치
pub fn skip_whitespace(text: &str, start: usize) -> usize {
    text.get(start..)
        .and_then(|rest| rest.char_indices().find(|(_, c)| !c.is_whitespace()))
        .map(|(i, _)| start + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_group() {
        assert_eq!(balanced_group("{a}", 0), Some(("a", 3)));
        assert_eq!(balanced_group("x{a{b}c}y", 1), Some(("a{b}c", 8)));
        assert_eq!(balanced_group("{}", 0), Some(("", 2)));
    }

    #[test]
    fn test_balanced_group_malformed() {
        assert_eq!(balanced_group("{a{b}", 0), None);
        assert_eq!(balanced_group("a}", 0), None);
        assert_eq!(balanced_group("{a}", 7), None);
    }

    #[test]
    fn test_balanced_group_multibyte() {
        assert_eq!(balanced_group("{값}이", 0), Some(("값", 5)));
    }

    #[test]
    fn test_command_at() {
        assert_eq!(command_at("\\frac{1}{2}", 0), Some(("frac", 5)));
        assert_eq!(command_at("a\\le b", 1), Some(("le", 4)));
        assert_eq!(command_at("\\,", 0), Some(("", 1)));
        assert_eq!(command_at("\\pi", 0), Some(("pi", 3)));
        assert_eq!(command_at("x", 0), None);
    }

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(skip_whitespace("  {", 0), 2);
        assert_eq!(skip_whitespace("a", 0), 0);
        assert_eq!(skip_whitespace("  ", 0), 2);
    }
}
