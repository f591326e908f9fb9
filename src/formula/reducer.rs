//! 수식 축약기
//!
//! 발음에 영향을 주지 않는 표기를 걷어내어 "마지막에 읽히는 요소"가
//! 끝에 오도록 수식 소스를 줄입니다. 규칙은 더 이상 바뀌지 않을 때까지
//! (고정점) 반복 적용되며, 각 규칙은 텍스트를 반드시 줄이므로 항상 끝납니다.
//!
//! - `\left`, `\right`, `\big` 류 크기 표시 제거
//! - `\frac{A}{B}` → `A` (B분의 A로 읽으므로 끝소리는 분자)
//! - `\sqrt[n]{x}` → `\sqrt{x}` (거듭제곱근 지수는 보통 읽지 않음)
//! - 전체를 감싼 `{...}` 제거

use super::scan::{balanced_group, command_at, skip_whitespace};

/// 분수 명령어
const FRACTION_COMMANDS: [&str; 3] = ["frac", "dfrac", "tfrac"];

/// 발음이 없는 크기/짝 표시 명령어
const SIZING_COMMANDS: [&str; 14] = [
    "left", "right", "big", "Big", "bigg", "Bigg", "bigl", "bigr", "Bigl", "Bigr", "biggl",
    "biggr", "Biggl", "Biggr",
];

/// 수식 소스를 고정점까지 축약
pub fn reduce(formula: &str) -> String {
    let mut current = strip_sizing_markers(formula);
    while let Some(next) = reduce_fraction(&current)
        .or_else(|| strip_root_index(&current))
        .or_else(|| strip_outer_braces(&current))
    {
        current = next;
    }
    current
}

/// `\left`, `\right` 등 제거 (`\rightarrow` 같은 다른 명령어는 유지)
fn strip_sizing_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('\\') {
        let start = pos + offset;
        out.push_str(&text[pos..start]);
        match command_at(text, start) {
            Some((name, end)) if SIZING_COMMANDS.contains(&name) => pos = end,
            Some((name, end)) if !name.is_empty() => {
                out.push_str(&text[start..end]);
                pos = end;
            }
            _ => {
                out.push('\\');
                pos = start + 1;
            }
        }
    }
    out.push_str(&text[pos..]);
    out
}

/// 인자를 갖춘 첫 번째 분수를 분자로 치환. 인자가 없거나 짝이 맞지 않는 분수는 건너뛴다
fn reduce_fraction(text: &str) -> Option<String> {
    let mut pos = 0;
    while let Some((start, name_end)) = find_command(&text[pos..], &FRACTION_COMMANDS) {
        let (start, name_end) = (pos + start, pos + name_end);
        if let Some((numerator, den_end)) = fraction_args(text, name_end) {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..start]);
            out.push_str(numerator);
            out.push_str(&text[den_end..]);
            return Some(out);
        }
        pos = name_end;
    }
    None
}

/// 분수 명령어 뒤의 (분자, 분모 끝 위치)
fn fraction_args(text: &str, name_end: usize) -> Option<(&str, usize)> {
    let num_start = skip_whitespace(text, name_end);
    let (numerator, num_end) = balanced_group(text, num_start)?;
    let den_start = skip_whitespace(text, num_end);
    let (_, den_end) = balanced_group(text, den_start)?;
    Some((numerator, den_end))
}

/// 지수가 붙은 첫 번째 근호에서 `[...]` 제거
fn strip_root_index(text: &str) -> Option<String> {
    let mut pos = 0;
    while let Some((_, end)) = find_command(&text[pos..], &["sqrt"]) {
        let after = pos + end;
        if text[after..].starts_with('[') {
            let close = after + text[after..].find(']')?;
            return Some(format!("{}{}", &text[..after], &text[close + 1..]));
        }
        pos = after;
    }
    None
}

/// 전체가 하나의 중괄호 그룹이면 바깥 괄호 제거
fn strip_outer_braces(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let (content, end) = balanced_group(trimmed, 0)?;
    if end == trimmed.len() {
        Some(content.to_string())
    } else {
        None
    }
}

/// 이름이 정확히 일치하는 첫 명령어 위치 (시작, 이름 끝)
fn find_command(text: &str, names: &[&str]) -> Option<(usize, usize)> {
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('\\') {
        let start = pos + offset;
        let (name, end) = command_at(text, start)?;
        if names.contains(&name) {
            return Some((start, end));
        }
        pos = end.max(start + 1);
    }
    None
}
