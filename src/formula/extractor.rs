//! 분류 토큰 추출기
//!
//! 축약된 수식을 최상위 연산자에서 나누어 마지막 항만 남기고,
//! 그 항의 끝소리를 대표하는 [`Target`]을 만듭니다.
//!
//! 중괄호 그룹은 먼저 자리표시자로 가려서 그룹 안의 연산자가
//! 분리 지점으로 쓰이지 않도록 합니다.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::reducer::reduce;
use super::scan::{balanced_group, command_at};
use crate::core::target::{Category, Target};
use crate::core::unicode::is_complete_hangul;

/// 자리표시자 구분 문자 (사용자 영역 문자)
const MASK_OPEN: char = '\u{E000}';
const MASK_CLOSE: char = '\u{E001}';

/// 항을 나누는 관계/연산 명령어
const SPLIT_COMMANDS: [&str; 21] = [
    "approx", "ne", "neq", "ge", "geq", "le", "leq", "times", "div", "cdot", "cap", "cup",
    "setminus", "subset", "subseteq", "supset", "supseteq", "in", "ni", "notin", "pm",
];

/// 항을 나누는 한 글자 연산자 (`+`, `-`는 별도 처리)
const SPLIT_CHARS: [char; 10] = ['=', '<', '>', '≤', '≥', '≠', '≈', '×', '÷', '·'];

/// 길이 단위 (m^2 → 제곱미터)
const LENGTH_UNITS: [&str; 4] = ["m", "cm", "mm", "km"];

/// 기호 명령어의 한글 읽기
static COMMAND_READINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("alpha", "알파"),
        ("beta", "베타"),
        ("gamma", "감마"),
        ("delta", "델타"),
        ("Delta", "델타"),
        ("epsilon", "엡실론"),
        ("varepsilon", "엡실론"),
        ("theta", "세타"),
        ("lambda", "람다"),
        ("mu", "뮤"),
        ("pi", "파이"),
        ("rho", "로"),
        ("sigma", "시그마"),
        ("Sigma", "시그마"),
        ("tau", "타우"),
        ("phi", "파이"),
        ("varphi", "파이"),
        ("omega", "오메가"),
        ("Omega", "오메가"),
        ("infty", "무한대"),
        ("emptyset", "공집합"),
        ("varnothing", "공집합"),
        ("ell", "엘"),
        ("prime", "프라임"),
    ])
});

/// 끝에 오는 명령어 (`\pi`, `\sqrt{\pi`)
static TRAILING_COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([a-zA-Z]+)$").expect("valid trailing command pattern"));

/// `\mathrm{kg}`, `\text{cm}` 형태의 단위 표기
static UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:mathrm|text)\{([a-zA-Z]+)\}").expect("valid unit pattern"));

/// 끝소리 판단에 쓰지 않는 명령어/괄호/구두점
static NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+|[{}()\[\].,]").expect("valid noise pattern"));

/// 수식 원문에서 바로 분류 토큰 계산 (축약 + 추출)
pub fn find_target(formula: &str) -> Target {
    extract(&reduce(formula))
}

/// 축약된 수식에서 분류 토큰 추출
pub fn extract(reduced: &str) -> Target {
    let compact = strip_whitespace(reduced);
    let (masked, groups) = mask_groups(&compact);
    let term = unmask(last_term(&masked), &groups);
    classify_term(term.trim().trim_end_matches('\\').trim_end())
}

/// 공백 제거. 명령어 이름 뒤에 글자가 이어지면 (`\leq y`) 공백 하나를 남긴다
fn strip_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        let letter_follows = chars.peek().is_some_and(|c| c.is_ascii_alphabetic());
        if letter_follows && TRAILING_COMMAND_RE.is_match(&out) {
            out.push(' ');
        }
    }
    out
}

/// 최상위 중괄호 그룹을 자리표시자로 치환
fn mask_groups(text: &str) -> (String, Vec<&str>) {
    let mut masked = String::with_capacity(text.len());
    let mut groups = Vec::new();
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('{') {
        let start = pos + offset;
        let Some((content, end)) = balanced_group(text, start) else {
            break;
        };
        masked.push_str(&text[pos..start]);
        masked.push(MASK_OPEN);
        masked.push_str(&groups.len().to_string());
        masked.push(MASK_CLOSE);
        groups.push(content);
        pos = end;
    }
    masked.push_str(&text[pos..]);
    (masked, groups)
}

/// 자리표시자를 원래 그룹으로 복원
fn unmask(text: &str, groups: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(MASK_OPEN) {
        out.push_str(&rest[..open]);
        let after = &rest[open + MASK_OPEN.len_utf8()..];
        let Some(close) = after.find(MASK_CLOSE) else {
            rest = after;
            break;
        };
        if let Some(group) = after[..close].parse::<usize>().ok().and_then(|i| groups.get(i)) {
            out.push('{');
            out.push_str(group);
            out.push('}');
        }
        rest = &after[close + MASK_CLOSE.len_utf8()..];
    }
    out.push_str(rest);
    out
}

/// 최상위 연산자로 나눈 마지막 항
fn last_term(masked: &str) -> &str {
    let mut term_start = 0;
    let mut prev: Option<char> = None;
    let mut pos = 0;
    while pos < masked.len() {
        let Some(c) = masked[pos..].chars().next() else {
            break;
        };
        let mut next = pos + c.len_utf8();
        let splits = match c {
            '+' | '-' => prev != Some('^'),
            '\\' => match command_at(masked, pos) {
                Some((name, end)) if !name.is_empty() => {
                    next = end;
                    SPLIT_COMMANDS.contains(&name)
                }
                // `\,` `\{` 같은 기호 명령어는 다음 글자까지 한 덩어리
                _ => {
                    if let Some(escaped) = masked[next..].chars().next() {
                        next += escaped.len_utf8();
                    }
                    false
                }
            },
            c => SPLIT_CHARS.contains(&c),
        };
        if splits {
            term_start = next;
        }
        prev = masked[..next].chars().last();
        pos = next;
    }
    &masked[term_start..]
}

/// 마지막 항의 끝소리 분류
fn classify_term(term: &str) -> Target {
    if is_degree(term) {
        return Target::Category(Category::Degree);
    }

    if let Some(caret) = term.find('^') {
        if superscript(term).map(|s| s == "C").unwrap_or(false) {
            return Target::Category(Category::Complement);
        }
        let base = &term[..caret];
        let is_length = UNIT_RE
            .captures(base)
            .map(|caps| LENGTH_UNITS.contains(&&caps[1]))
            .unwrap_or(false);
        if is_length {
            return Target::Category(Category::Meter);
        }
        return Target::Category(Category::Power);
    }

    if let Some(target) = trailing_command(term) {
        return target;
    }

    // 함수 표기 f(x) 등은 괄호 안 마지막 글자로 읽는다
    if term.ends_with(')') {
        let inner = term.trim_end_matches(|c: char| c == ')' || c.is_whitespace());
        if let Some(c) = inner.chars().last() {
            if is_complete_hangul(c) || c.is_ascii_alphanumeric() {
                return Target::literal(c);
            }
        }
    }

    if let Some(caps) = UNIT_RE.captures(term) {
        return Target::Unit(caps[1].to_string());
    }

    let text_only = NOISE_RE.replace_all(term, "").replace('\\', "");
    match text_only.chars().filter(|c| !c.is_whitespace()).last() {
        Some(c) => Target::literal(c),
        None => Target::Empty,
    }
}

/// 닫는 괄호를 걷어낸 끝이 명령어이면 그 읽기. 모르는 명령어는 Empty
fn trailing_command(term: &str) -> Option<Target> {
    let stripped =
        term.trim_end_matches(|c: char| matches!(c, '}' | ')' | ']') || c.is_whitespace());
    let caps = TRAILING_COMMAND_RE.captures(stripped)?;
    Some(match COMMAND_READINGS.get(&caps[1]) {
        Some(reading) => Target::Literal(reading.to_string()),
        None => Target::Empty,
    })
}

/// 각도 표기 여부 (`\degree`, `^\circ`, `^{\circ}`, `°`)
fn is_degree(term: &str) -> bool {
    term.contains("\\degree")
        || term.contains("^\\circ")
        || term.contains("^{\\circ}")
        || term.contains('°')
}

/// 마지막 `^` 뒤의 윗첨자 (중괄호 그룹이면 안쪽 내용)
fn superscript(term: &str) -> Option<&str> {
    let caret = term.rfind('^')?;
    let start = caret + 1;
    if let Some((content, _)) = balanced_group(term, start) {
        return Some(content);
    }
    if let Some((name, end)) = command_at(term, start) {
        return Some(if name.is_empty() { &term[start..] } else { &term[start..end] });
    }
    let c = term[start..].chars().next()?;
    Some(&term[start..start + c.len_utf8()])
}
