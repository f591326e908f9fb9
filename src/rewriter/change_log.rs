//! 교정 기록
//!
//! 교정 한 건마다 문맥, 대상, 원문, 수정, 사유를 남깁니다.
//! 한 번의 실행이 자기 기록을 소유하며 추가만 가능합니다.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// 사람이 읽기 위해 지우는 서식 명령
static DISPLAY_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:left|right|mathrm|text|bf|it)\b").expect("valid display marker pattern")
});

/// 교정 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    /// 받침과 조사가 호응하지 않음
    BatchimAgreement,
    /// 수식 바로 뒤의 불필요한 마침표
    StrayPunctuation,
}

impl Reason {
    pub fn code(&self) -> &'static str {
        match self {
            Reason::BatchimAgreement => "batchim-agreement",
            Reason::StrayPunctuation => "stray-punctuation",
        }
    }

    /// 리포트 표에 쓰는 설명
    pub fn description(&self) -> &'static str {
        match self {
            Reason::BatchimAgreement => "받침 호응 오류",
            Reason::StrayPunctuation => "불필요한 마침표 제거",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 교정 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    /// 교정 위치 앞뒤 문맥 ("...문맥...")
    pub context: String,
    /// 조사가 붙은 대상 (서식을 걷어낸 수식 또는 단어)
    pub target: String,
    pub original: String,
    pub corrected: String,
    pub reason: Reason,
    /// 교정 구간 시작의 문자 단위 위치
    pub position: usize,
}

/// 실행 한 번의 교정 기록
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeLog {
    entries: Vec<ChangeLogEntry>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: ChangeLogEntry) {
        log::debug!(
            "{}: {} {} -> {} (위치 {})",
            entry.reason.description(),
            entry.target,
            entry.original,
            entry.corrected,
            entry.position
        );
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ChangeLogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChangeLogEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<ChangeLogEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ChangeLog {
    type Item = &'a ChangeLogEntry;
    type IntoIter = std::slice::Iter<'a, ChangeLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// 교정 구간의 위치 정보 (바이트 단위)
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Span<'a> {
    pub fn new(text: &'a str, start: usize, end: usize) -> Self {
        Self { text, start, end }
    }

    /// 기록 항목 생성
    pub fn entry(
        &self,
        window: usize,
        target: String,
        original: &str,
        corrected: &str,
        reason: Reason,
    ) -> ChangeLogEntry {
        ChangeLogEntry {
            context: context_window(self.text, self.start, self.end, window),
            target,
            original: original.to_string(),
            corrected: corrected.to_string(),
            reason,
            position: self.text[..self.start].chars().count(),
        }
    }
}

/// 구간 앞뒤 `window`글자를 잘라 한 줄 문맥으로 만든다
pub fn context_window(text: &str, start: usize, end: usize, window: usize) -> String {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(i, _)| end + i);
    format!("...{}...", text[from..to].replace('\n', " "))
}

/// 수식을 사람이 읽기 쉬운 형태로 (서식 명령, 중괄호, 백슬래시 제거)
pub fn human_readable(formula: &str) -> String {
    DISPLAY_MARKER_RE
        .replace_all(formula, "")
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '\\'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_window() {
        let text = "0123456789$x$는abcdefghij";
        let start = text.find('$').unwrap();
        let end = text.find('a').unwrap();
        assert_eq!(context_window(text, start, end, 3), "...789$x$는abc...");
        assert_eq!(context_window(text, start, end, 100), format!("...{}...", text));
        assert_eq!(context_window(text, start, end, 0), "...$x$는...");
    }

    #[test]
    fn test_context_window_newlines_and_multibyte() {
        let text = "첫째 줄\n$a$은\n셋째";
        let start = text.find('$').unwrap();
        let end = start + "$a$은".len();
        assert_eq!(context_window(text, start, end, 2), "...줄 $a$은 셋...");
    }

    #[test]
    fn test_human_readable() {
        assert_eq!(human_readable(r"\left( x \right)"), "( x )");
        assert_eq!(human_readable(r"3\mathrm{kg}"), "3kg");
        assert_eq!(human_readable(r"\frac{1}{2}"), "frac12");
        assert_eq!(human_readable(r"\leftarrow"), "leftarrow");
    }

    #[test]
    fn test_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&Reason::BatchimAgreement).unwrap(),
            "\"batchim-agreement\""
        );
        assert_eq!(Reason::StrayPunctuation.to_string(), "stray-punctuation");
    }

    #[test]
    fn test_span_entry_position_is_in_chars() {
        let text = "가나 $x$은";
        let start = text.find('$').unwrap();
        let span = Span::new(text, start, text.len());
        let entry = span.entry(10, "x".into(), "은", "는", Reason::BatchimAgreement);
        assert_eq!(entry.position, 3);
        assert_eq!(entry.context, "...가나 $x$은...");

        let mut log = ChangeLog::new();
        log.push(entry);
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json[0]["reason"], "batchim-agreement");
        assert_eq!(json[0]["original"], "은");
    }
}
