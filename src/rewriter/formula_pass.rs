//! 수식 뒤 조사 교정
//!
//! `$…$`/`$$…$$` 수식과 그 뒤에 붙은 한글 접미사를 한 구간으로 보고
//! 왼쪽부터 겹치지 않게 처리합니다. 한 번 소비한 구간은 다시 보지 않습니다.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::unicode::{has_any_hangul, is_complete_hangul};
use crate::formula::find_target;
use crate::particle::ParticleEngine;

use super::change_log::{human_readable, ChangeLog, Reason, Span};

/// 수식 구분자 (`$$`를 먼저 시도)
pub(crate) static FORMULA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$([^$]+)\$\$|\$([^$]+)\$").expect("valid formula pattern")
});

/// 수식 사이 간격 명령 (`\,` `\quad` ...)
const SPACING: &str = r"\\(?:qquad|quad|enspace|thinspace|medspace|thickspace)|\\[,;:! ]";

/// 수식 바로 뒤: 간격(공백, 쉼표, 간격 명령, 빈 수식) + 접미사
static SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?P<gap>(?:[\s,]|{sp}|\$(?:{sp}|\s)*\$)*)(?P<suffix>[가-힣\s.?!]+)",
        sp = SPACING
    );
    Regex::new(&pattern).expect("valid suffix pattern")
});

/// 수식 뒤 조사 교정기
pub(crate) struct FormulaPass<'a> {
    engine: &'a ParticleEngine,
    window: usize,
}

impl<'a> FormulaPass<'a> {
    pub fn new(engine: &'a ParticleEngine, window: usize) -> Self {
        Self { engine, window }
    }

    /// 텍스트 전체를 교정하고 기록을 `log`에 추가
    pub fn run(&self, text: &str, log: &mut ChangeLog) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;

        while let Some(caps) = FORMULA_RE.captures_at(text, pos) {
            let Some(whole) = caps.get(0) else { break };
            let formula = caps.get(1).or_else(|| caps.get(2)).map_or("", |g| g.as_str());

            out.push_str(&text[pos..whole.start()]);
            out.push_str(whole.as_str());
            pos = whole.end();

            let Some(tail) = SUFFIX_RE.captures(&text[pos..]) else {
                continue;
            };
            let gap = tail.name("gap").map_or("", |g| g.as_str());
            let suffix = tail.name("suffix").map_or("", |g| g.as_str());
            let span_end = pos + tail.get(0).map_or(0, |g| g.end());

            let span = SuffixSpan {
                text,
                start: whole.start(),
                suffix_offset: span_end - suffix.len(),
            };
            out.push_str(gap);
            let at_end = span_end == text.len();
            match self.fix_suffix(formula, gap, suffix, at_end, &span, log) {
                Some(fixed) => out.push_str(&fixed),
                None => out.push_str(suffix),
            }
            pos = span_end;
        }

        out.push_str(&text[pos..]);
        out
    }

    /// 교정된 접미사 (바꿀 것이 없으면 None)
    fn fix_suffix(
        &self,
        formula: &str,
        gap: &str,
        suffix: &str,
        at_end: bool,
        span: &SuffixSpan<'_>,
        log: &mut ChangeLog,
    ) -> Option<String> {
        // JSON 이스케이프로 두 번 쓰인 백슬래시
        let formula = formula.replace("\\\\", "\\");

        if !has_any_hangul(suffix) {
            if !is_stray_period(gap, suffix, at_end) {
                return None;
            }
            let fixed: String = suffix.chars().filter(|&c| c != '.').collect();
            log.push(span.until(suffix.len()).entry(
                self.window,
                human_readable(&formula),
                suffix,
                &fixed,
                Reason::StrayPunctuation,
            ));
            return Some(fixed);
        }

        let (start, end) = first_hangul_run(suffix)?;
        if self.engine.is_protected(&suffix[start..]) {
            return None;
        }

        let target = find_target(&formula);
        if target.is_empty() {
            return None;
        }

        let observed = &suffix[start..end];
        let corrected = self.engine.correct(&target, observed);
        if corrected == observed {
            return None;
        }

        log.push(span.until(end).entry(
            self.window,
            human_readable(&formula),
            observed,
            &corrected,
            Reason::BatchimAgreement,
        ));
        Some(format!("{}{}{}", &suffix[..start], corrected, &suffix[end..]))
    }
}

/// 수식 시작부터 접미사까지의 위치 (바이트 단위)
struct SuffixSpan<'a> {
    text: &'a str,
    start: usize,
    suffix_offset: usize,
}

impl<'a> SuffixSpan<'a> {
    /// 수식 시작부터 접미사의 `len`바이트까지
    fn until(&self, len: usize) -> Span<'a> {
        Span::new(self.text, self.start, self.suffix_offset + len)
    }
}

/// 수식에 바로 붙고 뒤에 공백이나 텍스트 끝이 오는 마침표
///
/// `$x$.$y$`처럼 다른 수식이 바로 이어지면 지우지 않는다 (`$$`가 되므로).
fn is_stray_period(gap: &str, suffix: &str, at_end: bool) -> bool {
    if !gap.is_empty() || !suffix.starts_with('.') {
        return false;
    }
    match suffix.trim_start_matches('.').chars().next() {
        Some(c) => c.is_whitespace(),
        None => at_end,
    }
}

/// 첫 한글 연속 구간의 바이트 범위
fn first_hangul_run(text: &str) -> Option<(usize, usize)> {
    let start = text.find(is_complete_hangul)?;
    let end = text[start..]
        .find(|c: char| !is_complete_hangul(c))
        .map_or(text.len(), |i| start + i);
    Some((start, end))
}
