//! 한글 단어 뒤 조사 교정
//!
//! 수식 밖의 텍스트에서 "한 음절 + 조사" 뒤에 한글이 더 이어지지 않는
//! 자리를 찾아, 앞 음절의 받침에 맞게 조사를 고칩니다.

use crate::core::target::Target;
use crate::core::unicode::{is_circled_jamo, is_complete_hangul};
use crate::particle::rules::{WORD_EXCEPTIONS, WORD_PARTICLES};
use crate::particle::ParticleEngine;

use super::change_log::{ChangeLog, Reason, Span};
use super::formula_pass::FORMULA_RE;

/// 지시어 (이는, 그는, 저는 ...)
const DEMONSTRATIVES: [char; 3] = ['이', '그', '저'];

/// 받침 있는 음절 + '는'은 거의 동사 관형형 (쌓는, 끓는, 돕는)
fn is_verb_form(noun: char, particle: &str, corrected: &str) -> bool {
    is_complete_hangul(noun) && particle == "는" && corrected == "은"
}

/// 한글 단어 조사 교정기
pub(crate) struct WordPass<'a> {
    engine: &'a ParticleEngine,
    window: usize,
}

impl<'a> WordPass<'a> {
    pub fn new(engine: &'a ParticleEngine, window: usize) -> Self {
        Self { engine, window }
    }

    /// 수식은 그대로 두고 나머지 구간만 교정
    pub fn run(&self, text: &str, log: &mut ChangeLog) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;
        for formula in FORMULA_RE.find_iter(text) {
            self.correct_segment(text, pos, formula.start(), &mut out, log);
            out.push_str(formula.as_str());
            pos = formula.end();
        }
        self.correct_segment(text, pos, text.len(), &mut out, log);
        out
    }

    fn correct_segment(
        &self,
        text: &str,
        from: usize,
        to: usize,
        out: &mut String,
        log: &mut ChangeLog,
    ) {
        let segment = &text[from..to];
        let mut copied = 0;
        let mut chars = segment.char_indices().peekable();

        while let Some((i, noun)) = chars.next() {
            if !(is_complete_hangul(noun) || is_circled_jamo(noun)) {
                continue;
            }
            let after = i + noun.len_utf8();
            let Some(particle) = particle_at(segment, after) else {
                continue;
            };
            let word_end = after + particle.len();

            // 조사 뒤까지 건너뛴다
            while chars.peek().is_some_and(|&(j, _)| j < word_end) {
                chars.next();
            }

            if WORD_EXCEPTIONS.contains(&segment[i..word_end]) || DEMONSTRATIVES.contains(&noun) {
                continue;
            }

            let corrected = self.engine.correct(&Target::literal(noun), particle);
            if corrected == particle || is_verb_form(noun, particle, &corrected) {
                continue;
            }

            let span = Span::new(text, from + i, from + word_end);
            log.push(span.entry(
                self.window,
                segment[i..word_end].to_string(),
                particle,
                &corrected,
                Reason::BatchimAgreement,
            ));
            out.push_str(&segment[copied..after]);
            out.push_str(&corrected);
            copied = word_end;
        }
        out.push_str(&segment[copied..]);
    }
}

/// `at` 위치에서 시작하고 뒤에 한글 음절이 이어지지 않는 조사
fn particle_at(segment: &str, at: usize) -> Option<&'static str> {
    let rest = &segment[at..];
    WORD_PARTICLES.iter().copied().find(|p| {
        rest.starts_with(p) && !rest[p.len()..].chars().next().is_some_and(is_complete_hangul)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> (String, ChangeLog) {
        let engine = ParticleEngine::new();
        let mut log = ChangeLog::new();
        let out = WordPass::new(&engine, 10).run(text, &mut log);
        (out, log)
    }

    #[test]
    fn test_particle_at() {
        assert_eq!(particle_at("값는 ", 3), Some("는"));
        assert_eq!(particle_at("점으로", 3), Some("으로"));
        assert_eq!(particle_at("사이다", 3), None);
    }

    #[test]
    fn test_corrects_word_particles() {
        let (out, log) = run("두 값를 더한다.");
        assert_eq!(out, "두 값을 더한다.");
        assert_eq!(log.len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.target, "값를");
        assert_eq!(entry.original, "를");
        assert_eq!(entry.corrected, "을");
        assert_eq!(entry.position, 2);

        assert_eq!(run("직선로 나눈다").0, "직선으로 나눈다");
        assert_eq!(run("길으로 간다").0, "길로 간다");
        assert_eq!(run("수을 센다").0, "수를 센다");
    }

    #[test]
    fn test_true_negative() {
        let (out, log) = run("넓이의 합은 넓이를 구한다. 점과 선");
        assert_eq!(out, "넓이의 합은 넓이를 구한다. 점과 선");
        assert!(log.is_empty());
    }

    #[test]
    fn test_exceptions_and_demonstratives() {
        for text in ["증가", "효과", "없는 값", "사이", "이는", "그는", "마을", "먹는 중"] {
            let (out, log) = run(text);
            assert_eq!(out, text);
            assert!(log.is_empty(), "{}", text);
        }
    }

    #[test]
    fn test_verb_forms_adverbs_and_nouns_are_kept() {
        for text in [
            "쌓는 방법",
            "끓는 점",
            "돕는 사람",
            "가까이 있다",
            "새로이 정의",
            "각 국가 수",
            "작가 이름",
        ] {
            let (out, log) = run(text);
            assert_eq!(out, text);
            assert!(log.is_empty(), "{}", text);
        }
        // 모음 뒤 '은'은 그대로 교정
        assert_eq!(run("사과나무은 크다").0, "사과나무는 크다");
    }

    #[test]
    fn test_circled_jamo() {
        assert_eq!(run("㉠는 참").0, "㉠은 참");
        assert_eq!(run("㉣으로 표시").0, "㉣로 표시");
    }

    #[test]
    fn test_formulas_are_skipped() {
        let (out, log) = run(r"$\text{값를}$ 값를");
        assert_eq!(out, r"$\text{값를}$ 값을");
        assert_eq!(log.len(), 1);
    }
}
