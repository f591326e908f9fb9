//! 조사 교정 엔진
//!
//! 분류 토큰과 관찰된 접미사를 받아 올바른 접미사를 돌려줍니다.
//! 순수 함수이며 실패하지 않습니다. 맞는 규칙이 없으면 입력을 그대로 반환합니다.

use crate::core::batchim::{classify, is_rieul_final};
use crate::core::target::Target;

use super::rules::ParticleRules;

/// 조건 어미 '가면'을 명사 '가면'(mask)으로 보는 뒤따르는 조사
const MASK_NOUN_FOLLOWERS: [char; 6] = ['을', '이', '은', '과', '의', '로'];

/// 조사 교정 엔진
#[derive(Debug, Clone, Default)]
pub struct ParticleEngine {
    rules: ParticleRules,
}

impl ParticleEngine {
    /// 기본 규칙으로 엔진 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 규칙을 지정하여 엔진 생성
    pub fn with_rules(rules: ParticleRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ParticleRules {
        &self.rules
    }

    /// 보호 목록 검사
    pub fn is_protected(&self, text: &str) -> bool {
        self.rules.is_protected(text)
    }

    /// 분류 토큰에 맞게 접미사 교정
    ///
    /// # Examples
    /// ```
    /// use mathjosa::core::target::Target;
    /// use mathjosa::particle::ParticleEngine;
    ///
    /// let engine = ParticleEngine::new();
    /// assert_eq!(engine.correct(&Target::literal('x'), "은"), "는");
    /// assert_eq!(engine.correct(&Target::literal('1'), "를"), "을");
    /// assert_eq!(engine.correct(&Target::literal('x'), "이므로"), "이므로");
    /// ```
    pub fn correct(&self, target: &Target, observed: &str) -> String {
        if target.is_empty() || self.is_protected(observed) {
            return observed.to_string();
        }

        // '이면'은 받침과 무관하게 표기가 고정된 어미
        if target.is_single_ascii_alnum() {
            if let Some(fixed) = fix_conditional_ending(observed) {
                return fixed;
            }
        }

        let has_batchim = classify(target);
        let rieul_final = is_rieul_final(target);

        for pair in self.rules.pairs() {
            if let Some(matched) = pair.matched_prefix(observed) {
                let stem = pair.select(has_batchim, rieul_final);
                return format!("{}{}", stem, &observed[matched.len()..]);
            }
        }
        observed.to_string()
    }
}

/// '가면' → '이면' (뒤에 조사가 붙은 명사 '가면'은 제외)
fn fix_conditional_ending(observed: &str) -> Option<String> {
    let rest = observed.strip_prefix("가면")?;
    match rest.chars().next() {
        Some(c) if MASK_NOUN_FOLLOWERS.contains(&c) => None,
        _ => Some(format!("이면{}", rest)),
    }
}
