//! 조사 규칙 데이터
//!
//! 순서가 곧 우선순위입니다. 긴 어미(연결 어미, 조건 어미)를 짧은 조사보다
//! 먼저 검사해야 '이'가 '이므로'의 앞부분으로 잘못 매칭되지 않습니다.

use std::collections::HashSet;
use std::sync::LazyLock;

/// 받침 유무에 따라 갈리는 조사 쌍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticlePair {
    /// 받침 있는 말 뒤의 형태
    pub consonant: &'static str,
    /// 받침 없는 말 뒤의 형태
    pub vowel: &'static str,
}

impl ParticlePair {
    pub const fn new(consonant: &'static str, vowel: &'static str) -> Self {
        Self { consonant, vowel }
    }

    /// 도구격 조사 '으로/로' (ㄹ 받침 뒤에서는 '로')
    pub fn is_instrumental(&self) -> bool {
        self.consonant == "으로"
    }

    /// 끝소리에 맞는 형태 선택
    pub fn select(&self, has_batchim: bool, rieul_final: bool) -> &'static str {
        if self.is_instrumental() {
            if has_batchim && !rieul_final {
                self.consonant
            } else {
                self.vowel
            }
        } else if has_batchim {
            self.consonant
        } else {
            self.vowel
        }
    }

    /// 관찰된 접미사가 이 쌍의 어느 형태로 시작하면 그 형태를 반환
    pub fn matched_prefix(&self, observed: &str) -> Option<&'static str> {
        if observed.starts_with(self.consonant) {
            Some(self.consonant)
        } else if observed.starts_with(self.vowel) {
            Some(self.vowel)
        } else {
            None
        }
    }
}

/// 조사 쌍 (우선순위 순)
pub const PARTICLE_PAIRS: &[ParticlePair] = &[
    // 형태가 고정된 서술격/연결 어미 - 짧은 조사로 오인되지 않도록 먼저 소비
    ParticlePair::new("이다", "이다"),
    ParticlePair::new("입니다", "입니다"),
    ParticlePair::new("이므로", "이므로"),
    ParticlePair::new("이며", "이며"),
    ParticlePair::new("이고", "이고"),
    ParticlePair::new("이나", "이나"),
    ParticlePair::new("이면서", "이면서"),
    ParticlePair::new("이지만", "이지만"),
    ParticlePair::new("이어서", "이어서"),
    ParticlePair::new("이때", "이때"),
    ParticlePair::new("이어야 하므로", "이어야 하므로"),
    ParticlePair::new("가지", "가지"),
    // 받침에 따라 갈리는 어미
    ParticlePair::new("이라서", "라서"),
    ParticlePair::new("이라고", "라고"),
    ParticlePair::new("이라", "라"),
    ParticlePair::new("이면", "면"),
    // 단음절 조사
    ParticlePair::new("은", "는"),
    ParticlePair::new("이", "가"),
    ParticlePair::new("을", "를"),
    ParticlePair::new("과", "와"),
    ParticlePair::new("으로", "로"),
];

/// 조사처럼 보이지만 조사가 아닌 말 (수식/단어 바로 뒤에서 접두어로 검사)
pub const PROTECTED_PHRASES: &[&str] = &[
    // 서술격/연결 어미
    "이다", "입니다", "이므로", "이며", "이고", "이나", "이면서", "이지만", "이어서",
    "이때", "이어야", "가지", "이면",
    // 수량/범위 명사
    "이상", "이하", "이내", "이외", "미만", "초과",
    // 용언 활용형 (잇다, 이루다, 있다, 없다 ...)
    "이은", "이을", "이어", "이으므로", "이어진", "이루어진", "이루는", "이동", "이용",
    "없는", "있는", "없고", "있고", "없이", "있어", "없어",
    // 지시어
    "이 점", "이 선", "이 값", "이 식", "이 경우", "이 때", "이 확률", "이 시행", "이 도형",
    "이 문제", "그 점", "그 선", "그 값", "그 식", "그 경우", "그 때", "저 점",
];

/// 한글 단어 뒤에서 검사하는 조사 ('으로'를 '로'보다 먼저)
pub const WORD_PARTICLES: &[&str] = &["으로", "은", "는", "이", "가", "을", "를", "과", "와", "로"];

/// 단어+조사처럼 보이지만 한 단어인 말 (두 글자 전체 일치로 검사)
pub static WORD_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // ~가/~과로 끝나는 명사
    for w in ["증가", "추가", "참가", "평가", "원가", "정가", "단가", "시가", "물가", "전가",
              "상가", "국가", "작가", "농가", "음가", "명가", "창가", "결과", "효과", "초과",
              "교과", "부과", "사과", "투과", "치과", "외과", "내과"] {
        set.insert(w);
    }
    // ~이로 끝나는 명사
    for w in ["사이", "차이", "나이", "아이", "오이", "놀이"] {
        set.insert(w);
    }
    // 모음 + '-이' 부사 (가까이, 새로이, 자유로이, 가벼이, 너그러이, 헛되이)
    for w in ["까이", "로이", "벼이", "러이", "되이"] {
        set.insert(w);
    }
    // ~로로 끝나는 명사
    for w in ["경로", "진로", "선로", "항로", "통로", "공로", "행로", "원로"] {
        set.insert(w);
    }
    // 받침 + 는 (동사 관형형). 목록 밖의 형태도 단어 교정에서 '은'으로 바꾸지 않는다
    for w in ["없는", "있는", "갖는", "맞는", "맡는", "웃는", "씻는", "깎는", "볶는", "않는",
              "찾는", "놓는", "넣는", "닿는", "잇는", "읽는", "얻는", "받는", "믿는", "묻는",
              "먹는", "잡는", "접는", "넘는", "남는", "담는", "감는", "입는", "굽는", "뽑는",
              "꼽는", "긋는", "짓는", "벗는", "붓는", "꽂는", "잊는", "묶는", "섞는", "닦는",
              "붙는", "걷는", "듣는", "닫는", "싣는", "찍는", "막는", "적는", "익는", "앉는",
              "끊는", "곱는"] {
        set.insert(w);
    }
    // 받침 유무 + 은/을 (형용사/동사 관형형)
    for w in ["이은", "이을", "이어", "그은", "나은", "지은", "부은", "모은", "깊은", "높은",
              "작은", "좁은"] {
        set.insert(w);
    }
    // 모음으로 끝나는 말 + '을'처럼 보이는 명사
    for w in ["마을", "가을", "노을", "고을"] {
        set.insert(w);
    }
    // 의문형 어미
    for w in ["인가", "는가", "은가", "던가"] {
        set.insert(w);
    }
    set
});

/// 조사 규칙 묶음
///
/// 조사 쌍은 고정이고, 보호 목록은 설정으로 늘릴 수 있다.
#[derive(Debug, Clone)]
pub struct ParticleRules {
    pairs: &'static [ParticlePair],
    protected: Vec<String>,
}

impl Default for ParticleRules {
    fn default() -> Self {
        Self {
            pairs: PARTICLE_PAIRS,
            protected: PROTECTED_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ParticleRules {
    /// 기본 규칙 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 보호 목록 추가 (이미 있는 항목은 무시)
    pub fn with_protected<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for phrase in phrases {
            let phrase = phrase.into();
            if !phrase.is_empty() && !self.protected.contains(&phrase) {
                self.protected.push(phrase);
            }
        }
        self
    }

    pub fn pairs(&self) -> &[ParticlePair] {
        self.pairs
    }

    pub fn protected(&self) -> &[String] {
        &self.protected
    }

    /// 텍스트가 보호 목록의 어느 항목으로 시작하는지
    pub fn is_protected(&self, text: &str) -> bool {
        self.protected.iter().any(|p| text.starts_with(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_standard_pair() {
        let pair = ParticlePair::new("은", "는");
        assert_eq!(pair.select(true, false), "은");
        assert_eq!(pair.select(true, true), "은");
        assert_eq!(pair.select(false, false), "는");
    }

    #[test]
    fn test_select_instrumental_pair() {
        let pair = ParticlePair::new("으로", "로");
        assert!(pair.is_instrumental());
        assert_eq!(pair.select(true, false), "으로");
        // ㄹ 받침 뒤에서는 '로'
        assert_eq!(pair.select(true, true), "로");
        assert_eq!(pair.select(false, false), "로");
    }

    #[test]
    fn test_matched_prefix() {
        let pair = ParticlePair::new("이라", "라");
        assert_eq!(pair.matched_prefix("이라고"), Some("이라"));
        assert_eq!(pair.matched_prefix("라서"), Some("라"));
        assert_eq!(pair.matched_prefix("은"), None);
    }

    #[test]
    fn test_long_endings_precede_short_particles() {
        let position = |consonant: &str| {
            PARTICLE_PAIRS
                .iter()
                .position(|p| p.consonant == consonant)
                .unwrap()
        };
        assert!(position("이므로") < position("이"));
        assert!(position("이라서") < position("이라"));
        assert!(position("이면") < position("이"));
        assert!(position("이라") < position("이"));
    }

    #[test]
    fn test_protected_rules() {
        let rules = ParticleRules::new();
        assert!(rules.is_protected("이므로 성립한다"));
        assert!(rules.is_protected("이 점에서"));
        assert!(rules.is_protected("없는 경우"));
        assert!(!rules.is_protected("은 짝수"));
        assert!(!rules.is_protected("가"));
    }

    #[test]
    fn test_with_protected_extends_list() {
        let base = ParticleRules::new().protected().len();
        let rules = ParticleRules::new().with_protected(["이루고", "이다", ""]);
        assert_eq!(rules.protected().len(), base + 1);
        assert!(rules.is_protected("이루고"));
    }

    #[test]
    fn test_word_exceptions() {
        assert!(WORD_EXCEPTIONS.contains("없는"));
        assert!(WORD_EXCEPTIONS.contains("효과"));
        assert!(WORD_EXCEPTIONS.contains("마을"));
        assert!(WORD_EXCEPTIONS.contains("국가"));
        assert!(WORD_EXCEPTIONS.contains("까이"));
        assert!(!WORD_EXCEPTIONS.contains("값은"));
    }
}
