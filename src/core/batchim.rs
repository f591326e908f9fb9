//! 받침 판별기
//!
//! 분류 토큰이 자음(받침)으로 끝나게 읽히는지 판정합니다.
//! 라틴 문자/숫자/기호는 한국어 읽기(엘, 엠, 엔, 알, 일, 삼 ...) 기준으로 판단하고,
//! 사전에 없는 한글 음절은 코드포인트 연산으로 계산합니다.
//! 판정 실패는 없으며, 정보가 없으면 항상 "받침 없음"으로 귀결됩니다.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::target::{Category, Target};
use super::unicode::{has_jongseong, is_circled_jamo, is_rieul_jongseong, CIRCLED_RIEUL};

/// 받침 사전 - 토큰 이름 -> 받침 여부
pub static BATCHIM_TABLE: LazyLock<HashMap<&'static str, bool>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    // 숫자: 영, 일, 삼, 육, 칠, 팔, 십 -> 받침 있음
    for d in ["0", "1", "3", "6", "7", "8", "10"] {
        map.insert(d, true);
    }
    // 이, 사, 오, 구 -> 받침 없음
    for d in ["2", "4", "5", "9"] {
        map.insert(d, false);
    }
    // 자음 이름 (기역, 니은, ...)
    for c in ["ㄱ", "ㄴ", "ㄷ", "ㄹ", "ㅁ", "ㅂ", "ㅅ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ"] {
        map.insert(c, true);
    }
    // 엘, 엠, 엔, 알
    for c in ["l", "m", "n", "r", "L", "M", "N", "R"] {
        map.insert(c, true);
    }
    // 나머지 알파벳 (에이, 비, 씨, ...)
    for c in [
        "A", "a", "B", "b", "C", "c", "D", "d", "E", "e", "F", "f", "G", "g", "H", "h", "I", "i",
        "J", "j", "K", "k", "O", "o", "P", "p", "Q", "q", "S", "s", "T", "t", "U", "u", "V", "v",
        "W", "w", "X", "x", "Y", "y", "Z", "z",
    ] {
        map.insert(c, false);
    }
    map.insert("제곱", true);
    map.insert("여집합", true);
    map.insert("바", false);
    map
});

/// 단위 받침 사전
///
/// 단위 약어는 글자 이름과 다르게 읽힌다 (g는 "지"지만 kg은 "킬로그램").
pub static UNIT_BATCHIM_TABLE: LazyLock<HashMap<&'static str, bool>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    // 미터, 리터, 암페어, 볼트, 와트, 헤르츠, 도
    for u in ["m", "cm", "mm", "km", "l", "L", "mL", "A", "V", "W", "Hz", "deg", "degree"] {
        map.insert(u, false);
    }
    // 그램, 뉴턴
    for u in ["g", "kg", "mg", "N"] {
        map.insert(u, true);
    }
    map
});

/// ㄹ 받침으로 읽히는 토큰 (일, 칠, 팔, 엘, 알, 리을)
static RIEUL_TOKENS: LazyLock<HashSet<char>> =
    LazyLock::new(|| ['1', '7', '8', 'l', 'r', 'L', 'R', 'ㄹ', CIRCLED_RIEUL].into_iter().collect());

/// 분류 토큰의 받침 여부 판정
pub fn classify(target: &Target) -> bool {
    match target {
        Target::Literal(text) => classify_text(text),
        Target::Category(Category::Degree) => true,
        Target::Category(Category::Meter) => false,
        Target::Category(category) => classify_text(category.reading()),
        Target::Unit(unit) => match UNIT_BATCHIM_TABLE.get(unit.as_str()) {
            Some(&value) => value,
            // 사전에 없는 단위(기하의 점 이름 등)는 마지막 글자로 판단
            None => unit.chars().last().map(classify_char).unwrap_or(false),
        },
        Target::Empty => false,
    }
}

/// 글자 토큰의 받침 여부
///
/// 사전에 있으면 사전 값을, 없으면 마지막 글자를 기준으로 판단한다.
pub fn classify_text(text: &str) -> bool {
    if let Some(&value) = BATCHIM_TABLE.get(text) {
        return value;
    }
    text.chars().last().map(classify_char).unwrap_or(false)
}

/// 한 글자의 받침 여부
pub fn classify_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    if let Some(&value) = BATCHIM_TABLE.get(&*c.encode_utf8(&mut buf)) {
        return value;
    }
    if let Some(value) = has_jongseong(c) {
        return value;
    }
    is_circled_jamo(c)
}

/// 끝소리가 ㄹ인지 판정 ('으로/로' 선택에 사용)
pub fn is_rieul_final(target: &Target) -> bool {
    match target {
        Target::Literal(text) => text
            .chars()
            .last()
            .map(|c| RIEUL_TOKENS.contains(&c) || is_rieul_jongseong(c))
            .unwrap_or(false),
        _ => false,
    }
}
