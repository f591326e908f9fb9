//! 유니코드 한글 음절 받침 판별 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// ㄹ 종성 인덱스
pub const JONGSEONG_RIEUL: u32 = 8;

/// 원문자 자모 범위 (㉠ ~ ㉭)
const CIRCLED_JAMO_FIRST: u32 = 0x3260;
const CIRCLED_JAMO_LAST: u32 = 0x326D;
/// ㉣ (리을)
pub const CIRCLED_RIEUL: char = '㉣';

/// 종성 인덱스만 반환 (0 = 종성 없음)
pub fn jongseong_index(c: char) -> Option<u32> {
    syllable_offset(c).map(|offset| offset % JONGSEONG_COUNT)
}

/// 받침이 있는 음절인지 확인 (한글 음절이 아니면 None)
///
/// 쌍받침/겹받침(ㅆ, ㅄ 등)도 종성 인덱스가 0이 아니므로 받침 있음으로 판정
pub fn has_jongseong(c: char) -> Option<bool> {
    jongseong_index(c).map(|jong| jong > 0)
}

/// ㄹ 받침 음절인지 확인
pub fn is_rieul_jongseong(c: char) -> bool {
    jongseong_index(c) == Some(JONGSEONG_RIEUL)
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(ch: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(ch as u32))
}

/// 문자가 원문자 자모(㉠-㉭)인지 확인
pub fn is_circled_jamo(ch: char) -> bool {
    (CIRCLED_JAMO_FIRST..=CIRCLED_JAMO_LAST).contains(&(ch as u32))
}

/// 문자열에 완성형 한글이 하나라도 포함되어 있는지 확인
pub fn has_any_hangul(text: &str) -> bool {
    text.chars().any(is_complete_hangul)
}

fn syllable_offset(c: char) -> Option<u32> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    Some(code - HANGUL_SYLLABLE_BASE)
}
