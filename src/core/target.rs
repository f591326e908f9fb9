//! 분류 토큰 - 조사 앞에서 "끝소리를 내는 요소"

use std::fmt;

/// 읽는 방식으로 끝소리가 정해지는 기호 범주
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 각도 (30도)
    Degree,
    /// 여집합 (A^C)
    Complement,
    /// 거듭제곱 (x^2 → 제곱)
    Power,
    /// 길이 단위의 거듭제곱 (m^2 → 제곱미터)
    Meter,
}

impl Category {
    /// 범주를 읽을 때의 한글 이름
    pub fn reading(&self) -> &'static str {
        match self {
            Category::Degree => "도",
            Category::Complement => "여집합",
            Category::Power => "제곱",
            Category::Meter => "미터",
        }
    }
}

/// 분류 토큰
///
/// 수식이나 단어의 끝을 읽었을 때 나는 소리를 대표하는 값.
/// 구간마다 새로 만들어지며 저장되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// 글자 그대로 읽는 토큰 (한글 음절, 라틴 문자, 숫자)
    Literal(String),
    /// 이름이 붙은 범주
    Category(Category),
    /// `\mathrm{...}` 단위 이름
    Unit(String),
    /// 끝소리를 정할 수 없음 (교정 생략)
    Empty,
}

impl Target {
    /// 한 글자 토큰 생성
    pub fn literal(c: char) -> Self {
        Target::Literal(c.to_string())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Target::Empty => true,
            Target::Literal(s) | Target::Unit(s) => s.is_empty(),
            Target::Category(_) => false,
        }
    }

    /// ASCII 영문자/숫자 한 글자 토큰인지 확인
    pub fn is_single_ascii_alnum(&self) -> bool {
        match self {
            Target::Literal(s) => {
                let mut chars = s.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphanumeric())
            }
            _ => false,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Literal(s) => write!(f, "{}", s),
            Target::Category(c) => write!(f, "{}", c.reading()),
            Target::Unit(u) => write!(f, "unit:{}", u),
            Target::Empty => Ok(()),
        }
    }
}
