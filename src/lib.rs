//! LaTeX 수식 뒤 한국어 조사 호응 교정기
//!
//! 수식의 마지막 발음(받침 유무)을 추론해 뒤에 붙은 조사
//! (은/는, 이/가, 을/를, 과/와, 으로/로 ...)를 맞게 고칩니다.
//!
//! ```
//! let fixed = mathjosa::correct(r"$\frac{1}{2}$를 구하면 $x$은 실수이다.");
//! assert_eq!(fixed.text, r"$\frac{1}{2}$을 구하면 $x$는 실수이다.");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod formula;
pub mod particle;
pub mod rewriter;

use std::sync::LazyLock;

pub use config::JosaConfig;
pub use error::JosaError;
pub use rewriter::{ChangeLog, ChangeLogEntry, Correction, JosaCorrector, Reason};

static DEFAULT_CORRECTOR: LazyLock<JosaCorrector> = LazyLock::new(JosaCorrector::new);

/// 기본 설정으로 텍스트 교정
pub fn correct(text: &str) -> Correction {
    DEFAULT_CORRECTOR.run(text)
}

/// 기본 설정으로 JSON 컨테이너 또는 평문 입력 교정
pub fn correct_input(raw: &str) -> Correction {
    DEFAULT_CORRECTOR.run_input(raw)
}
