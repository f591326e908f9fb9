//! LaTeX 수식 발음 추론
//!
//! 수식 원문을 축약([`reduce`])한 뒤 마지막 항의 끝소리를
//! 분류 토큰으로 뽑아냅니다([`extract`]).
//!
//! ```
//! use mathjosa::core::target::Target;
//! use mathjosa::formula::find_target;
//!
//! // B분의 A: 끝소리는 분자
//! assert_eq!(find_target(r"\frac{1}{2}"), Target::literal('1'));
//! assert_eq!(find_target("a+b=c"), Target::literal('c'));
//! ```

mod extractor;
mod reducer;
mod scan;

pub use extractor::{extract, find_target};
pub use reducer::reduce;
