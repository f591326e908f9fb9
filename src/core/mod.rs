//! 끝소리(받침) 판정 핵심 모듈

pub mod batchim;
pub mod target;
pub mod unicode;
