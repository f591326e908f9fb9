//! 입출력 에러
//!
//! 교정 로직 자체는 실패하지 않으며, 이 타입은 설정 파일과 입력 파일을
//! 읽는 바깥 계층에서만 사용됩니다.

/// 설정/입력 로드 에러
#[derive(Debug)]
pub enum JosaError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(String),
}

impl std::fmt::Display for JosaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JosaError::Io(e) => write!(f, "파일 입출력 오류: {}", e),
            JosaError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for JosaError {}

impl From<std::io::Error> for JosaError {
    fn from(e: std::io::Error) -> Self {
        JosaError::Io(e)
    }
}

impl From<serde_json::Error> for JosaError {
    fn from(e: serde_json::Error) -> Self {
        JosaError::Parse(e.to_string())
    }
}
