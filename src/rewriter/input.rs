//! 입력 컨테이너 처리
//!
//! 입력이 JSON 객체이고 지정한 필드가 문자열이면 그 문자열을,
//! 아니면 입력 전체를 본문으로 씁니다. 실패하지 않습니다.

use serde_json::Value;

/// 입력에서 교정할 본문 꺼내기
pub fn extract_text(raw: &str, field: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => match map.get(field) {
            Some(Value::String(text)) => text.clone(),
            _ => raw.to_string(),
        },
        Ok(_) => raw.to_string(),
        Err(e) => {
            log::debug!("JSON 입력 아님, 원문 사용: {}", e);
            raw.to_string()
        }
    }
}
