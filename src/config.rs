//! 설정 파일 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::JosaError;

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "MATHJOSA_CONFIG";

/// 교정기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JosaConfig {
    /// 리포트 문맥으로 보여줄 앞뒤 글자 수
    #[serde(default = "default_context_window")]
    pub context_window: usize,
    /// JSON 입력에서 본문을 담은 필드 이름
    #[serde(default = "default_input_field")]
    pub input_field: String,
    /// 기본 보호 목록에 추가할 표현
    #[serde(default)]
    pub extra_protected: Vec<String>,
    /// 한글 단어 뒤 조사도 교정할지 여부
    #[serde(default = "default_correct_words")]
    pub correct_words: bool,
}

fn default_context_window() -> usize {
    10
}

fn default_input_field() -> String {
    "result".to_string()
}

fn default_correct_words() -> bool {
    true
}

impl Default for JosaConfig {
    fn default() -> Self {
        Self {
            context_window: default_context_window(),
            input_field: default_input_field(),
            extra_protected: Vec::new(),
            correct_words: default_correct_words(),
        }
    }
}

/// 설정 파일 경로: $MATHJOSA_CONFIG 또는 ~/.config/mathjosa/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(std::env::temp_dir);
    home.join(".config").join("mathjosa").join("config.json")
}

/// 설정 파일 읽기 (에러 전파)
pub fn read_config(path: &Path) -> Result<JosaConfig, JosaError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> JosaConfig {
    match read_config(path) {
        Ok(config) => config,
        Err(JosaError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => JosaConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
            JosaConfig::default()
        }
    }
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> JosaConfig {
    load_config_from(&config_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JosaConfig::default();
        assert_eq!(config.context_window, 10);
        assert_eq!(config.input_field, "result");
        assert!(config.extra_protected.is_empty());
        assert!(config.correct_words);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = JosaConfig {
            context_window: 4,
            input_field: "text".into(),
            extra_protected: vec!["이루고".into()],
            correct_words: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: JosaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"context_window": 20}"#;
        let config: JosaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.context_window, 20);
        assert_eq!(config.input_field, "result");
        assert!(config.correct_words);
    }

    #[test]
    fn test_load_written_file() {
        let path = std::env::temp_dir().join(format!("mathjosa-config-{}.json", std::process::id()));
        let config = JosaConfig {
            extra_protected: vec!["이루고".into()],
            ..JosaConfig::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);
        assert_eq!(load_config_from(&path), config);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_or_broken_file_falls_back() {
        let missing = std::env::temp_dir().join("mathjosa-no-such-dir/config.json");
        assert_eq!(load_config_from(&missing), JosaConfig::default());

        let path = std::env::temp_dir().join(format!("mathjosa-broken-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_config(&path), Err(JosaError::Parse(_))));
        assert_eq!(load_config_from(&path), JosaConfig::default());
        fs::remove_file(&path).unwrap();
    }
}
