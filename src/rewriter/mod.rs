//! 조사 호응 교정기
//!
//! 수식 뒤 조사 교정을 먼저 하고, 설정에 따라 수식 밖 한글 단어 뒤의
//! 조사를 이어서 교정합니다. 각 실행은 자기 기록만 소유하므로 여러 스레드에서
//! 같은 교정기를 공유해도 됩니다.

mod change_log;
mod formula_pass;
mod input;
mod word_pass;

pub use change_log::{context_window, human_readable, ChangeLog, ChangeLogEntry, Reason};
pub use input::extract_text;

use serde::{Deserialize, Serialize};
use std::thread;

use crate::config::JosaConfig;
use crate::particle::{ParticleEngine, ParticleRules};

use formula_pass::FormulaPass;
use word_pass::WordPass;

/// 교정 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// 교정된 텍스트
    #[serde(rename = "result")]
    pub text: String,
    pub log: ChangeLog,
}

/// 조사 호응 교정기
#[derive(Debug, Clone)]
pub struct JosaCorrector {
    engine: ParticleEngine,
    config: JosaConfig,
}

impl Default for JosaCorrector {
    fn default() -> Self {
        Self::with_config(JosaConfig::default())
    }
}

impl JosaCorrector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정의 추가 보호 목록을 반영하여 생성
    pub fn with_config(config: JosaConfig) -> Self {
        let rules = ParticleRules::new().with_protected(config.extra_protected.iter().cloned());
        Self {
            engine: ParticleEngine::with_rules(rules),
            config,
        }
    }

    pub fn config(&self) -> &JosaConfig {
        &self.config
    }

    pub fn engine(&self) -> &ParticleEngine {
        &self.engine
    }

    /// 텍스트 교정
    ///
    /// # Examples
    /// ```
    /// use mathjosa::JosaCorrector;
    ///
    /// let corrector = JosaCorrector::new();
    /// let fixed = corrector.run("$x$은 실수이고 $1$를 더한다.");
    /// assert_eq!(fixed.text, "$x$는 실수이고 $1$을 더한다.");
    /// assert_eq!(fixed.log.len(), 2);
    /// ```
    pub fn run(&self, text: &str) -> Correction {
        let window = self.config.context_window;
        let mut log = ChangeLog::new();

        let mut out = FormulaPass::new(&self.engine, window).run(text, &mut log);
        if self.config.correct_words {
            out = WordPass::new(&self.engine, window).run(&out, &mut log);
        }

        if !log.is_empty() {
            log::debug!("조사 교정 {}건", log.len());
        }
        Correction { text: out, log }
    }

    /// JSON 컨테이너 또는 평문 입력 교정
    pub fn run_input(&self, raw: &str) -> Correction {
        let text = extract_text(raw, &self.config.input_field);
        self.run(&text)
    }

    /// 여러 텍스트를 스레드로 나눠 교정 (입력 순서 유지)
    pub fn run_batch(&self, texts: &[&str]) -> Vec<Correction> {
        if texts.is_empty() {
            return Vec::new();
        }
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(texts.len());
        let chunk_size = texts.len().div_ceil(workers);

        thread::scope(|scope| {
            let handles: Vec<_> = texts
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || chunk.iter().map(|text| self.run(text)).collect::<Vec<_>>())
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_both_passes() {
        let corrector = JosaCorrector::new();
        let result = corrector.run("$x$은 실수이고, 두 값를 더한다.");
        assert_eq!(result.text, "$x$는 실수이고, 두 값을 더한다.");
        assert_eq!(result.log.len(), 2);
        assert_eq!(result.log.entries()[0].original, "은");
        assert_eq!(result.log.entries()[1].target, "값를");
    }

    #[test]
    fn test_word_pass_can_be_disabled() {
        let config = JosaConfig {
            correct_words: false,
            ..JosaConfig::default()
        };
        let result = JosaCorrector::with_config(config).run("두 값를 더한다.");
        assert_eq!(result.text, "두 값를 더한다.");
        assert!(result.log.is_empty());
    }

    #[test]
    fn test_extra_protected_from_config() {
        let config = JosaConfig {
            extra_protected: vec!["이루고".into()],
            ..JosaConfig::default()
        };
        let corrector = JosaCorrector::with_config(config);
        assert!(corrector.engine().is_protected("이루고"));
        assert!(corrector.run("$x$이루고").log.is_empty());
    }

    #[test]
    fn test_context_window_from_config() {
        let config = JosaConfig {
            context_window: 2,
            ..JosaConfig::default()
        };
        let result = JosaCorrector::with_config(config).run("이 값 $x$은 실수");
        assert_eq!(result.log.entries()[0].context, "...값 $x$은 실...");
    }

    #[test]
    fn test_run_input_custom_field() {
        let config = JosaConfig {
            input_field: "body".into(),
            ..JosaConfig::default()
        };
        let result = JosaCorrector::with_config(config).run_input(r#"{"body": "$a$은"}"#);
        assert_eq!(result.text, "$a$는");
    }

    #[test]
    fn test_run_batch_keeps_order() {
        let corrector = JosaCorrector::new();
        let texts: Vec<String> = (0..20).map(|i| format!("${}$를", i % 10)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let results = corrector.run_batch(&refs);
        assert_eq!(results.len(), 20);
        for (text, result) in refs.iter().zip(&results) {
            assert_eq!(result, &corrector.run(text));
        }
        assert!(corrector.run_batch(&[]).is_empty());
    }

    #[test]
    fn test_correction_json_shape() {
        let result = JosaCorrector::new().run("$x$은");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["result"], "$x$는");
        assert_eq!(json["log"][0]["corrected"], "는");
        assert_eq!(json["log"][0]["reason"], "batchim-agreement");
    }
}
