//! mathjosa - LaTeX 수식 뒤 조사 교정 CLI

use clap::Parser;
use mathjosa::config::{load_config, load_config_from};
use mathjosa::{Correction, JosaCorrector, JosaError};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// 명령행 인자
#[derive(Parser, Debug)]
#[command(name = "mathjosa")]
#[command(about = "LaTeX 수식 뒤 조사 교정")]
struct Args {
    /// 설정 파일 (기본: MATHJOSA_CONFIG 또는 ~/.config/mathjosa/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// 교정 결과와 기록을 JSON으로 출력
    #[arg(long)]
    json: bool,
    /// 입력 파일 (생략하거나 "-"이면 표준 입력)
    input: Option<PathBuf>,
}

/// 파일 또는 표준 입력 읽기 ("-"는 표준 입력)
fn read_input(path: Option<&Path>) -> Result<String, JosaError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// 교정 기록을 표 형태로 stderr에 출력
fn print_report(correction: &Correction) {
    if correction.log.is_empty() {
        eprintln!("교정할 조사가 없습니다.");
        return;
    }
    eprintln!("[교정 {}건]", correction.log.len());
    eprintln!("문맥 | 대상 | 원문 | 수정 | 사유");
    for entry in &correction.log {
        eprintln!(
            "{} | {} | {} | {} | {}",
            entry.context,
            entry.target,
            entry.original,
            entry.corrected,
            entry.reason.description()
        );
    }
}

fn run(args: &Args) -> Result<(), JosaError> {
    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    let corrector = JosaCorrector::with_config(config);

    let raw = read_input(args.input.as_deref())?;
    let correction = corrector.run_input(&raw);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&correction)?);
    } else {
        print!("{}", correction.text);
        print_report(&correction);
    }
    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("오류: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("mathjosa").chain(list.iter().copied()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["--json", "--config", "c.json", "input.txt"]).unwrap();
        assert!(parsed.json);
        assert_eq!(parsed.config, Some(PathBuf::from("c.json")));
        assert_eq!(parsed.input, Some(PathBuf::from("input.txt")));

        let parsed = args(&[]).unwrap();
        assert!(!parsed.json);
        assert!(parsed.config.is_none());
        assert!(parsed.input.is_none());

        let parsed = args(&["-"]).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(args(&["--config"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.txt", "b.txt"]).is_err());

        let help = args(&["--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/mathjosa-input.txt"))).unwrap_err();
        assert!(matches!(err, JosaError::Io(_)));
    }
}
