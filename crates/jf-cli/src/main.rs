mod document;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use document::{read_document_text, DocumentError};
use jf_common::catalog::{find_position, position_names};
use jf_common::extraction::{parse_candidate, parse_position};
use jf_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use jf_common::matching::engine::evaluate_match;
use jf_common::matching::report::OVERALL_UNCOMPUTABLE;
use jf_common::matching::{MatchReport, Verdict};
use jf_common::{CandidateRecord, PositionRecord};

#[derive(Debug, Parser)]
#[command(name = "jf-cli", version, about = "求职者简历与岗位信息匹配分析")]
struct Args {
    /// 简历文本文件（已解码的纯文本）
    #[arg(long)]
    resume: PathBuf,

    /// 内置岗位类别（如 技术岗；与 --posting 二选一）
    #[arg(long, conflicts_with = "posting")]
    position: Option<String>,

    /// 招聘文本文件，现场抽取岗位信息
    #[arg(long)]
    posting: Option<PathBuf>,

    /// 以 JSON 输出完整报告
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("未知的内置岗位类别：{0}（可选：{1}）")]
    UnknownPosition(String, String),
    #[error("需要 --position 或 --posting 指定岗位来源")]
    MissingPosition,
    #[error("报告序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing_subscriber("jf-cli");
    install_tracing_panic_hook("jf-cli");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("jf-cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let resume_text = read_document_text(&args.resume)?;
    let candidate = parse_candidate(&resume_text);

    let position = load_position(&args)?;
    let report = evaluate_match(&candidate, &position);
    info!(
        resume = %args.resume.display(),
        position = %position.title,
        overall = %report.overall,
        "match evaluated"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render(&candidate, &position, &report);
    }

    Ok(())
}

fn load_position(args: &Args) -> Result<PositionRecord, CliError> {
    if let Some(name) = &args.position {
        return find_position(name).cloned().ok_or_else(|| {
            CliError::UnknownPosition(name.clone(), position_names().join("、"))
        });
    }
    if let Some(path) = &args.posting {
        return Ok(parse_position(&read_document_text(path)?));
    }
    Err(CliError::MissingPosition)
}

fn render(candidate: &CandidateRecord, position: &PositionRecord, report: &MatchReport) {
    let dash = |s: &str| if s.is_empty() { "—".to_string() } else { s.to_string() };

    println!("== 求职者信息 ==");
    println!("姓名: {}  岗位: {}", dash(&candidate.name), dash(&candidate.desired_title));
    println!(
        "学历: {}  经验: {}  期望薪资: {}",
        dash(&candidate.education),
        dash(&candidate.experience),
        dash(&candidate.expected_salary)
    );

    println!("== 岗位信息 ==");
    println!("企业: {}  岗位: {}", dash(&position.company), dash(&position.title));
    println!(
        "学历要求: {}  经验要求: {}  薪资范围: {}",
        dash(&position.education_required),
        dash(&position.experience_required),
        dash(&position.salary_range)
    );

    println!("== 匹配分析结果 ==");
    println!("学历匹配: {}", report.education.label_zh());
    println!("薪资匹配: {}", report.salary.label_zh());
    println!("岗位匹配: {}（相似度 {}）", report.title.label_zh(), report.title_similarity);
    println!("性别匹配: {}", report.gender.label_zh());
    println!("工作经验匹配: {}", report.experience.label_zh());
    println!("整体匹配度: {}", report.overall);

    for line in advice_lines(report) {
        println!("{line}");
    }
}

/// 展示层的建议分档，阈值沿用运营侧约定（80/60/40）
fn advice_lines(report: &MatchReport) -> Vec<String> {
    let mut lines = Vec::new();

    if report.education == Verdict::DoesNotMatch || report.title == Verdict::DoesNotMatch {
        lines.push("警告: 关键指标（岗位/学历）不符合，求职者不符合企业基本要求".to_string());
    }

    let Some(percentage) = parse_percentage(&report.overall) else {
        lines.push(format!("无法计算匹配度百分比（{}）", report.overall));
        return lines;
    };

    let band = if percentage >= 80 {
        "高度匹配：求职者非常适合该职位"
    } else if percentage >= 60 {
        "中度匹配：求职者基本符合要求"
    } else if percentage >= 40 {
        "低度匹配：存在明显不匹配项"
    } else {
        "不匹配：求职者与职位要求差距较大"
    };
    lines.push(format!("建议: {band}"));

    lines
}

fn parse_percentage(overall: &str) -> Option<i64> {
    if overall == OVERALL_UNCOMPUTABLE {
        return None;
    }
    overall.strip_suffix('%')?.parse().ok()
}
