//! 全链路：文本 → 字段抽取 → 标准化 → 匹配评分

use jf_common::catalog::find_position;
use jf_common::extraction::{parse_candidate, parse_position};
use jf_common::matching::engine::evaluate_match;
use jf_common::matching::Verdict;

const RESUME: &str = "姓名：张伟\n年龄：28\n学历：本科\n工作经验：3年\n期望薪资：15k-20k\n求职意向：后端开发";

#[test]
fn resume_text_extracts_to_structured_record() {
    let record = parse_candidate(RESUME);

    assert_eq!(record.name, "张伟");
    assert_eq!(record.age, "28");
    assert_eq!(record.education, "本科");
    assert_eq!(record.experience, "3年");
    assert_eq!(record.expected_salary, "15k-20k");
    assert_eq!(record.desired_title, "后端开发");
    // 文档中没有的字段保持空串
    assert_eq!(record.gender, "");
    assert_eq!(record.contact, "");
}

#[test]
fn extracted_record_matches_builtin_tech_position() {
    let candidate = parse_candidate(RESUME);
    let position = find_position("技术岗").expect("builtin position");

    let report = evaluate_match(&candidate, position);

    assert_eq!(report.education, Verdict::Matches);
    assert_eq!(report.salary, Verdict::Matches);
    assert_eq!(report.title, Verdict::Matches);
    assert_eq!(report.experience, Verdict::Matches);
    // 简历未给出性别，该项剔除，不拉低整体
    assert_eq!(report.gender, Verdict::NotAssessed);
    assert_eq!(report.title_similarity, "100%");
    assert_eq!(report.overall, "100%");
}

#[test]
fn mismatched_title_drags_overall_below_fifty() {
    let resume = RESUME.replace("求职意向：后端开发", "求职意向：Java后台");
    let candidate = parse_candidate(&resume);
    assert_eq!(candidate.desired_title, "Java开发");

    let position = find_position("技术岗").expect("builtin position");
    let report = evaluate_match(&candidate, position);

    // "Java开发" vs "后端开发"：0.4 序列比 + 0.1 关键词加成 → 不符合档
    assert_eq!(report.title, Verdict::DoesNotMatch);
    assert_eq!(report.title_similarity, "50%");
    // 学历 2 + 岗位 0 + 薪资 0.3 + 经验 0.3 = 2.6 / 6 → 43%
    assert_eq!(report.overall, "43%");
}

#[test]
fn posting_document_feeds_the_same_match_path() {
    let posting = "企业名称：星辰科技有限公司\n招聘岗位：后端开发工程师\n学历要求：本科及以上\n薪资范围：15k-25k\n工作经验要求：3年\n性别要求：不限";
    let position = parse_position(posting);
    assert_eq!(position.title, "后端开发");

    let candidate = parse_candidate(RESUME);
    let report = evaluate_match(&candidate, &position);

    assert_eq!(report.title, Verdict::Matches);
    assert_eq!(report.overall, "100%");
}

#[test]
fn empty_document_yields_uncomputable_report() {
    let candidate = parse_candidate("（扫描件损坏，未能识别出任何文字段落）");
    let position = find_position("技术岗").expect("builtin position");

    let report = evaluate_match(&candidate, position);
    assert_eq!(report.overall, "无法计算");
}
