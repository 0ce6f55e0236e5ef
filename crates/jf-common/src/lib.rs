pub mod catalog;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod normalize;

use serde::{Deserialize, Serialize};

// Commonly used data models for extraction and matching.
//
// 所有字段统一用 String 表示，空串表示“未提取到”。不用 Option，
// 避免三值逻辑（None / Some("") / Some(值)）在比对层扩散。

/// 求职者信息（由简历文本抽取得到，构造后不再修改）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CandidateRecord {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub education: String,
    pub major: String,
    /// 工作年限，带“年”后缀（如 "3年"）
    pub experience: String,
    /// 期望薪资原始表述（如 "15k-20k"、"底薪8k+提成"）
    pub expected_salary: String,
    /// 求职岗位，已经过 normalize::TitleNormalizer 标准化
    pub desired_title: String,
    pub contact: String,
}

/// 岗位信息（来自内置岗位库或招聘文本抽取）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PositionRecord {
    pub company: String,
    /// 招聘岗位，已标准化
    pub title: String,
    /// 学历要求原文，可能带“及以上”限定
    pub education_required: String,
    pub salary_range: String,
    pub experience_required: String,
    /// 性别要求，“不限”为哨兵值
    pub gender_required: String,
}
