use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// 单项比对结论（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Matches,
    PartialMatch,
    DoesNotMatch,
    /// 两侧都有值但无法解析比较
    Unassessable,
    /// 任一侧缺值，未参与比对
    NotAssessed,
}

impl Verdict {
    /// 展示用中文标签
    pub fn label_zh(&self) -> &'static str {
        match self {
            Verdict::Matches => "符合",
            Verdict::PartialMatch => "部分符合",
            Verdict::DoesNotMatch => "不符合",
            Verdict::Unassessable => "无法评估",
            Verdict::NotAssessed => "未评估",
        }
    }
}

/// 整体匹配度无法计算时的哨兵值（所有字段均未评估）
pub const OVERALL_UNCOMPUTABLE: &str = "无法计算";

/// 一次匹配的结果报告。每次调用新建，构造后不再修改，不落库。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchReport {
    pub education: Verdict,
    pub salary: Verdict,
    pub title: Verdict,
    pub gender: Verdict,
    pub experience: Verdict,
    /// 岗位相似度百分比，如 "73%"（任一侧缺岗位时为 "0%"）
    pub title_similarity: String,
    /// 整体匹配度百分比，如 "62%"；无可评估字段时为 OVERALL_UNCOMPUTABLE
    pub overall: String,
}
