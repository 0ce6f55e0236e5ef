use lazy_static::lazy_static;
use regex::Regex;

use super::education::{has_or_above_qualifier, EducationLevels};
use super::report::{MatchReport, Verdict, OVERALL_UNCOMPUTABLE};
use super::salary::parse_salary_range;
use super::similarity::SimilarityScorer;
use crate::{CandidateRecord, PositionRecord};

/// 性别要求哨兵值
const GENDER_UNRESTRICTED: &str = "不限";
const GENDER_NO_REQUIREMENT: &str = "无要求";

lazy_static! {
    static ref FIRST_INT_RE: Regex = Regex::new(r"\d+").unwrap();
}

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// 岗位相似度 ≥ 此值判“符合”
    pub title_match_threshold: f64,
    /// 岗位相似度 ≥ 此值（且低于上档）判“部分符合”
    pub title_partial_threshold: f64,
    /// 关键字段不符合后的降权系数，作用于该字段自身及其后所有字段
    pub critical_penalty: f64,
    /// 关键字段（学历、岗位）权重
    pub critical_weight: f64,
    /// 普通字段（薪资、性别、经验）权重
    pub normal_weight: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            title_match_threshold: 0.85,
            title_partial_threshold: 0.6,
            critical_penalty: env_critical_penalty(),
            critical_weight: 2.0,
            normal_weight: 1.0,
        }
    }
}

fn env_critical_penalty() -> f64 {
    std::env::var("JF_CRITICAL_PENALTY")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.3)
}

/// 结论 → 数值权重（未评估不在此表：整体直接剔除，分子分母都不计）
fn verdict_weight(verdict: Verdict) -> f64 {
    match verdict {
        Verdict::Matches => 1.0,
        Verdict::PartialMatch => 0.6,
        Verdict::DoesNotMatch => 0.0,
        Verdict::Unassessable => 0.5,
        Verdict::NotAssessed => 0.0,
    }
}

/// 求职者与岗位的匹配引擎。配置与查找表构造时注入，构造后只读，
/// 可在多线程间共享。
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchingConfig,
    similarity: SimilarityScorer,
    education: EducationLevels,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

/// 默认配置下的一次匹配
pub fn evaluate_match(candidate: &CandidateRecord, position: &PositionRecord) -> MatchReport {
    MatchEngine::default().evaluate(candidate, position)
}

impl MatchEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self::with_tables(config, SimilarityScorer::default(), EducationLevels::default())
    }

    pub fn with_tables(
        config: MatchingConfig,
        similarity: SimilarityScorer,
        education: EducationLevels,
    ) -> Self {
        Self {
            config,
            similarity,
            education,
        }
    }

    /// 逐项比对并汇总整体匹配度
    ///
    /// 汇总按固定顺序评估：关键字段 [学历, 岗位] 在前，普通字段
    /// [薪资, 性别, 经验] 在后。关键字段一旦不符合，其自身得分与
    /// 其后每个参评字段的得分都乘 critical_penalty；整体超过 50%
    /// 时截到 50%。
    pub fn evaluate(&self, candidate: &CandidateRecord, position: &PositionRecord) -> MatchReport {
        let education = self.assess_education(&candidate.education, &position.education_required);
        let (title, title_similarity) =
            self.assess_title(&candidate.desired_title, &position.title);
        let salary = self.assess_salary(&candidate.expected_salary, &position.salary_range);
        let gender = self.assess_gender(&candidate.gender, &position.gender_required);
        let experience =
            self.assess_experience(&candidate.experience, &position.experience_required);

        let overall = self.aggregate(&[
            (education, self.config.critical_weight, true),
            (title, self.config.critical_weight, true),
            (salary, self.config.normal_weight, false),
            (gender, self.config.normal_weight, false),
            (experience, self.config.normal_weight, false),
        ]);

        MatchReport {
            education,
            salary,
            title,
            gender,
            experience,
            title_similarity: format!("{:.0}%", title_similarity * 100.0),
            overall,
        }
    }

    /// 学历：要求带“及以上”时按等级大小比，否则要求等级完全一致
    fn assess_education(&self, candidate_edu: &str, required_edu: &str) -> Verdict {
        if candidate_edu.is_empty() || required_edu.is_empty() {
            return Verdict::NotAssessed;
        }

        let candidate_level = self.education.level_of(candidate_edu);
        let required_level = self.education.level_of(required_edu);

        let ok = if has_or_above_qualifier(required_edu) {
            candidate_level >= required_level
        } else {
            candidate_level == required_level
        };

        if ok {
            Verdict::Matches
        } else {
            Verdict::DoesNotMatch
        }
    }

    /// 薪资：期望区间整体落在岗位区间内为符合，有交叠为部分符合
    fn assess_salary(&self, expected: &str, offered: &str) -> Verdict {
        if expected.is_empty() || offered.is_empty() {
            return Verdict::NotAssessed;
        }

        let (Some((exp_min, exp_max)), Some((off_min, off_max))) =
            (parse_salary_range(expected), parse_salary_range(offered))
        else {
            return Verdict::Unassessable;
        };

        if exp_min >= off_min && exp_max <= off_max {
            Verdict::Matches
        } else if exp_min <= off_max && exp_max >= off_min {
            Verdict::PartialMatch
        } else {
            Verdict::DoesNotMatch
        }
    }

    /// 岗位：相似度始终计算并随报告输出，结论按阈值分档
    fn assess_title(&self, desired: &str, posted: &str) -> (Verdict, f64) {
        let similarity = self.similarity.similarity(desired, posted);

        if desired.is_empty() || posted.is_empty() {
            return (Verdict::NotAssessed, similarity);
        }

        let verdict = if similarity >= self.config.title_match_threshold {
            Verdict::Matches
        } else if similarity >= self.config.title_partial_threshold {
            Verdict::PartialMatch
        } else {
            Verdict::DoesNotMatch
        };
        (verdict, similarity)
    }

    /// 性别：要求为“不限”（或含“不限”、“无要求”）直接符合，否则全等
    fn assess_gender(&self, candidate_gender: &str, required_gender: &str) -> Verdict {
        if candidate_gender.is_empty() || required_gender.is_empty() {
            return Verdict::NotAssessed;
        }

        let unrestricted = required_gender == GENDER_UNRESTRICTED
            || required_gender == GENDER_NO_REQUIREMENT
            || required_gender.contains(GENDER_UNRESTRICTED);

        if unrestricted || candidate_gender == required_gender {
            Verdict::Matches
        } else {
            Verdict::DoesNotMatch
        }
    }

    /// 经验：两侧各取第一个整数，求职者年限 ≥ 要求年限为符合
    fn assess_experience(&self, candidate_exp: &str, required_exp: &str) -> Verdict {
        if candidate_exp.is_empty() || required_exp.is_empty() {
            return Verdict::NotAssessed;
        }

        let (Some(candidate_years), Some(required_years)) =
            (first_int(candidate_exp), first_int(required_exp))
        else {
            return Verdict::Unassessable;
        };

        if candidate_years >= required_years {
            Verdict::Matches
        } else {
            Verdict::DoesNotMatch
        }
    }

    /// 整体匹配度：加权得分 ÷ 参评权重和，向下取整成百分数
    fn aggregate(&self, fields: &[(Verdict, f64, bool)]) -> String {
        let mut total_score = 0.0;
        let mut max_score = 0.0;
        let mut critical_fail = false;

        for &(verdict, weight, is_critical) in fields {
            if verdict == Verdict::NotAssessed {
                continue;
            }

            let failed_now = is_critical && verdict == Verdict::DoesNotMatch;
            let mut score = verdict_weight(verdict);
            if critical_fail || failed_now {
                score *= self.config.critical_penalty;
            }
            if failed_now {
                critical_fail = true;
            }

            total_score += score * weight;
            max_score += weight;
        }

        if max_score == 0.0 {
            return OVERALL_UNCOMPUTABLE.to_string();
        }

        let mut percentage = (total_score / max_score * 100.0).floor() as i64;
        if critical_fail && percentage > 50 {
            percentage = 50;
        }
        format!("{percentage}%")
    }
}

fn first_int(text: &str) -> Option<i64> {
    FIRST_INT_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}
