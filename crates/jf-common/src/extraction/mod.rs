use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::normalize::{default_normalizer, TitleNormalizer};
use crate::{CandidateRecord, PositionRecord};

// 候选人字段名
pub const F_NAME: &str = "name";
pub const F_AGE: &str = "age";
pub const F_GENDER: &str = "gender";
pub const F_EDUCATION: &str = "education";
pub const F_MAJOR: &str = "major";
pub const F_EXPERIENCE: &str = "experience";
pub const F_EXPECTED_SALARY: &str = "expected_salary";
pub const F_DESIRED_TITLE: &str = "desired_title";
pub const F_CONTACT: &str = "contact";

// 岗位字段名
pub const F_COMPANY: &str = "company";
pub const F_TITLE: &str = "title";
pub const F_EDUCATION_REQUIRED: &str = "education_required";
pub const F_SALARY_RANGE: &str = "salary_range";
pub const F_EXPERIENCE_REQUIRED: &str = "experience_required";
pub const F_GENDER_REQUIRED: &str = "gender_required";

/// 单个字段的有序抽取规则
///
/// 模式按声明顺序逐条尝试，第一条命中即确定字段值，其余跳过；
/// 排前的是带标签的精确模式，排后的是逐步放宽的兜底模式。
#[derive(Debug)]
pub struct FieldRule {
    pub field: &'static str,
    patterns: Vec<Regex>,
}

impl FieldRule {
    fn new(field: &'static str, patterns: &[&str]) -> Self {
        Self {
            field,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("invalid field pattern"))
                .collect(),
        }
    }

    /// 第一条命中模式的捕获值；全部未命中返回 None
    pub fn first_capture(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|re| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
    }
}

/// 一类文档的字段抽取方案（候选人简历 / 招聘文本各一份）
#[derive(Debug)]
pub struct FieldSchema {
    rules: Vec<FieldRule>,
}

impl FieldSchema {
    /// 对文档逐字段抽取；未命中的字段取空串，字段集合固定
    pub fn extract(&self, document_text: &str) -> BTreeMap<&'static str, String> {
        self.rules
            .iter()
            .map(|rule| {
                (
                    rule.field,
                    rule.first_capture(document_text).unwrap_or_default(),
                )
            })
            .collect()
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.field == field)
    }
}

// 捕获字符类（沿用线上规则原文；薪资类不含小数点，岗位类含常见分隔符）
const TITLE_RUN: &str = r"[\x{4e00}-\x{9fa5}A-Za-z0-9（）()、/]+";
const SALARY_RUN: &str = r"[0-9\-~～kK万千底薪提成金工资待遇\+＋加]+";

lazy_static! {
    static ref CANDIDATE_SCHEMA: FieldSchema = FieldSchema {
        rules: vec![
            FieldRule::new(F_NAME, &[
                r"(?:姓名|名字|个人姓名|候选人姓名)[\s:：]*([\x{4e00}-\x{9fa5}A-Za-z·]{2,4})",
                // 兜底：独立成行的纯中文短词（表格展平后常见）
                r"(?m)^\s*([\x{4e00}-\x{9fa5}]{2,4})\s*$",
            ]),
            FieldRule::new(F_AGE, &[
                r"(?:年龄|岁数|出生年份)[\s:：]*(\d+)",
                r"(?i)(\d+)\s*(?:岁|years?|y/o)",
            ]),
            FieldRule::new(F_GENDER, &[
                r"性别[\s:：]*([男女])",
                r"([男女])(?:\s*性)?",
            ]),
            FieldRule::new(F_EDUCATION, &[
                r"(?:学历|教育背景|最高学历)[\s:：]*([\x{4e00}-\x{9fa5}]{2,4})",
                r"(本科|硕士|博士|大专|高中|中专|初中|小学)",
            ]),
            FieldRule::new(F_MAJOR, &[
                r"(?:专业|所学专业|主修专业)[\s:：]*([\x{4e00}-\x{9fa5}A-Za-z]{2,10})",
                r"专业\s*([\x{4e00}-\x{9fa5}A-Za-z]{2,10})",
            ]),
            FieldRule::new(F_EXPERIENCE, &[
                r"(?:工作经验|工作年限|从业时间)[\s:：]*(\d+)",
                r"(?i)(\d+)\s*(?:年|years?|y)",
            ]),
            FieldRule::new(F_EXPECTED_SALARY, &[
                &format!(r"(?:期望薪资|薪资要求|期望月薪|期望年薪)[\s:：]*({SALARY_RUN})"),
                &format!(r"期望薪资\s*({SALARY_RUN})"),
            ]),
            FieldRule::new(F_DESIRED_TITLE, &[
                &format!(r"(?:求职意向|应聘职位|申请职位|期望职位|目标岗位|求职岗位)[\s:：]*({TITLE_RUN})"),
                &format!(r"(?:期望工作|意向岗位|岗位意向)[\s:：]*({TITLE_RUN})"),
                &format!(r"(?:申请|应聘|求职|职位)[\s:：]*({TITLE_RUN})"),
                &format!(r"^\s*(?:职位|岗位)[\s:：]*({TITLE_RUN})"),
                // 兜底：标签后跨行捕获，取值时只保留第一行
                r"(?s)(?:求职意向|应聘职位|申请职位|期望职位|目标岗位)[\s:：]*(.+?)(?:\n|$)",
            ]),
            FieldRule::new(F_CONTACT, &[
                r"(?:电话|手机|联系方式|联系电话)[：:]\s*([\d\-]+)",
                r"邮箱[：:]\s*([\w.\-]+@[\w.\-]+)",
            ]),
        ],
    };

    static ref POSITION_SCHEMA: FieldSchema = FieldSchema {
        rules: vec![
            FieldRule::new(F_COMPANY, &[
                r"(?:企业名称|公司名称|单位名称|招聘单位)[\s:：]*([\x{4e00}-\x{9fa5}A-Za-z0-9（）()]{2,30})",
            ]),
            FieldRule::new(F_TITLE, &[
                &format!(r"(?:招聘岗位|招聘职位|岗位名称|职位名称)[\s:：]*({TITLE_RUN})"),
                &format!(r"(?:招聘|职位|岗位)[\s:：]*({TITLE_RUN})"),
                r"(?s)(?:招聘岗位|招聘职位|岗位名称|职位名称)[\s:：]*(.+?)(?:\n|$)",
            ]),
            FieldRule::new(F_EDUCATION_REQUIRED, &[
                r"(?:学历要求|学历)[\s:：]*([\x{4e00}-\x{9fa5}]{2,10})",
            ]),
            FieldRule::new(F_SALARY_RANGE, &[
                &format!(r"(?:薪资范围|薪资待遇|月薪|薪资)[\s:：]*({SALARY_RUN})"),
            ]),
            FieldRule::new(F_EXPERIENCE_REQUIRED, &[
                r"(?:工作经验要求|经验要求|工作经验|工作年限)[\s:：]*(\d+)",
            ]),
            FieldRule::new(F_GENDER_REQUIRED, &[
                r"(?:性别要求|性别)[\s:：]*([\x{4e00}-\x{9fa5}]{1,4})",
            ]),
        ],
    };
}

pub fn candidate_schema() -> &'static FieldSchema {
    &CANDIDATE_SCHEMA
}

pub fn position_schema() -> &'static FieldSchema {
    &POSITION_SCHEMA
}

/// 岗位值的后处理：去前导冒号、只留第一行（跨行兜底模式会多捕）
fn tidy_title_capture(raw: &str) -> String {
    let stripped = raw
        .trim()
        .trim_start_matches([':', '：', ' ', '\t'])
        .trim();
    stripped.lines().next().unwrap_or_default().trim().to_string()
}

/// 工作年限统一带“年”后缀（模式只捕数字）
fn with_years_suffix(digits: String) -> String {
    if digits.is_empty() {
        digits
    } else {
        format!("{digits}年")
    }
}

/// 从简历文本抽取候选人信息（默认岗位标准化规则）
pub fn parse_candidate(document_text: &str) -> CandidateRecord {
    parse_candidate_with(document_text, default_normalizer())
}

/// 从简历文本抽取候选人信息，岗位名称经注入的标准化器处理后存储
pub fn parse_candidate_with(
    document_text: &str,
    normalizer: &TitleNormalizer,
) -> CandidateRecord {
    let mut fields = CANDIDATE_SCHEMA.extract(document_text);
    let mut take = |field: &str| fields.remove(field).unwrap_or_default();

    let desired_title = {
        let raw = tidy_title_capture(&take(F_DESIRED_TITLE));
        if raw.is_empty() {
            debug!("no desired title found in candidate document");
            raw
        } else {
            normalizer.normalize(&raw)
        }
    };

    CandidateRecord {
        name: take(F_NAME),
        age: take(F_AGE),
        gender: take(F_GENDER),
        education: take(F_EDUCATION),
        major: take(F_MAJOR),
        experience: with_years_suffix(take(F_EXPERIENCE)),
        expected_salary: take(F_EXPECTED_SALARY),
        desired_title,
        contact: take(F_CONTACT),
    }
}

/// 从招聘文本抽取岗位信息（默认岗位标准化规则）
pub fn parse_position(document_text: &str) -> PositionRecord {
    parse_position_with(document_text, default_normalizer())
}

/// 从招聘文本抽取岗位信息，岗位名称经注入的标准化器处理后存储
pub fn parse_position_with(document_text: &str, normalizer: &TitleNormalizer) -> PositionRecord {
    let mut fields = POSITION_SCHEMA.extract(document_text);
    let mut take = |field: &str| fields.remove(field).unwrap_or_default();

    let title = {
        let raw = tidy_title_capture(&take(F_TITLE));
        if raw.is_empty() {
            debug!("no posted title found in position document");
            raw
        } else {
            normalizer.normalize(&raw)
        }
    };

    PositionRecord {
        company: take(F_COMPANY),
        title,
        education_required: take(F_EDUCATION_REQUIRED),
        salary_range: take(F_SALARY_RANGE),
        experience_required: with_years_suffix(take(F_EXPERIENCE_REQUIRED)),
        gender_required: take(F_GENDER_REQUIRED),
    }
}
