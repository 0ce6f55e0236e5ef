use std::sync::LazyLock;

use crate::normalize::normalize_title;
use crate::PositionRecord;

/// 内置岗位库条目
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub position: PositionRecord,
}

/// 预定义岗位库。岗位名称在装载时统一过标准化器，
/// 与抽取产出的记录保持同一形态。
static BUILTIN_POSITIONS: LazyLock<Vec<CatalogEntry>> = LazyLock::new(|| {
    let entry = |name, title: &str, education, salary, experience, gender| CatalogEntry {
        name,
        position: PositionRecord {
            company: "星辰科技有限公司".to_string(),
            title: normalize_title(title),
            education_required: String::from(education),
            salary_range: String::from(salary),
            experience_required: String::from(experience),
            gender_required: String::from(gender),
        },
    };

    vec![
        entry("技术岗", "后端开发工程师", "本科及以上", "15k-25k", "3年", "不限"),
        entry("法务岗", "法务专员", "法学本科及以上", "15k-20k", "3年", "不限"),
        entry("人事岗", "人力资源专员", "大专及以上", "8k-12k", "2年", "不限"),
        entry("行政岗", "行政助理", "大专及以上", "6k-9k", "1年", "不限"),
        entry("运营岗", "内容运营专员", "本科及以上", "10k-15k", "2年", "不限"),
        entry("后勤岗", "后勤主管", "高中及以上", "10k-14k", "5年", "不限"),
        entry("销售岗", "销售经理", "高中及以上", "底薪8k+提成", "3年", "不限"),
    ]
});

pub fn builtin_positions() -> &'static [CatalogEntry] {
    &BUILTIN_POSITIONS
}

/// 按岗位类别名查找
pub fn find_position(name: &str) -> Option<&'static PositionRecord> {
    BUILTIN_POSITIONS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| &entry.position)
}

pub fn position_names() -> Vec<&'static str> {
    BUILTIN_POSITIONS.iter().map(|entry| entry.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_positions() {
        assert_eq!(builtin_positions().len(), 7);
        assert_eq!(
            position_names(),
            vec!["技术岗", "法务岗", "人事岗", "行政岗", "运营岗", "后勤岗", "销售岗"]
        );
    }

    #[test]
    fn titles_are_normalized_on_load() {
        assert_eq!(find_position("技术岗").unwrap().title, "后端开发");
        assert_eq!(find_position("运营岗").unwrap().title, "运营专员");
        // “销售”首条规则映射到销售代表；“法务专员”无规则命中，原样保留
        assert_eq!(find_position("销售岗").unwrap().title, "销售代表");
        assert_eq!(find_position("法务岗").unwrap().title, "法务专员");
    }

    #[test]
    fn lookup_by_unknown_name_is_none() {
        assert!(find_position("实习岗").is_none());
    }

    #[test]
    fn tech_position_fields() {
        let position = find_position("技术岗").unwrap();
        assert_eq!(position.company, "星辰科技有限公司");
        assert_eq!(position.education_required, "本科及以上");
        assert_eq!(position.salary_range, "15k-25k");
        assert_eq!(position.experience_required, "3年");
        assert_eq!(position.gender_required, "不限");
    }
}
