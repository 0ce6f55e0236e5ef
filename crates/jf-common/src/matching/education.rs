/// 学历等级表（按声明顺序扫描；高等级在前）
///
/// 含“及以上”同义写法，使限定词形式与核心学历落在同一等级。
static DEFAULT_EDUCATION_LEVELS: &[(&str, u8)] = &[
    ("博士", 5),
    ("博士研究生", 5),
    ("博士及以上", 5),
    ("硕士", 4),
    ("硕士研究生", 4),
    ("硕士及以上", 4),
    ("本科", 3),
    ("学士", 3),
    ("大学", 3),
    ("本科及以上", 3),
    ("大专", 2),
    ("专科", 2),
    ("大专及以上", 2),
    ("高中", 1),
    ("中专", 1),
    ("职高", 1),
    ("高中及以上", 1),
    ("初中", 0),
];

/// 学历等级查找表。表在构造时注入，构造后只读。
#[derive(Debug, Clone)]
pub struct EducationLevels {
    levels: Vec<(String, u8)>,
}

impl Default for EducationLevels {
    fn default() -> Self {
        Self::new(
            DEFAULT_EDUCATION_LEVELS
                .iter()
                .map(|(k, v)| ((*k).to_string(), *v)),
        )
    }
}

impl EducationLevels {
    pub fn new(levels: impl IntoIterator<Item = (String, u8)>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }

    fn exact(&self, edu: &str) -> Option<u8> {
        self.levels
            .iter()
            .find(|(label, _)| label == edu)
            .map(|(_, level)| *level)
    }

    /// 从学历字符串解析核心等级
    ///
    /// 依次尝试：整串精确命中 → 去掉“及上/以上”后精确命中 →
    /// 按声明顺序做子串扫描。全部落空按 0（初中及以下）处理。
    pub fn level_of(&self, edu: &str) -> u8 {
        if let Some(level) = self.exact(edu) {
            return level;
        }

        if has_or_above_qualifier(edu) {
            let core: String = strip_or_above(edu);
            if let Some(level) = self.exact(&core) {
                return level;
            }
        }

        self.levels
            .iter()
            .find(|(label, _)| edu.contains(label.as_str()))
            .map(|(_, level)| *level)
            .unwrap_or(0)
    }
}

/// 要求字符串是否带“及以上/以上”限定
pub fn has_or_above_qualifier(requirement: &str) -> bool {
    requirement.contains("及以上") || requirement.contains("以上")
}

fn strip_or_above(edu: &str) -> String {
    edu.replace("及以上", "").replace("以上", "")
}
