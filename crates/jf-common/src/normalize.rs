use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// 岗位名称 → 标准岗位的有序映射（按声明顺序扫描，先命中者生效）
///
/// NOTE: 沿用线上配置原表，'后端' 与 '销售' 各声明了两次；在
/// 先命中规则下仅第一条生效，后一条不可达。短关键词（如 '助理'）
/// 可能子串命中无关岗位，这是该启发式的已知局限。
static DEFAULT_TITLE_RULES: &[(&str, &str)] = &[
    ("前端", "前端开发"),
    ("web前端", "前端开发"),
    ("前端工程师", "前端开发"),
    ("后端", "后端开发"),
    ("后端", "后端开发工程师"),
    ("java", "Java开发"),
    ("python", "Python开发"),
    ("测试", "软件测试"),
    ("qa", "软件测试"),
    ("测试工程师", "软件测试"),
    ("产品", "产品经理"),
    ("产品设计", "产品经理"),
    ("pm", "产品经理"),
    ("运营", "运营专员"),
    ("新媒体", "新媒体运营"),
    ("内容运营", "内容运营"),
    ("销售", "销售代表"),
    ("销售", "销售经理"),
    ("业务员", "销售代表"),
    ("bd", "商务拓展"),
    ("人事", "人力资源"),
    ("hr", "人力资源"),
    ("招聘", "招聘专员"),
    ("财务", "财务会计"),
    ("会计", "财务会计"),
    ("出纳", "财务会计"),
    ("行政", "行政专员"),
    ("文员", "行政专员"),
    ("助理", "行政助理"),
];

static DEFAULT_NORMALIZER: LazyLock<TitleNormalizer> = LazyLock::new(TitleNormalizer::default);

/// 匹配前的清洗：NFKC 折叠、去掉顿号/斜杠/括号类分隔符和空白、小写化。
/// 仅用于关键词比对，输出仍取标准岗位名自身的大小写。
fn clean_for_matching(raw: &str) -> String {
    raw.nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| {
            !c.is_whitespace()
                && !matches!(
                    c,
                    '、' | '/' | '（' | '）' | '(' | ')' | '【' | '】' | '[' | ']'
                )
        })
        .collect()
}

/// 岗位名称标准化器。规则表在构造时注入，构造后只读。
#[derive(Debug, Clone)]
pub struct TitleNormalizer {
    rules: Vec<(String, String)>,
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new(
            DEFAULT_TITLE_RULES
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        )
    }
}

impl TitleNormalizer {
    pub fn new(rules: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// 标准化岗位名称
    ///
    /// 清洗后的输入按规则声明顺序做子串查找，第一条命中的规则决定
    /// 输出；全部未命中时原样返回输入（不返回清洗后的形态）。
    pub fn normalize(&self, raw_title: &str) -> String {
        if raw_title.is_empty() {
            return String::new();
        }

        let cleaned = clean_for_matching(raw_title);
        for (keyword, canonical) in &self.rules {
            if cleaned.contains(keyword.as_str()) {
                return canonical.clone();
            }
        }

        raw_title.to_string()
    }
}

/// 默认规则表的共享实例
pub fn default_normalizer() -> &'static TitleNormalizer {
    &DEFAULT_NORMALIZER
}

/// 默认规则表的便捷入口
pub fn normalize_title(raw_title: &str) -> String {
    DEFAULT_NORMALIZER.normalize(raw_title)
}
