/// 岗位相似度关键词表：两侧都含同一关键词时每词加 0.10
static DEFAULT_DOMAIN_KEYWORDS: &[&str] = &[
    "开发", "设计", "销售", "管理", "运营", "分析", "测试", "产品", "市场", "客服",
];

/// 岗位名称相似度打分器。关键词表构造时注入，构造后只读。
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    keywords: Vec<String>,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN_KEYWORDS.iter().map(|k| (*k).to_string()))
    }
}

impl SimilarityScorer {
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            keywords: keywords.into_iter().collect(),
        }
    }

    /// 两个岗位名称的相似度（0.0〜1.0）
    ///
    /// 分支顺序：空串 0.0 / 完全相等 1.0 / 包含关系 0.7 /
    /// 序列匹配率（2×匹配字符数÷总长）加关键词加成，截断到 [0,1]。
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }
        if a.contains(b) || b.contains(a) {
            return 0.7;
        }

        let mut score = gestalt_ratio(a, b);
        for keyword in &self.keywords {
            if a.contains(keyword.as_str()) && b.contains(keyword.as_str()) {
                score += 0.1;
            }
        }

        score.clamp(0.0, 1.0)
    }
}

/// 序列匹配率：2×M/T（M 为递归取最长公共子串累计的匹配字符数，
/// T 为两串字符总数）
fn gestalt_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    let matches = matching_chars(&a, &b);
    2.0 * matches as f64 / total as f64
}

/// 最长公共子串两侧递归累计匹配数；并列时取 a 中最靠前、
/// 其次 b 中最靠前的一段
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + len..], &b[j + len..])
}

fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // 行滚动 DP：lengths[j] = 以 a[i-1]/b[j-1] 结尾的公共子串长
    let mut lengths = vec![0usize; b.len() + 1];
    for i in 0..a.len() {
        let mut prev_diag = 0;
        for j in 0..b.len() {
            let tmp = lengths[j + 1];
            if a[i] == b[j] {
                let len = prev_diag + 1;
                lengths[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            } else {
                lengths[j + 1] = 0;
            }
            prev_diag = tmp;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SimilarityScorer {
        SimilarityScorer::default()
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(scorer().similarity("", "后端开发"), 0.0);
        assert_eq!(scorer().similarity("后端开发", ""), 0.0);
        assert_eq!(scorer().similarity("", ""), 0.0);
    }

    #[test]
    fn identical_titles_score_one() {
        assert_eq!(scorer().similarity("后端开发", "后端开发"), 1.0);
        assert_eq!(scorer().similarity("Java开发", "Java开发"), 1.0);
    }

    #[test]
    fn substring_relation_scores_point_seven() {
        assert_eq!(scorer().similarity("开发", "后端开发"), 0.7);
        assert_eq!(scorer().similarity("销售经理", "销售"), 0.7);
    }

    #[test]
    fn sequence_ratio_plus_keyword_bonus() {
        // "Java开发" vs "后端开发"：公共块“开发”2 字，2*2/(6+4)=0.4，
        // 共同关键词“开发”加 0.1
        let sim = scorer().similarity("Java开发", "后端开发");
        assert!((sim - 0.5).abs() < 1e-9);

        // 两个共同关键词各加 0.1
        let sim = scorer().similarity("产品开发", "开发产品");
        assert!((sim - 0.7).abs() < 1e-9);
    }

    #[test]
    fn bonus_accumulates_and_result_is_clamped() {
        let sim = scorer().similarity("开发设计销售管理运营分析", "分析开发设计销售管理运营");
        assert_eq!(sim, 1.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let pairs = [
            ("Java开发", "后端开发"),
            ("产品开发", "开发产品"),
            ("销售经理", "销售"),
            ("前端开发", "软件测试"),
            ("行政助理", "行政专员"),
        ];
        let s = scorer();
        for (a, b) in pairs {
            assert_eq!(s.similarity(a, b), s.similarity(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn injected_keywords_replace_default_vocabulary() {
        let s = SimilarityScorer::new(["架构".to_string()]);
        // 默认表的“开发”不再加成
        let sim = s.similarity("Java开发", "后端开发");
        assert!((sim - 0.4).abs() < 1e-9);
    }

    #[test]
    fn gestalt_ratio_matches_hand_computed_blocks() {
        // "电商运营开发" vs "电商开发运营"：块“电商”+“运营”共 4 字
        let ratio = gestalt_ratio("电商运营开发", "电商开发运营");
        assert!((ratio - 8.0 / 12.0).abs() < 1e-9);
    }
}
