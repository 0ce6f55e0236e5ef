use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // 数字 + 紧跟的单位（万=×10000，千/k/K=×1000；单位不跨数字继承）
    static ref NUM_WITH_UNIT_RE: Regex = Regex::new(r"(\d+(?:\.\d+)?)([万千kK]?)").unwrap();
    // 无单位场景下的裸数字
    static ref BARE_NUM_RE: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/// 从薪资表述中提取数值区间
///
/// 去掉千分位逗号后：文本含 万/千/k 单位时逐个按各自紧跟的单位换算，
/// 否则按裸数字提取。无数字返回 None；一个数字时 min=max；
/// 多个时取全体最小/最大（不限于前两个）。
pub fn parse_salary_range(text: &str) -> Option<(f64, f64)> {
    let cleaned = text.replace([',', '，'], "");
    let mut numbers: Vec<f64> = Vec::new();

    let has_unit = cleaned.contains('万')
        || cleaned.contains('千')
        || cleaned.to_lowercase().contains('k');

    if has_unit {
        for caps in NUM_WITH_UNIT_RE.captures_iter(&cleaned) {
            let Ok(mut value) = caps[1].parse::<f64>() else {
                continue;
            };
            match caps.get(2).map(|m| m.as_str()) {
                Some("万") => value *= 10_000.0,
                Some("千") | Some("k") | Some("K") => value *= 1_000.0,
                _ => {}
            }
            numbers.push(value);
        }
    } else {
        numbers.extend(
            BARE_NUM_RE
                .find_iter(&cleaned)
                .filter_map(|m| m.as_str().parse::<f64>().ok()),
        );
    }

    if numbers.is_empty() {
        debug!(raw = text, "no numbers found in salary expression");
        return None;
    }

    let min = numbers.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}
