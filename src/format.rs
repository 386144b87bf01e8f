/// 数值格式化工具
///
/// 盘口显示用到的三个基础函数:
/// - `decimal_format`: 按精度保留小数
/// - `switch_unit`: 大数量转换为带中文单位的字符串
/// - `is_number`: 判断显示文本是否为合法数值

/// 占位符，没有真实数据时显示
pub const DEFAULT_VALUE: &str = "--";

/// 万
pub const TEN_THOUSAND_UNIT: &str = "万";

/// 亿
pub const HUNDRED_MILLION_UNIT: &str = "亿";

const TEN_THOUSAND: f64 = 10_000.0;
const HUNDRED_MILLION: f64 = 100_000_000.0;

/// 将数值文本按精度格式化，非数值返回占位符
pub fn decimal_format(value: &str, precision: u32) -> String {
    match parse_number(value) {
        Some(number) => format_fixed(number, precision),
        None => DEFAULT_VALUE.to_string(),
    }
}

/// 将浮点数按精度格式化
pub fn format_fixed(value: f64, precision: u32) -> String {
    format!("{:.*}", precision as usize, value)
}

/// 数量单位转换
///
/// 小于1万直接显示整数，1万以上显示"X.XX万"，1亿以上显示"X.XX亿"
pub fn switch_unit(amount: i64) -> String {
    let value = amount as f64;
    let magnitude = value.abs();

    if magnitude >= HUNDRED_MILLION {
        format!("{:.2}{}", value / HUNDRED_MILLION, HUNDRED_MILLION_UNIT)
    } else if magnitude >= TEN_THOUSAND {
        format!("{:.2}{}", value / TEN_THOUSAND, TEN_THOUSAND_UNIT)
    } else {
        amount.to_string()
    }
}

/// 判断文本是否为有限数值
pub fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

/// 解析数值文本，空串、NaN、无穷大都视为非数值
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_format() {
        assert_eq!(decimal_format("10.5", 2), "10.50");
        assert_eq!(decimal_format("9", 3), "9.000");
        assert_eq!(decimal_format("12.3456", 0), "12");
        assert_eq!(decimal_format(DEFAULT_VALUE, 2), DEFAULT_VALUE);
        assert_eq!(decimal_format("", 2), DEFAULT_VALUE);
        assert_eq!(decimal_format("abc", 2), DEFAULT_VALUE);
    }

    #[test]
    fn test_switch_unit() {
        assert_eq!(switch_unit(0), "0");
        assert_eq!(switch_unit(9_999), "9999");
        assert_eq!(switch_unit(12_345), "1.23万");
        assert_eq!(switch_unit(1_234_567), "123.46万");
        assert_eq!(switch_unit(250_000_000), "2.50亿");
        assert_eq!(switch_unit(-20_000), "-2.00万");
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("10.50"));
        assert!(is_number("-3"));
        assert!(!is_number(DEFAULT_VALUE));
        assert!(!is_number(""));
        assert!(!is_number("NaN"));
        assert!(!is_number("inf"));
    }
}
