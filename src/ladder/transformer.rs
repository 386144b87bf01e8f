/// 盘口数据转换
///
/// - 数量换算为手
/// - 价格和数量配对，补齐为固定五档
/// - 价格按精度格式化，数量转换单位
/// - 价格与昨收比较得出涨跌颜色

use crate::config::{HandCount, Precision};
use crate::format::{decimal_format, format_fixed, parse_number, switch_unit, DEFAULT_VALUE, TEN_THOUSAND_UNIT};

use super::extractor::{ExtractedQuotes, SideQuotes};
use super::snapshot::Quote;
use super::types::{LadderState, PriceColor, PriceLevel, LEVEL_COUNT};

/// 带万字单位时整数部分达到这个位数就去掉小数
const SHORTEN_INTEGER_DIGITS: usize = 3;

/// 原始数量换算为手，向零取整
///
/// 0 不做除法直接返回；缺失或非数值返回None
pub fn rescale_volume(raw: Option<&Quote>, hand_count: HandCount) -> Option<i64> {
    let raw = raw?;
    if raw.is_falsy() {
        return raw.as_f64().map(|n| n as i64);
    }

    let lots = (raw.as_f64()? / hand_count.lot_size() as f64).trunc();
    if lots.abs() < i64::MAX as f64 {
        Some(lots as i64)
    } else {
        None
    }
}

pub fn rescale_volumes(volumes: &[Option<Quote>], hand_count: HandCount) -> Vec<Option<i64>> {
    volumes
        .iter()
        .map(|volume| rescale_volume(volume.as_ref(), hand_count))
        .collect()
}

/// 价格为0或非数值时显示占位符
fn level_price(price: Option<&Quote>) -> Option<f64> {
    price.filter(|quote| !quote.is_falsy()).and_then(Quote::as_f64)
}

/// 按下标配对价格和数量，固定输出五档
pub fn regroup(prices: &[Option<Quote>], amounts: &[Option<i64>]) -> [PriceLevel; LEVEL_COUNT] {
    let mut levels = [PriceLevel::EMPTY; LEVEL_COUNT];

    for (index, price) in prices.iter().take(LEVEL_COUNT).enumerate() {
        let amount = amounts.get(index).copied().flatten().filter(|amount| *amount != 0);
        levels[index] = PriceLevel::new(level_price(price.as_ref()), amount);
    }

    levels
}

fn side_levels(side: &SideQuotes, hand_count: HandCount) -> [PriceLevel; LEVEL_COUNT] {
    let amounts = rescale_volumes(&side.volumes, hand_count);
    regroup(&side.prices, &amounts)
}

/// 由提取结果生成盘口状态
pub fn build_state(extracted: &ExtractedQuotes, hand_count: HandCount) -> LadderState {
    LadderState {
        buy: side_levels(&extracted.buy, hand_count),
        sell: side_levels(&extracted.sell, hand_count),
    }
}

/// 价格显示文本
pub fn format_price(price: Option<f64>, precision: Precision) -> String {
    match price {
        Some(price) => format_fixed(price, precision.digits()),
        None => DEFAULT_VALUE.to_string(),
    }
}

/// 昨收价显示文本，没有昨收时为空串
pub fn format_pre_close(pre_close: Option<&Quote>, precision: Precision) -> String {
    match pre_close {
        Some(quote) => decimal_format(&quote.to_string(), precision.digits()),
        None => String::new(),
    }
}

/// 数量显示文本
pub fn format_amount(amount: Option<i64>) -> String {
    match amount {
        Some(amount) => shorten_amount(switch_unit(amount)),
        None => DEFAULT_VALUE.to_string(),
    }
}

/// 防止盘口数量带单位时折行
///
/// 带万字单位且整数部分在3位及以上时略去小数
pub fn shorten_amount(amount: String) -> String {
    if !amount.contains(TEN_THOUSAND_UNIT) {
        return amount;
    }

    let integer = amount.split('.').next().unwrap_or_default();
    if integer.chars().count() >= SHORTEN_INTEGER_DIGITS {
        let integer = integer.trim_end_matches(TEN_THOUSAND_UNIT);
        format!("{}{}", integer, TEN_THOUSAND_UNIT)
    } else {
        amount
    }
}

/// 价格颜色: 昨收高于价格为跌，低于价格为涨
pub fn price_color(pre_close: &str, price: &str) -> PriceColor {
    if price == DEFAULT_VALUE {
        return PriceColor::Neutral;
    }

    match (parse_number(pre_close), parse_number(price)) {
        (Some(close), Some(price)) if close > price => PriceColor::Down,
        (Some(close), Some(price)) if close < price => PriceColor::Up,
        _ => PriceColor::Neutral,
    }
}
