/// 五档盘口数据类型定义

use std::fmt;

/// 每边固定档位数
pub const LEVEL_COUNT: usize = 5;

/// 买卖方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn key(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }

    /// 行标签前缀
    pub fn text(self) -> &'static str {
        match self {
            Side::Buy => "买",
            Side::Sell => "卖",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 单个档位，None表示占位符
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceLevel {
    pub price: Option<f64>,
    /// 数量（手）
    pub amount: Option<i64>,
}

impl PriceLevel {
    pub const EMPTY: PriceLevel = PriceLevel {
        price: None,
        amount: None,
    };

    pub fn new(price: Option<f64>, amount: Option<i64>) -> Self {
        Self { price, amount }
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.amount.is_none()
    }
}

/// 买卖五档
#[derive(Debug, Clone, PartialEq)]
pub struct LadderState {
    pub buy: [PriceLevel; LEVEL_COUNT],
    /// 卖盘按推送顺序保存，渲染时再翻转
    pub sell: [PriceLevel; LEVEL_COUNT],
}

impl LadderState {
    /// 没有数据时的占位盘口
    pub fn placeholder() -> Self {
        Self {
            buy: [PriceLevel::EMPTY; LEVEL_COUNT],
            sell: [PriceLevel::EMPTY; LEVEL_COUNT],
        }
    }

    pub fn side(&self, side: Side) -> &[PriceLevel; LEVEL_COUNT] {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }
}

/// 价格相对昨收的涨跌颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceColor {
    #[default]
    Neutral,
    /// 高于昨收
    Up,
    /// 低于昨收
    Down,
}

impl PriceColor {
    /// 样式类名，红涨绿跌
    pub fn class_name(self) -> &'static str {
        match self {
            PriceColor::Neutral => "",
            PriceColor::Up => "ft-red",
            PriceColor::Down => "ft-green",
        }
    }
}
