/// 盘口渲染模块
///
/// 生成与界面框架无关的渲染树，egui适配层只负责把它画出来

use crate::config::Precision;
use crate::format::is_number;

use super::snapshot::StaticData;
use super::transformer::{format_amount, format_pre_close, format_price, price_color};
use super::types::{LadderState, PriceColor, PriceLevel, Side, LEVEL_COUNT};

/// 容器样式，对应 noInfo / bidPriceInfo / bidPriceInfo_buy|sell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerClass {
    pub no_info: bool,
    pub side: Side,
}

impl ContainerClass {
    pub fn class_names(&self) -> String {
        let mut names = Vec::with_capacity(3);
        if self.no_info {
            names.push("noInfo".to_string());
        }
        names.push("bidPriceInfo".to_string());
        names.push(format!("bidPriceInfo_{}", self.side.key()));
        names.join(" ")
    }
}

/// 单行渲染结果
#[derive(Debug, Clone, PartialEq)]
pub struct LadderRow {
    /// 行标签，如"卖0"
    pub key: String,
    pub price: String,
    pub amount: String,
    pub color: PriceColor,
}

impl LadderRow {
    /// 可点击时返回价格文本
    pub fn clickable_price(&self) -> Option<&str> {
        if is_number(&self.price) {
            Some(&self.price)
        } else {
            None
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable_price().is_some()
    }
}

/// 单边渲染结果
#[derive(Debug, Clone, PartialEq)]
pub struct SideView {
    pub class: ContainerClass,
    pub rows: [LadderRow; LEVEL_COUNT],
}

impl SideView {
    pub fn side(&self) -> Side {
        self.class.side
    }
}

/// 整个盘口的渲染结果，卖盘在上买盘在下
#[derive(Debug, Clone, PartialEq)]
pub struct LadderView {
    pub sell: SideView,
    pub buy: SideView,
}

impl LadderView {
    pub fn side(&self, side: Side) -> &SideView {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }

    /// 按显示顺序遍历两边
    pub fn sides(&self) -> [&SideView; 2] {
        [&self.sell, &self.buy]
    }

    pub fn is_placeholder(&self) -> bool {
        self.buy.class.no_info
    }
}

/// 渲染参数
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub precision: Precision,
    pub static_data: Option<&'a StaticData>,
}

fn render_row(level: &PriceLevel, side: Side, index: usize, pre_close: &str, precision: Precision) -> LadderRow {
    let price = format_price(level.price, precision);
    let color = price_color(pre_close, &price);

    LadderRow {
        key: format!("{}{}", side.text(), index),
        amount: format_amount(level.amount),
        price,
        color,
    }
}

/// 渲染单边，卖盘翻转顺序
pub fn render_side(levels: &[PriceLevel; LEVEL_COUNT], side: Side, no_info: bool, ctx: &RenderContext<'_>) -> SideView {
    let pre_close = format_pre_close(
        ctx.static_data.and_then(|data| data.pre_close_price.as_ref()),
        ctx.precision,
    );

    let mut ordered = *levels;
    if side == Side::Sell {
        ordered.reverse();
    }

    let rows = std::array::from_fn(|index| render_row(&ordered[index], side, index, &pre_close, ctx.precision));

    SideView {
        class: ContainerClass { no_info, side },
        rows,
    }
}

/// 渲染整个盘口，没有状态时渲染占位盘口
pub fn render(state: Option<&LadderState>, ctx: &RenderContext<'_>) -> LadderView {
    let no_info = state.is_none();
    let placeholder = LadderState::placeholder();
    let state = state.unwrap_or(&placeholder);

    LadderView {
        sell: render_side(&state.sell, Side::Sell, no_info, ctx),
        buy: render_side(&state.buy, Side::Buy, no_info, ctx),
    }
}
