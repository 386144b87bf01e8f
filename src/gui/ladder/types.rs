/// 盘口界面配置类型

use eframe::egui::Color32;

use crate::ladder::PriceColor;

/// 颜色配置，红涨绿跌
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub up: Color32,
    pub down: Color32,
    pub neutral: Color32,
    /// 行标签颜色
    pub label: Color32,
    /// 无数据时的文字颜色
    pub placeholder: Color32,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            up: Color32::from_rgb(230, 60, 60),
            down: Color32::from_rgb(0, 180, 90),
            neutral: Color32::from_rgb(220, 220, 220),
            label: Color32::GRAY,
            placeholder: Color32::DARK_GRAY,
        }
    }
}

impl ColorScheme {
    pub fn light_theme() -> Self {
        Self {
            up: Color32::from_rgb(200, 0, 0),
            down: Color32::from_rgb(0, 130, 0),
            neutral: Color32::BLACK,
            label: Color32::DARK_GRAY,
            placeholder: Color32::LIGHT_GRAY,
        }
    }

    pub fn dark_theme() -> Self {
        Self::default()
    }

    /// 按配置里的主题名选择，未知名称使用深色
    pub fn from_theme(theme: &str) -> Self {
        if theme.eq_ignore_ascii_case("light") {
            Self::light_theme()
        } else {
            if !theme.eq_ignore_ascii_case("dark") {
                log::warn!("未知主题 {}，使用深色主题", theme);
            }
            Self::dark_theme()
        }
    }

    pub fn is_light(&self) -> bool {
        self.neutral == Color32::BLACK
    }

    pub fn price_color(&self, color: PriceColor) -> Color32 {
        match color {
            PriceColor::Up => self.up,
            PriceColor::Down => self.down,
            PriceColor::Neutral => self.neutral,
        }
    }
}

/// 列宽配置
#[derive(Debug, Clone)]
pub struct ColumnWidths {
    pub label: f32,
    pub price: f32,
    pub amount: f32,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            label: 40.0,
            price: 80.0,
            amount: 70.0,
        }
    }
}
