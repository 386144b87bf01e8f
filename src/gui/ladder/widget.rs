/// 五档盘口egui组件
///
/// 薄适配层: 属性更新交给 `BidLadder`，每帧把渲染树画出来并把点击转回组件

use eframe::egui;

use crate::config::LadderConfig;
use crate::ladder::{BidLadder, LadderProps, LadderView};

use super::rendering::LadderTableRenderer;
use super::types::{ColorScheme, ColumnWidths};

pub struct BidLadderWidget {
    ladder: BidLadder,
    table_renderer: LadderTableRenderer,
    /// 缓存的渲染树，属性变化时重建
    cached_view: LadderView,
}

impl Default for BidLadderWidget {
    fn default() -> Self {
        Self::new(BidLadder::default())
    }
}

impl BidLadderWidget {
    pub fn new(ladder: BidLadder) -> Self {
        let cached_view = ladder.view();
        Self {
            ladder,
            table_renderer: LadderTableRenderer::new(ColorScheme::default(), ColumnWidths::default()),
            cached_view,
        }
    }

    pub fn with_config(config: &LadderConfig) -> Self {
        Self::new(BidLadder::with_config(config))
    }

    /// 设置点击价格的回调
    pub fn on_get_price(&mut self, callback: impl FnMut(&str) + 'static) {
        self.ladder.on_get_price(callback);
    }

    /// 属性更新
    pub fn update(&mut self, props: LadderProps) {
        self.cached_view = self.ladder.update(props);
    }

    /// 立即清空五档
    pub fn clear(&mut self) {
        self.cached_view = self.ladder.clear();
    }

    pub fn ladder(&self) -> &BidLadder {
        &self.ladder
    }

    pub fn view(&self) -> &LadderView {
        &self.cached_view
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.table_renderer.set_color_scheme(scheme);
    }

    pub fn set_column_widths(&mut self, widths: ColumnWidths) {
        self.table_renderer.set_column_widths(widths);
    }

    /// 渲染组件，返回本帧是否触发了价格回调
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let clicked = ui
            .vertical(|ui| self.table_renderer.render_ladder(ui, &self.cached_view))
            .inner;

        match clicked {
            Some((side, row)) => self.ladder.click(side, row),
            None => false,
        }
    }
}
