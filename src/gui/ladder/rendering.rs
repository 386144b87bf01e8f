/// 盘口表格渲染

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::ladder::{LadderRow, LadderView, Side, SideView};

use super::types::{ColorScheme, ColumnWidths};

/// 行高
const ROW_HEIGHT: f32 = 22.0;

/// 表格渲染器
pub struct LadderTableRenderer {
    color_scheme: ColorScheme,
    column_widths: ColumnWidths,
}

impl LadderTableRenderer {
    pub fn new(color_scheme: ColorScheme, column_widths: ColumnWidths) -> Self {
        Self {
            color_scheme,
            column_widths,
        }
    }

    /// 渲染整个盘口，返回被点击的行
    pub fn render_ladder(&self, ui: &mut egui::Ui, view: &LadderView) -> Option<(Side, usize)> {
        let mut clicked = None;

        for (index, side_view) in view.sides().into_iter().enumerate() {
            if index > 0 {
                ui.separator();
            }
            if let Some(row) = self.render_side(ui, side_view) {
                clicked = Some((side_view.side(), row));
            }
        }

        clicked
    }

    /// 渲染单边表格
    fn render_side(&self, ui: &mut egui::Ui, side_view: &SideView) -> Option<usize> {
        let mut clicked = None;
        let no_info = side_view.class.no_info;

        ui.push_id(side_view.class.class_names(), |ui| {
            TableBuilder::new(ui)
                .striped(false)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(self.column_widths.label))
                .column(Column::exact(self.column_widths.price))
                .column(Column::exact(self.column_widths.amount))
                .body(|mut body| {
                    for (index, row) in side_view.rows.iter().enumerate() {
                        body.row(ROW_HEIGHT, |mut table_row| {
                            table_row.col(|ui| {
                                ui.colored_label(self.color_scheme.label, row.key.as_str());
                            });
                            table_row.col(|ui| {
                                if self.render_price_cell(ui, row, no_info) {
                                    clicked = Some(index);
                                }
                            });
                            table_row.col(|ui| {
                                ui.colored_label(self.text_color(no_info), row.amount.as_str());
                            });
                        });
                    }
                });
        });

        clicked
    }

    /// 渲染价格单元格，返回是否被点击
    fn render_price_cell(&self, ui: &mut egui::Ui, row: &LadderRow, no_info: bool) -> bool {
        let color = if no_info {
            self.color_scheme.placeholder
        } else {
            self.color_scheme.price_color(row.color)
        };
        let text = egui::RichText::new(&row.price).color(color).monospace();

        if !row.is_clickable() {
            ui.label(text);
            return false;
        }

        ui.add(egui::Label::new(text).sense(egui::Sense::click()))
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text("点击填入价格")
            .clicked()
    }

    fn text_color(&self, no_info: bool) -> egui::Color32 {
        if no_info {
            self.color_scheme.placeholder
        } else {
            self.color_scheme.neutral
        }
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
    }

    pub fn set_column_widths(&mut self, widths: ColumnWidths) {
        self.column_widths = widths;
    }
}
