use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::config::LadderConfig;
use crate::error::LadderResult;
use crate::gui::{BidLadderWidget, ColorScheme};
use crate::ladder::{LadderProps, StaticData};
use crate::simulator::QuoteSimulator;

/// 演示用的昨收价
const DEMO_PRE_CLOSE: f64 = 10.0;

/// 中文字体名称
const CJK_FONT_NAME: &str = "cjk";

/// 演示程序: 模拟推送驱动五档盘口
pub struct LadderDemoApp {
    config: LadderConfig,
    widget: BidLadderWidget,
    simulator: QuoteSimulator,
    static_data: StaticData,
    last_push: Instant,
    push_interval: Duration,
    paused: bool,
    selected_price: Rc<RefCell<Option<String>>>,
}

impl LadderDemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: LadderConfig) -> Self {
        if let Some(path) = &config.cjk_font_path {
            if let Err(e) = install_cjk_font(&cc.egui_ctx, path) {
                log::warn!("中文字体加载失败 {}: {}", path, e);
            }
        }

        let scheme = ColorScheme::from_theme(&config.theme);
        if scheme.is_light() {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        }

        let simulator = QuoteSimulator::new(DEMO_PRE_CLOSE, config.precision);
        let static_data = simulator.static_data();

        let selected_price = Rc::new(RefCell::new(None));
        let mut widget = BidLadderWidget::with_config(&config);
        widget.set_color_scheme(scheme);
        let selected = Rc::clone(&selected_price);
        widget.on_get_price(move |price| {
            *selected.borrow_mut() = Some(price.to_string());
        });

        Self {
            push_interval: Duration::from_millis(config.refresh_interval_ms.max(1)),
            config,
            widget,
            simulator,
            static_data,
            last_push: Instant::now(),
            paused: false,
            selected_price,
        }
    }

    /// 按间隔推送一份新快照
    fn push_snapshot(&mut self) {
        let now = Instant::now();
        if self.paused || now.duration_since(self.last_push) < self.push_interval {
            return;
        }
        self.last_push = now;

        let props = LadderProps::from_config(&self.config)
            .with_socket_data(self.simulator.next_snapshot())
            .with_static_data(self.static_data.clone());
        self.widget.update(props);
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(format!("{} 五档", self.config.symbol));
            ui.separator();
            ui.label(format!("最新: {:.*}", self.config.precision.digits() as usize, self.simulator.last_price()));
            ui.separator();

            let pause_text = if self.paused { "继续" } else { "暂停" };
            if ui.button(pause_text).clicked() {
                self.paused = !self.paused;
            }
            if ui.button("清空").clicked() {
                self.widget.clear();
            }
        });
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match self.selected_price.borrow().as_deref() {
                Some(price) => ui.label(format!("已选价格: {}", price)),
                None => ui.label("点击价格可选中"),
            };
            ui.separator();
            let state = if self.widget.ladder().has_data() { "有数据" } else { "无数据" };
            ui.label(state);
        });
    }
}

impl eframe::App for LadderDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.push_snapshot();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_top_bar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.widget.show(ui) {
                ctx.request_repaint();
            }
        });

        ctx.request_repaint_after(self.push_interval);
    }
}

/// 加载中文字体，egui默认字体没有中文字形
pub fn install_cjk_font(ctx: &egui::Context, path: &str) -> LadderResult<()> {
    let bytes = std::fs::read(path)?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_string());
    }

    ctx.set_fonts(fonts);
    Ok(())
}
