use bid_ladder::config::{LadderConfig, DEFAULT_CONFIG_PATH};
use bid_ladder::gui::LadderDemoApp;
use eframe::egui;
use std::env;

fn main() -> eframe::Result<()> {
    bid_ladder::init_logging();

    // 读取环境变量LADDER_CONFIG，默认为ladder.toml
    let config_path = env::var("LADDER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = LadderConfig::load_or_default(&config_path);
    log::info!("启动五档盘口演示: {} (v{})", config.symbol, bid_ladder::VERSION);

    let title = format!("{} 五档盘口", config.symbol);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 420.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(LadderDemoApp::new(cc, config))),
    )
}
