/// GUI模块 - 基于egui的五档盘口界面
pub mod ladder;
pub mod ladder_app;

pub use ladder::{BidLadderWidget, ColorScheme, ColumnWidths};
pub use ladder_app::LadderDemoApp;
