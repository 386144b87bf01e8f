/// 五档盘口界面模块
///
/// - types: 颜色和列宽配置
/// - widget: egui组件
/// - rendering: 表格渲染

pub mod types;
pub mod widget;
pub mod rendering;

// 重新导出主要类型
pub use types::{ColorScheme, ColumnWidths};
pub use widget::BidLadderWidget;
pub use rendering::LadderTableRenderer;
