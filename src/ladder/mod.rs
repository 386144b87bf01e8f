/// 五档盘口模块
///
/// 数据单向流动: 推送快照 → extractor → transformer → rendering → 显示
/// - snapshot: 推送数据结构
/// - extractor: 提取价格和数量
/// - transformer: 换算、补齐、格式化、涨跌颜色
/// - rendering: 渲染树
/// - component: 组件状态与点击回调

pub mod types;
pub mod snapshot;
pub mod extractor;
pub mod transformer;
pub mod rendering;
pub mod component;

// 重新导出主要类型
pub use types::{LadderState, PriceColor, PriceLevel, Side, LEVEL_COUNT};
pub use snapshot::{Quote, Snapshot, SnapshotLevel, SocketData, StaticData};
pub use extractor::{extract, ExtractedQuotes, SideQuotes};
pub use rendering::{render, ContainerClass, LadderRow, LadderView, RenderContext, SideView};
pub use component::{next_state, parse_state, BidLadder, LadderProps, PriceCallback};
