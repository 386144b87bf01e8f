/// 五档盘口组件
///
/// 组件状态只有一个 `Option<LadderState>`，每次属性更新整体替换。
/// 状态流转: 无数据 → 收到推送 → 有数据 → clearValue → 无数据

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::{HandCount, LadderConfig, Precision};
use crate::error::LadderResult;

use super::extractor::extract;
use super::rendering::{render, LadderView, RenderContext};
use super::snapshot::{Snapshot, SocketData, StaticData};
use super::transformer::build_state;
use super::types::{LadderState, Side};

/// 点击价格后的回调
pub type PriceCallback = Box<dyn FnMut(&str)>;

/// 按推送协议的真假值解析: null、false、0、空串为假
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    Ok(flag)
}

/// 组件属性
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LadderProps {
    /// 数据精度
    pub precision: Precision,
    /// 数据一手的单位
    pub hand_count: HandCount,
    /// 股票的推送数据
    pub socket_data: Option<SocketData>,
    /// 股票基本信息数据
    pub static_data: Option<StaticData>,
    /// 是否清空五档数据
    #[serde(deserialize_with = "truthy")]
    pub clear_value: bool,
}

impl LadderProps {
    pub fn from_config(config: &LadderConfig) -> Self {
        Self {
            precision: config.precision,
            hand_count: config.hand_count,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> LadderResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("盘口属性解析失败: {}", e);
            e.into()
        })
    }

    pub fn with_socket_data(mut self, socket_data: impl Into<SocketData>) -> Self {
        self.socket_data = Some(socket_data.into());
        self
    }

    pub fn with_static_data(mut self, static_data: StaticData) -> Self {
        self.static_data = Some(static_data);
        self
    }

    pub fn with_clear_value(mut self, clear_value: bool) -> Self {
        self.clear_value = clear_value;
        self
    }

    /// 有效的推送数据，空推送返回None
    pub fn socket_data(&self) -> Option<&SocketData> {
        self.socket_data.as_ref().filter(|data| !data.is_empty())
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            precision: self.precision,
            static_data: self.static_data.as_ref(),
        }
    }
}

/// 由推送数据解析五档
pub fn parse_state(socket_data: &SocketData, hand_count: HandCount) -> Option<LadderState> {
    let snapshot = socket_data.snapshot()?;
    Some(build_state(&extract(snapshot), hand_count))
}

/// 计算属性更新后的状态
///
/// 推送为空时保持原状态，clearValue为真时清空
pub fn next_state(current: Option<LadderState>, props: &LadderProps) -> Option<LadderState> {
    let Some(socket_data) = props.socket_data() else {
        return current;
    };

    if props.clear_value {
        return None;
    }

    parse_state(socket_data, props.hand_count)
}

/// 五档盘口组件
pub struct BidLadder {
    props: LadderProps,
    state: Option<LadderState>,
    on_get_price: PriceCallback,
}

impl Default for BidLadder {
    fn default() -> Self {
        Self::new(LadderProps::default())
    }
}

impl std::fmt::Debug for BidLadder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BidLadder")
            .field("props", &self.props)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl BidLadder {
    /// 创建组件，初始推送不为空时直接解析
    pub fn new(props: LadderProps) -> Self {
        let state = props
            .socket_data()
            .and_then(|data| parse_state(data, props.hand_count));

        Self {
            props,
            state,
            on_get_price: Box::new(|_| {}),
        }
    }

    pub fn with_config(config: &LadderConfig) -> Self {
        Self::new(LadderProps::from_config(config))
    }

    /// 设置点击价格的回调
    pub fn on_get_price(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_get_price = Box::new(callback);
    }

    pub fn props(&self) -> &LadderProps {
        &self.props
    }

    pub fn state(&self) -> Option<&LadderState> {
        self.state.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.state.is_some()
    }

    /// 接收新属性
    pub fn receive_props(&mut self, next: LadderProps) {
        let state = next_state(self.state.take(), &next);

        match (&state, next.socket_data().is_some()) {
            (_, false) => {}
            (None, true) => log::debug!("五档数据已清空"),
            (Some(_), true) => log::debug!("五档数据已更新"),
        }

        self.state = state;
        self.props = next;
    }

    /// 立即清空五档，保留精度和昨收等其他属性
    pub fn clear(&mut self) -> LadderView {
        let next = LadderProps {
            socket_data: Some(Snapshot::new(Vec::new(), Vec::new()).into()),
            clear_value: true,
            ..self.props.clone()
        };
        self.update(next)
    }

    /// 接收新属性并返回新的渲染结果
    pub fn update(&mut self, next: LadderProps) -> LadderView {
        self.receive_props(next);
        self.view()
    }

    /// 当前渲染结果
    pub fn view(&self) -> LadderView {
        render(self.state.as_ref(), &self.props.render_context())
    }

    /// 点击某一行的价格，占位行不触发回调
    ///
    /// `row` 为显示顺序下标，卖盘已翻转
    pub fn click(&mut self, side: Side, row: usize) -> bool {
        let view = self.view();
        let Some(price) = view.side(side).rows.get(row).and_then(|row| row.clickable_price()) else {
            return false;
        };

        log::info!("选中{}盘价格: {}", side.text(), price);
        (self.on_get_price)(price);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::snapshot::{Snapshot, SnapshotLevel};

    fn snapshot() -> Snapshot {
        Snapshot::new(
            vec![SnapshotLevel::new(10.0, 500.0)],
            vec![SnapshotLevel::new(10.01, 1200.0)],
        )
    }

    #[test]
    fn test_new_without_data_is_placeholder() {
        let ladder = BidLadder::default();
        assert!(!ladder.has_data());
        assert!(ladder.view().is_placeholder());
    }

    #[test]
    fn test_new_ignores_clear_value() {
        let props = LadderProps::default()
            .with_socket_data(snapshot())
            .with_clear_value(true);
        assert!(BidLadder::new(props).has_data());
    }

    #[test]
    fn test_next_state_keeps_state_on_empty_push() {
        let state = parse_state(&snapshot().into(), HandCount::default());
        let props = LadderProps::default()
            .with_socket_data(Snapshot::default())
            .with_clear_value(true);
        assert_eq!(next_state(state.clone(), &props), state);
        assert_eq!(next_state(state.clone(), &LadderProps::default()), state);
    }

    #[test]
    fn test_clear_keeps_other_props() {
        let props = LadderProps {
            precision: Precision::new(3).unwrap(),
            ..LadderProps::default()
        };
        let mut ladder = BidLadder::new(
            props
                .with_socket_data(snapshot())
                .with_static_data(StaticData::with_pre_close(10.0)),
        );
        assert!(ladder.has_data());

        let view = ladder.clear();
        assert!(!ladder.has_data());
        assert!(view.is_placeholder());
        assert_eq!(ladder.props().precision.digits(), 3);
        assert!(ladder.props().static_data.is_some());

        // 清空后的下一次推送恢复显示
        ladder.update(ladder.props().clone().with_clear_value(false).with_socket_data(snapshot()));
        assert!(ladder.has_data());
    }

    #[test]
    fn test_clear_value_accepts_falsy_values() {
        for json in [r#"{"clearValue": null}"#, r#"{"clearValue": 0}"#, r#"{"clearValue": ""}"#] {
            let props = LadderProps::from_json(json).unwrap();
            assert!(!props.clear_value, "{} 应解析为false", json);
        }
        assert!(LadderProps::from_json(r#"{"clearValue": 1}"#).unwrap().clear_value);
        assert!(LadderProps::from_json(r#"{"clearValue": true}"#).unwrap().clear_value);
        assert!(!LadderProps::from_json("{}").unwrap().clear_value);
    }

    #[test]
    fn test_click_placeholder_is_noop() {
        let mut ladder = BidLadder::default();
        assert!(!ladder.click(Side::Buy, 0));
        assert!(!ladder.click(Side::Sell, 10));
    }
}
