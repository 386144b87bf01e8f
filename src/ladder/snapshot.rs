/// 行情推送数据结构
///
/// 推送数据格式:
/// `{ "bids": [{ "price": .., "totalLevelVol": .. }], "asks": [..] }`
/// 也可能是只包含一个对象的数组。字段可以是数字或数字字符串，
/// 其他类型一律视为缺失，不影响整条推送的解析。

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::LadderResult;
use crate::format::parse_number;

/// 推送里的原始数值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quote {
    Number(f64),
    Text(String),
}

impl Quote {
    /// 转换为数值，非数值文本返回None
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Quote::Number(n) if n.is_finite() => Some(*n),
            Quote::Number(_) => None,
            Quote::Text(s) => parse_number(s),
        }
    }

    /// 对应推送协议里的假值: 0、空串、NaN
    pub fn is_falsy(&self) -> bool {
        match self {
            Quote::Number(n) => *n == 0.0 || n.is_nan(),
            Quote::Text(s) => s.is_empty(),
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Quote::Number),
            Value::String(s) => Some(Quote::Text(s)),
            _ => None,
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::Number(n) => write!(f, "{}", n),
            Quote::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Quote {
    fn from(value: f64) -> Self {
        Quote::Number(value)
    }
}

impl From<&str> for Quote {
    fn from(value: &str) -> Self {
        Quote::Text(value.to_string())
    }
}

fn lenient_quote<'de, D>(deserializer: D) -> Result<Option<Quote>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Quote::from_value(value))
}

fn lenient_levels<'de, D>(deserializer: D) -> Result<Option<Vec<SnapshotLevel>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let levels: Vec<SnapshotLevel> = match value {
        Value::Null => return Ok(None),
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };
    Ok(Some(levels))
}

/// 单个价位
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotLevel {
    #[serde(default, deserialize_with = "lenient_quote")]
    pub price: Option<Quote>,
    /// 该价位总挂单量（股）
    #[serde(rename = "totalLevelVol", default, deserialize_with = "lenient_quote")]
    pub total_level_vol: Option<Quote>,
}

impl SnapshotLevel {
    pub fn new(price: impl Into<Quote>, total_level_vol: impl Into<Quote>) -> Self {
        Self {
            price: Some(price.into()),
            total_level_vol: Some(total_level_vol.into()),
        }
    }
}

/// 一次行情快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "lenient_levels")]
    pub bids: Option<Vec<SnapshotLevel>>,
    #[serde(default, deserialize_with = "lenient_levels")]
    pub asks: Option<Vec<SnapshotLevel>>,
}

impl Snapshot {
    pub fn new(bids: Vec<SnapshotLevel>, asks: Vec<SnapshotLevel>) -> Self {
        Self {
            bids: Some(bids),
            asks: Some(asks),
        }
    }

    /// 两边都没有字段时视为空推送
    pub fn is_empty(&self) -> bool {
        self.bids.is_none() && self.asks.is_none()
    }

    pub fn bids(&self) -> &[SnapshotLevel] {
        self.bids.as_deref().unwrap_or_default()
    }

    pub fn asks(&self) -> &[SnapshotLevel] {
        self.asks.as_deref().unwrap_or_default()
    }
}

/// socketData属性: 单个快照或包装了快照的数组
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SocketData {
    Batch(Vec<Snapshot>),
    Single(Snapshot),
}

/// 数组里的非对象元素按空快照处理，不影响第一个快照
impl<'de> Deserialize<'de> for SocketData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(SocketData::Batch(
                items
                    .into_iter()
                    .map(|item| serde_json::from_value(item).unwrap_or_default())
                    .collect(),
            )),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(SocketData::Single)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "socketData应为对象或数组，实际为: {}",
                other
            ))),
        }
    }
}

impl SocketData {
    pub fn from_json(json: &str) -> LadderResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("推送数据解析失败: {}", e);
            e.into()
        })
    }

    /// 实际使用的快照，数组取第一个
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            SocketData::Batch(items) => items.first(),
            SocketData::Single(snapshot) => Some(snapshot),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SocketData::Batch(items) => items.is_empty(),
            SocketData::Single(snapshot) => snapshot.is_empty(),
        }
    }
}

impl From<Snapshot> for SocketData {
    fn from(snapshot: Snapshot) -> Self {
        SocketData::Single(snapshot)
    }
}

/// staticData属性: 证券基本信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticData {
    /// 昨收价
    #[serde(rename = "preClosePrice", default, deserialize_with = "lenient_quote")]
    pub pre_close_price: Option<Quote>,
}

impl StaticData {
    pub fn with_pre_close(price: impl Into<Quote>) -> Self {
        Self {
            pre_close_price: Some(price.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_snapshot() {
        let data: SocketData = serde_json::from_value(json!({
            "bids": [{ "price": 10.01, "totalLevelVol": 500 }],
            "asks": [{ "price": "10.02", "totalLevelVol": "1200" }]
        }))
        .unwrap();

        let snapshot = data.snapshot().unwrap();
        assert_eq!(snapshot.bids()[0].price, Some(Quote::Number(10.01)));
        assert_eq!(snapshot.asks()[0].total_level_vol, Some(Quote::Text("1200".into())));
        assert!(!data.is_empty());
    }

    #[test]
    fn test_parse_wrapped_snapshot_uses_first() {
        let data: SocketData = serde_json::from_value(json!([
            { "bids": [{ "price": 1.0, "totalLevelVol": 100 }] },
            { "bids": [{ "price": 2.0, "totalLevelVol": 100 }] }
        ]))
        .unwrap();

        assert_eq!(data.snapshot().unwrap().bids()[0].price, Some(Quote::Number(1.0)));
    }

    #[test]
    fn test_wrapped_snapshot_with_trailing_garbage() {
        let data: SocketData = serde_json::from_value(json!([
            { "bids": [{ "price": 1.0, "totalLevelVol": 100 }] },
            7,
            "x"
        ]))
        .unwrap();

        assert_eq!(data.snapshot().unwrap().bids()[0].price, Some(Quote::Number(1.0)));

        let data = SocketData::from_json(r#"[7, {"bids": [{"price": 2}]}]"#).unwrap();
        assert!(data.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_non_object_payload_rejected() {
        assert!(SocketData::from_json("7").is_err());
        assert!(SocketData::from_json(r#""bids""#).is_err());
        assert!(SocketData::from_json("not json").is_err());
    }

    #[test]
    fn test_empty_payloads() {
        assert!(SocketData::from_json("{}").unwrap().is_empty());
        assert!(SocketData::from_json("[]").unwrap().is_empty());
        assert!(!SocketData::from_json(r#"{"bids": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_entries_become_missing() {
        let data: SocketData = serde_json::from_value(json!({
            "bids": [
                { "price": { "nested": true }, "totalLevelVol": [1, 2] },
                "garbage",
                { "price": null }
            ],
            "asks": "not-an-array"
        }))
        .unwrap();

        let snapshot = data.snapshot().unwrap();
        assert_eq!(snapshot.bids().len(), 3);
        assert!(snapshot.bids().iter().all(|level| level.price.is_none()));
        assert!(snapshot.bids()[0].total_level_vol.is_none());
        assert!(snapshot.asks().is_empty());
    }

    #[test]
    fn test_quote_falsy() {
        assert!(Quote::Number(0.0).is_falsy());
        assert!(Quote::Number(f64::NAN).is_falsy());
        assert!(Quote::Text(String::new()).is_falsy());
        assert!(!Quote::Text("0".into()).is_falsy());
        assert!(!Quote::Number(1.5).is_falsy());
    }

    #[test]
    fn test_static_data() {
        let data: StaticData = serde_json::from_value(json!({ "preClosePrice": "10.00" })).unwrap();
        assert_eq!(data.pre_close_price.unwrap().as_f64(), Some(10.0));
        let empty: StaticData = serde_json::from_value(json!({})).unwrap();
        assert!(empty.pre_close_price.is_none());
    }
}
