// Numeric props accepted as either JSON numbers or numeric strings.
// Parsed once at the boundary into explicit types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LadderError;

/// 默认价格精度
pub const DEFAULT_PRECISION: u32 = 2;

/// 最大价格精度
pub const MAX_PRECISION: u32 = 10;

/// 默认每手数量
pub const DEFAULT_HAND_COUNT: u64 = 100;

/// 数字或数字字符串
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn to_number(&self) -> Option<f64> {
        match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrString::Number(n) => write!(f, "{}", n),
            NumberOrString::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// 取非负整数，小数或负数返回None
fn whole_number(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// 价格小数位数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NumberOrString", into = "u32")]
pub struct Precision(u32);

impl Precision {
    pub fn new(digits: u32) -> Result<Self, LadderError> {
        if digits > MAX_PRECISION {
            return Err(LadderError::InvalidPrecision(format!(
                "{} 超出范围 0..={}",
                digits, MAX_PRECISION
            )));
        }
        Ok(Self(digits))
    }

    pub fn digits(self) -> u32 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}

impl TryFrom<NumberOrString> for Precision {
    type Error = LadderError;

    fn try_from(value: NumberOrString) -> Result<Self, Self::Error> {
        let digits = value
            .to_number()
            .and_then(whole_number)
            .ok_or_else(|| LadderError::InvalidPrecision(value.to_string()))?;
        let digits = u32::try_from(digits)
            .map_err(|_| LadderError::InvalidPrecision(value.to_string()))?;
        Self::new(digits)
    }
}

impl FromStr for Precision {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(NumberOrString::Text(s.to_string()))
    }
}

impl From<Precision> for u32 {
    fn from(value: Precision) -> Self {
        value.0
    }
}

/// 每手数量，数量换算为手的除数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NumberOrString", into = "u64")]
pub struct HandCount(u64);

impl HandCount {
    pub fn new(lot_size: u64) -> Result<Self, LadderError> {
        if lot_size == 0 {
            return Err(LadderError::InvalidHandCount("每手数量不能为0".to_string()));
        }
        Ok(Self(lot_size))
    }

    pub fn lot_size(self) -> u64 {
        self.0
    }
}

impl Default for HandCount {
    fn default() -> Self {
        Self(DEFAULT_HAND_COUNT)
    }
}

impl TryFrom<NumberOrString> for HandCount {
    type Error = LadderError;

    fn try_from(value: NumberOrString) -> Result<Self, Self::Error> {
        let lot_size = value
            .to_number()
            .and_then(whole_number)
            .ok_or_else(|| LadderError::InvalidHandCount(value.to_string()))?;
        Self::new(lot_size)
    }
}

impl FromStr for HandCount {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(NumberOrString::Text(s.to_string()))
    }
}

impl From<HandCount> for u64 {
    fn from(value: HandCount) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_accepts_number_or_string() {
        let from_number: Precision = serde_json::from_str("3").unwrap();
        let from_text: Precision = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(from_number.digits(), 3);
        assert_eq!(from_text.digits(), 4);
        assert_eq!("0".parse::<Precision>().unwrap().digits(), 0);
    }

    #[test]
    fn test_precision_rejects_invalid() {
        assert!(serde_json::from_str::<Precision>("-1").is_err());
        assert!(serde_json::from_str::<Precision>("2.5").is_err());
        assert!(serde_json::from_str::<Precision>("\"two\"").is_err());
        assert!(matches!(Precision::new(11), Err(LadderError::InvalidPrecision(_))));
    }

    #[test]
    fn test_hand_count_parsing() {
        let hand: HandCount = serde_json::from_str("\"1000\"").unwrap();
        assert_eq!(hand.lot_size(), 1000);
        assert_eq!(HandCount::default().lot_size(), 100);
        assert!(matches!("0".parse::<HandCount>(), Err(LadderError::InvalidHandCount(_))));
        assert!("abc".parse::<HandCount>().is_err());
    }
}
