// Configuration for the ladder widget and the demo application.
// Loaded from TOML with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LadderResult;

pub mod numeric;

pub use numeric::{HandCount, NumberOrString, Precision};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "ladder.toml";

/// 五档盘口配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// 价格小数位数
    pub precision: Precision,
    /// 每手数量
    pub hand_count: HandCount,
    /// 演示用的证券代码
    pub symbol: String,
    /// 演示程序推送间隔（毫秒）
    pub refresh_interval_ms: u64,
    /// 界面主题: dark 或 light
    pub theme: String,
    /// 中文字体文件路径，egui默认字体不含中文
    pub cjk_font_path: Option<String>,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            hand_count: HandCount::default(),
            symbol: "600000".to_string(),
            refresh_interval_ms: 500,
            theme: "dark".to_string(),
            cjk_font_path: None,
        }
    }
}

impl LadderConfig {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_hand_count(mut self, hand_count: HandCount) -> Self {
        self.hand_count = hand_count;
        self
    }

    pub fn with_refresh_interval_ms(mut self, interval_ms: u64) -> Self {
        self.refresh_interval_ms = interval_ms;
        self
    }

    /// 从TOML字符串解析
    pub fn from_toml_str(content: &str) -> LadderResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> LadderResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// 加载失败时使用默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to load config {}, using defaults: {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadderError;

    #[test]
    fn test_default_config() {
        let config = LadderConfig::default();
        assert_eq!(config.precision.digits(), 2);
        assert_eq!(config.hand_count.lot_size(), 100);
        assert!(config.cjk_font_path.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = LadderConfig::from_toml_str(
            r#"
            precision = "3"
            hand_count = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.precision.digits(), 3);
        assert_eq!(config.hand_count.lot_size(), 10);
        assert_eq!(config.refresh_interval_ms, 500);
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_parse_theme_and_font() {
        let config = LadderConfig::from_toml_str(
            r#"
            theme = "light"
            cjk_font_path = "/usr/share/fonts/noto/NotoSansCJK-Regular.ttc"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(
            config.cjk_font_path.as_deref(),
            Some("/usr/share/fonts/noto/NotoSansCJK-Regular.ttc")
        );
    }

    #[test]
    fn test_invalid_toml_value() {
        let result = LadderConfig::from_toml_str("hand_count = 0");
        assert!(matches!(result, Err(LadderError::Toml(_))));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = LadderConfig::load_or_default("/nonexistent/ladder.toml");
        assert_eq!(config, LadderConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = LadderConfig::new("000001")
            .with_precision(Precision::new(3).unwrap())
            .with_hand_count(HandCount::new(10).unwrap())
            .with_refresh_interval_ms(200);
        assert_eq!(config.symbol, "000001");
        assert_eq!(config.precision.digits(), 3);
        assert_eq!(config.hand_count.lot_size(), 10);
        assert_eq!(config.refresh_interval_ms, 200);
    }
}
