// 五档盘口错误类型
//
// 盘口本身没有可见的失败状态：缺失或异常的数据一律显示为占位符 "--"。
// 错误只出现在边界上：属性解析、推送数据解码、配置文件加载。

use thiserror::Error;

/// 盘口统一错误类型
#[derive(Debug, Error)]
pub enum LadderError {
    /// 价格精度无法解析或超出范围
    #[error("无效的价格精度: {0}")]
    InvalidPrecision(String),

    /// 每手数量无法解析或不是正整数
    #[error("无效的每手数量: {0}")]
    InvalidHandCount(String),

    #[error("JSON解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML解析错误: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 盘口操作结果
pub type LadderResult<T> = Result<T, LadderError>;
