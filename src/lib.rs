// 核心模块
pub mod config;
pub mod error;
pub mod format;
pub mod ladder;
pub mod simulator;

#[cfg(feature = "gui")]
pub mod gui;

// 重新导出主要类型
pub use config::{HandCount, LadderConfig, Precision};
pub use error::{LadderError, LadderResult};
pub use ladder::{BidLadder, LadderProps, LadderState, LadderView, PriceLevel, Side, Snapshot, SocketData, StaticData};
pub use simulator::QuoteSimulator;

/// 库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 日志文件
pub const LOG_FILE: &str = "bid_ladder.log";

/// 初始化日志系统 - 输出到文件，避免干扰界面
pub fn init_logging() {
    use std::fs::OpenOptions;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn) // 只记录警告和错误
        .parse_default_env();

    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(log_file) => {
            builder.target(env_logger::Target::Pipe(Box::new(log_file)));
        }
        Err(e) => {
            // 无法创建日志文件时退回标准错误输出
            eprintln!("无法打开日志文件 {}: {}", LOG_FILE, e);
        }
    }

    // 重复初始化时忽略
    let _ = builder.try_init();
}
