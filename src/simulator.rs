/// 模拟行情推送
///
/// 以昨收为中心做随机游走，每次生成一份五档快照，供演示程序和基准测试使用

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Precision;
use crate::ladder::{Snapshot, SnapshotLevel, StaticData, LEVEL_COUNT};

/// 模拟器
pub struct QuoteSimulator {
    rng: StdRng,
    pre_close: f64,
    last_price: f64,
    tick_size: f64,
    /// 每档基础挂单量（股）
    base_volume: f64,
}

impl QuoteSimulator {
    pub fn new(pre_close: f64, precision: Precision) -> Self {
        Self::with_rng(StdRng::from_entropy(), pre_close, precision)
    }

    /// 固定种子，结果可复现
    pub fn seeded(seed: u64, pre_close: f64, precision: Precision) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), pre_close, precision)
    }

    fn with_rng(rng: StdRng, pre_close: f64, precision: Precision) -> Self {
        Self {
            rng,
            pre_close,
            last_price: pre_close,
            tick_size: 10f64.powi(-(precision.digits() as i32)),
            base_volume: 50_000.0,
        }
    }

    pub fn static_data(&self) -> StaticData {
        StaticData::with_pre_close(self.pre_close)
    }

    pub fn last_price(&self) -> f64 {
        self.last_price
    }

    /// 生成下一份快照
    ///
    /// bids 从买一到买五，asks 从卖一到卖五
    pub fn next_snapshot(&mut self) -> Snapshot {
        let step: i32 = self.rng.gen_range(-3..=3);
        let floor = self.tick_size * LEVEL_COUNT as f64;
        self.last_price = (self.last_price + step as f64 * self.tick_size).max(floor * 2.0);

        let bids = (0..LEVEL_COUNT)
            .map(|level| {
                let price = self.last_price - (level as f64 + 1.0) * self.tick_size;
                SnapshotLevel::new(price, self.random_volume(level))
            })
            .collect();
        let asks = (0..LEVEL_COUNT)
            .map(|level| {
                let price = self.last_price + level as f64 * self.tick_size;
                SnapshotLevel::new(price, self.random_volume(level))
            })
            .collect();

        Snapshot::new(bids, asks)
    }

    /// 离盘口越远挂单越多，偶尔出现大单
    fn random_volume(&mut self, level: usize) -> f64 {
        let depth_factor = 1.0 + level as f64 * 0.5;
        let mut volume = self.base_volume * depth_factor * self.rng.gen_range(0.2..1.8);
        if self.rng.gen_bool(0.1) {
            volume *= 100.0;
        }
        volume.round()
    }
}
