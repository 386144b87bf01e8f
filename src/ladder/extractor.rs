/// 从行情快照中提取价格和数量
///
/// 不做补齐或截断，来源给多少档就提取多少档

use super::snapshot::{Quote, Snapshot, SnapshotLevel};

/// 单边的价格列表和原始数量列表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideQuotes {
    pub prices: Vec<Option<Quote>>,
    pub volumes: Vec<Option<Quote>>,
}

impl SideQuotes {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// 买卖两边的提取结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedQuotes {
    pub buy: SideQuotes,
    pub sell: SideQuotes,
}

/// 提取单边价格和数量
pub fn extract_side(levels: &[SnapshotLevel]) -> SideQuotes {
    let mut side = SideQuotes {
        prices: Vec::with_capacity(levels.len()),
        volumes: Vec::with_capacity(levels.len()),
    };

    for level in levels {
        side.prices.push(level.price.clone());
        side.volumes.push(level.total_level_vol.clone());
    }

    side
}

/// 提取买卖两边，bids为买盘，asks为卖盘
pub fn extract(snapshot: &Snapshot) -> ExtractedQuotes {
    ExtractedQuotes {
        buy: extract_side(snapshot.bids()),
        sell: extract_side(snapshot.asks()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keeps_source_order_and_length() {
        let snapshot = Snapshot::new(
            vec![
                SnapshotLevel::new(10.0, 100.0),
                SnapshotLevel::new(9.9, 200.0),
            ],
            (0..7).map(|i| SnapshotLevel::new(10.1 + i as f64, 300.0)).collect(),
        );

        let extracted = extract(&snapshot);
        assert_eq!(extracted.buy.len(), 2);
        assert_eq!(extracted.sell.len(), 7);
        assert_eq!(extracted.buy.prices[1], Some(Quote::Number(9.9)));
        assert_eq!(extracted.buy.volumes[0], Some(Quote::Number(100.0)));
    }

    #[test]
    fn test_missing_sides_are_empty() {
        let extracted = extract(&Snapshot::default());
        assert!(extracted.buy.is_empty());
        assert!(extracted.sell.is_empty());
    }
}
