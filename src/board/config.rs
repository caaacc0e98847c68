use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::order::{CardValue, SortMode};

/// 卡牌总数，固定不变。
pub const TOTAL_CARDS: CardValue = 9;

const DEFAULT_SHUFFLE_LABEL: &str = "Suffle";
const DEFAULT_SORT_LABEL: &str = "Sort";

/// 组件配置，所有字段都有默认值。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub shuffle_label: String,
    pub sort_label: String,
    pub sort_mode: SortMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub debug: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            shuffle_label: DEFAULT_SHUFFLE_LABEL.to_string(),
            sort_label: DEFAULT_SORT_LABEL.to_string(),
            sort_mode: SortMode::default(),
            seed: None,
            debug: false,
        }
    }
}

impl BoardConfig {
    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_labels(mut self, shuffle: impl Into<String>, sort: impl Into<String>) -> Self {
        self.shuffle_label = shuffle.into();
        self.sort_label = sort.into();
        self
    }

    pub(crate) fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}
