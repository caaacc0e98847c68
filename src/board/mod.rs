//! 卡牌顺序的纯逻辑部分（排列、洗牌、排序、配置与错误），不依赖 DOM。

pub mod config;
pub mod error;
pub mod order;

pub use config::{BoardConfig, TOTAL_CARDS};
pub use error::BoardError;
pub use order::{CardValue, IntegrityError, OrderSequence, SortMode, UnknownSortMode};
