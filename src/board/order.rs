use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// 卡牌数值，从 1 开始计数。
pub type CardValue = u8;

/// 排序时使用的比较方式。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SortMode {
    /// 按数值升序。
    Numeric,
    /// 按字符串字典序比较，`10` 会排在 `2` 之前。
    Lexicographic,
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Numeric
    }
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Numeric => "numeric",
            SortMode::Lexicographic => "lexicographic",
        }
    }
}

/// 无法识别的排序方式名称。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortMode(pub String);

impl fmt::Display for UnknownSortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort mode `{}`, expected numeric or lexicographic",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortMode {}

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" | "number" => Ok(SortMode::Numeric),
            "lexicographic" | "legacy" | "string" => Ok(SortMode::Lexicographic),
            _ => Err(UnknownSortMode(s.to_string())),
        }
    }
}

// 反序列化与 `FromStr` 共用同一套别名。
impl TryFrom<String> for SortMode {
    type Error = UnknownSortMode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum IntegrityError {
    Empty,
    ValueOutOfRange { value: CardValue, len: usize },
    DuplicateValue { value: CardValue },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::Empty => write!(f, "order sequence is empty"),
            IntegrityError::ValueOutOfRange { value, len } => {
                write!(f, "card value {value} is outside 1..={len}")
            }
            IntegrityError::DuplicateValue { value } => {
                write!(f, "card value {value} appears more than once")
            }
        }
    }
}

impl std::error::Error for IntegrityError {}

/// 当前展示顺序，始终是 1..=N 的一个排列。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<CardValue>", into = "Vec<CardValue>")]
pub struct OrderSequence {
    values: Vec<CardValue>,
}

impl OrderSequence {
    pub fn ascending(len: CardValue) -> Self {
        Self {
            values: (1..=len).collect(),
        }
    }

    pub fn from_values(values: Vec<CardValue>) -> Result<Self, IntegrityError> {
        let sequence = Self { values };
        sequence.integrity_check()?;
        Ok(sequence)
    }

    /// 校验排列约束：非空、无越界、无重复。
    ///
    /// 长度为 N 且满足这三条时，1..=N 中每个值都恰好出现一次。
    pub fn integrity_check(&self) -> Result<(), IntegrityError> {
        if self.values.is_empty() {
            return Err(IntegrityError::Empty);
        }
        let len = self.values.len();
        let mut seen = HashSet::with_capacity(len);
        for &value in &self.values {
            if value == 0 || usize::from(value) > len {
                return Err(IntegrityError::ValueOutOfRange { value, len });
            }
            if !seen.insert(value) {
                return Err(IntegrityError::DuplicateValue { value });
            }
        }
        Ok(())
    }

    pub fn values(&self) -> &[CardValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_ascending(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] < pair[1])
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.values.shuffle(rng);
    }

    pub fn sort(&mut self, mode: SortMode) {
        match mode {
            SortMode::Numeric => self.values.sort_unstable(),
            // 稳定排序，比较的是十进制文本。
            SortMode::Lexicographic => self.values.sort_by_cached_key(|value| value.to_string()),
        }
    }
}

impl TryFrom<Vec<CardValue>> for OrderSequence {
    type Error = IntegrityError;

    fn try_from(values: Vec<CardValue>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<OrderSequence> for Vec<CardValue> {
    fn from(sequence: OrderSequence) -> Self {
        sequence.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn assert_permutation(sequence: &OrderSequence, len: usize) {
        let mut sorted = sequence.values().to_vec();
        sorted.sort_unstable();
        let expected: Vec<CardValue> = (1..=len as CardValue).collect();
        assert_eq!(sorted, expected, "sequence should be a permutation of 1..={len}");
    }

    #[test]
    fn ascending_starts_in_display_order() {
        let sequence = OrderSequence::ascending(9);
        assert_eq!(sequence.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(sequence.is_ascending());
        assert!(sequence.integrity_check().is_ok());
    }

    #[test]
    fn from_values_rejects_broken_permutations() {
        assert_eq!(
            OrderSequence::from_values(Vec::new()),
            Err(IntegrityError::Empty)
        );
        assert_eq!(
            OrderSequence::from_values(vec![1, 2, 2]),
            Err(IntegrityError::DuplicateValue { value: 2 })
        );
        assert_eq!(
            OrderSequence::from_values(vec![0, 1, 2]),
            Err(IntegrityError::ValueOutOfRange { value: 0, len: 3 })
        );
        assert_eq!(
            OrderSequence::from_values(vec![1, 2, 4]),
            Err(IntegrityError::ValueOutOfRange { value: 4, len: 3 })
        );
        assert!(OrderSequence::from_values(vec![3, 1, 2]).is_ok());
    }

    #[test]
    fn numeric_sort_restores_ascending_order() {
        let mut sequence = OrderSequence::from_values(vec![9, 3, 7, 1, 5, 2, 8, 4, 6])
            .expect("valid permutation");
        sequence.sort(SortMode::Numeric);
        assert_eq!(sequence, OrderSequence::ascending(9));
    }

    #[test]
    fn sorting_an_already_sorted_board_is_a_no_op() {
        let mut sequence = OrderSequence::ascending(9);
        sequence.sort(SortMode::default());
        assert_eq!(sequence.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn numeric_sort_handles_two_digit_values() {
        let mut sequence =
            OrderSequence::from_values(vec![12, 2, 10, 1, 11, 3, 9, 4, 8, 5, 7, 6])
                .expect("valid permutation");
        sequence.sort(SortMode::Numeric);
        assert_eq!(sequence, OrderSequence::ascending(12));
    }

    #[test]
    fn lexicographic_sort_keeps_legacy_string_ordering() {
        let mut sequence =
            OrderSequence::from_values(vec![12, 2, 10, 1, 11, 3, 9, 4, 8, 5, 7, 6])
                .expect("valid permutation");
        sequence.sort(SortMode::Lexicographic);
        assert_eq!(
            sequence.values(),
            &[1, 10, 11, 12, 2, 3, 4, 5, 6, 7, 8, 9]
        );
        assert!(!sequence.is_ascending());
        assert_permutation(&sequence, 12);
    }

    #[test]
    fn lexicographic_sort_matches_numeric_for_single_digits() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut legacy = OrderSequence::ascending(9);
        legacy.shuffle(&mut rng);
        let mut numeric = legacy.clone();

        legacy.sort(SortMode::Lexicographic);
        numeric.sort(SortMode::Numeric);
        assert_eq!(legacy, numeric);
    }

    #[test]
    fn shuffle_always_yields_a_permutation() {
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut sequence = OrderSequence::ascending(9);
            sequence.shuffle(&mut rng);
            assert_permutation(&sequence, 9);
            assert!(sequence.integrity_check().is_ok());
        }
    }

    #[test]
    fn shuffle_with_same_seed_is_reproducible() {
        let mut first = OrderSequence::ascending(9);
        let mut second = OrderSequence::ascending(9);
        first.shuffle(&mut SmallRng::seed_from_u64(42));
        second.shuffle(&mut SmallRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_then_sort_returns_to_ascending() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut sequence = OrderSequence::ascending(9);
        for _ in 0..10 {
            sequence.shuffle(&mut rng);
        }
        sequence.sort(SortMode::Numeric);
        assert_eq!(sequence.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn deserialize_validates_permutation() {
        let parsed: OrderSequence = serde_json::from_str("[2,3,1]").expect("valid order");
        assert_eq!(parsed.values(), &[2, 3, 1]);

        let duplicate = serde_json::from_str::<OrderSequence>("[1,1,2]");
        assert!(duplicate.is_err(), "duplicates must be rejected");
    }

    #[test]
    fn sort_mode_parses_aliases() {
        assert_eq!(SortMode::from_str("Numeric"), Ok(SortMode::Numeric));
        assert_eq!(SortMode::from_str("legacy"), Ok(SortMode::Lexicographic));
        assert_eq!(SortMode::from_str("STRING"), Ok(SortMode::Lexicographic));
        assert_eq!(
            SortMode::from_str("random"),
            Err(UnknownSortMode("random".to_string()))
        );
    }

    #[test]
    fn sort_mode_deserializes_with_the_same_aliases() {
        let legacy: SortMode = serde_json::from_str(r#""Legacy""#).expect("alias parses");
        assert_eq!(legacy, SortMode::Lexicographic);
        let number: SortMode = serde_json::from_str(r#""number""#).expect("alias parses");
        assert_eq!(number, SortMode::Numeric);
        assert!(serde_json::from_str::<SortMode>(r#""random""#).is_err());

        let serialized = serde_json::to_string(&SortMode::Lexicographic).expect("serialize");
        assert_eq!(serialized, r#""lexicographic""#);
    }
}
