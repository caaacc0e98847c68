use std::collections::BTreeMap;
use web_sys::Element;

use crate::board::CardValue;

/// 卡牌数值到已渲染元素的固定映射。
#[derive(Debug, Default)]
pub(crate) struct CardTable {
    cards: BTreeMap<CardValue, Element>,
}

impl CardTable {
    pub(crate) fn insert(&mut self, value: CardValue, el: Element) {
        self.cards.insert(value, el);
    }

    pub(crate) fn get(&self, value: CardValue) -> Option<&Element> {
        self.cards.get(&value)
    }

    pub(crate) fn len(&self) -> usize {
        self.cards.len()
    }
}
