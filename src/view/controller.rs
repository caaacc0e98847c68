use gloo_events::EventListener;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event};

use super::cards::CardTable;
use super::dom::{create_el, current_document, dom_error, resolve_container};
use crate::board::{BoardConfig, BoardError, OrderSequence, SortMode, TOTAL_CARDS};
use crate::utils;

const CONTAINER_CLASS: &str = "container";
const BUTTON_SECTION_CLASS: &str = "r-section";
const CARD_SECTION_CLASS: &str = "l-section";
const BUTTON_CLASS: &str = "btn";
const CARD_CLASS: &str = "card";
const CARD_TEXT_CLASS: &str = "card-text";

/// 卡牌面板控制器：持有顺序状态和卡牌元素，负责所有 DOM 写入。
pub struct BoardController {
    inner: Rc<BoardInner>,
}

struct BoardInner {
    document: Document,
    container: Element,
    config: BoardConfig,
    order: RefCell<OrderSequence>,
    cards: RefCell<CardTable>,
    card_section: RefCell<Option<Element>>,
    rng: RefCell<SmallRng>,
    listeners: RefCell<Vec<EventListener>>,
}

impl BoardController {
    /// 解析容器并构建界面。容器无法解析时直接返回错误，不会写入任何 DOM。
    pub fn mount(target: &JsValue, config: BoardConfig) -> Result<Self, BoardError> {
        let document = current_document()
            .ok_or_else(|| BoardError::missing_container("a page without a document"))?;
        let container = resolve_container(&document, target)?;
        let controller = Self::new(document, container, config);
        controller.build()?;
        Ok(controller)
    }

    fn new(document: Document, container: Element, config: BoardConfig) -> Self {
        let rng = config.rng();
        Self {
            inner: Rc::new(BoardInner {
                document,
                container,
                config,
                order: RefCell::new(OrderSequence::ascending(TOTAL_CARDS)),
                cards: RefCell::new(CardTable::default()),
                card_section: RefCell::new(None),
                rng: RefCell::new(rng),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// 每次调用都会追加一套新的按钮区和卡牌区，并以新卡牌替换元素表。
    pub fn build(&self) -> Result<(), BoardError> {
        let inner = &self.inner;
        let document = &inner.document;
        inner
            .container
            .class_list()
            .add_1(CONTAINER_CLASS)
            .map_err(dom_error)?;

        let button_section =
            create_el(document, "section", &inner.container, &[BUTTON_SECTION_CLASS])?;
        let card_section =
            create_el(document, "section", &inner.container, &[CARD_SECTION_CLASS])?;

        let shuffle_button = create_el(document, "button", &button_section, &[BUTTON_CLASS])?;
        shuffle_button.set_text_content(Some(&inner.config.shuffle_label));
        let sort_button = create_el(document, "button", &button_section, &[BUTTON_CLASS])?;
        sort_button.set_text_content(Some(&inner.config.sort_label));

        let mut cards = CardTable::default();
        for index in 0..TOTAL_CARDS {
            let value = index + 1;
            let card_class = format!("{CARD_CLASS}-{index}");
            let card = create_el(document, "div", &card_section, &[CARD_CLASS, card_class.as_str()])?;
            let text = create_el(document, "div", &card, &[CARD_TEXT_CLASS])?;
            text.set_text_content(Some(&value.to_string()));
            cards.insert(value, card);
        }

        if inner.config.debug {
            utils::log(&format!("card board: built {} cards", cards.len()));
        }
        *inner.cards.borrow_mut() = cards;
        *inner.card_section.borrow_mut() = Some(card_section);
        *inner.order.borrow_mut() = OrderSequence::ascending(TOTAL_CARDS);

        self.install_listeners(&shuffle_button, &sort_button);
        Ok(())
    }

    fn install_listeners(&self, shuffle_button: &Element, sort_button: &Element) {
        let board = Rc::downgrade(&self.inner);
        let on_shuffle = EventListener::new(shuffle_button, "click", move |_event: &Event| {
            with_board(&board, BoardInner::handle_shuffle);
        });
        let board = Rc::downgrade(&self.inner);
        let on_sort = EventListener::new(sort_button, "click", move |_event: &Event| {
            with_board(&board, BoardInner::handle_sort);
        });
        self.inner
            .listeners
            .borrow_mut()
            .extend([on_shuffle, on_sort]);
    }

    pub fn render(&self) {
        self.inner.render();
    }

    pub fn shuffle(&self) {
        self.inner.shuffle();
    }

    pub fn sort(&self) {
        self.inner.sort();
    }

    pub fn handle_shuffle(&self) {
        self.inner.handle_shuffle();
    }

    pub fn handle_sort(&self) {
        self.inner.handle_sort();
    }

    pub fn order(&self) -> OrderSequence {
        self.inner.order.borrow().clone()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.inner.config.sort_mode
    }
}

fn with_board(board: &Weak<BoardInner>, action: fn(&BoardInner)) {
    if let Some(board) = board.upgrade() {
        action(&board);
    }
}

impl BoardInner {
    fn render(&self) {
        let section = self.card_section.borrow();
        let Some(section) = section.as_ref() else {
            return;
        };
        // 只是摘下卡牌节点，元素表仍持有它们。
        section.set_text_content(None);
        let cards = self.cards.borrow();
        for &value in self.order.borrow().values() {
            let Some(card) = cards.get(value) else {
                utils::warn(&format!(
                    "card board: card {value} missing from the element table"
                ));
                continue;
            };
            if let Err(error) = section.append_child(card) {
                utils::warn(&format!(
                    "card board: failed to place card {value}: {}",
                    dom_error(error)
                ));
            }
        }
    }

    fn shuffle(&self) {
        let mut rng = self.rng.borrow_mut();
        let mut order = self.order.borrow_mut();
        order.shuffle(&mut *rng);
        if self.config.debug {
            utils::log(&format!("card board: shuffled to {:?}", order.values()));
        }
    }

    fn sort(&self) {
        let mut order = self.order.borrow_mut();
        order.sort(self.config.sort_mode);
        if self.config.debug {
            utils::log(&format!(
                "card board: sorted ({}) to {:?}",
                self.config.sort_mode.as_str(),
                order.values()
            ));
        }
    }

    fn handle_shuffle(&self) {
        self.shuffle();
        self.render();
    }

    fn handle_sort(&self) {
        self.sort();
        self.render();
    }
}
