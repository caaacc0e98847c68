pub mod board;
pub mod utils;
pub mod view;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::str::FromStr;
use wasm_bindgen::prelude::*;

pub use board::{
    BoardConfig, BoardError, CardValue, IntegrityError, OrderSequence, SortMode, UnknownSortMode,
    TOTAL_CARDS,
};
pub use view::{create_el, resolve_container, BoardController};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn start() {
    utils::set_panic_hook();
}

fn to_js_error(error: BoardError) -> JsValue {
    to_value(&error).unwrap_or_else(|serialize_err| JsValue::from_str(&serialize_err.to_string()))
}

fn serde_to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn parse_config(options: JsValue) -> Result<BoardConfig, BoardError> {
    if options.is_undefined() || options.is_null() {
        return Ok(BoardConfig::default());
    }
    from_value(options).map_err(|error| BoardError::InvalidConfig {
        message: error.to_string(),
    })
}

fn parse_order(order: JsValue) -> Result<OrderSequence, JsValue> {
    let values: Vec<CardValue> = from_value(order).map_err(serde_to_js_error)?;
    OrderSequence::from_values(values).map_err(|error| to_js_error(error.into()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardSnapshot<'a> {
    order: &'a [CardValue],
    sort_mode: SortMode,
}

/// 挂载到页面上的洗牌/排序卡牌组件。
///
/// 按钮监听器只持有组件的弱引用：JS 端调用 `free()` 后监听器随之移除，按钮不再响应，
/// 已渲染的 DOM 保持原样。需要按钮持续可用时，请保留 `CardBoard` 实例的引用。
#[wasm_bindgen]
pub struct CardBoard {
    controller: BoardController,
}

#[wasm_bindgen]
impl CardBoard {
    /// `target` 可以是元素引用或元素 id；`options` 为可选的配置对象。
    #[wasm_bindgen(constructor)]
    pub fn new(target: JsValue, options: JsValue) -> Result<CardBoard, JsValue> {
        let mounted =
            parse_config(options).and_then(|config| BoardController::mount(&target, config));
        match mounted {
            Ok(controller) => Ok(CardBoard { controller }),
            Err(error) => {
                utils::warn(&format!("card board: {} ({error})", error.kind()));
                Err(to_js_error(error))
            }
        }
    }

    pub fn build(&self) -> Result<(), JsValue> {
        self.controller.build().map_err(to_js_error)
    }

    pub fn render(&self) {
        self.controller.render();
    }

    pub fn shuffle(&self) {
        self.controller.shuffle();
    }

    pub fn sort(&self) {
        self.controller.sort();
    }

    #[wasm_bindgen(js_name = "handleShuffle")]
    pub fn handle_shuffle(&self) {
        self.controller.handle_shuffle();
    }

    #[wasm_bindgen(js_name = "handleSort")]
    pub fn handle_sort(&self) {
        self.controller.handle_sort();
    }

    pub fn order(&self) -> Vec<u8> {
        self.controller.order().into()
    }

    #[wasm_bindgen(js_name = "isSorted")]
    pub fn is_sorted(&self) -> bool {
        self.controller.order().is_ascending()
    }

    #[wasm_bindgen(js_name = "stateJson")]
    pub fn state_json(&self) -> Result<String, JsValue> {
        let order = self.controller.order();
        let snapshot = BoardSnapshot {
            order: order.values(),
            sort_mode: self.controller.sort_mode(),
        };
        serde_json::to_string(&snapshot).map_err(serde_to_js_error)
    }
}

/// 对传入的顺序数组排序后返回，`mode` 缺省为数值排序，无法识别时返回 `InvalidConfig`。
#[wasm_bindgen(js_name = "sortOrder")]
pub fn sort_order(order: JsValue, mode: Option<String>) -> Result<JsValue, JsValue> {
    let mut order = parse_order(order)?;
    let mode = match mode.as_deref() {
        Some(value) => SortMode::from_str(value).map_err(|error| {
            to_js_error(BoardError::InvalidConfig {
                message: error.to_string(),
            })
        })?,
        None => SortMode::default(),
    };
    order.sort(mode);
    to_value(&order).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "shuffleOrder")]
pub fn shuffle_order(order: JsValue, seed: Option<u32>) -> Result<JsValue, JsValue> {
    let mut order = parse_order(order)?;
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(u64::from(seed)),
        None => SmallRng::from_entropy(),
    };
    order.shuffle(&mut rng);
    to_value(&order).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "validateOrder")]
pub fn validate_order(order: JsValue) -> Result<(), JsValue> {
    parse_order(order).map(|_| ())
}
