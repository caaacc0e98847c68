use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::board::BoardError;

/// 创建指定标签的元素，添加样式类并追加到父节点下。
pub fn create_el(
    document: &Document,
    tag: &str,
    parent: &Element,
    classes: &[&str],
) -> Result<Element, BoardError> {
    let el = document.create_element(tag).map_err(dom_error)?;
    let class_list = el.class_list();
    for class in classes {
        class_list.add_1(class).map_err(dom_error)?;
    }
    parent.append_child(&el).map_err(dom_error)?;
    Ok(el)
}

pub fn current_document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// 将构造参数解析为容器元素：字符串按 id 查找，元素引用直接使用。
pub fn resolve_container(document: &Document, target: &JsValue) -> Result<Element, BoardError> {
    if let Some(id) = target.as_string() {
        let id = id.strip_prefix('#').unwrap_or(&id);
        if id.is_empty() {
            return Err(BoardError::missing_container("an empty id"));
        }
        return document
            .get_element_by_id(id)
            .ok_or_else(|| BoardError::missing_container(format!("#{id}")));
    }
    target
        .dyn_ref::<Element>()
        .cloned()
        .ok_or_else(|| BoardError::missing_container(describe_target(target)))
}

fn describe_target(target: &JsValue) -> String {
    if target.is_undefined() {
        "undefined".to_string()
    } else if target.is_null() {
        "null".to_string()
    } else {
        "a non-element value".to_string()
    }
}

pub(crate) fn dom_error(error: JsValue) -> BoardError {
    let message = error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"));
    BoardError::Dom { message }
}
