//! DOM 部分：元素工厂、容器解析与组件控制器。

mod cards;
pub mod controller;
pub mod dom;

pub use controller::BoardController;
pub use dom::{create_el, resolve_container};
