use serde::{Deserialize, Serialize};
use std::fmt;

use super::order::IntegrityError;

/// 组件对外暴露的错误，`kind` 字段是稳定的错误标识。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum BoardError {
    MissingContainer { target: String },
    InvalidConfig { message: String },
    IntegrityViolation { error: IntegrityError },
    /// 宿主 DOM 调用失败，正常浏览器环境下不会出现。
    Dom { message: String },
}

impl BoardError {
    pub fn missing_container(target: impl Into<String>) -> Self {
        BoardError::MissingContainer {
            target: target.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BoardError::MissingContainer { .. } => "MissingContainer",
            BoardError::InvalidConfig { .. } => "InvalidConfig",
            BoardError::IntegrityViolation { .. } => "IntegrityViolation",
            BoardError::Dom { .. } => "Dom",
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingContainer { target } => {
                write!(f, "no container element could be resolved from {target}")
            }
            BoardError::InvalidConfig { message } => write!(f, "invalid board options: {message}"),
            BoardError::IntegrityViolation { error } => write!(f, "invalid card order: {error}"),
            BoardError::Dom { message } => write!(f, "DOM operation failed: {message}"),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<IntegrityError> for BoardError {
    fn from(error: IntegrityError) -> Self {
        BoardError::IntegrityViolation { error }
    }
}
