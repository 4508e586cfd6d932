//! Errors raised while binding effects to the page.
//!
//! None of these ever reach the visitor: callers log them and carry on
//! without the effect.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why an effect could not be attached.
#[derive(Debug, Error)]
pub enum MountError {
	#[error("no browser window or document")]
	NoWindow,
	#[error("element `{0}` not found")]
	MissingElement(String),
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for MountError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
