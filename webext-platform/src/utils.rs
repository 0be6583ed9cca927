use crate::error::PlatformError;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;

pub(crate) fn get_api_namespace(root: &JsValue, name: &str) -> Result<Object, PlatformError> {
	Reflect::get(root, &name.into())
		.map_err(|_| PlatformError::ApiNotFound(name.to_owned()))?
		.dyn_into()
		.map_err(|_| PlatformError::ApiNotFound(name.to_owned()))
}

// Distinguishes a present marker from `undefined`/`null`, which is what
// vendor-global sniffing cares about.
pub(crate) fn get_member(target: &JsValue, name: &str) -> Option<JsValue> {
	Reflect::get(target, &name.into()).ok().filter(|v| !v.is_undefined() && !v.is_null())
}

pub(crate) fn has_member(target: &JsValue, name: &str) -> bool {
	get_member(target, name).is_some()
}

pub(crate) fn call_fn(api: &Object, method: &str, args: &[JsValue]) -> Result<JsValue, PlatformError> {
	let func: Function = Reflect::get(api, &method.into())?.dyn_into()?;
	let js_args = args.iter().cloned().collect::<js_sys::Array>();
	func.apply(&api.into(), &js_args).map_err(Into::into)
}
