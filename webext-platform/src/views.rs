use crate::{
	error::PlatformError,
	utils::{call_fn, get_api_namespace},
};
use js_sys::Object;
use log::debug;
use wasm_bindgen::prelude::*;

// Extension pages advertise where they render through a `uilocation` query
// token. Popup is the default: a page with no token is the popup.

pub fn in_sidebar(search: &str) -> bool {
	!search.is_empty() && search.contains("uilocation=sidebar")
}

pub fn in_tab(search: &str) -> bool {
	!search.is_empty() && search.contains("uilocation=tab")
}

pub fn in_popout(search: &str) -> bool {
	!search.is_empty() && search.contains("uilocation=popout")
}

pub fn in_popup(search: &str) -> bool {
	search.is_empty() || !search.contains("uilocation=") || search.contains("uilocation=popup")
}

pub fn window_search(window: &web_sys::Window) -> String {
	window.location().search().unwrap_or_default()
}

pub fn window_in_sidebar(window: &web_sys::Window) -> bool {
	in_sidebar(&window_search(window))
}

pub fn window_in_tab(window: &web_sys::Window) -> bool {
	in_tab(&window_search(window))
}

pub fn window_in_popout(window: &web_sys::Window) -> bool {
	in_popout(&window_search(window))
}

pub fn window_in_popup(window: &web_sys::Window) -> bool {
	in_popup(&window_search(window))
}

/// Counts the extension's currently open view surfaces of a given kind
/// (`popup`, `tab`, `sidebar`, `sidebar_panel`). Supplied by the host
/// runtime; tests substitute fakes.
pub trait OpenViews {
	fn open_count(&self, kind: &str) -> usize;
}

pub struct ExtensionViews {
	api: Object,
}

impl ExtensionViews {
	pub(crate) fn new(api_root: &Object) -> Result<Self, PlatformError> {
		Ok(Self { api: get_api_namespace(api_root, "extension")? })
	}
}

impl OpenViews for ExtensionViews {
	fn open_count(&self, kind: &str) -> usize {
		let filter = Object::new();
		if js_sys::Reflect::set(&filter, &"type".into(), &kind.into()).is_err() {
			return 0;
		}
		match call_fn(&self.api, "getViews", &[filter.into()][..]) {
			Ok(views) => views.dyn_into::<js_sys::Array>().map(|v| v.length() as usize).unwrap_or(0),
			Err(e) => {
				debug!("getViews({kind}) failed: {e}");
				0
			},
		}
	}
}
