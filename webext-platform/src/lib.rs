pub mod dom;
pub mod domain;
pub mod error;
pub mod types;
pub mod views;

mod device;
mod utils;

use error::PlatformError;
use js_sys::Object;
use std::cell::OnceCell;
pub use types::{DeviceType, HostEnv};
use views::{ExtensionViews, OpenViews};
use wasm_bindgen::prelude::*;

/// One detector instance over an injected [`HostEnv`]. Detection and the
/// analytics lookup each run at most once; the host cannot change browser
/// identity mid-session, so the caches are never invalidated.
pub struct Platform {
	env: HostEnv,
	device: OnceCell<DeviceType>,
	analytics_id: OnceCell<Option<&'static str>>,
}

impl Platform {
	pub fn new(env: HostEnv) -> Self {
		Self { env, device: OnceCell::new(), analytics_id: OnceCell::new() }
	}

	pub fn env(&self) -> &HostEnv {
		&self.env
	}

	pub fn device(&self) -> DeviceType {
		*self.device.get_or_init(|| device::detect(&self.env))
	}

	pub fn device_name(&self) -> &'static str {
		self.device().name()
	}

	pub fn is_firefox(&self) -> bool {
		self.device() == DeviceType::Firefox
	}

	pub fn is_chrome(&self) -> bool {
		self.device() == DeviceType::Chrome
	}

	pub fn is_edge(&self) -> bool {
		self.device() == DeviceType::Edge
	}

	pub fn is_opera(&self) -> bool {
		self.device() == DeviceType::Opera
	}

	pub fn is_vivaldi(&self) -> bool {
		self.device() == DeviceType::Vivaldi
	}

	pub fn is_safari(&self) -> bool {
		self.device() == DeviceType::Safari
	}

	pub fn analytics_id(&self) -> Option<&'static str> {
		*self.analytics_id.get_or_init(|| types::analytics_id_for(self.device()))
	}

	/// The view kind the host uses for its sidebar surface, where one
	/// exists: `sidebar` on Firefox, `sidebar_panel` on Opera.
	pub fn sidebar_view_kind(&self) -> Option<&'static str> {
		if self.env.has_chrome_sidebar_action && self.is_firefox() {
			Some("sidebar")
		} else if self.is_opera() && self.env.has_opera_sidebar_action {
			Some("sidebar_panel")
		} else {
			None
		}
	}

	/// True when any of the extension's view surfaces (popup, sidebar, tab)
	/// is currently open.
	pub fn is_view_open(&self, views: &dyn OpenViews) -> bool {
		if views.open_count("popup") > 0 {
			return true;
		}
		if let Some(kind) = self.sidebar_view_kind()
			&& views.open_count(kind) > 0
		{
			return true;
		}
		views.open_count("tab") > 0
	}
}

/// The live host context: the extension API root plus a [`Platform`] built
/// from the real window.
pub struct Host {
	api_root: Object,
	platform: Platform,
}

impl Host {
	pub fn platform(&self) -> &Platform {
		&self.platform
	}

	pub fn views(&self) -> Result<ExtensionViews, PlatformError> {
		ExtensionViews::new(&self.api_root)
	}

	pub fn is_view_open(&self) -> Result<bool, PlatformError> {
		Ok(self.platform.is_view_open(&self.views()?))
	}
}

pub fn init() -> Result<Host, PlatformError> {
	let window = web_sys::window().ok_or(PlatformError::ApiNotFound("window".into()))?;
	let platform = Platform::new(HostEnv::from_window(&window));

	let api_root = js_sys::Reflect::get(&window, &"chrome".into())
		.and_then(|v| v.dyn_into::<Object>())
		.or_else(|_| js_sys::Reflect::get(&window, &"browser".into()).and_then(|v| v.dyn_into::<Object>()))
		.map_err(|_| PlatformError::UnsupportedBrowser)?;

	Ok(Host { api_root, platform })
}
