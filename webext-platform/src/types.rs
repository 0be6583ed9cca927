use crate::utils::{get_member, has_member};
use serde::{Deserialize, Serialize};

/// The browsers this crate can tell apart, plus `Unknown` for everything it
/// cannot. Safari is carried for the analytics table even though no
/// detection branch currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
	Chrome,
	Firefox,
	Opera,
	Edge,
	Vivaldi,
	Safari,
	Unknown,
}

impl DeviceType {
	pub fn name(self) -> &'static str {
		match self {
			Self::Chrome => "chrome",
			Self::Firefox => "firefox",
			Self::Opera => "opera",
			Self::Edge => "edge",
			Self::Vivaldi => "vivaldi",
			Self::Safari => "safari",
			Self::Unknown => "unknown",
		}
	}
}

pub(crate) const ANALYTICS_IDS: [(DeviceType, &str); 6] = [
	(DeviceType::Chrome, "UA-81915606-6"),
	(DeviceType::Firefox, "UA-81915606-7"),
	(DeviceType::Opera, "UA-81915606-8"),
	(DeviceType::Edge, "UA-81915606-9"),
	(DeviceType::Vivaldi, "UA-81915606-15"),
	(DeviceType::Safari, "UA-81915606-16"),
];

pub(crate) fn analytics_id_for(device: DeviceType) -> Option<&'static str> {
	ANALYTICS_IDS.iter().find(|(d, _)| *d == device).map(|(_, id)| *id)
}

/// Snapshot of the host environment the detector runs against: the
/// browser's self-reported identity string plus the vendor markers the page
/// exposes. Built from the live window via [`HostEnv::from_window`], or
/// assembled by hand where no window exists.
#[derive(Debug, Clone, Default)]
pub struct HostEnv {
	pub user_agent: String,
	/// `window.opr.addons`
	pub has_opera_addons: bool,
	/// `window.opera`
	pub has_opera_global: bool,
	/// `window.chrome`
	pub has_chrome_global: bool,
	/// `window.chrome.sidebarAction`
	pub has_chrome_sidebar_action: bool,
	/// `window.opr.sidebarAction`
	pub has_opera_sidebar_action: bool,
}

impl HostEnv {
	pub fn from_window(window: &web_sys::Window) -> Self {
		let user_agent = window.navigator().user_agent().unwrap_or_default();
		let opr = get_member(window, "opr");
		let chrome = get_member(window, "chrome");
		Self {
			user_agent,
			has_opera_addons: opr.as_ref().is_some_and(|o| has_member(o, "addons")),
			has_opera_global: has_member(window, "opera"),
			has_chrome_global: chrome.is_some(),
			has_chrome_sidebar_action: chrome.as_ref().is_some_and(|c| has_member(c, "sidebarAction")),
			has_opera_sidebar_action: opr.as_ref().is_some_and(|o| has_member(o, "sidebarAction")),
		}
	}
}
