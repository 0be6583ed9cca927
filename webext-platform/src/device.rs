use crate::types::{DeviceType, HostEnv};
use log::debug;

// Order matters: Firefox forks report "Gecko/", Opera and Vivaldi both
// carry a Chrome marker, so the marker probe comes last.
pub(crate) fn detect(env: &HostEnv) -> DeviceType {
	let ua = env.user_agent.as_str();
	let device = if ua.contains("Firefox") || ua.contains("Gecko/") {
		DeviceType::Firefox
	} else if env.has_opera_addons || env.has_opera_global || ua.contains(" OPR/") {
		DeviceType::Opera
	} else if ua.contains(" Edge/") {
		DeviceType::Edge
	} else if ua.contains(" Vivaldi/") {
		DeviceType::Vivaldi
	} else if env.has_chrome_global {
		DeviceType::Chrome
	} else {
		DeviceType::Unknown
	};
	debug!("detected {} for user agent {ua:?}", device.name());
	device
}

#[cfg(test)]
mod tests {
	use super::*;

	const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:115.0) Gecko/20100101 Firefox/115.0";
	const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
	const OPERA_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/106.0.0.0 Safari/537.36 OPR/92.0.0.0";
	const EDGE_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Safari/537.36 Edge/12.246";
	const VIVALDI_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36 Vivaldi/6.2";
	const SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.1 Safari/605.1.15";

	fn env_with_ua(user_agent: &str) -> HostEnv {
		HostEnv { user_agent: user_agent.to_owned(), ..HostEnv::default() }
	}

	#[test]
	fn firefox_from_user_agent() {
		assert_eq!(detect(&env_with_ua(FIREFOX_UA)), DeviceType::Firefox);
	}

	#[test]
	fn gecko_slash_counts_as_firefox() {
		assert_eq!(detect(&env_with_ua("SomeBrowser Gecko/20100101")), DeviceType::Firefox);
	}

	#[test]
	fn chrome_needs_the_vendor_marker() {
		// A Chrome user agent alone is not enough.
		assert_eq!(detect(&env_with_ua(CHROME_UA)), DeviceType::Unknown);
		let env = HostEnv { has_chrome_global: true, ..env_with_ua(CHROME_UA) };
		assert_eq!(detect(&env), DeviceType::Chrome);
	}

	#[test]
	fn opera_from_user_agent_token() {
		let env = HostEnv { has_chrome_global: true, ..env_with_ua(OPERA_UA) };
		assert_eq!(detect(&env), DeviceType::Opera);
	}

	#[test]
	fn opera_from_addons_marker() {
		let env = HostEnv { has_opera_addons: true, has_chrome_global: true, ..env_with_ua(CHROME_UA) };
		assert_eq!(detect(&env), DeviceType::Opera);
	}

	#[test]
	fn opera_from_legacy_global() {
		let env = HostEnv { has_opera_global: true, ..HostEnv::default() };
		assert_eq!(detect(&env), DeviceType::Opera);
	}

	#[test]
	fn edge_from_user_agent() {
		let env = HostEnv { has_chrome_global: true, ..env_with_ua(EDGE_UA) };
		assert_eq!(detect(&env), DeviceType::Edge);
	}

	#[test]
	fn vivaldi_from_user_agent() {
		let env = HostEnv { has_chrome_global: true, ..env_with_ua(VIVALDI_UA) };
		assert_eq!(detect(&env), DeviceType::Vivaldi);
	}

	#[test]
	fn firefox_wins_over_markers() {
		let env = HostEnv { has_opera_addons: true, has_chrome_global: true, ..env_with_ua(FIREFOX_UA) };
		assert_eq!(detect(&env), DeviceType::Firefox);
	}

	#[test]
	fn safari_is_never_detected() {
		// Safari has no positive branch; it classifies as Unknown.
		assert_eq!(detect(&env_with_ua(SAFARI_UA)), DeviceType::Unknown);
	}

	#[test]
	fn empty_environment_is_unknown() {
		assert_eq!(detect(&HostEnv::default()), DeviceType::Unknown);
	}
}
