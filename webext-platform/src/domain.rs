use log::debug;
use psl::{List, Psl};
use std::net::Ipv4Addr;
use url::Url;

/// Reduces a URL or bare host to its public-registrable domain, e.g.
/// `https://www.mail.example.co.uk/inbox` to `example.co.uk`.
///
/// `localhost` and dotted-quad IPv4 hosts pass through verbatim when the
/// input carries an `http`/`https` scheme. Scheme-prefixed hosts the suffix
/// list cannot reduce fall back to the full hostname; bare strings instead
/// yield `None`.
pub fn registrable_domain(uri: &str) -> Option<String> {
	let uri = uri.trim();
	if uri.is_empty() {
		return None;
	}

	if (uri.starts_with("http://") || uri.starts_with("https://"))
		&& let Ok(url) = Url::parse(uri)
		&& let Some(host) = url.host_str()
	{
		if host == "localhost" || is_ipv4(host) {
			return Some(host.to_owned());
		}
		return match list_domain(host) {
			Some(domain) => Some(domain),
			None => {
				debug!("no registrable domain for {host:?}, keeping hostname");
				Some(host.to_owned())
			},
		};
	}

	// Bare strings get no hostname fallback.
	list_domain(uri)
}

// Suffix-list reduction. Requires a known public suffix so that garbage
// like a numeric terminal label never yields a "domain" via the implicit
// wildcard rule.
fn list_domain(host: &str) -> Option<String> {
	let host = host.to_ascii_lowercase();
	let domain = List.domain(host.as_bytes())?;
	if !domain.suffix().is_known() {
		return None;
	}
	std::str::from_utf8(domain.as_bytes()).ok().map(str::to_owned)
}

fn is_ipv4(host: &str) -> bool {
	host.parse::<Ipv4Addr>().is_ok()
}
