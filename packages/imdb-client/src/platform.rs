//! Platform name derivation from website URLs
//!
//! Streaming services rarely appear by name in the external API's data, but
//! the official website URL almost always identifies them. The heuristic here
//! turns a URL like `https://www.netflix.com/title/123` into `Netflix`.

use url::Url;

/// Fixed label for Apple's streaming service, whose hostnames
/// (`tv.apple.com`) defeat the generic heuristic
const APPLE_TV_LABEL: &str = "Apple TV+";

/// Derive a human-readable platform name from a website URL
///
/// The heuristic: take the URL's host, strip a leading `www.`, strip the TLD
/// suffix (everything from the last `.` onward) when a dot remains, and
/// capitalize the first letter. Any host containing `apple` maps to the fixed
/// label `Apple TV+`.
///
/// Returns an empty string when the input is empty or not a parseable URL;
/// the caller stores the platform as a best-effort hint, not a required field.
pub fn platform_from_url(website: &str) -> String {
    if website.is_empty() {
        return String::new();
    }

    let host = match Url::parse(website) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => return String::new(),
        },
        Err(_) => return String::new(),
    };

    let stripped = host.strip_prefix("www.").unwrap_or(&host);
    let name = match stripped.rfind('.') {
        Some(idx) if idx > 0 => &stripped[..idx],
        _ => stripped,
    };

    if name.to_lowercase().contains("apple") {
        return APPLE_TV_LABEL.to_string();
    }

    capitalize(name)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.amazon.com/dp/B08WJL9H7L", "Amazon")]
    #[case("https://tv.apple.com/us/show/severance", "Apple TV+")]
    #[case("https://hbomax.com", "Hbomax")]
    #[case("https://www.netflix.com/title/70143836", "Netflix")]
    #[case("https://www.disneyplus.com/series/andor", "Disneyplus")]
    fn derives_platform_names(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(platform_from_url(url), expected);
    }

    #[test]
    fn test_apple_is_case_insensitive() {
        assert_eq!(platform_from_url("https://TV.APPLE.COM/show"), APPLE_TV_LABEL);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(platform_from_url(""), "");
    }

    #[test]
    fn test_unparseable_url() {
        assert_eq!(platform_from_url("not a url"), "");
    }

    #[test]
    fn test_url_without_host() {
        assert_eq!(platform_from_url("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_subdomain_keeps_inner_labels() {
        // Only the TLD suffix is stripped, inner labels survive
        assert_eq!(platform_from_url("https://play.max.com"), "Play.max");
    }
}
