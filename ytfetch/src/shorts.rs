//! Rewrite YouTube Shorts links to the regular watch form.

use url::{ParseError, Url};

fn is_youtube(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|host| host == "youtube.com" || host.ends_with(".youtube.com"))
}

fn shorts_id(url: &Url) -> Option<String> {
    if !is_youtube(url) {
        return None;
    }

    let mut segments = url.path_segments()?;

    if segments.next()? != "shorts" {
        return None;
    }

    segments
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Parse `raw`, assuming `https` when the scheme is missing (`youtube.com/shorts/x`).
fn parse_lenient(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{raw}")).ok(),
        Err(_) => None,
    }
}

/// `https://youtube.com/shorts/<id>` → `https://youtube.com/watch?v=<id>`.
///
/// A Shorts link without a scheme comes back as `https`. Anything else, including text
/// that does not parse as a URL, is returned unchanged.
pub fn normalize(raw: &str) -> String {
    let Some(mut url) = parse_lenient(raw) else {
        return raw.to_string();
    };

    let Some(id) = shorts_id(&url) else {
        return raw.to_string();
    };

    url.set_path("/watch");
    url.set_fragment(None);
    url.query_pairs_mut().clear().append_pair("v", &id);

    tracing::debug!(from = raw, to = %url, "rewrote shorts url");

    url.into()
}
