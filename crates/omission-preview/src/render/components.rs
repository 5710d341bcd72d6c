//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is when a token is placed in a URL.
const TOKEN_URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Inline CSS for all pages.
///
/// Paper background, black ink, no radii. The two faces are served from
/// `/fonts/` so the inline card matches the rasterized exports.
pub const PAGE_CSS: &str = r#"
@font-face{font-family:"Playfair Display";src:url(/fonts/serif.ttf) format("truetype");font-weight:400 900;font-display:swap}
@font-face{font-family:"IBM Plex Mono";src:url(/fonts/mono.ttf) format("truetype");font-weight:400 500;font-display:swap}
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#FAFAFA;--fg:#000;--fg2:#666;--fg3:#999;--serif:"Playfair Display",Georgia,serif;--mono:"IBM Plex Mono",ui-monospace,Menlo,monospace}
body{font-family:var(--serif);color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%;display:flex;flex-direction:column;gap:3rem}
a{color:inherit;text-decoration:none}
.masthead{display:flex;flex-direction:column;gap:.5rem}
.masthead h1{font-weight:700;letter-spacing:-.02em;line-height:1;font-size:clamp(3rem,5vw + 1rem,5rem)}
.tagline{color:var(--fg2);font-size:clamp(1rem,2vw,1.125rem)}

.record-form{display:flex;flex-direction:column;gap:.5rem}
.record-row{display:flex;border:1px solid var(--fg)}
.record-row input{flex:1;min-width:0;background:transparent;border:0;border-right:1px solid rgba(0,0,0,.1);padding:0 1.25rem;height:3.5rem;font-family:var(--serif);font-size:clamp(1.1rem,3.5vw,1.3rem);color:var(--fg);border-radius:0}
.record-row input::placeholder{color:#A8A8A8;letter-spacing:.15em;text-transform:uppercase}
.record-row input:focus{outline:none}
.record-row button{padding:0 1.75rem;font-family:var(--mono);font-size:11px;font-weight:500;text-transform:uppercase;letter-spacing:.2em;background:var(--fg);color:var(--bg);border:0;border-radius:0;cursor:pointer}
.record-row button:disabled{opacity:.5;cursor:not-allowed}
.record-meta{display:flex;justify-content:space-between;padding:0 .25rem;font-family:var(--mono);font-size:10px;letter-spacing:.08em;color:#9A9A9A}
.record-count{color:#B0B0B0;letter-spacing:.12em}

.card{width:100%}
.card svg{display:block;width:100%;height:auto}

.controls{display:flex;flex-wrap:wrap;gap:2rem}
.control{font-family:var(--mono);font-size:12px;text-transform:uppercase;letter-spacing:.2em;background:none;border:0;color:var(--fg);cursor:pointer;padding:0}
.control:hover{color:rgba(0,0,0,.7)}
.control:disabled{opacity:.5}
.control.quiet{color:var(--fg3)}
.control.quiet:hover{color:var(--fg)}

.footer{margin-top:3rem;font-family:var(--mono);font-size:10px;letter-spacing:.12em;color:var(--fg3);text-transform:uppercase}

@media(max-width:640px){
.record-row{flex-direction:column}
.record-row input{border-right:0;border-bottom:1px solid rgba(0,0,0,.1)}
.record-row button{height:3.5rem}
.controls{flex-direction:column;gap:1rem}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Georgia,serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#FAFAFA;color:#000;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#000;font-family:ui-monospace,Menlo,monospace;font-size:12px;text-transform:uppercase;letter-spacing:.2em}
"#;

/// Content-Security-Policy header value.
///
/// Allows inline styles and the small inline scripts for the form and
/// copy-to-clipboard. Fonts and images only from this origin.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src 'self' data:; font-src 'self'; connect-src 'self'; form-action 'self'; frame-ancestors 'none'";

/// Render the full HTML page shell with `<head>`, OG tags, and body content.
pub fn page_shell(
    title: &str,
    description: &str,
    canonical_url: &str,
    og: OpenGraphData<'_>,
    body_content: Markup,
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="theme-color" content="#FAFAFA";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical_url);

                // Open Graph
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content=(og.og_type);
                meta property="og:locale" content="en_US";
                @if let Some(image) = &og.image {
                    meta property="og:image" content=(image.url);
                    meta property="og:image:width" content=(image.width);
                    meta property="og:image:height" content=(image.height);
                }

                // Twitter Card
                meta name="twitter:card" content=(og.twitter_card_type);
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);
                @if let Some(image) = &og.image {
                    meta name="twitter:image" content=(image.url);
                }

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
                footer class="footer" { (site_name) }
            }
        }
    }
}

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    /// OG title.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// OG type (e.g., "article", "website").
    pub og_type: &'a str,
    /// Preview image, if the page has one.
    pub image: Option<OgImage>,
    /// Twitter card type ("summary", "summary_large_image").
    pub twitter_card_type: &'a str,
}

/// An absolute preview image URL with its pixel size.
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Page heading with the tagline, linking back home.
pub fn masthead(heading: &str) -> Markup {
    html! {
        header class="masthead" {
            a href="/" { h1 { (heading) } }
            p class="tagline" { (TAGLINE) }
        }
    }
}

/// The product tagline.
pub const TAGLINE: &str = "Record what you didn\u{2019}t give into.";

/// Percent-encode a token for use in a path segment or query value.
///
/// Encoder output passes through unchanged; only hand-edited date
/// segments can carry characters that need escaping.
pub fn url_token(token: &str) -> String {
    utf8_percent_encode(token, TOKEN_URL_SAFE).to_string()
}

/// Truncate a string to at most `max_len` bytes, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
