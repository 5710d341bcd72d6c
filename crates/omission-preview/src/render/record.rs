//! Record share page renderer.
//!
//! Shows the card inline as SVG, with download, copy-link and
//! record-again controls. Crawlers get the Open Graph image.

use maud::{Markup, PreEscaped, html};
use omission_core::Reference;

use super::card::{CardVariant, render_card};
use super::components::{
    OgImage, OpenGraphData, TAGLINE, masthead, page_shell, truncate, url_token,
};
use super::{DOWNLOAD_FILENAME, OPEN_GRAPH};

/// Copy the page URL; failures are only reported to the console.
const COPY_SCRIPT: &str = r#"
(function(){var b=document.getElementById("copy-link");if(!b)return;
b.addEventListener("click",function(){
Promise.resolve().then(function(){return navigator.clipboard.writeText(window.location.href)}).then(function(){
b.textContent="Copied";b.disabled=true;
setTimeout(function(){b.textContent="Copy Link";b.disabled=false},2000)
}).catch(function(){console.error("Failed to copy link")})})})();
"#;

/// Render the share page for a decoded reference.
pub fn render(reference: &Reference, base_url: &str, site_name: &str) -> Markup {
    let record = reference.record();
    let token = url_token(reference.as_str());
    let title = "WITHHOLD \u{2014} Record";
    let canonical = format!("{base_url}/r/{token}");

    let (og_width, og_height) = OPEN_GRAPH.size();
    let og = OpenGraphData {
        title,
        description: TAGLINE,
        og_type: "article",
        image: Some(OgImage {
            url: format!("{base_url}/api/og?ref={token}"),
            width: og_width,
            height: og_height,
        }),
        twitter_card_type: "summary_large_image",
    };

    let svg = render_card(&record.text, reference.date_digits(), CardVariant::Card);

    let body = html! {
        (masthead("WITHHOLD"))
        figure class="card" aria-label={ "Withheld: " (truncate(&record.text, 200)) } {
            (PreEscaped(svg))
        }
        nav class="controls" {
            a class="control" href={ "/r/" (token) "/card.png" } download=(DOWNLOAD_FILENAME) {
                "Download as PNG"
            }
            button class="control" id="copy-link" type="button" { "Copy Link" }
            a class="control quiet" href="/" { "Record new" }
        }
        script { (PreEscaped(COPY_SCRIPT)) }
    };

    page_shell(title, TAGLINE, &canonical, og, body, site_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference(text: &str) -> Reference {
        Reference::new(NaiveDate::from_ymd_opt(2026, 2, 17).unwrap(), text).unwrap()
    }

    #[test]
    fn record_page_has_card_and_controls() {
        let html = render(&reference("Checking notifications"), "https://o.example", "OMISSION")
            .into_string();

        assert!(html.contains("<title>WITHHOLD \u{2014} Record</title>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("REF-20260217"));
        assert!(html.contains("Checking notifications"));
        assert!(html.contains("Download as PNG"));
        assert!(html.contains("Copy Link"));
        assert!(html.contains("Record new"));
        assert!(html.contains(
            r#"href="/r/REF-20260217-Q2hlY2tpbmclMjBub3RpZmljYXRpb25z/card.png" download="withhold-record.png""#
        ));
    }

    #[test]
    fn record_page_points_crawlers_at_og_image() {
        let html = render(&reference("Checking notifications"), "https://o.example", "OMISSION")
            .into_string();

        assert!(html.contains(
            r#"<meta property="og:image" content="https://o.example/api/og?ref=REF-20260217-Q2hlY2tpbmclMjBub3RpZmljYXRpb25z">"#
        ));
        assert!(html.contains(r#"content="1200""#));
        assert!(html.contains(r#"content="630""#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://o.example/r/REF-20260217-Q2hlY2tpbmclMjBub3RpZmljYXRpb25z">"#
        ));
    }

    #[test]
    fn record_page_escapes_phrase() {
        let html = render(&reference("<img src=x>"), "https://o.example", "OMISSION").into_string();
        assert!(!html.contains("<img src=x>"));
        assert!(html.contains("&lt;img src=x&gt;"));
    }

    #[test]
    fn record_page_encodes_odd_date_segments_in_urls() {
        let reference: Reference = "REF-a&b-YQ".parse().unwrap();
        let html = render(&reference, "https://o.example", "OMISSION").into_string();
        assert!(html.contains("/api/og?ref=REF-a%26b-YQ"));
    }
}
