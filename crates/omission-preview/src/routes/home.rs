//! Home page with the recording form.

use axum::extract::State;
use axum::response::Response;
use maud::{PreEscaped, html};
use omission_core::MAX_TEXT_CHARS;

use crate::render::components::{OpenGraphData, TAGLINE, masthead, page_shell};
use crate::state::AppState;

/// The form page changes only with deploys.
const HOME_CACHE: &str = "public, max-age=300, s-maxage=3600";

/// Live input filtering, counter and the "Recording…" state.
///
/// The server sanitizes again on submit; this only mirrors it while typing.
const FORM_SCRIPT: &str = r#"
(function(){
var f=document.getElementById("record-form"),i=f.elements.text,b=f.querySelector("button"),c=document.getElementById("record-count");
var strip=/[\u{1F600}-\u{1F64F}\u{1F300}-\u{1F5FF}\u{1F680}-\u{1F6FF}\u{1F1E0}-\u{1F1FF}\u{2600}-\u{26FF}\u{2700}-\u{27BF}\u{FE00}-\u{FE0F}\u{1F900}-\u{1F9FF}\u{1FA00}-\u{1FA6F}\u{1FA70}-\u{1FAFF}\u{200D}\u{20E3}\u{E0020}-\u{E007F}\r\n]/gu;
var last="";
function sync(){var v=i.value.replace(strip,"");if(v.length>60){v=last}i.value=v;last=v;
c.textContent=v.length>0?v.length+"/60":"";b.disabled=v.trim().length===0}
i.addEventListener("input",sync);
f.addEventListener("submit",function(e){if(b.disabled){e.preventDefault();return}
b.textContent="Recording…";b.disabled=true;i.readOnly=true});
sync();
})();
"#;

/// Render the home page.
pub async fn home_page(State(state): State<AppState>) -> Response {
    let config = &state.config;
    let title = format!("{} - {TAGLINE}", config.site_name);
    let canonical = format!("{}/", config.base_url);

    let og = OpenGraphData {
        title: &config.site_name,
        description: TAGLINE,
        og_type: "website",
        image: None,
        twitter_card_type: "summary_large_image",
    };

    let body = html! {
        (masthead(&config.site_name))
        form class="record-form" id="record-form" method="post" action="/record" {
            div class="record-row" {
                input type="text" name="text" maxlength=(MAX_TEXT_CHARS)
                    placeholder="e.g. Checking notifications" autocomplete="off"
                    aria-label="What did you withhold?" autofocus;
                button type="submit" aria-label="Record action" { "Record" }
            }
            div class="record-meta" {
                p { "This record cannot be edited." }
                p class="record-count" id="record-count" {}
            }
        }
        script { (PreEscaped(FORM_SCRIPT)) }
    };

    let markup = page_shell(
        &title,
        "A minimalist tool for recording restraint. No accounts, no history.",
        &canonical,
        og,
        body,
        &config.site_name,
    );

    super::view::build_response(&markup.into_string(), HOME_CACHE)
}
