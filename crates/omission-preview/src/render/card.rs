//! The record card, drawn as SVG.
//!
//! One layout serves every surface. The share page inlines the SVG, the
//! PNG export and the Open Graph image rasterize it, so the same input
//! always yields the same document. The Open Graph variant is the same
//! card at a larger scale with its own header wording.
//!
//! Layout (top to bottom): title mark and reference on one line, a rule,
//! the label and the phrase, a rule, three metadata columns, notes.
//!
//! The phrase is wrapped against estimated glyph widths rather than a
//! character count. The estimates sit at or above the widest serif faces
//! we render with, so a wrapped line never runs past the card border.

use std::fmt;

use omission_core::format_date_digits;

/// Serif family used for the phrase and notes.
pub const SERIF_FAMILY: &str = "Playfair Display";

/// Monospace family used for labels and metadata.
pub const MONO_FAMILY: &str = "IBM Plex Mono";

/// Card background, also used as the export background.
pub const BACKGROUND: Rgb = Rgb(0xFA, 0xFA, 0xFA);

/// An opaque sRGB colour, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

const INK: &str = "#000000";
const MUTED: &str = "#999999";
const NOTE: &str = "#666666";

const RECORDED_ON_LABEL: &str = "RECORDED ON:";

/// Fixed metadata columns shown after the date. Not derived from input.
const STATUS_FIELDS: [(&str, &str); 2] =
    [("FORCE STATUS:", "Neutralized"), ("OBSERVER:", "Unassigned")];

const NOTES_LABEL: &str = "NOTES:";
const NOTES_TEXT: &str = "No further action taken.";

/// Line box height for labels and metadata, as a multiple of font size.
const LINE_HEIGHT: f32 = 1.5;

/// Line box height for the phrase.
const PHRASE_LINE_HEIGHT: f32 = 1.2;

/// IBM Plex Mono advance width per em.
const MONO_ADVANCE: f32 = 0.6;

// Serif advance estimates per em, used for wrapping.
const SERIF_SPACE: f32 = 0.3;
const SERIF_NARROW: f32 = 0.5;
const SERIF_LOWER: f32 = 0.65;
const SERIF_UPPER: f32 = 0.9;
const SERIF_WIDE: f32 = 1.1;

/// Which surface the card is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardVariant {
    /// 720x480, the on-screen preview and the PNG download.
    Card,
    /// 1200x630, the Open Graph image.
    OpenGraph,
}

impl CardVariant {
    /// Canvas size in CSS pixels.
    pub const fn size(self) -> (u32, u32) {
        let m = self.metrics();
        (m.width, m.height)
    }

    const fn metrics(self) -> &'static Metrics {
        match self {
            Self::Card => &CARD_METRICS,
            Self::OpenGraph => &OPEN_GRAPH_METRICS,
        }
    }
}

/// Per-variant sizes, in pixels.
struct Metrics {
    width: u32,
    height: u32,
    /// Gap between the canvas edge and the card border.
    inset: f32,
    border: f32,
    padding: f32,
    rule: f32,
    title: &'static str,
    label: &'static str,
    header_size: f32,
    header_pad: f32,
    header_margin: f32,
    label_size: f32,
    label_gap: f32,
    phrase_size: f32,
    meta_label_size: f32,
    meta_value_size: f32,
    meta_gap: f32,
    meta_pad: f32,
    meta_label_gap: f32,
}

const CARD_METRICS: Metrics = Metrics {
    width: 720,
    height: 480,
    inset: 0.0,
    border: 2.0,
    padding: 48.0,
    rule: 1.0,
    title: "WITHHOLD RECORD",
    label: "WITHHELD:",
    header_size: 12.0,
    header_pad: 16.0,
    header_margin: 40.0,
    label_size: 12.0,
    label_gap: 12.0,
    phrase_size: 28.0,
    meta_label_size: 10.0,
    meta_value_size: 14.0,
    meta_gap: 48.0,
    meta_pad: 24.0,
    meta_label_gap: 4.0,
};

const OPEN_GRAPH_METRICS: Metrics = Metrics {
    width: 1200,
    height: 630,
    inset: 40.0,
    border: 3.0,
    padding: 48.0,
    rule: 2.0,
    title: "OMISSION RECORD",
    label: "OMITTED:",
    header_size: 24.0,
    header_pad: 20.0,
    header_margin: 24.0,
    label_size: 20.0,
    label_gap: 12.0,
    phrase_size: 42.0,
    meta_label_size: 16.0,
    meta_value_size: 20.0,
    meta_gap: 60.0,
    meta_pad: 20.0,
    meta_label_gap: 8.0,
};

/// Resolved vertical positions and text capacity for a variant.
#[derive(Debug, Clone, Copy)]
struct Layout {
    left: f32,
    right: f32,
    top: f32,
    header_rule_y: f32,
    label_top: f32,
    phrase_top: f32,
    meta_rule_y: f32,
    meta_label_top: f32,
    meta_value_top: f32,
    footer_top: f32,
    footer_value_top: f32,
    max_lines: usize,
}

impl Layout {
    fn resolve(m: &Metrics) -> Self {
        let edge = m.inset + m.border + m.padding;
        let left = edge;
        let right = m.width as f32 - edge;
        let top = edge;
        let bottom = m.height as f32 - edge;

        let header_rule_y = top + m.header_size * LINE_HEIGHT + m.header_pad;
        let label_top = header_rule_y + m.rule + m.header_margin;
        let phrase_top = label_top + m.label_size * LINE_HEIGHT + m.label_gap;

        let meta_label_line = m.meta_label_size * LINE_HEIGHT;
        let meta_value_line = m.meta_value_size * LINE_HEIGHT;
        let column_height = meta_label_line + m.meta_label_gap + meta_value_line;

        let footer_top = bottom - column_height;
        let meta_rule_y = footer_top - m.meta_pad * 2.0 - column_height - m.rule;
        let meta_label_top = meta_rule_y + m.rule + m.meta_pad;

        let phrase_line = m.phrase_size * PHRASE_LINE_HEIGHT;
        let max_lines = ((meta_rule_y - phrase_top) / phrase_line).floor() as usize;

        Self {
            left,
            right,
            top,
            header_rule_y,
            label_top,
            phrase_top,
            meta_rule_y,
            meta_label_top,
            meta_value_top: meta_label_top + meta_label_line + m.meta_label_gap,
            footer_top,
            footer_value_top: footer_top + meta_label_line + m.meta_label_gap,
            max_lines: max_lines.max(1),
        }
    }
}

/// Render the card for `text` recorded under the token date segment
/// `date_digits` (normally `YYYYMMDD`).
pub fn render_card(text: &str, date_digits: &str, variant: CardVariant) -> String {
    let m = variant.metrics();
    let layout = Layout::resolve(m);
    let (w, h) = (m.width, m.height);
    let content_width = layout.right - layout.left;
    let date = format_date_digits(date_digits);

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{title}"><rect width="{w}" height="{h}" fill="{bg}"/>"##,
        title = escape_xml(m.title),
        bg = BACKGROUND,
    ));

    // Card border (stroke is centered on the rect edge)
    let half = m.border / 2.0;
    svg.push_str(&format!(
        r##"<rect x="{x}" y="{x}" width="{bw}" height="{bh}" fill="{bg}" stroke="{ink}" stroke-width="{sw}"/>"##,
        x = m.inset + half,
        bw = w as f32 - 2.0 * m.inset - m.border,
        bh = h as f32 - 2.0 * m.inset - m.border,
        bg = BACKGROUND,
        ink = INK,
        sw = m.border,
    ));

    // Header: title mark and reference date
    let header_y = baseline(layout.top, m.header_size, m.header_size * LINE_HEIGHT);
    svg.push_str(&mono_text(
        layout.left,
        header_y,
        m.header_size,
        0.1,
        INK,
        "700",
        "start",
        m.title,
    ));
    let reference = format!("{}-{date_digits}", omission_core::REF_PREFIX);
    svg.push_str(&mono_text(
        layout.right,
        header_y,
        m.header_size,
        0.05,
        MUTED,
        "400",
        "end",
        &reference,
    ));
    svg.push_str(&rule(layout.left, layout.header_rule_y, content_width, m.rule));

    // Label and phrase
    svg.push_str(&mono_text(
        layout.left,
        baseline(layout.label_top, m.label_size, m.label_size * LINE_HEIGHT),
        m.label_size,
        0.05,
        MUTED,
        "400",
        "start",
        m.label,
    ));

    let phrase_line = m.phrase_size * PHRASE_LINE_HEIGHT;
    svg.push_str(&format!(
        r##"<text font-family="{SERIF_FAMILY}" font-size="{size}" fill="{INK}" xml:space="preserve">"##,
        size = m.phrase_size,
    ));
    for (i, line) in phrase_lines(text, m, &layout).iter().enumerate() {
        let line_top = layout.phrase_top + phrase_line * i as f32;
        svg.push_str(&format!(
            r##"<tspan x="{x}" y="{y}">{line}</tspan>"##,
            x = layout.left,
            y = baseline(line_top, m.phrase_size, phrase_line),
            line = escape_xml(line),
        ));
    }
    svg.push_str("</text>");

    // Metadata columns
    svg.push_str(&rule(layout.left, layout.meta_rule_y, content_width, m.rule));
    let label_y = baseline(
        layout.meta_label_top,
        m.meta_label_size,
        m.meta_label_size * LINE_HEIGHT,
    );
    let value_y = baseline(
        layout.meta_value_top,
        m.meta_value_size,
        m.meta_value_size * LINE_HEIGHT,
    );

    let columns = std::iter::once((RECORDED_ON_LABEL, date.as_str())).chain(STATUS_FIELDS);
    let mut x = layout.left;
    for (label, value) in columns {
        svg.push_str(&mono_text(
            x, label_y, m.meta_label_size, 0.05, MUTED, "400", "start", label,
        ));
        svg.push_str(&mono_text(
            x, value_y, m.meta_value_size, 0.0, INK, "500", "start", value,
        ));
        let column_width = mono_width(label, m.meta_label_size, 0.05)
            .max(mono_width(value, m.meta_value_size, 0.0));
        x += column_width + m.meta_gap;
    }

    // Footer notes
    svg.push_str(&mono_text(
        layout.left,
        baseline(
            layout.footer_top,
            m.meta_label_size,
            m.meta_label_size * LINE_HEIGHT,
        ),
        m.meta_label_size,
        0.05,
        MUTED,
        "400",
        "start",
        NOTES_LABEL,
    ));
    svg.push_str(&format!(
        r##"<text x="{x}" y="{y}" font-family="{SERIF_FAMILY}" font-size="{size}" font-style="italic" fill="{NOTE}">{NOTES_TEXT}</text>"##,
        x = layout.left,
        y = baseline(
            layout.footer_value_top,
            m.meta_value_size,
            m.meta_value_size * LINE_HEIGHT,
        ),
        size = m.meta_value_size,
    ));

    svg.push_str("</svg>");
    svg
}

/// Wrap the phrase to the content width at the variant's phrase size.
fn phrase_lines(text: &str, m: &Metrics, layout: &Layout) -> Vec<String> {
    wrap_text(
        text,
        layout.right - layout.left,
        layout.max_lines,
        |c| serif_advance(c) * m.phrase_size,
    )
}

/// Estimated serif advance of `c`, in em.
///
/// Rounded up per class so the sum bounds the rendered width.
fn serif_advance(c: char) -> f32 {
    match c {
        ' ' => SERIF_SPACE,
        'f' | 'i' | 'j' | 'l' | 'r' | 't' | 'I' | 'J' => SERIF_NARROW,
        '.' | ',' | ':' | ';' | '\'' | '!' | '|' | '(' | ')' | '[' | ']' | '`' => SERIF_NARROW,
        'm' | 'w' | 'M' | 'W' | '@' | '%' | '&' => SERIF_WIDE,
        'A'..='Z' => SERIF_UPPER,
        c if c.is_ascii() => SERIF_LOWER,
        c if is_wide(c) => SERIF_WIDE,
        _ => SERIF_UPPER,
    }
}

/// East Asian wide and fullwidth ranges.
fn is_wide(c: char) -> bool {
    matches!(
        c,
        '\u{1100}'..='\u{115F}'
            | '\u{2E80}'..='\u{A4CF}'
            | '\u{AC00}'..='\u{D7A3}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FE30}'..='\u{FE4F}'
            | '\u{FF00}'..='\u{FF60}'
            | '\u{FFE0}'..='\u{FFE6}'
            | '\u{20000}'..='\u{3FFFD}'
    )
}

/// Baseline of a single line of text inside a line box starting at `top`.
fn baseline(top: f32, font_size: f32, line_height: f32) -> f32 {
    top + (line_height - font_size) / 2.0 + font_size * 0.8
}

/// Width of a monospace run with `tracking` em of letter spacing.
fn mono_width(text: &str, font_size: f32, tracking: f32) -> f32 {
    text.chars().count() as f32 * font_size * (MONO_ADVANCE + tracking)
}

fn rule(x: f32, y: f32, width: f32, thickness: f32) -> String {
    format!(r##"<rect x="{x}" y="{y}" width="{width}" height="{thickness}" fill="{INK}"/>"##)
}

#[allow(clippy::too_many_arguments)]
fn mono_text(
    x: f32,
    y: f32,
    font_size: f32,
    tracking: f32,
    fill: &str,
    weight: &str,
    anchor: &str,
    content: &str,
) -> String {
    format!(
        r##"<text x="{x}" y="{y}" font-family="{MONO_FAMILY}" font-size="{font_size}" font-weight="{weight}" letter-spacing="{spacing}" text-anchor="{anchor}" fill="{fill}" xml:space="preserve">{content}</text>"##,
        spacing = font_size * tracking,
        content = escape_xml(content),
    )
}

/// Escape text for use in SVG content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Greedy word wrap on spaces, hard-breaking words longer than a line.
///
/// `advance` gives the width of each character in the same unit as
/// `max_width`. Wrapped lines never start with a space. At most
/// `max_lines` lines are returned; overflow is cut with `…`.
fn wrap_text(
    text: &str,
    max_width: f32,
    max_lines: usize,
    advance: impl Fn(char) -> f32,
) -> Vec<String> {
    let width = |chars: &[char]| chars.iter().map(|&c| advance(c)).sum::<f32>();
    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<char> = Vec::new();

    for c in text.chars() {
        if c == ' ' && current.is_empty() && !lines.is_empty() {
            continue;
        }
        if !current.is_empty() && width(&current) + advance(c) > max_width {
            if c == ' ' {
                lines.push(take_line(&mut current));
                continue;
            }
            let split = current
                .iter()
                .rposition(|&ch| ch == ' ')
                .filter(|&pos| current[..pos].iter().any(|&ch| ch != ' '));
            match split {
                Some(pos) => {
                    let rest = current.split_off(pos + 1);
                    lines.push(take_line(&mut current));
                    current = rest;
                    if !current.is_empty() && width(&current) + advance(c) > max_width {
                        lines.push(take_line(&mut current));
                    }
                }
                None => lines.push(take_line(&mut current)),
            }
        }
        current.push(c);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current.into_iter().collect());
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines.max(1));
        if let Some(last) = lines.last_mut() {
            let budget = max_width - advance('…');
            let mut used = 0.0;
            let kept: String = last
                .chars()
                .take_while(|&c| {
                    used += advance(c);
                    used <= budget
                })
                .collect();
            *last = format!("{}…", kept.trim_end());
        }
    }

    lines
}

/// Drain a finished line, dropping the spaces it ended on.
fn take_line(current: &mut Vec<char>) -> String {
    let line: String = current.drain(..).collect();
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use omission_core::MAX_TEXT_CHARS;

    const DIGITS: &str = "20260217";

    /// Sixty characters of capitals, the widest realistic phrase.
    const CAPS_PHRASE: &str = "REFRESHING MY INBOX OVER AND OVER AGAIN TODAY, WHILE WAITING";

    fn unit(_: char) -> f32 {
        1.0
    }

    fn phrase_width(line: &str, m: &Metrics) -> f32 {
        line.chars().map(|c| serif_advance(c) * m.phrase_size).sum()
    }

    // -- wrap_text() tests --

    #[test]
    fn wrap_short_text_single_line() {
        assert_eq!(
            wrap_text("Checking notifications", 44.0, 4, unit),
            vec!["Checking notifications"]
        );
    }

    #[test]
    fn wrap_breaks_on_spaces() {
        assert_eq!(wrap_text("aaaa bbbb cccc", 9.0, 4, unit), vec!["aaaa bbbb", "cccc"]);
        assert_eq!(wrap_text("aaaa bbbbb", 7.0, 4, unit), vec!["aaaa", "bbbbb"]);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4.0, 4, unit), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_truncates_with_ellipsis() {
        assert_eq!(wrap_text("abcdefghij", 4.0, 2, unit), vec!["abcd", "efg…"]);
    }

    #[test]
    fn wrap_empty_text() {
        assert_eq!(wrap_text("", 10.0, 2, unit), vec![""]);
    }

    #[test]
    fn wrap_multibyte_counts_chars() {
        assert_eq!(wrap_text("你好世界", 2.0, 4, unit), vec!["你好", "世界"]);
    }

    #[test]
    fn wrap_skips_spaces_at_line_start() {
        assert_eq!(wrap_text("abcd  efgh", 4.0, 4, unit), vec!["abcd", "efgh"]);
        assert_eq!(wrap_text("ab   cd", 2.0, 4, unit), vec!["ab", "cd"]);
        assert_eq!(wrap_text("abc  defg", 5.0, 4, unit), vec!["abc", "defg"]);
    }

    #[test]
    fn wrap_measures_by_advance() {
        let wide = |c: char| if c == 'W' { 2.0 } else { 1.0 };
        assert_eq!(wrap_text("WW aa", 5.0, 4, wide), vec!["WW", "aa"]);
        assert_eq!(wrap_text("aa aa", 5.0, 4, wide), vec!["aa aa"]);
    }

    #[test]
    fn serif_estimates_order_by_width() {
        assert!(serif_advance(' ') < serif_advance('i'));
        assert!(serif_advance('i') < serif_advance('a'));
        assert!(serif_advance('a') < serif_advance('A'));
        assert!(serif_advance('A') < serif_advance('W'));
        assert_eq!(serif_advance('你'), SERIF_WIDE);
        assert!(serif_advance('É') >= 0.75);
    }

    // -- layout tests --

    #[test]
    fn layout_fits_longest_phrase() {
        for variant in [CardVariant::Card, CardVariant::OpenGraph] {
            let m = variant.metrics();
            let layout = Layout::resolve(m);
            let widest_per_line =
                ((layout.right - layout.left) / (SERIF_WIDE * m.phrase_size)).floor() as usize;
            assert!(
                widest_per_line * layout.max_lines >= MAX_TEXT_CHARS,
                "{variant:?} cannot hold a full phrase"
            );
            assert!(layout.max_lines >= 2, "{variant:?} has a single phrase line");
        }
    }

    #[test]
    fn caps_phrase_stays_inside_card() {
        assert_eq!(CAPS_PHRASE.chars().count(), MAX_TEXT_CHARS);
        for variant in [CardVariant::Card, CardVariant::OpenGraph] {
            let m = variant.metrics();
            let layout = Layout::resolve(m);
            let lines = phrase_lines(CAPS_PHRASE, m, &layout);

            assert!(lines.len() >= 2, "{variant:?}: {lines:?}");
            assert_eq!(lines.join(" "), CAPS_PHRASE, "{variant:?} dropped text");
            for line in &lines {
                let right = layout.left + phrase_width(line, m);
                assert!(right <= layout.right, "{variant:?}: {line:?} ends at {right}");
            }
        }
    }

    #[test]
    fn widest_glyphs_fill_without_ellipsis() {
        let text = "W".repeat(MAX_TEXT_CHARS);
        for variant in [CardVariant::Card, CardVariant::OpenGraph] {
            let m = variant.metrics();
            let layout = Layout::resolve(m);
            let lines = phrase_lines(&text, m, &layout);

            assert_eq!(lines.concat(), text, "{variant:?}");
            for line in &lines {
                assert!(layout.left + phrase_width(line, m) <= layout.right);
            }
            assert!(!render_card(&text, DIGITS, variant).contains('…'));
        }
    }

    #[test]
    fn layout_sections_do_not_overlap() {
        for variant in [CardVariant::Card, CardVariant::OpenGraph] {
            let m = variant.metrics();
            let layout = Layout::resolve(m);
            assert!(layout.header_rule_y < layout.label_top);
            assert!(layout.label_top < layout.phrase_top);
            let phrase_bottom = layout.phrase_top
                + layout.max_lines as f32 * m.phrase_size * PHRASE_LINE_HEIGHT;
            assert!(phrase_bottom <= layout.meta_rule_y);
            assert!(layout.meta_value_top < layout.footer_top);
            assert!(layout.footer_value_top < m.height as f32 - m.inset);
        }
    }

    #[test]
    fn metadata_columns_fit_width() {
        for variant in [CardVariant::Card, CardVariant::OpenGraph] {
            let m = variant.metrics();
            let layout = Layout::resolve(m);
            let total: f32 = std::iter::once((RECORDED_ON_LABEL, "2026-02-17"))
                .chain(STATUS_FIELDS)
                .map(|(l, v)| {
                    mono_width(l, m.meta_label_size, 0.05).max(mono_width(v, m.meta_value_size, 0.0))
                })
                .sum::<f32>()
                + 2.0 * m.meta_gap;
            assert!(total <= layout.right - layout.left);
        }
    }

    // -- render_card() tests --

    #[test]
    fn card_dimensions() {
        let svg = render_card("Checking notifications", DIGITS, CardVariant::Card);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="720" height="480" viewBox="0 0 720 480""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn open_graph_dimensions() {
        let svg = render_card("Checking notifications", DIGITS, CardVariant::OpenGraph);
        assert!(svg.contains(r#"width="1200" height="630" viewBox="0 0 1200 630""#));
        assert_eq!(CardVariant::OpenGraph.size(), (1200, 630));
        assert_eq!(CardVariant::Card.size(), (720, 480));
    }

    #[test]
    fn card_contains_record_fields() {
        let svg = render_card("Checking notifications", DIGITS, CardVariant::Card);
        assert!(svg.contains("WITHHOLD RECORD"));
        assert!(svg.contains("WITHHELD:"));
        assert!(svg.contains(">REF-20260217<"));
        assert!(svg.contains("Checking notifications"));
        assert!(svg.contains(">2026-02-17<"));
    }

    #[test]
    fn card_header_and_date_share_lenient_digits() {
        let svg = render_card("x", "2026", CardVariant::Card);
        assert!(svg.contains(">REF-2026<"));
        assert!(svg.contains(">2026--<"));
    }

    #[test]
    fn card_background_fill() {
        assert_eq!(BACKGROUND.to_string(), "#FAFAFA");
        let svg = render_card("x", DIGITS, CardVariant::Card);
        assert!(svg.contains(r##"<rect width="720" height="480" fill="#FAFAFA"/>"##));
    }

    #[test]
    fn open_graph_uses_its_own_labels() {
        let svg = render_card("x", DIGITS, CardVariant::OpenGraph);
        assert!(svg.contains("OMISSION RECORD"));
        assert!(svg.contains("OMITTED:"));
        assert!(!svg.contains("WITHHELD:"));
    }

    #[test]
    fn static_metadata_is_independent_of_input() {
        for text in ["one", "two"] {
            let svg = render_card(text, DIGITS, CardVariant::Card);
            assert!(svg.contains("RECORDED ON:"));
            assert!(svg.contains("FORCE STATUS:"));
            assert!(svg.contains(">Neutralized<"));
            assert!(svg.contains("OBSERVER:"));
            assert!(svg.contains(">Unassigned<"));
            assert!(svg.contains("NOTES:"));
            assert!(svg.contains("No further action taken."));
        }
    }

    #[test]
    fn card_escapes_text() {
        let svg = render_card("<script>alert('x') & \"y\"</script>", DIGITS, CardVariant::Card);
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;alert(&apos;x&apos;) &amp;"));
    }

    #[test]
    fn card_escapes_date() {
        let svg = render_card("x", "<b>&", CardVariant::Card);
        assert!(svg.contains("REF-&lt;b&gt;&amp;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn card_is_deterministic() {
        let a = render_card("Skipping dessert?", DIGITS, CardVariant::Card);
        let b = render_card("Skipping dessert?", DIGITS, CardVariant::Card);
        assert_eq!(a, b);
    }

    #[test]
    fn long_phrase_wraps_into_tspans() {
        let text = "Refreshing the inbox again and again before the meeting start";
        let svg = render_card(text, DIGITS, CardVariant::Card);
        assert_eq!(svg.matches("<tspan").count(), 2);
    }

    #[test]
    fn escape_xml_plain() {
        assert_eq!(escape_xml("plain text"), "plain text");
    }
}
