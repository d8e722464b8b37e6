use crate::report;
use crate::theme::Theme;

const START_Y: i32 = 40;
const LINE_HEIGHT: i32 = 24;
const LEFT_PADDING: f32 = 20.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_ROW_CHARS: usize = 36;

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

/// Render the result rows as a standalone card in the active theme.
pub fn render_card(rows: &[(String, String)], theme: Theme) -> String {
    let colors = theme.colors();

    let align_width = report::align_width(rows).max(MIN_ROW_CHARS);
    let header = build_header_line("age@calc", align_width);

    let mut tspans = String::new();
    tspans.push_str(&format!(
        "<tspan x=\"{LEFT_PADDING}\" y=\"{START_Y}\">{}</tspan>\n",
        escape_xml(&header)
    ));

    for (i, (key, value)) in rows.iter().enumerate() {
        let y = START_Y + (i as i32 + 1) * LINE_HEIGHT;
        let (key_part, dots, value) = report::build_stat_row(key, value, align_width);
        tspans.push_str(&format!(
            r#"<tspan x="{LEFT_PADDING}" y="{y}" class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
            escape_xml(&key_part),
            escape_xml(&dots),
            escape_xml(&value)
        ));
    }

    let w = align_width as f32 * CHAR_WIDTH + LEFT_PADDING + RIGHT_PADDING;
    let h = (rows.len() as i32 + 1) as f32 * LINE_HEIGHT as f32 + START_Y as f32;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key   {{ fill: {key}; }}
.value {{ fill: {value}; }}
.cc    {{ fill: {cc}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}" xml:space="preserve">
{tspans}
</text>

</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        tspans = tspans
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<(String, String)> {
        vec![
            ("Years".to_string(), "24".to_string()),
            ("Next birthday".to_string(), "Today!".to_string()),
            ("Days lived".to_string(), "8,766".to_string()),
        ]
    }

    #[test]
    fn card_uses_the_theme_palette() {
        let dark = render_card(&rows(), Theme::Dark);
        assert!(dark.contains("#161b22"));

        let light = render_card(&rows(), Theme::Light);
        assert!(light.contains("#ffffff"));
        assert!(light.contains("Days lived"));
    }

    #[test]
    fn values_are_xml_escaped() {
        let rows = vec![("Note".to_string(), "<1 & done>".to_string())];
        let card = render_card(&rows, Theme::Light);
        assert!(card.contains("&lt;1 &amp; done&gt;"));
        assert!(!card.contains("<1 & done>"));
    }
}
