// Text and SVG output for tokens, pairs and paths
use crate::config::RenderConfig;
use crate::palette::Palette;
use changes_core::{ChordToken, Path, Progression};
use std::borrow::Cow;

/// Height reserved above the plot for the title
const TITLE_BAND: u32 = 20;

pub fn tokens_text(tokens: &[ChordToken]) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| format!("{:>4}  bar {:>3}  {}\n", i, token.bar, token.text))
        .collect()
}

pub fn pairs_text(progression: &Progression) -> String {
    let mut out: String = progression
        .pairs
        .iter()
        .map(|pair| format!("{:>2}  {:?}\n", pair.interval.semitones(), pair.quality.as_str()))
        .collect();

    for skipped in &progression.skipped {
        out.push_str(&format!(
            "# skipped '{}' in bar {}\n",
            skipped.token.text, skipped.token.bar
        ));
    }
    out
}

pub fn path_text(path: &Path) -> String {
    path.points
        .iter()
        .map(|point| format!("{:>5} {:>5}  {:?}\n", point.x, point.y, point.quality.as_str()))
        .collect()
}

/// One progression as a standalone SVG document.
///
/// Circles sit at the path's own coordinates inside a `width` x `height`
/// plot; points outside the plot are still drawn.
pub fn svg(path: &Path, title: Option<&str>, palette: &Palette, config: &RenderConfig) -> String {
    let band = if title.is_some() { TITLE_BAND } else { 0 };
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" style=\"overflow: visible\">\n",
        config.width,
        config.height + band
    );

    if let Some(title) = title {
        out.push_str(&format!(
            "  <text x=\"0\" y=\"{}\" fill=\"{}\" font-family=\"sans-serif\" font-size=\"14\">{}</text>\n",
            band - 6,
            escape(&config.title_color),
            escape(title)
        ));
    }

    out.push_str(&format!(
        "  <rect x=\"0\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        band,
        config.width,
        config.height,
        escape(&config.background)
    ));

    out.push_str(&format!("  <g transform=\"translate(0 {})\">\n", band));
    for point in &path.points {
        out.push_str(&format!(
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
            point.x,
            point.y,
            config.radius,
            escape(palette.color(&point.quality))
        ));
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

/// Several SVGs side by side in one HTML page
pub fn html_page(svgs: &[String]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>changes</title></head>\n<body>\n",
    );
    for svg in svgs {
        out.push_str("<div style=\"display: inline-block; margin: 8px\">\n");
        out.push_str(svg);
        out.push_str("</div>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use changes_core::{accumulate, progression, tokenize, DecodePolicy, ORIGIN};

    #[test]
    fn test_tokens_text() {
        let text = tokens_text(&tokenize("Dm7 | G7"));
        assert_eq!(text, "   0  bar   0  Dm7\n   1  bar   1  G7\n");
    }

    #[test]
    fn test_pairs_text_lists_skipped() {
        let walked = progression("Dm7 | Xm7 G7", DecodePolicy::Skip).unwrap();
        assert_eq!(
            pairs_text(&walked),
            " 0  \"m7\"\n 5  \"7\"\n# skipped 'Xm7' in bar 1\n"
        );
    }

    #[test]
    fn test_path_text() {
        let walked = progression("Dm7 G7", DecodePolicy::Abort).unwrap();
        let path = accumulate(&walked.pairs, ORIGIN);
        assert_eq!(path_text(&path), "   22    80  \"m7\"\n   29    80  \"7\"\n");
    }

    #[test]
    fn test_svg_circles_use_palette() {
        let walked = progression("Dm7 G7", DecodePolicy::Abort).unwrap();
        let path = accumulate(&walked.pairs, ORIGIN);
        let doc = svg(&path, None, &Palette::default(), &RenderConfig::default());

        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("height=\"150\""));
        assert!(doc.contains("<circle cx=\"22\" cy=\"80\" r=\"4\" fill=\"#33f\"/>"));
        assert!(doc.contains("<circle cx=\"29\" cy=\"80\" r=\"4\" fill=\"red\"/>"));
        assert!(!doc.contains("<text"));
    }

    #[test]
    fn test_svg_major_triad_is_green() {
        let walked = progression("C F", DecodePolicy::Abort).unwrap();
        let path = accumulate(&walked.pairs, ORIGIN);
        let doc = svg(&path, None, &Palette::default(), &RenderConfig::default());
        assert_eq!(doc.matches("fill=\"green\"").count(), 2);
    }

    #[test]
    fn test_svg_title_is_escaped() {
        let path = accumulate(&[], ORIGIN);
        let doc = svg(&path, Some("Tom & Jerry <live>"), &Palette::default(), &RenderConfig::default());
        assert!(doc.contains("Tom &amp; Jerry &lt;live&gt;"));
        assert!(doc.contains("height=\"170\""));
        assert!(doc.contains("translate(0 20)"));
    }

    #[test]
    fn test_html_page_wraps_each_svg() {
        let page = html_page(&["<svg/>\n".to_string(), "<svg/>\n".to_string()]);
        assert_eq!(page.matches("inline-block").count(), 2);
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_escape_borrows_clean_text() {
        assert!(matches!(escape("Misty"), Cow::Borrowed(_)));
    }
}
