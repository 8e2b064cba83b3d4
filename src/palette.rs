use crate::config::PaletteConfig;
use changes_core::Quality;
use std::collections::BTreeMap;

pub const FALLBACK_COLOR: &str = "red";

const QUALITY_COLORS: [(&str, &str); 12] = [
    ("m7", "#33f"),
    ("m9", "aqua"),
    ("7", "red"),
    ("9", "#d33"),
    ("", "green"),
    ("M7", "#00cc00"),
    ("m7b5", "yellow"),
    ("m6", "violet"),
    ("7#5#9", "darkred"),
    ("7#11", "pink"),
    ("7#5", "gray"),
    ("7#9", "brown"),
];

/// CSS color per quality label
#[derive(Debug, Clone)]
pub struct Palette {
    colors: BTreeMap<String, String>,
    fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: QUALITY_COLORS
                .iter()
                .map(|&(quality, color)| (quality.to_string(), color.to_string()))
                .collect(),
            fallback: FALLBACK_COLOR.to_string(),
        }
    }
}

impl Palette {
    pub fn from_config(config: &PaletteConfig) -> Self {
        let mut palette = Palette::default();
        palette.colors.extend(config.colors.clone());
        if let Some(fallback) = &config.fallback {
            palette.fallback = fallback.clone();
        }
        palette
    }

    pub fn color(&self, quality: &Quality) -> &str {
        self.colors
            .get(quality.as_str())
            .unwrap_or(&self.fallback)
    }
}
