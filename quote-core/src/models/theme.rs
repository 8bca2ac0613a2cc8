use serde::{Deserialize, Serialize};

/// One of the three fixed visual layouts applied to the same quote data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    Modern,
    Classic,
    Creative,
}

/// Visual customization applied across every rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent color as a `#rrggbb` hex string.
    pub primary_color: String,
    pub font_family: String,
    /// Body font size in points; the editor offers 10–16.
    pub font_size: u8,
    pub template: TemplateVariant,
}

impl Theme {
    /// Text color rendered on top of the accent color.
    ///
    /// The classic layout picks black or white by perceived brightness of
    /// the accent; modern and creative always use white. The per-variant
    /// difference is shipped product behavior and is kept as-is.
    pub fn contrast_text_color(&self) -> &'static str {
        match self.template {
            TemplateVariant::Classic => {
                if perceived_brightness(&self.primary_color).is_some_and(|b| b > 186.0) {
                    "#000000"
                } else {
                    "#ffffff"
                }
            }
            TemplateVariant::Modern | TemplateVariant::Creative => "#ffffff",
        }
    }
}

/// Perceived brightness of a `#rrggbb` color, 0.0–255.0.
///
/// Uses the 0.299/0.587/0.114 luma weights. Returns `None` when the string
/// is not a six-digit hex color.
fn perceived_brightness(hex: &str) -> Option<f64> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn theme(
        primary_color: &str,
        template: TemplateVariant,
    ) -> Theme {
        Theme {
            primary_color: primary_color.to_string(),
            font_family: "Inter".to_string(),
            font_size: 14,
            template,
        }
    }

    #[test]
    fn classic_uses_black_text_on_bright_accents() {
        let result = theme("#ffff00", TemplateVariant::Classic).contrast_text_color();

        // Yellow: 0.299*255 + 0.587*255 = 225.93, above the threshold.
        assert_eq!(result, "#000000");
    }

    #[test]
    fn classic_uses_white_text_on_dark_accents() {
        let result = theme("#1d4ed8", TemplateVariant::Classic).contrast_text_color();

        assert_eq!(result, "#ffffff");
    }

    #[test]
    fn classic_threshold_is_exclusive() {
        // 0xba = 186 on every channel gives a brightness of exactly 186,
        // which is not "above" the threshold.
        let result = theme("#bababa", TemplateVariant::Classic).contrast_text_color();

        assert_eq!(result, "#ffffff");
    }

    #[test]
    fn classic_falls_back_to_white_on_unparseable_color() {
        let result = theme("tomato", TemplateVariant::Classic).contrast_text_color();

        assert_eq!(result, "#ffffff");
    }

    #[test]
    fn modern_and_creative_always_use_white() {
        assert_eq!(
            theme("#ffff00", TemplateVariant::Modern).contrast_text_color(),
            "#ffffff"
        );
        assert_eq!(
            theme("#ffff00", TemplateVariant::Creative).contrast_text_color(),
            "#ffffff"
        );
    }

    #[test]
    fn template_variant_serializes_lowercase() {
        let json = serde_json::to_string(&TemplateVariant::Creative).unwrap();

        assert_eq!(json, "\"creative\"");
    }
}
