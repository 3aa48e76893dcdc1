use anyhow::{Context, Result, bail};

use crate::config::LadderConfig;
use crate::domain::{LineColor, LineStyle};

/// Token separator of the anchor wire format, e.g. `"33.5-46-66-93-3.5"`.
pub const ANCHOR_SEPARATOR: char = '-';

/// Label suffix meaning "draw this ladder without labels".
pub const NO_LABEL: &str = "-";

/// One offset inside a 100-unit price band.
/// The token text is kept so labels read exactly as configured ("3.5", not "3.50").
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub value: f64,
    pub text: String,
}

/// A named group of anchors sharing one presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSet {
    pub name: String,
    pub anchors: Vec<Anchor>,
    pub color: LineColor,
    pub label_suffix: String,
    pub width: u32,
    pub style: LineStyle,
}

/// Parse a `-`-separated list of anchors.
///
/// Every token must be a finite number; a bad token fails the whole list.
/// A blank string is an empty list.
pub fn parse_anchors(text: &str) -> Result<Vec<Anchor>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(ANCHOR_SEPARATOR)
        .enumerate()
        .map(|(position, raw)| -> Result<Anchor> {
            let token = raw.trim();
            let value = token.parse::<f64>().with_context(|| {
                format!("Anchor #{} ({:?}) is not a number", position + 1, token)
            })?;
            if !value.is_finite() {
                bail!("Anchor #{} ({:?}) is not a finite number", position + 1, token);
            }
            Ok(Anchor {
                value,
                text: token.to_string(),
            })
        })
        .collect()
}

impl AnchorSet {
    /// Build an anchor set from its configuration block.
    pub fn from_config(name: &str, config: &LadderConfig) -> Result<Self> {
        let anchors = parse_anchors(&config.levels)
            .with_context(|| format!("Invalid {} levels {:?}", name, config.levels))?;

        if config.width == 0 {
            bail!("{} width must be positive", name);
        }

        Ok(Self {
            name: name.to_string(),
            anchors,
            color: config.color,
            label_suffix: config.label.clone(),
            width: config.width,
            style: config.style,
        })
    }

    pub fn label_for(&self, anchor: &Anchor) -> String {
        if self.label_suffix == NO_LABEL {
            String::new()
        } else {
            format!("{}{}", anchor.text, self.label_suffix)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(levels: &str, label: &str) -> LadderConfig {
        LadderConfig {
            levels: levels.to_string(),
            color: LineColor::from_rgb(1, 2, 3),
            label: label.to_string(),
            width: 2,
            style: LineStyle::Dash,
        }
    }

    #[test]
    fn parses_tokens_in_order_keeping_text() {
        let anchors = parse_anchors("33.5-46-66-93-3.5").unwrap();
        let values: Vec<f64> = anchors.iter().map(|a| a.value).collect();
        assert_eq!(values, vec![33.5, 46.0, 66.0, 93.0, 3.5]);
        assert_eq!(anchors[4].text, "3.5");
    }

    #[test]
    fn tolerates_whitespace_around_tokens() {
        let anchors = parse_anchors(" 20 - 80 ").unwrap();
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].text, "20");
        assert_eq!(anchors[1].value, 80.0);
    }

    #[test]
    fn malformed_token_fails_the_whole_list() {
        let err = parse_anchors("20-abc-80").unwrap_err();
        assert!(err.to_string().contains("abc"));
        assert!(parse_anchors("20--80").is_err());
        assert!(parse_anchors("20-NaN").is_err());
    }

    #[test]
    fn blank_list_is_empty_not_an_error() {
        assert!(parse_anchors("").unwrap().is_empty());
        assert!(parse_anchors("   ").unwrap().is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(parse_anchors("50-50").unwrap().len(), 2);
    }

    #[test]
    fn label_uses_anchor_text_and_suffix() {
        let set = AnchorSet::from_config("Core", &ladder("20-80", " core")).unwrap();
        assert_eq!(set.label_for(&set.anchors[0]), "20 core");

        let silent = AnchorSet::from_config("Secondary", &ladder("20-80", NO_LABEL)).unwrap();
        assert_eq!(silent.label_for(&silent.anchors[1]), "");
    }

    #[test]
    fn config_error_names_the_ladder() {
        let err = AnchorSet::from_config("Secondary", &ladder("1-x", "")).unwrap_err();
        assert!(format!("{:#}", err).contains("Secondary"));

        let mut zero_width = ladder("1", "");
        zero_width.width = 0;
        assert!(AnchorSet::from_config("Core", &zero_width).is_err());
    }
}
