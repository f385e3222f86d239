use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"positive": "bold green"` or `"badge": "black on #f59e0b"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| {
                parse_style(&raw)
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;
        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style registered under `name`, or the terminal default.
    pub fn get_or_default(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parse `[modifiers] [fg] [on bg]`. Colors accept ratatui names, `#rrggbb`
/// and 256-color indices.
pub fn parse_style(raw: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut background = false;

    for token in raw.split_whitespace() {
        let lower = token.to_ascii_lowercase();
        if lower == "on" {
            background = true;
            continue;
        }
        if let Some(modifier) = parse_modifier(&lower) {
            style = style.add_modifier(modifier);
            continue;
        }
        let color =
            Color::from_str(&lower).map_err(|_| format!("Unable to parse style `{raw}`"))?;
        style = if background {
            style.bg(color)
        } else {
            style.fg(color)
        };
    }

    Ok(style)
}

fn parse_modifier(token: &str) -> Option<Modifier> {
    match token {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "blink" => Some(Modifier::SLOW_BLINK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("green", Style::default().fg(Color::Green))]
    #[case("bold green", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))]
    #[case("black on #f59e0b", Style::default().fg(Color::Black).bg(Color::Rgb(0xf5, 0x9e, 0x0b)))]
    #[case("on blue", Style::default().bg(Color::Blue))]
    #[case("", Style::default())]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), Ok(expected));
    }

    #[test]
    fn test_parse_style_rejects_unknown_color() {
        assert!(parse_style("bold sparkly").is_err());
    }

    #[test]
    fn test_deserialize_styles() -> color_eyre::Result<()> {
        let styles: Styles = json5::from_str(r#"{ "negative": "red" }"#)?;

        assert_eq!(
            styles.get_or_default("negative"),
            Style::default().fg(Color::Red)
        );
        assert_eq!(styles.get_or_default("missing"), Style::default());

        Ok(())
    }
}
