use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Icons a group marker may reference by id
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Sparkles,
    Palette,
    Layers,
    Play,
    Tree,
    Wind,
    Link,
    Waves,
    Star,
    Rotate,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Sparkles,
        Icon::Palette,
        Icon::Layers,
        Icon::Play,
        Icon::Tree,
        Icon::Wind,
        Icon::Link,
        Icon::Waves,
        Icon::Star,
        Icon::Rotate,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Icon::Sparkles => "sparkles",
            Icon::Palette => "palette",
            Icon::Layers => "layers",
            Icon::Play => "play",
            Icon::Tree => "tree",
            Icon::Wind => "wind",
            Icon::Link => "link",
            Icon::Waves => "waves",
            Icon::Star => "star",
            Icon::Rotate => "rotate",
        }
    }

    /// Single character stand-in for terminals
    pub fn glyph(&self) -> char {
        match self {
            Icon::Sparkles => '✦',
            Icon::Palette => '◐',
            Icon::Layers => '≡',
            Icon::Play => '▶',
            Icon::Tree => '♣',
            Icon::Wind => '≈',
            Icon::Link => '∞',
            Icon::Waves => '∿',
            Icon::Star => '★',
            Icon::Rotate => '↻',
        }
    }

    /// 24x24 stroke icon markup for web frontends
    pub fn svg(&self) -> &'static str {
        match self {
            Icon::Sparkles => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<path d="M12 3l1.5 4.5L18 9l-4.5 1.5L12 15l-1.5-4.5L6 9l4.5-1.5L12 3z"/>"#,
                r#"<path d="M5 19l.5 1.5L7 21l-1.5.5L5 23l-.5-1.5L3 21l1.5-.5L5 19z"/>"#,
                r#"<path d="M19 11l.5 1.5 1.5.5-1.5.5-.5 1.5-.5-1.5L17 13l1.5-.5.5-1.5z"/></svg>"#
            ),
            Icon::Palette => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<circle cx="13.5" cy="6.5" r="2"/><circle cx="17.5" cy="10.5" r="2"/>"#,
                r#"<circle cx="8.5" cy="7.5" r="2"/><circle cx="6.5" cy="12.5" r="2"/>"#,
                r#"<path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.75-.67 1.75-1.5 0-.38-.15-.74-.41-1.02-.26-.28-.41-.63-.41-1.01 0-.83.67-1.47 1.5-1.47H16c3.31 0 6-2.69 6-6 0-4.96-4.49-9-10-9z"/></svg>"#
            ),
            Icon::Layers => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<polygon points="12,2 2,7 12,12 22,7"/><polyline points="2,17 12,22 22,17"/>"#,
                r#"<polyline points="2,12 12,17 22,12"/></svg>"#
            ),
            Icon::Play => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<polygon points="5,3 19,12 5,21"/></svg>"#
            ),
            Icon::Tree => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<path d="M12 22v-7"/><path d="M9 9l3-4.5L15 9l-3 4.5L9 9z"/>"#,
                r#"<path d="M6 15l6-9 6 9H6z"/></svg>"#
            ),
            Icon::Wind => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<path d="M9.59 4.59A2 2 0 1 1 11 8H2"/><path d="M12.59 19.41A2 2 0 1 0 14 16H2"/>"#,
                r#"<path d="M17.73 7.73A2.5 2.5 0 1 1 19.5 12H2"/></svg>"#
            ),
            Icon::Link => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/>"#,
                r#"<path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/></svg>"#
            ),
            Icon::Waves => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<path d="M2 6c.6.5 1.2 1 2.5 1C7 7 7 5 9.5 5c2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1"/>"#,
                r#"<path d="M2 12c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1"/>"#,
                r#"<path d="M2 18c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1"/></svg>"#
            ),
            Icon::Star => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<polygon points="12,2 15.09,8.26 22,9.27 17,14.14 18.18,21.02 12,17.77 5.82,21.02 7,14.14 2,9.27 8.91,8.26"/></svg>"#
            ),
            Icon::Rotate => concat!(
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<path d="M23 4v6h-6"/><path d="M1 20v-6h6"/>"#,
                r#"<path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10"/>"#,
                r#"<path d="M20.49 15a9 9 0 0 1-14.85 3.36L1 14"/></svg>"#
            ),
        }
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .iter()
            .find(|icon| icon.id() == s)
            .copied()
            .ok_or_else(|| format!("unknown icon: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for icon in Icon::ALL {
            assert_eq!(icon.id().parse::<Icon>(), Ok(icon));
            assert!(icon.svg().starts_with("<svg"));
            assert!(icon.svg().ends_with("</svg>"));
        }
        assert!("gear".parse::<Icon>().is_err());
    }
}
