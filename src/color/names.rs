//! Named colors accepted by the normalizer.

use super::Color;

/// Lookup table of color names. Names are stored lowercase without
/// separators; see [`lookup`] for the matching rules.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(190, 190, 190)),
    ("grey", Color::rgb(190, 190, 190)),
    ("darkgray", Color::rgb(169, 169, 169)),
    ("darkgrey", Color::rgb(169, 169, 169)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("lightgrey", Color::rgb(211, 211, 211)),
    ("darkred", Color::rgb(139, 0, 0)),
    ("darkgreen", Color::rgb(0, 100, 0)),
    ("darkblue", Color::rgb(0, 0, 139)),
    ("navy", Color::rgb(0, 0, 128)),
    ("maroon", Color::rgb(176, 48, 96)),
    ("olive", Color::rgb(128, 128, 0)),
    ("purple", Color::rgb(160, 32, 240)),
    ("teal", Color::rgb(0, 128, 128)),
    ("orange", Color::rgb(255, 165, 0)),
    ("darkorange", Color::rgb(255, 140, 0)),
    ("pink", Color::rgb(255, 192, 203)),
    ("hotpink", Color::rgb(255, 105, 180)),
    ("brown", Color::rgb(165, 42, 42)),
    ("gold", Color::rgb(255, 215, 0)),
    ("silver", Color::rgb(192, 192, 192)),
    ("violet", Color::rgb(238, 130, 238)),
    ("indigo", Color::rgb(75, 0, 130)),
    ("turquoise", Color::rgb(64, 224, 208)),
    ("coral", Color::rgb(255, 127, 80)),
    ("salmon", Color::rgb(250, 128, 114)),
    ("khaki", Color::rgb(240, 230, 140)),
    ("beige", Color::rgb(245, 245, 220)),
    ("ivory", Color::rgb(255, 255, 240)),
    ("lavender", Color::rgb(230, 230, 250)),
    ("tomato", Color::rgb(255, 99, 71)),
    ("chocolate", Color::rgb(210, 105, 30)),
    ("skyblue", Color::rgb(135, 206, 235)),
    ("steelblue", Color::rgb(70, 130, 180)),
    ("royalblue", Color::rgb(65, 105, 225)),
    ("forestgreen", Color::rgb(34, 139, 34)),
    ("seagreen", Color::rgb(46, 139, 87)),
    ("limegreen", Color::rgb(50, 205, 50)),
    ("crimson", Color::rgb(220, 20, 60)),
    ("firebrick", Color::rgb(178, 34, 34)),
    ("slategray", Color::rgb(112, 128, 144)),
    ("slategrey", Color::rgb(112, 128, 144)),
];

/// Find a named color. Matching ignores case, spaces, underscores and
/// hyphens, so `"Dark Gray"`, `"dark_gray"` and `"darkgray"` are the same.
pub fn lookup(name: &str) -> Option<Color> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect();
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, color)| *color)
}

/// First name registered for an exact color, if any.
pub fn name_of(color: Color) -> Option<&'static str> {
    if !color.is_opaque() {
        return None;
    }
    NAMED_COLORS
        .iter()
        .find(|(_, candidate)| *candidate == color)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case_and_separators() {
        let expected = Some(Color::rgb(169, 169, 169));
        assert_eq!(lookup("darkgray"), expected);
        assert_eq!(lookup("Dark Gray"), expected);
        assert_eq!(lookup("DARK_GRAY"), expected);
        assert_eq!(lookup("dark-gray"), expected);
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("blurple"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_name_of_round_trips() {
        assert_eq!(name_of(Color::rgb(255, 0, 0)), Some("red"));
        assert_eq!(name_of(Color::rgba(255, 0, 0, 10)), None);
        assert_eq!(name_of(Color::rgb(1, 2, 3)), None);
    }

    #[test]
    fn test_table_keys_are_normalized() {
        for (name, _) in NAMED_COLORS {
            assert!(lookup(name).is_some(), "{}", name);
            assert!(name.chars().all(|c| c.is_ascii_lowercase()), "{}", name);
        }
    }
}
