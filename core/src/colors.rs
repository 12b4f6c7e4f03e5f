//! Type color table for consistent theming of the catalog.
//!
//! Each of the 18 type names maps to a main color, a lighter background,
//! and a readable text color. Unknown types fall back to `normal`.

/// Color scheme for one pokemon type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeColor {
    pub main: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
}

const NORMAL: TypeColor = TypeColor {
    main: "#A8A878",
    bg: "#e8e8d8",
    text: "#6D6D4E",
};

const TYPE_COLORS: [(&str, TypeColor); 18] = [
    ("normal", NORMAL),
    ("fire", TypeColor { main: "#F08030", bg: "#fde2d4", text: "#9C531F" }),
    ("water", TypeColor { main: "#6890F0", bg: "#d4e4f5", text: "#445E9C" }),
    ("electric", TypeColor { main: "#F8D030", bg: "#fdf5d4", text: "#A1871F" }),
    ("grass", TypeColor { main: "#78C850", bg: "#d4f5d8", text: "#4E8234" }),
    ("ice", TypeColor { main: "#98D8D8", bg: "#d4f0f0", text: "#638D8D" }),
    ("fighting", TypeColor { main: "#C03028", bg: "#f5d4d4", text: "#7D1F1A" }),
    ("poison", TypeColor { main: "#A040A0", bg: "#e8d4e8", text: "#682A68" }),
    ("ground", TypeColor { main: "#E0C068", bg: "#f5ead8", text: "#927D44" }),
    ("flying", TypeColor { main: "#A890F0", bg: "#e0d8f8", text: "#6D5E9C" }),
    ("psychic", TypeColor { main: "#F85888", bg: "#f8d8e0", text: "#A13959" }),
    ("bug", TypeColor { main: "#A8B820", bg: "#e8ecd4", text: "#6D7815" }),
    ("rock", TypeColor { main: "#B8A038", bg: "#ece6d4", text: "#786824" }),
    ("ghost", TypeColor { main: "#705898", bg: "#ddd8e8", text: "#493963" }),
    ("dragon", TypeColor { main: "#7038F8", bg: "#ddd4f8", text: "#4924A1" }),
    ("dark", TypeColor { main: "#705848", bg: "#d8d4d0", text: "#49392F" }),
    ("steel", TypeColor { main: "#B8B8D0", bg: "#e8e8f0", text: "#787887" }),
    ("fairy", TypeColor { main: "#EE99AC", bg: "#f8e0e8", text: "#9B6470" }),
];

/// Look up the color scheme for a type name, case-insensitively.
pub fn type_color(name: &str) -> TypeColor {
    let lower = name.to_ascii_lowercase();
    TYPE_COLORS
        .iter()
        .find(|(ty, _)| *ty == lower)
        .map(|(_, color)| *color)
        .unwrap_or(NORMAL)
}

/// CSS gradient for a pokemon's detail background, derived from its types.
///
/// One type blends `main` into a lightened `main`; two types blend the two
/// `main` colors.
pub fn type_gradient(types: &[String]) -> String {
    match types {
        [] => "linear-gradient(135deg, #A8A878 0%, #C8C8A8 100%)".to_string(),
        [only] => {
            let color = type_color(only);
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                color.main,
                lighten(color.main, 20)
            )
        }
        [first, second, ..] => {
            let one = type_color(first);
            let two = type_color(second);
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                one.main, two.main
            )
        }
    }
}

/// Lighten a `#rrggbb` color by a percentage, saturating each channel.
fn lighten(hex: &str, percent: u32) -> String {
    let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    let amount = (255 * percent + 50) / 100;
    let channel = |shift: u32| ((value >> shift) & 0xff) + amount;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(16).min(255),
        channel(8).min(255),
        channel(0).min(255)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_resolves() {
        assert_eq!(type_color("fire").main, "#F08030");
        assert_eq!(type_color("fairy").text, "#9B6470");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(type_color("Electric"), type_color("electric"));
    }

    #[test]
    fn unknown_type_falls_back_to_normal() {
        assert_eq!(type_color("shadow"), NORMAL);
        assert_eq!(type_color(""), NORMAL);
    }

    #[test]
    fn gradient_for_no_types_is_the_default_pair() {
        assert_eq!(
            type_gradient(&[]),
            "linear-gradient(135deg, #A8A878 0%, #C8C8A8 100%)"
        );
    }

    #[test]
    fn gradient_for_one_type_lightens_the_main_color() {
        let gradient = type_gradient(&["fire".to_string()]);
        assert_eq!(
            gradient,
            "linear-gradient(135deg, #F08030 0%, #ffb363 100%)"
        );
    }

    #[test]
    fn gradient_for_two_types_blends_both_mains() {
        let gradient = type_gradient(&["grass".to_string(), "poison".to_string()]);
        assert_eq!(
            gradient,
            "linear-gradient(135deg, #78C850 0%, #A040A0 100%)"
        );
    }

    #[test]
    fn lighten_saturates_at_white() {
        assert_eq!(lighten("#ffffff", 20), "#ffffff");
        assert_eq!(lighten("#F08030", 20), "#ffb363");
    }
}
