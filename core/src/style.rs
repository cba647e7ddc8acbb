use crate::color::Color;

/// Fill a style-sheet template with color names.
///
/// `%1` is replaced by the first color's `#rrggbb` name, `%2` by the second,
/// and so on. Placeholders without a matching color, and any other `%`, are
/// left untouched.
///
/// ```
/// use hueshift_core::{Color, format_style};
///
/// let css = format_style("border: 1px solid %1; color: %2;", &[Color::BLACK, Color::WHITE]);
/// assert_eq!(css, "border: 1px solid #000000; color: #ffffff;");
/// ```
pub fn format_style(template: &str, colors: &[Color]) -> String {
    let mut out = String::with_capacity(template.len() + colors.len() * 7);
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let digits = after
            .char_indices()
            .take_while(|(i, c)| *i < 2 && c.is_ascii_digit())
            .count();

        let color = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| colors.get(index));

        match color {
            Some(color) => {
                out.push_str(&color.name());
                rest = &after[digits..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
