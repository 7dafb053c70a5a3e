use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

/// Helper function to extract ANSI color code from crossterm Color enum.
/// Provides a fallback value for non-ANSI colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Pads or truncates `text` to exactly `width` terminal columns.
///
/// Widths are measured in display columns so names with accented or wide
/// characters line up with plain ASCII ones.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut result = String::with_capacity(width);
    let mut used = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        result.push(ch);
        used += ch_width;
    }

    result.extend(std::iter::repeat_n(' ', width - used));
    result
}

/// Formats a goal difference the way league tables print it: "+3", "0", "-2".
pub fn format_goal_difference(goal_difference: i64) -> String {
    if goal_difference > 0 {
        format!("+{goal_difference}")
    } else {
        goal_difference.to_string()
    }
}
