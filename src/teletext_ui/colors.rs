use crossterm::style::Color;

// Constants for teletext appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn title_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue on the green title block
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn section_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn highlight_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn win_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn draw_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn loss_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn placeholder_fg() -> Color {
    Color::AnsiValue(244)
} // Grey
