use super::colors::*;
use super::utils::{fit_to_width, format_goal_difference, get_ansi_code};
use crate::constants::ui::{PAGE_WIDTH, TEAM_COLUMN_WIDTH};
use crate::error::AppError;
use crate::football::{Outcome, TableEntry};
use crossterm::style::Color;
use std::io::Write;

/// Width of a team name inside a match line
const MATCH_TEAM_WIDTH: usize = 17;

#[derive(Debug)]
pub struct TeletextPage {
    page_number: u16,
    title: String,
    subheader: String,
    content_rows: Vec<TeletextRow>,
    plain: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeletextRow {
    SectionHeader(String),
    TableHeader,
    TableRow {
        entry: TableEntry,
        highlighted: bool,
    },
    MatchLine {
        date: String,
        home_team: String,
        away_team: String,
        detail: String,
        outcome: Option<Outcome>,
        placeholder: bool,
    },
    Text(String),
    ErrorMessage(String),
    Spacer,
}

impl TeletextPage {
    /// Creates a new TeletextPage instance.
    ///
    /// # Arguments
    /// * `page_number` - The teletext page number shown in the header
    /// * `title` - The title displayed in the header block
    /// * `subheader` - The subtitle displayed below the title
    /// * `plain` - Render without ANSI colour codes
    ///
    /// # Example
    /// ```
    /// use manxhive_football::TeletextPage;
    ///
    /// let mut page = TeletextPage::new(301, "FOOTBALL".to_string(), "PREMIER".to_string(), true);
    /// page.add_error_message("No teams in this league");
    /// assert!(page.has_error_messages());
    /// ```
    pub fn new(page_number: u16, title: String, subheader: String, plain: bool) -> Self {
        TeletextPage {
            page_number,
            title,
            subheader,
            content_rows: Vec::new(),
            plain,
        }
    }

    pub fn add_section(&mut self, title: &str) {
        self.content_rows
            .push(TeletextRow::SectionHeader(title.to_string()));
    }

    pub fn add_table_header(&mut self) {
        self.content_rows.push(TeletextRow::TableHeader);
    }

    /// Adds one row per entry; the row for `highlight_team` is drawn in the highlight colour.
    pub fn add_table_rows(&mut self, entries: &[TableEntry], highlight_team: Option<&str>) {
        for entry in entries {
            let highlighted = highlight_team == Some(entry.team_id.as_str());
            self.content_rows.push(TeletextRow::TableRow {
                entry: entry.clone(),
                highlighted,
            });
        }
    }

    pub fn add_match_line(
        &mut self,
        date: String,
        home_team: String,
        away_team: String,
        detail: String,
        outcome: Option<Outcome>,
        placeholder: bool,
    ) {
        self.content_rows.push(TeletextRow::MatchLine {
            date,
            home_team,
            away_team,
            detail,
            outcome,
            placeholder,
        });
    }

    pub fn add_text(&mut self, text: &str) {
        self.content_rows.push(TeletextRow::Text(text.to_string()));
    }

    pub fn add_spacer(&mut self) {
        self.content_rows.push(TeletextRow::Spacer);
    }

    pub fn add_error_message(&mut self, message: &str) {
        self.content_rows
            .push(TeletextRow::ErrorMessage(message.to_string()));
    }

    pub fn has_error_messages(&self) -> bool {
        self.content_rows
            .iter()
            .any(|row| matches!(row, TeletextRow::ErrorMessage(_)))
    }

    /// Renders the page into display lines, header first.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.content_rows.len() + 3);

        let header_text = format!("MANXHIVE {}", self.page_number);
        let header_width = PAGE_WIDTH.saturating_sub(20);
        if self.plain {
            lines.push(format!(
                "{:<20}{:>width$}",
                self.title,
                header_text,
                width = header_width
            ));
        } else {
            lines.push(format!(
                "\x1b[48;5;{}m\x1b[38;5;{}m{:<20}\x1b[48;5;{}m\x1b[38;5;{}m{:>width$}\x1b[0m",
                get_ansi_code(title_bg(), 46),
                get_ansi_code(title_fg(), 21),
                self.title,
                get_ansi_code(header_bg(), 21),
                get_ansi_code(text_fg(), 231),
                header_text,
                width = header_width
            ));
        }
        lines.push(self.paint(&self.subheader, subheader_fg()));
        lines.push(String::new());

        for row in &self.content_rows {
            lines.push(self.render_row(row));
        }

        lines
    }

    /// Writes the whole page in one buffered write.
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let mut buffer = self.render_lines().join("\n");
        buffer.push('\n');
        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn render_row(&self, row: &TeletextRow) -> String {
        match row {
            TeletextRow::SectionHeader(title) => self.paint(title, section_fg()),
            TeletextRow::TableHeader => self.paint(
                &format!(
                    "    {} {:>2} {:>2} {:>2} {:>2} {:>7} {:>4} {:>3}",
                    fit_to_width("", TEAM_COLUMN_WIDTH),
                    "P",
                    "W",
                    "D",
                    "L",
                    "GOALS",
                    "GD",
                    "PTS"
                ),
                section_fg(),
            ),
            TeletextRow::TableRow { entry, highlighted } => {
                let line = format!(
                    "{:>2}. {} {:>2} {:>2} {:>2} {:>2} {:>7} {:>4} {:>3}",
                    entry.position,
                    fit_to_width(&entry.team_name, TEAM_COLUMN_WIDTH),
                    entry.played,
                    entry.won,
                    entry.drawn,
                    entry.lost,
                    format!("{}-{}", entry.goals_for, entry.goals_against),
                    format_goal_difference(entry.goal_difference),
                    entry.points
                );
                let color = if *highlighted { highlight_fg() } else { text_fg() };
                self.paint(&line, color)
            }
            TeletextRow::MatchLine {
                date,
                home_team,
                away_team,
                detail,
                outcome,
                placeholder,
            } => {
                let marker = if *placeholder { "*" } else { " " };
                let line = format!(
                    "{:<7}{}-{} {:>5} {}",
                    date,
                    fit_to_width(home_team, MATCH_TEAM_WIDTH),
                    fit_to_width(away_team, MATCH_TEAM_WIDTH),
                    detail,
                    marker
                );
                let line = self.paint(&line, if *placeholder { placeholder_fg() } else { text_fg() });
                match outcome {
                    Some(outcome) => {
                        let letter = outcome.letter().to_string();
                        format!("{line}{}", self.paint(&letter, outcome_color(*outcome)))
                    }
                    None => line,
                }
            }
            TeletextRow::Text(text) => self.paint(text, text_fg()),
            TeletextRow::ErrorMessage(message) => self.paint(message, text_fg()),
            TeletextRow::Spacer => String::new(),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.plain {
            text.to_string()
        } else {
            format!("\x1b[38;5;{}m{}\x1b[0m", get_ansi_code(color, 231), text)
        }
    }
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Win => win_fg(),
        Outcome::Draw => draw_fg(),
        Outcome::Loss => loss_fg(),
    }
}
