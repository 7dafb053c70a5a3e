use super::core::TeletextPage;
use crate::constants::ui::{PAGE_NUMBER, TITLE};
use crate::football::{SnapshotMatch, TableEntry, TeamSnapshot};
use chrono::Local;
use std::collections::HashMap;

/// Builds the full league table page.
pub fn create_table_page(league: &str, table: &[TableEntry], plain: bool) -> TeletextPage {
    let mut page = TeletextPage::new(
        PAGE_NUMBER,
        TITLE.to_string(),
        league_heading(league),
        plain,
    );

    if table.is_empty() {
        page.add_error_message("No teams in this league");
        return page;
    }

    page.add_table_header();
    page.add_table_rows(table, None);
    page
}

/// Builds a team page: recent form, next fixtures and a table excerpt around the team.
pub fn create_snapshot_page(snapshot: &TeamSnapshot, excerpt_radius: usize, plain: bool) -> TeletextPage {
    let mut subheader = snapshot.team.name.to_uppercase();
    if snapshot.team.is_combination() {
        subheader.push_str(" (COMBINATION)");
    }
    let mut page = TeletextPage::new(PAGE_NUMBER, TITLE.to_string(), subheader, plain);

    let names: HashMap<&str, &str> = snapshot
        .table
        .iter()
        .map(|entry| (entry.team_id.as_str(), entry.team_name.as_str()))
        .collect();

    page.add_section("RECENT RESULTS");
    if snapshot.recent_results.is_empty() {
        page.add_text("No results yet");
    }
    for entry in &snapshot.recent_results {
        add_snapshot_match(&mut page, entry, &snapshot.team.id, &names);
    }
    page.add_spacer();

    page.add_section("NEXT FIXTURES");
    if snapshot.upcoming_fixtures.is_empty() {
        page.add_text("No fixtures scheduled");
    }
    for entry in &snapshot.upcoming_fixtures {
        add_snapshot_match(&mut page, entry, &snapshot.team.id, &names);
    }
    page.add_spacer();

    page.add_section(&format!(
        "{} - POSITION {}",
        league_heading(&snapshot.team.league),
        snapshot.position
    ));
    page.add_table_header();
    page.add_table_rows(
        snapshot.table_excerpt(excerpt_radius),
        Some(snapshot.team.id.as_str()),
    );

    if snapshot.has_placeholders() {
        page.add_spacer();
        page.add_text("* placeholder, fixture not confirmed");
    }

    page
}

/// Builds the page shown when a league or team lookup fails.
pub fn create_not_found_page(message: &str, plain: bool) -> TeletextPage {
    let mut page = TeletextPage::new(
        PAGE_NUMBER,
        TITLE.to_string(),
        "NOT FOUND".to_string(),
        plain,
    );
    page.add_error_message(message);
    page
}

/// Lists the leagues available in a dataset.
pub fn create_league_list_page(leagues: &[&str], plain: bool) -> TeletextPage {
    let mut page = TeletextPage::new(
        PAGE_NUMBER,
        TITLE.to_string(),
        "LEAGUES".to_string(),
        plain,
    );
    if leagues.is_empty() {
        page.add_error_message("Dataset contains no leagues");
    }
    for league in leagues {
        page.add_text(league);
    }
    page
}

fn add_snapshot_match(
    page: &mut TeletextPage,
    entry: &SnapshotMatch,
    team_id: &str,
    names: &HashMap<&str, &str>,
) {
    let fixture = &entry.fixture;
    let kickoff = fixture.kickoff.with_timezone(&Local);
    let display_name = |id: &str| names.get(id).copied().unwrap_or(id).to_string();

    let detail = match fixture.final_score() {
        Some((home_goals, away_goals)) => format!("{home_goals}-{away_goals}"),
        None if entry.is_placeholder() => fixture
            .venue
            .clone()
            .unwrap_or_else(|| crate::constants::backfill::PLACEHOLDER_VENUE.to_string()),
        None => kickoff.format("%H.%M").to_string(),
    };

    page.add_match_line(
        kickoff.format("%d.%m.").to_string(),
        display_name(&fixture.home),
        display_name(&fixture.away),
        detail,
        fixture.outcome_for(team_id),
        entry.is_placeholder(),
    );
}

fn league_heading(league: &str) -> String {
    league.replace(['-', '_'], " ").to_uppercase()
}
