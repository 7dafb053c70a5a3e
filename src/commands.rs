use crate::cli::Args;
use chrono::{DateTime, NaiveDate, Utc};
use crossterm::{execute, terminal::SetTitle};
use manxhive_football::config::Config;
use manxhive_football::constants::{MAX_SNAPSHOT_MATCHES, ui};
use manxhive_football::error::AppError;
use manxhive_football::football::{BackfillOptions, LeagueDataset, SnapshotOptions};
use manxhive_football::teletext_ui::{
    TeletextPage, create_league_list_page, create_not_found_page, create_snapshot_page,
    create_table_page,
};
use manxhive_football::{NAME, VERSION};
use std::io::stdout;
use std::path::Path;

fn terminal_title() -> String {
    format!("MANXHIVE {}", ui::PAGE_NUMBER)
}

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if let Some(matches) = args.matches {
        if !(1..=MAX_SNAPSHOT_MATCHES).contains(&matches) {
            return Err(AppError::config_error(format!(
                "--matches must be between 1 and {MAX_SNAPSHOT_MATCHES}, got {matches}"
            )));
        }
    }

    if let Some(as_of) = &args.as_of {
        parse_as_of_date(as_of)?;
    }

    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }

    Ok(())
}

/// Parses an `--as-of` value (YYYY-MM-DD) into midnight UTC of that day.
pub fn parse_as_of_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid --as-of date '{value}': {e}"))
    })?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        AppError::datetime_parse_error(format!("Invalid --as-of date '{value}'"))
    })?;
    Ok(midnight.and_utc())
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(terminal_title()))?;
    println!("{NAME} {VERSION}");
    Ok(())
}

/// Handles the --list-config command.
///
/// Sets the terminal title and prints the current configuration.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(terminal_title()))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--set-dataset, --set-league,
/// --set-log-file, --clear-log-file).
///
/// Starts from the stored config file (or defaults when there is none), applies
/// the changes and saves the result. Environment overrides are not persisted.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Could not read existing config, starting from defaults: {e}");
                Config::default()
            })
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args);
    config.validate()?;
    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(dataset_path) = &args.new_dataset_path {
        config.dataset_path = Some(dataset_path.clone());
    }

    if let Some(league) = &args.new_default_league {
        config.default_league = Some(league.clone());
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }
}

/// Dataset path from --dataset, falling back to the config file.
pub fn resolve_dataset_path(args: &Args, config: &Config) -> Result<String, AppError> {
    args.dataset
        .clone()
        .or_else(|| config.dataset_path.clone())
        .ok_or_else(|| {
            AppError::config_error(
                "No dataset given. Use --dataset PATH or save one with --set-dataset PATH",
            )
        })
}

/// League from --league, falling back to the default league in the config file.
pub fn resolve_league(args: &Args, config: &Config) -> Result<String, AppError> {
    args.league
        .clone()
        .or_else(|| config.default_league.clone())
        .ok_or(AppError::LeagueNotSpecified)
}

/// Snapshot options from the config file, with command line flags taking precedence.
pub fn snapshot_options(args: &Args, config: &Config) -> Result<SnapshotOptions, AppError> {
    let match_count = args.matches.unwrap_or(config.snapshot_matches);

    let backfill = if args.backfill || config.backfill_placeholders {
        let anchor = match &args.as_of {
            Some(as_of) => parse_as_of_date(as_of)?,
            None => Utc::now(),
        };
        Some(
            BackfillOptions::new(anchor)
                .with_target_len(match_count)
                .with_interval_days(config.backfill_interval_days),
        )
    } else {
        None
    };

    Ok(SnapshotOptions {
        match_count,
        backfill,
    })
}

/// Handles the --list-leagues command.
pub async fn handle_list_leagues_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let dataset = LeagueDataset::load_from_path(&resolve_dataset_path(args, config)?).await?;
    let leagues = dataset.leagues();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&leagues)?);
        return Ok(());
    }

    execute!(stdout(), SetTitle(terminal_title()))?;
    create_league_list_page(&leagues, args.plain).render_buffered(&mut stdout())?;
    println!();
    Ok(())
}

/// Handles the default command: a league table, or a team page with --team.
///
/// An unknown league or team is shown as a not found page (or a JSON error
/// object) rather than failing the run.
pub async fn handle_standings_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let dataset = LeagueDataset::load_from_path(&resolve_dataset_path(args, config)?).await?;
    let league = resolve_league(args, config)?;
    let options = snapshot_options(args, config)?;

    if args.json {
        println!(
            "{}",
            standings_json(&dataset, &league, args.team.as_deref(), &options)?
        );
        return Ok(());
    }

    let page = standings_page(
        &dataset,
        &league,
        args.team.as_deref(),
        &options,
        args.plain,
    )?;

    execute!(stdout(), SetTitle(terminal_title()))?;
    page.render_buffered(&mut stdout())?;
    println!();
    Ok(())
}

/// Builds the teletext page for a league table or team page.
pub fn standings_page(
    dataset: &LeagueDataset,
    league: &str,
    team: Option<&str>,
    options: &SnapshotOptions,
    plain: bool,
) -> Result<TeletextPage, AppError> {
    let page = match team {
        Some(team_id) => dataset
            .team_snapshot(league, team_id, options)
            .map(|snapshot| create_snapshot_page(&snapshot, ui::EXCERPT_RADIUS, plain)),
        None => dataset
            .build_table(league)
            .map(|table| create_table_page(league, &table, plain)),
    };

    match page {
        Ok(page) => Ok(page),
        Err(e) if e.is_not_found() => {
            tracing::info!("{e}");
            Ok(create_not_found_page(&e.to_string(), plain))
        }
        Err(e) => Err(e),
    }
}

/// Serializes a league table or team snapshot as pretty printed JSON.
pub fn standings_json(
    dataset: &LeagueDataset,
    league: &str,
    team: Option<&str>,
    options: &SnapshotOptions,
) -> Result<String, AppError> {
    let value = match team {
        Some(team_id) => dataset
            .team_snapshot(league, team_id, options)
            .and_then(|snapshot| Ok(serde_json::to_value(&snapshot)?)),
        None => dataset
            .build_table(league)
            .and_then(|table| Ok(serde_json::to_value(&table)?)),
    };

    let value = match value {
        Ok(value) => value,
        Err(e) if e.is_not_found() => {
            tracing::info!("{e}");
            serde_json::json!({ "error": e.to_string() })
        }
        Err(e) => return Err(e),
    };

    Ok(serde_json::to_string_pretty(&value)?)
}
