use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch configuration and no dataset is needed
pub fn is_config_operation(args: &Args) -> bool {
    args.new_dataset_path.is_some()
        || args.new_default_league.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// ManxHive football tables
///
/// Shows Isle of Man league tables and team pages in a teletext style.
///
/// Without --team the full league table is printed. With --team the team page
/// shows its latest results, next fixtures and the table around it.
#[derive(Parser, Debug)]
#[command(author = "ManxHive Developers", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// League dataset (JSON) to read teams and matches from.
    /// Falls back to the dataset path in the config file.
    #[arg(short = 'f', long = "dataset", value_name = "PATH")]
    pub dataset: Option<String>,

    /// League to show. Falls back to the default league in the config file.
    #[arg(short = 'L', long = "league", value_name = "LEAGUE")]
    pub league: Option<String>,

    /// Show the team page for this team identifier instead of the full table.
    #[arg(short = 't', long = "team", value_name = "TEAM")]
    pub team: Option<String>,

    /// Print JSON instead of a teletext page.
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Disable colours in the output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Number of recent results and upcoming fixtures on a team page.
    #[arg(short = 'n', long = "matches", help_heading = "Display Options")]
    pub matches: Option<usize>,

    /// Pad short team page lists with placeholder fixtures (marked with *).
    #[arg(long = "backfill", help_heading = "Display Options")]
    pub backfill: bool,

    /// Date placeholders are counted from, in YYYY-MM-DD format. Defaults to today.
    #[arg(long = "as-of", value_name = "DATE", help_heading = "Display Options")]
    pub as_of: Option<String>,

    /// List the leagues in the dataset and exit.
    #[arg(long = "list-leagues", help_heading = "Display Options")]
    pub list_leagues: bool,

    /// Update the dataset path in config.
    #[arg(long = "set-dataset", help_heading = "Configuration", value_name = "PATH")]
    pub new_dataset_path: Option<String>,

    /// Update the default league in config.
    #[arg(long = "set-league", help_heading = "Configuration", value_name = "LEAGUE")]
    pub new_default_league: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug logging. Logs are written to stderr as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
