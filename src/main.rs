use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};

use streak_card::card::{self, CardOptions, NumberFormat, StrokeType};
use streak_card::config::builtin_themes;
use streak_card::config::loader;
use streak_card::config::types::AppConfig;
use streak_card::github::{auth, client, graphql, rate_limit};
use streak_card::i18n;
use streak_card::theme;
use streak_card::types::StreakCardData;

#[derive(Parser)]
#[command(
    name = "streak-card",
    version,
    about = "Render a GitHub contribution streak card as SVG"
)]
struct Cli {
    /// Path to config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch streak data (or read it from a file) and write the SVG card.
    Render(RenderArgs),
    /// Render one card per theme from a data file.
    Preview(PreviewArgs),
    /// List available built-in themes.
    Themes(ThemesArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// GitHub login to fetch.
    #[arg(long, env = "INPUT_USERNAME")]
    username: Option<String>,

    /// Token for the GraphQL API.
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// GitHub API root, for GitHub Enterprise.
    #[arg(long)]
    api_url: Option<String>,

    /// Read `StreakCardData` JSON from this file instead of fetching.
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Output SVG path [default: github-streak.svg].
    #[arg(short, long, env = "INPUT_OUTPUT_PATH")]
    output: Option<PathBuf>,

    #[command(flatten)]
    card: CardArgs,
}

/// Card appearance flags, each also read from an `INPUT_*` variable.
#[derive(Args)]
struct CardArgs {
    #[arg(long, env = "INPUT_THEME")]
    theme: Option<String>,

    #[arg(long, env = "INPUT_ANIMATED", value_name = "BOOL", value_parser = parse_bool_input)]
    animated: Option<bool>,

    #[arg(long, env = "INPUT_LOCALE")]
    locale: Option<String>,

    /// Date pattern, e.g. "M j[, Y]" or "d/m[/Y]".
    #[arg(long, env = "INPUT_DATE_FORMAT")]
    date_format: Option<String>,

    #[arg(long, env = "INPUT_BORDER_RADIUS")]
    border_radius: Option<f64>,

    #[arg(long, env = "INPUT_HIDE_BORDER", value_name = "BOOL", value_parser = parse_bool_input)]
    hide_border: Option<bool>,

    #[arg(long, env = "INPUT_CARD_WIDTH")]
    card_width: Option<f64>,

    #[arg(long, env = "INPUT_CARD_HEIGHT")]
    card_height: Option<f64>,

    #[arg(long, env = "INPUT_NUMBER_FORMAT", value_enum)]
    number_format: Option<NumberFormat>,

    #[arg(long, env = "INPUT_STROKE_TYPE", value_enum)]
    stroke_type: Option<StrokeType>,

    /// Prefix for SVG definition ids.
    #[arg(long)]
    card_id: Option<String>,

    #[arg(long, env = "INPUT_FIRE")]
    fire: Option<String>,

    #[arg(long, env = "INPUT_RING")]
    ring: Option<String>,

    #[arg(long, env = "INPUT_CURR_STREAK_NUM")]
    curr_streak_num: Option<String>,

    #[arg(long, env = "INPUT_SIDE_NUMS")]
    side_nums: Option<String>,

    #[arg(long, env = "INPUT_CURR_STREAK_LABEL")]
    curr_streak_label: Option<String>,

    #[arg(long, env = "INPUT_SIDE_LABELS")]
    side_labels: Option<String>,

    #[arg(long, env = "INPUT_DATES")]
    dates: Option<String>,

    /// Solid color, "transparent", or "ANGLE,HEX1,HEX2[,...]".
    #[arg(long, env = "INPUT_BACKGROUND")]
    background: Option<String>,

    /// Separator line color.
    #[arg(long, env = "INPUT_STROKE")]
    stroke: Option<String>,
}

#[derive(Args)]
struct PreviewArgs {
    /// `StreakCardData` JSON file.
    #[arg(long, value_name = "FILE")]
    data: PathBuf,

    /// Comma-separated theme names [default: all].
    #[arg(long, value_delimiter = ',')]
    themes: Vec<String>,

    #[arg(long, default_value = "previews")]
    out_dir: PathBuf,
}

#[derive(Args)]
struct ThemesArgs {
    /// Only names containing this text.
    #[arg(long)]
    search: Option<String>,

    /// Only names starting with this prefix.
    #[arg(long)]
    category: Option<String>,

    /// Print category statistics as JSON.
    #[arg(long)]
    stats: bool,
}

fn parse_bool_input(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        other => Err(format!("expected true or false, got {other:?}")),
    }
}

fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn overlay_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

impl CardArgs {
    /// Lay flag/env values over `options` from the config file.
    fn apply(self, options: &mut CardOptions) {
        overlay(&mut options.theme, self.theme);
        overlay(&mut options.animate, self.animated);
        overlay(&mut options.locale, self.locale);
        overlay_opt(&mut options.date_format, self.date_format);
        overlay_opt(&mut options.border_radius, self.border_radius);
        overlay(&mut options.hide_border, self.hide_border);
        overlay_opt(&mut options.width, self.card_width);
        overlay_opt(&mut options.height, self.card_height);
        overlay(&mut options.number_format, self.number_format);
        overlay(&mut options.stroke_type, self.stroke_type);
        overlay_opt(&mut options.card_id, self.card_id);

        let colors = &mut options.colors;
        overlay_opt(&mut colors.fire, self.fire);
        overlay_opt(&mut colors.ring, self.ring);
        overlay_opt(&mut colors.curr_streak_num, self.curr_streak_num);
        overlay_opt(&mut colors.side_nums, self.side_nums);
        overlay_opt(&mut colors.curr_streak_label, self.curr_streak_label);
        overlay_opt(&mut colors.side_labels, self.side_labels);
        overlay_opt(&mut colors.dates, self.dates);
        overlay_opt(&mut colors.background, self.background);
        overlay_opt(&mut colors.stroke, self.stroke);
    }
}

fn read_data_file(path: &Path) -> Result<StreakCardData> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing JSON from {}", path.display()))
}

fn write_svg(path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))
}

fn fetch(username: &str, token: &str, api_url: Option<&str>) -> Result<StreakCardData> {
    // Install the rustls CryptoProvider before any TLS client is constructed.
    // A provider installed earlier in the process is fine.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting tokio runtime")?;

    runtime.block_on(async {
        let octocrab = client::build(token, api_url)?;
        graphql::fetch_streak_data(&octocrab, username)
            .await
            .with_context(|| format!("fetching contributions for {username}"))
    })
}

fn render(args: RenderArgs, mut config: AppConfig) -> Result<()> {
    args.card.apply(&mut config.card);
    overlay_opt(&mut config.user, args.username);
    overlay_opt(&mut config.output, args.output);
    overlay_opt(&mut config.github.api_url, args.api_url);

    let resolution = theme::resolve_with_status(Some(&config.card.theme));
    if !resolution.found {
        tracing::warn!(
            "theme {:?} not found, falling back to {}",
            config.card.theme,
            resolution.resolved_name
        );
    }
    if !i18n::is_supported(&config.card.locale) {
        tracing::warn!(
            "locale {:?} has no translations, falling back to English",
            config.card.locale
        );
    }

    let data = if let Some(path) = &args.data {
        read_data_file(path)?
    } else {
        let username = config
            .user
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| anyhow!("no username given; pass --username or set `user` in the config"))?;
        let token = auth::resolve_token(args.github_token.as_deref())?;
        match fetch(username.trim(), &token, config.github.api_url.as_deref()) {
            Ok(data) => data,
            Err(err) => {
                if let Some(limit) = rate_limit::classify(&err) {
                    tracing::warn!("{}", limit.hint());
                }
                return Err(err);
            }
        }
    };

    let svg = card::generate_card(&data, &config.card);
    let output = config.output_path();
    write_svg(&output, &svg)?;
    tracing::info!(
        "wrote {} ({} current, {} longest)",
        output.display(),
        data.current_streak,
        data.longest_streak
    );
    Ok(())
}

fn preview(args: &PreviewArgs) -> Result<()> {
    let data = read_data_file(&args.data)?;
    let names: Vec<&str> = if args.themes.is_empty() {
        builtin_themes::list()
    } else {
        args.themes.iter().map(|t| t.trim()).collect()
    };

    for (name, svg) in card::generate_theme_preview(&data, &names) {
        write_svg(&args.out_dir.join(format!("{name}.svg")), &svg)?;
    }
    tracing::info!("wrote {} previews to {}", names.len(), args.out_dir.display());
    Ok(())
}

fn list_themes(args: &ThemesArgs) -> Result<()> {
    if args.stats {
        let stats = theme::stats();
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let names = match (&args.search, &args.category) {
        (Some(pattern), _) => theme::search(pattern),
        (None, Some(prefix)) => theme::by_category(prefix),
        (None, None) => builtin_themes::list(),
    };
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for `themes` output.
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Themes(args) => list_themes(&args),
        Commands::Preview(args) => preview(&args),
        Commands::Render(args) => {
            let config = loader::load_config(cli.config.as_deref())?;
            render(args, config)
        }
    }
}
