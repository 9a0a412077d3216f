//! Open Props UI tooling - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "openprops")]
#[command(version)]
#[command(about = "Open Props UI theme tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten CSS files into a single file
    Flatten {
        /// Path to CSS directory (default: static/css)
        #[arg(short = 'd', long)]
        css_dir: Option<String>,

        /// Output file path (default: <css-dir>/flat.css)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Entry stylesheet inside the CSS directory
        #[arg(short = 'e', long, default_value = openprops_css::DEFAULT_ENTRY)]
        entry: String,
    },

    /// Render the :root theme block from slider values
    Theme {
        /// TOML file with slider values
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Write the CSS to FILE instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Color scheme (0 = light, 1 = dark)
        #[arg(long, allow_negative_numbers = true)]
        color_scheme: Option<i64>,

        /// Palette hue [0, 360]
        #[arg(long, allow_negative_numbers = true)]
        hue: Option<i64>,

        /// Palette hue step [-20, 20]
        #[arg(long, allow_negative_numbers = true)]
        rotate: Option<i64>,

        /// Palette chroma [0, 1]
        #[arg(long, allow_negative_numbers = true)]
        chroma: Option<f64>,

        /// Button radius (0 = sharp .. 4 = round)
        #[arg(long, allow_negative_numbers = true)]
        button_radius: Option<i64>,

        /// Typography scale (0 = small, 1 = medium, 2 = large)
        #[arg(long, allow_negative_numbers = true)]
        typography_scale: Option<i64>,

        /// Border color step [1, 12]
        #[arg(long, allow_negative_numbers = true)]
        border_color_step: Option<i64>,

        /// Border radius (0 = sharp .. 4 = round)
        #[arg(long, allow_negative_numbers = true)]
        border_radius: Option<i64>,

        /// Border width in px [0, 5]
        #[arg(long, allow_negative_numbers = true)]
        border_width: Option<i64>,

        /// Primary color step [1, 12]
        #[arg(long, allow_negative_numbers = true)]
        primary_color_step: Option<i64>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openprops=info,openprops_css=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Flatten {
            css_dir,
            output,
            entry,
        } => commands::flatten::execute(commands::flatten::FlattenArgs {
            css_dir,
            output,
            entry,
        }),
        Commands::Theme {
            config,
            output,
            color_scheme,
            hue,
            rotate,
            chroma,
            button_radius,
            typography_scale,
            border_color_step,
            border_radius,
            border_width,
            primary_color_step,
        } => commands::theme::execute(commands::theme::ThemeArgs {
            config,
            output,
            update: openprops_css::ThemeUpdate {
                color_scheme,
                hue,
                rotate,
                chroma,
                button_radius,
                typography_scale,
                border_color_step,
                border_radius,
                border_width,
                primary_color_step,
            },
        }),
    }
}
