use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use create_anta_app::git::DEFAULT_REPO_URL;
use create_anta_app::logging;
use create_anta_app::package_manager::PackageManager;
use create_anta_app::prompt::PresetDetails;
use create_anta_app::settings::Settings;

mod commands;

use commands::create::CreateOptions;

#[derive(Parser)]
#[command(
    name = "create-anta-app",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a new Anta app from the Next.js starter repository",
    long_about = None
)]
struct Cli {
    /// Name of the project directory
    project_name: Option<String>,

    /// Git repository URL of the starter [default: https://github.com/yourusername/your-nextjs-starter.git]
    #[arg(short, long = "repo", value_name = "URL")]
    repo: Option<String>,

    /// Skip dependency installation
    #[arg(long)]
    skip_install: bool,

    /// Skip starting development server
    #[arg(long)]
    skip_dev: bool,

    /// Package manager used to install and run the app (default: detected from lockfile, else npm)
    #[arg(long, value_enum)]
    package_manager: Option<PackageManager>,

    /// Project title (skips the prompt)
    #[arg(long)]
    title: Option<String>,

    /// Project tagline (skips the prompt)
    #[arg(long)]
    tagline: Option<String>,

    /// Primary brand color as a hex code (skips the prompt)
    #[arg(long, value_name = "HEX")]
    primary_color: Option<String>,

    /// Secondary brand color as a hex code (skips the prompt)
    #[arg(long, value_name = "HEX")]
    secondary_color: Option<String>,

    /// Use defaults for anything not given on the command line
    #[arg(short = 'y', long)]
    defaults: bool,

    /// Show diagnostic logs (ANTA_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "\n❌ Error creating Anta app:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;

    let options = CreateOptions {
        project_name: cli.project_name,
        repo_url: cli
            .repo
            .or(settings.repo_url)
            .unwrap_or_else(|| DEFAULT_REPO_URL.to_string()),
        skip_install: cli.skip_install || settings.skip_install,
        skip_dev: cli.skip_dev || settings.skip_dev,
        package_manager: cli.package_manager.or(settings.package_manager),
        preset: PresetDetails {
            project_title: cli.title,
            tagline: cli.tagline,
            primary_color: cli.primary_color,
            secondary_color: cli.secondary_color,
        },
        use_defaults: cli.defaults,
    };

    commands::create::execute(options)
}
