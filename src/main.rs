use anyhow::Result;
use clap::Parser;
use uci_site::commands;
use uci_site::download::LinkPolicy;

/// uci-site - landing page for Unforeseen Conspiracy Inc.
///
/// Renders the download page from the game's release feed at
/// <SITE_URL>/api/version.
///
/// Examples:
///   uci-site --site-url https://uci.example.com serve
///   uci-site --site-url https://uci.example.com render > index.html
#[derive(Parser, Debug)]
#[command(author, version = env!("UCI_SITE_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the site serving /api/version
    #[arg(long = "site-url", env = "SITE_URL", value_name = "URL", global = true)]
    pub site_url: Option<String>,

    /// Which metadata entry drives the Mac download links
    #[arg(
        long = "link-policy",
        env = "UCI_SITE_LINK_POLICY",
        value_enum,
        default_value_t = LinkPolicy::FeedCompatible,
        global = true
    )]
    pub link_policy: LinkPolicy,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the landing page over HTTP
    Serve(ServeArgs),

    /// Render the landing page once to stdout
    Render,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(
        long = "bind",
        short = 'b',
        env = "UCI_SITE_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:3000"
    )]
    pub bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let Some(site_url) = cli.site_url.as_deref() else {
        anyhow::bail!("Missing site URL. Pass --site-url or set SITE_URL.");
    };

    match cli.command {
        Commands::Serve(args) => commands::serve(site_url, cli.link_policy, &args.bind).await?,
        Commands::Render => {
            let mut stdout = std::io::stdout().lock();
            commands::render(site_url, cli.link_policy, &mut stdout).await?
        }
    }
    Ok(())
}
