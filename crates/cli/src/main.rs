use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use donezo_client::api::DashboardApi;
use donezo_client::config::ClientConfig;
use donezo_client::fetcher::FetchOutcome;
use donezo_client::page::DashboardPage;
use donezo_client::session::SessionStore;
use donezo_client::storage::FileStorage;
use donezo_client::tracker::TimeTracker;
use donezo_core::navigation::Route;
use donezo_core::progress::ProgressConfig;
use donezo_core::projects::NewProject;
use donezo_core::types::ProjectStatus;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Parser)]
#[command(name = "donezo", version, about = "Donezo dashboard client")]
struct Cli {
    /// Backend base URL; overrides `DONEZO_API_URL`.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and remember the session.
    Login {
        email: String,
        #[arg(long, env = "DONEZO_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show who is signed in.
    Status,
    /// Load the dashboard and print one page of it.
    Dashboard {
        /// Page path, e.g. `/analytics` or `/team`.
        #[arg(long, default_value = "/dashboard")]
        page: String,
        /// Search box contents.
        #[arg(long, short, default_value = "")]
        query: String,
        /// Revenue target for the progress gauge; overrides
        /// `DONEZO_REVENUE_TARGET`.
        #[arg(long)]
        target: Option<f64>,
        /// Add a project with this title before rendering.
        #[arg(long)]
        add_project: Option<String>,
        /// Status for `--add-project`.
        #[arg(long, default_value = "In Progress")]
        status: ProjectStatus,
    },
    /// Run the time tracker for a while, printing the clock each second.
    Track {
        #[arg(long, default_value_t = 5)]
        seconds: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "donezo=info,donezo_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Invalid configuration")?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    let api = DashboardApi::from_config(&config).context("Failed to build HTTP client")?;
    let session = Arc::new(SessionStore::restore(
        FileStorage::new(&config.session_path),
        Arc::new(api.clone()),
    ));

    match cli.command {
        Command::Login { email, password } => match session.login(&email, &password).await {
            Ok(identity) => println!("Signed in as {}", identity.email),
            Err(e) => anyhow::bail!("{}", e.user_message()),
        },
        Command::Logout => {
            session.logout().await;
            println!("Signed out");
        }
        Command::Status => match session.identity().await {
            Some(identity) => println!("Signed in as {} (id {})", identity.email, identity.id),
            None => println!("Not signed in"),
        },
        Command::Dashboard {
            page,
            query,
            target,
            add_project,
            status,
        } => {
            let route = Route::from_path(&page).guard(session.is_authenticated().await);
            if route == Route::Login {
                anyhow::bail!("Not signed in; run `donezo login <email>` first");
            }

            let progress = match target {
                Some(target) => ProgressConfig::new(target)?,
                None => config.progress,
            };
            let dashboard = DashboardPage::new(Arc::clone(&session), api, progress);

            match dashboard.refresh().await {
                FetchOutcome::Loaded(_) | FetchOutcome::Skipped => {}
                FetchOutcome::Failed(e) => anyhow::bail!("{}", e.user_message()),
            }

            if let Some(title) = add_project {
                let row = dashboard.add_project(NewProject {
                    title,
                    status,
                    ..NewProject::default()
                });
                tracing::info!(id = %row.id, "Project added for this session");
            }

            let view = dashboard
                .view(&query)
                .context("Dashboard snapshot is not available")?;
            print!("{}", render::render(route, &view));
        }
        Command::Track { seconds } => {
            let tracker = TimeTracker::start();
            let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
            for _ in 0..=seconds {
                ticker.tick().await;
                println!("{}", tracker.display());
            }
            tracker.stop().await;
        }
    }

    Ok(())
}
