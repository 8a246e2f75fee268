//! Dashboard CLI - drive the project dashboard from a terminal
//!
//! ```bash
//! dashboard projects                          # List selectable projects
//! dashboard upload --project 3 photo.png a.pdf
//! dashboard signup --first-name Ada --last-name Lovelace --email ada@example.com --password ...
//! dashboard login --email ada@example.com --password ...
//! ```
//!
//! The backend URL comes from `--api-url`, `DASHBOARD_API_URL` or `.env`.

use clap::{Parser, Subcommand};
use dashboard_core::{
    load_candidates, log_in, sign_up, submit, ApiConfig, CliError, CliResult, Credentials,
    Dashboard, HttpBackend, LoginOutcome, NewUser, NoPreviews, ProjectId, SignupOutcome,
    UploadOutcome, API_URL_ENV, DEFAULT_API_URL, DEFAULT_CATALOG,
};
use std::cell::RefCell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Select a project and upload its images and PDFs", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the project catalog
    Projects,

    /// Upload files to a project
    Upload {
        /// Project id (see `dashboard projects`)
        #[arg(short, long)]
        project: u32,

        /// Images or PDFs to upload
        files: Vec<PathBuf>,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Log in and print the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Projects => cmd_projects(),
        command => match ApiConfig::parse(&cli.api_url) {
            Ok(config) => run_remote(command, HttpBackend::new(config)).await,
            Err(e) => Err(e.into()),
        },
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_remote(command: Commands, backend: HttpBackend) -> CliResult<()> {
    match command {
        Commands::Projects => cmd_projects(),
        Commands::Upload { project, files } => {
            cmd_upload(&backend, ProjectId(project), &files).await
        }
        Commands::Signup {
            first_name,
            last_name,
            email,
            password,
        } => {
            let user = NewUser {
                first_name,
                last_name,
                email,
                password,
            };
            cmd_signup(&backend, &user).await
        }
        Commands::Login { email, password } => {
            cmd_login(&backend, &Credentials { email, password }).await
        }
    }
}

fn cmd_projects() -> CliResult<()> {
    eprintln!("📋 Projects ({}):\n", DEFAULT_CATALOG.len());
    for project in DEFAULT_CATALOG.iter() {
        println!("  {:>3}  {}", project.id, project.name);
    }
    Ok(())
}

async fn cmd_upload(backend: &HttpBackend, project: ProjectId, files: &[PathBuf]) -> CliResult<()> {
    let mut dashboard: Dashboard<PathBuf, NoPreviews> =
        Dashboard::new(DEFAULT_CATALOG.clone(), NoPreviews);

    let selected = dashboard.select_by_id(project)?;
    eprintln!("📁 Project: {} ({})", selected.name, selected.id);

    let summary = dashboard.stage(load_candidates(files)?);
    for name in &summary.rejected {
        eprintln!("   ⚠️  Skipped {} (only images and PDFs are accepted)", name);
    }
    for name in &summary.replaced {
        eprintln!("   ♻️  {} given twice, keeping the last one", name);
    }
    eprintln!("   Staged: {} file(s)", dashboard.staged().len());
    eprintln!("📤 Uploading to {}...", backend.config().base_url());

    let dashboard = RefCell::new(dashboard);
    let outcome = submit(&dashboard, backend).await;

    for notice in dashboard.borrow_mut().take_notices() {
        eprintln!("{}", notice);
    }

    match outcome? {
        UploadOutcome::Succeeded { response } => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        UploadOutcome::Failed { reason, .. } => Err(CliError::Upload(reason)),
    }
}

async fn cmd_signup(backend: &HttpBackend, user: &NewUser) -> CliResult<()> {
    eprintln!("👤 Creating account for {}...", user.email);
    match sign_up(backend, user).await {
        SignupOutcome::NavigateToLogin => {
            eprintln!("✅ Account created. Log in with `dashboard login`.");
            Ok(())
        }
        SignupOutcome::ShowError(message) => Err(CliError::Form(message)),
    }
}

async fn cmd_login(backend: &HttpBackend, credentials: &Credentials) -> CliResult<()> {
    eprintln!("🔑 Logging in as {}...", credentials.email);
    match log_in(backend, credentials).await {
        LoginOutcome::Authenticated(token) => {
            eprintln!("✅ Logged in");
            println!("{}", token);
            Ok(())
        }
        LoginOutcome::ShowError(message) => Err(CliError::Form(message)),
    }
}
