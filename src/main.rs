use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_site::{
    ContactForm, Field, ROUTES, Resolution, SENT_MESSAGE, SiteSnapshot, resolve,
};
use tracing_subscriber::EnvFilter;

const OUTPUT_DIR: &str = "output";
const SNAPSHOT_FILE: &str = "site.json";

#[derive(Parser)]
#[command(name = "portfolio", about = "Inspect the portfolio site's bundled content")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the route table
    Routes,
    /// Show what the router does with a path, e.g. "/about" or "/blog"
    Resolve { path: String },
    /// Write the bundled content to <out>/site.json
    Export {
        #[arg(long, default_value = OUTPUT_DIR)]
        out: PathBuf,
    },
    /// Dry-run one contact form submission
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Resolve { path }) => run_resolve(&path),
        Some(Command::Export { out }) => {
            let path = run_export(&out)?;
            eprintln!("  {}", path.display());
        }
        Some(Command::Contact {
            name,
            email,
            message,
        }) => run_contact(name, email, message),
        // Default: list routes
        Some(Command::Routes) | None => run_routes(),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  ROUTES
// ═══════════════════════════════════════════════════════════════════════

fn run_routes() {
    for route in ROUTES {
        println!("{:<10} {}", route.path, route.label);
    }
}

fn describe_resolution(path: &str) -> String {
    match resolve(path) {
        Resolution::Render(page) => format!("render {page:?}"),
        Resolution::Redirect(page) => format!("redirect {}", page.path()),
    }
}

fn run_resolve(path: &str) {
    println!("{}", describe_resolution(path));
}

// ═══════════════════════════════════════════════════════════════════════
//  EXPORT
// ═══════════════════════════════════════════════════════════════════════

fn run_export(out: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out)
        .with_context(|| format!("cannot create {}", out.display()))?;
    let path = out.join(SNAPSHOT_FILE);
    let snapshot = SiteSnapshot::bundled();
    let json = serde_json::to_string_pretty(&snapshot).context("serializing site snapshot")?;
    std::fs::write(&path, &json).with_context(|| format!("cannot write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = json.len(), "snapshot written");
    Ok(path)
}

// ═══════════════════════════════════════════════════════════════════════
//  CONTACT DRY RUN
// ═══════════════════════════════════════════════════════════════════════

fn dry_run(name: String, email: String, message: String) -> ContactForm {
    let mut form = ContactForm::new();
    form.set(Field::Name, name);
    form.set(Field::Email, email);
    form.set(Field::Message, message);
    // Outcome is read back from the form's state below.
    let _ = form.submit();
    form
}

fn run_contact(name: String, email: String, message: String) {
    let form = dry_run(name, email, message);
    println!("state:   {:?}", form.state());
    println!("fields:  name={:?} email={:?} message={:?}", form.name, form.email, form.message);
    println!("error:   {}", form.error_message().unwrap_or_default());
    println!("sent:    {}", form.is_sent());
    if form.is_sent() {
        println!("{SENT_MESSAGE}");
    }
}
