use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use acg_core::{Result, Settings};
use acg_pipeline::{input, Pipeline};
use acg_publish::WordPressClient;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate SEO articles from keywords", long_about = None)]
struct Cli {
    /// Output directory for generated HTML and images
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    /// Publish successful articles to WordPress after generation
    #[arg(long, short = 'w')]
    wordpress: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate articles for one or more keywords
    Generate {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Generate articles for every keyword in a CSV file (first column,
    /// optional "keyword" header)
    Csv { path: PathBuf },
    /// Show which provider credentials are configured
    Status,
    /// Check the WordPress connection
    TestWordpress,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    if let Some(output) = cli.output {
        settings.output_dir = output;
    }

    match cli.command {
        Commands::Status => {
            print_status(&settings);
            Ok(())
        }
        Commands::TestWordpress => test_wordpress(&settings).await,
        Commands::Generate { keywords } => {
            run_generation(&settings, keywords, cli.wordpress).await
        }
        Commands::Csv { path } => {
            let keywords = input::keywords_from_csv(&path)?;
            run_generation(&settings, keywords, cli.wordpress).await
        }
    }
}

fn print_status(settings: &Settings) {
    println!("📊 API Status:");
    for (name, configured) in settings.provider_status() {
        let icon = if configured { "✅" } else { "❌" };
        println!("  {} {}", icon, name);
    }
}

async fn test_wordpress(settings: &Settings) -> Result<()> {
    match WordPressClient::from_settings(settings) {
        Some(client) => {
            if client.test_connection().await {
                println!("✅ WordPress connection successful");
            } else {
                println!("❌ WordPress connection failed");
            }
        }
        None => println!("❌ WordPress credentials not configured"),
    }
    Ok(())
}

async fn run_generation(settings: &Settings, keywords: Vec<String>, publish: bool) -> Result<()> {
    settings.validate()?;
    print_status(settings);

    let pipeline = Pipeline::new(settings);
    let summary = pipeline.run_batch(&keywords).await;

    println!(
        "\n📊 Results: {} success, {} failed",
        summary.success.len(),
        summary.failed.len()
    );
    for (keyword, reason) in &summary.failed {
        println!("  ❌ {}: {}", keyword, reason);
    }

    if publish {
        publish_results(settings, &summary.success).await;
    }
    Ok(())
}

async fn publish_results(settings: &Settings, keywords: &[String]) {
    let Some(client) = WordPressClient::from_settings(settings) else {
        warn!("⚠️ WordPress credentials not configured; skipping publish");
        return;
    };

    for keyword in keywords {
        let path = settings
            .output_dir
            .join(format!("{}.html", acg_core::sanitize_keyword(keyword)));
        let html = match std::fs::read_to_string(&path) {
            Ok(html) => html,
            Err(e) => {
                warn!("⚠️ Cannot read {} for publishing: {}", path.display(), e);
                continue;
            }
        };
        let prepared = acg_publish::prepare_for_wordpress(&html);
        match client.publish(keyword, &prepared, None).await {
            Ok(post_id) => info!("✅ Published '{}' as post {}", keyword, post_id),
            // Never retried; the failure is reported once per keyword.
            Err(e) => warn!("❌ Failed to publish '{}': {}", keyword, e),
        }
    }
}
