use clap::Parser;
use hybrid_tester::{
    Console, DEFAULT_BASE_URL, HybridClient, Settings, SoftPolicy, init_logging, run,
};

#[derive(Parser)]
#[command(author, version, about = "Smoke-test a hybrid face-analysis service")]
struct Cli {
    /// Base URL of the service under test
    #[arg(long, env = "HYBRID_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Threshold sent with the compare-faces request
    #[arg(long, env = "HYBRID_SIMILARITY_THRESHOLD", default_value_t = 1.0)]
    similarity_threshold: f64,
    /// Also run the provider self-test and family-similarity probes
    #[arg(long)]
    extended: bool,
    /// Count "no face detected" answers as failures
    #[arg(long)]
    require_faces: bool,
    /// Print a summary and exit non-zero when any probe fails
    #[arg(long)]
    strict: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    reqwest::Url::parse(&cli.base_url)?;

    let settings = Settings {
        similarity_threshold: cli.similarity_threshold,
        soft_policy: if cli.require_faces {
            SoftPolicy::Require
        } else {
            SoftPolicy::Tolerate
        },
        extended: cli.extended,
    };
    let client = HybridClient::new(cli.base_url);
    let mut out = Console::stdout();
    let report = run(&client, &settings, &mut out).await;

    if cli.strict {
        out.line(report.summary());
        out.flush();
        if report.has_failures() {
            std::process::exit(1);
        }
    }
    Ok(())
}
