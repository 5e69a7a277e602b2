/// Mint an access token for a registered teacher.
///
/// Usage: issue-token --username t_jones [--display-name "Ms. Jones"] [--ttl-seconds 3600]
///   --display-name : register the teacher (or rename an existing one) first

use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use announcements_api::{
    config::Config,
    db::teachers::{PgTeacherStore, TeacherStore},
    models::teacher::Teacher,
    services::auth::AuthService,
};

#[derive(Parser)]
#[command(name = "issue-token", about = "Issue a teacher access token for the announcements API")]
struct Args {
    /// Teacher username (token subject)
    #[arg(long)]
    username: String,

    /// Register or rename the teacher before issuing the token
    #[arg(long)]
    display_name: Option<String>,

    /// Token lifetime; defaults to JWT_EXPIRY_SECONDS or 900
    #[arg(long)]
    ttl_seconds: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::from_env()?;
    let ttl = config.token_ttl(args.ttl_seconds);

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await?;
    let teachers = PgTeacherStore::new(pool);

    if let Some(display_name) = args.display_name {
        let teacher = teachers
            .upsert(&Teacher {
                username: args.username.clone(),
                display_name,
            })
            .await?;
        tracing::info!("Registered teacher {} ({})", teacher.username, teacher.display_name);
    }

    if teachers.find_by_username(&args.username).await?.is_none() {
        anyhow::bail!("No teacher named {}; pass --display-name to register one", args.username);
    }

    let token = AuthService::generate_access_token(&args.username, &config.jwt_secret, ttl)?;
    println!("{token}");

    Ok(())
}
