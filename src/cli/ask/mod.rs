//! Ask command - runs one message through the chat pipeline

use clap::Args;
use tracing::warn;

use crate::domain::StudentId;
use crate::infrastructure::logging;

#[derive(Debug, Args)]
pub struct AskArgs {
    /// Message to answer
    pub message: String,

    /// Student id, defaults to `assistant.default_user_id`
    #[arg(long)]
    pub user: Option<String>,
}

pub async fn run(args: AskArgs) -> anyhow::Result<()> {
    let (config, load_error) = super::load_config();
    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    let message = args.message.trim();
    if message.is_empty() {
        anyhow::bail!("message must not be empty");
    }

    let student_id = StudentId::new(
        args.user
            .unwrap_or_else(|| config.assistant.default_user_id.clone()),
    );
    let assistant = crate::build_assistant(&config)?;

    let entry = assistant.process_query(&student_id, message).await?;
    println!("{}", entry.text);

    Ok(())
}
