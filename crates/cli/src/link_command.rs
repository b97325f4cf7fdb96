//! `atende link` — dry-run of the handoff.
//!
//! Drives the same session state machine the chat uses, so the supplied
//! values go through the step validation rules before a link is produced.

use clap::Args;

use {
    atende_config::AtendeConfig,
    atende_handoff::{deep_link, format_summary},
    atende_wizard::state::{Session, Submission},
};

#[derive(Args)]
pub struct LinkArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,
    /// Contact e-mail.
    #[arg(long)]
    pub email: String,
    /// Phone/WhatsApp number.
    #[arg(long)]
    pub phone: String,
    /// Request type; must be one of the fixed option labels.
    #[arg(long)]
    pub request_type: String,
    /// Free-form request description.
    #[arg(long)]
    pub message: String,
}

pub fn run(config: &AtendeConfig, args: &LinkArgs) -> anyhow::Result<()> {
    let mut session = Session::new();
    let inputs = [
        &args.name,
        &args.email,
        &args.phone,
        &args.request_type,
        &args.message,
    ];

    for input in inputs {
        let outcome = if session.options().is_some() {
            session.select(input)
        } else {
            session.submit(input)
        };
        match outcome {
            Submission::Accepted => {
                session.next_prompt();
            },
            Submission::Completed => break,
            Submission::Rejected { .. } => anyhow::bail!(
                "invalid value for step {}: {input:?}",
                session.step_index().unwrap_or(0)
            ),
            Submission::Busy => anyhow::bail!("wizard refused input mid-transition"),
        }
    }
    anyhow::ensure!(session.is_complete(), "not enough answers to complete the intake");

    let summary = format_summary(&session.answers().to_request(), &config.handoff);
    println!("{}", deep_link(&config.handoff.destination, &summary));
    Ok(())
}
