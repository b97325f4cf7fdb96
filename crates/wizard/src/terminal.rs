//! Terminal front-end for the intake wizard.
//!
//! Prints prompts, reads answers from stdin, and performs the handoff at
//! the end. The single-choice step is rendered as a numbered list; either
//! the number or the label itself is accepted.

use std::io::{BufRead, Write};

use {
    tokio::time::{Duration, sleep},
    tracing::warn,
};

use {
    atende_config::AtendeConfig,
    atende_handoff::{LinkOpener, deep_link, format_summary},
};

use crate::state::{Session, Submission};

/// Run one interactive intake conversation in the terminal.
///
/// `preset_request_type` pre-seeds the request-type answer before the first
/// prompt; out-of-set labels are ignored.
pub async fn run_intake(
    config: &AtendeConfig,
    opener: &dyn LinkOpener,
    preset_request_type: Option<&str>,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    if let Some(label) = preset_request_type
        && !session.preset_request_type(label)
    {
        warn!(label, "ignoring out-of-set request-type preset");
    }
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    println!("{}", session.prompt());

    loop {
        if let Some(options) = session.options() {
            for (i, label) in options.iter().enumerate() {
                println!("  {}. {label}", i + 1);
            }
        }
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            // stdin closed mid-conversation; nothing to hand off.
            return Ok(());
        }
        let input = line.trim();

        let outcome = match session.options() {
            Some(options) => {
                // Accept "2" as shorthand for the second label.
                let label = input
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| options.get(i))
                    .copied()
                    .unwrap_or(input);
                session.select(label)
            },
            None => session.submit(input),
        };

        match outcome {
            Submission::Rejected { reprompt } => println!("{reprompt}"),
            Submission::Accepted => {
                sleep(Duration::from_millis(config.wizard.reply_delay_ms)).await;
                println!("{}", session.next_prompt());
            },
            Submission::Completed => {
                sleep(Duration::from_millis(config.wizard.reply_delay_ms)).await;
                println!("{}", session.prompt());

                let summary = format_summary(&session.answers().to_request(), &config.handoff);
                let link = deep_link(&config.handoff.destination, &summary);

                sleep(Duration::from_millis(config.wizard.redirect_delay_ms)).await;
                println!("{link}");
                if let Err(error) = opener.open_link(&link) {
                    warn!(%error, "could not open handoff link");
                }
                session.reset();
                return Ok(());
            },
            Submission::Busy => {},
        }
    }
}
