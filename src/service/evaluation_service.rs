//! Event evaluation service.

use std::io::{self, Read, Write};
use std::process;

use anyhow::Result;
use tracing::{debug, error, info};

use command_blocker::domain::{CommandLine, SharedFilterChain};

use crate::cli::Format;
use crate::service::adapter::{
    self, EvaluationOutput, EventInput, EventKind, EventSender, TabCompletion,
};

/// Service evaluating host events against the configured filters.
pub struct EvaluationService {
    chain: SharedFilterChain,
    format: Format,
}

impl EvaluationService {
    /// Create a new EvaluationService with the specified output format.
    pub fn new(chain: SharedFilterChain, format: Format) -> Self {
        Self { chain, format }
    }

    /// Read one event from stdin, evaluate it and write the verdict to stdout.
    ///
    /// Exits with the verdict's exit code. Unreadable input is denied.
    pub fn run(&self) -> Result<()> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;

        let output = if input.trim().is_empty() {
            error!("No input received from stdin");
            EvaluationOutput::error("No input received from stdin")
        } else {
            debug!("Received input: {}", input.trim());
            match adapter::parse_input(&input) {
                Ok(event) => self.process(&event),
                Err(e) => {
                    let message = format!("Failed to parse input: {:#}", e);
                    error!("{}", message);
                    EvaluationOutput::error(message)
                }
            }
        };

        let rendered = adapter::format_output(&output, self.format)?;
        info!("Output: {}", rendered);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", rendered)?;
        stdout.flush()?;

        process::exit(output.exit_code());
    }

    /// Evaluate one event.
    pub fn process(&self, event: &EventInput) -> EvaluationOutput {
        let chain = self.chain.snapshot();
        let sender = EventSender::new(&event.sender);

        debug!(
            "Processing {:?} from {}: {}",
            event.event, event.sender.name, event.command
        );

        let opinion = match event.event {
            EventKind::Execution => match CommandLine::parse(&event.command) {
                Ok(line) => chain.process_execution(&line, &sender),
                Err(e) => return EvaluationOutput::error(e.to_string()),
            },
            EventKind::TabComplete => {
                let completion = TabCompletion::new(&event.command, &sender);
                chain.process_tab_complete(&completion)
            }
        };

        EvaluationOutput {
            opinion,
            messages: sender.take_messages(),
            error: None,
        }
    }
}
