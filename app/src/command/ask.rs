//! One stateless intent invocation, the way the platform would issue it.

use confab_config::Config;
use confab_dialogue::{ContextBag, TurnRequest};
use std::collections::HashMap;

use super::{CommandStrategy, build_handler};

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    /// Intent name, e.g. `topics.list`
    pub intent: String,
    /// Named arguments as `key=value` pairs
    pub args: Vec<String>,
    /// Prior context blob as JSON (empty on the first turn)
    pub context: Option<String>,
}

/// Strategy for a single handler invocation.
///
/// Prints the response text and the serialized context updates so the
/// next invocation can round-trip them.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let handler = build_handler(&config)?;

        let mut args = HashMap::new();
        for pair in &input.args {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("Argument must be key=value, got: {pair}"))?;
            args.insert(key.to_string(), value.to_string());
        }

        let context: ContextBag = match input.context.as_deref() {
            Some(blob) => serde_json::from_str(blob)?,
            None => ContextBag::new(),
        };

        let response = handler
            .handle(TurnRequest {
                intent: input.intent,
                args,
                context,
            })
            .await;

        println!("{}", response.text);
        if !response.context_updates.is_empty() {
            println!();
            println!("Context updates:");
            println!("{}", serde_json::to_string_pretty(&response.context_updates)?);
        }

        Ok(())
    }
}
