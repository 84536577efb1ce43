//! Interactive conversation loop.
//!
//! This command plays the calling platform: it maps typed commands onto
//! intent invocations, round-trips the context bag between turns and
//! applies the lifespan rule — surviving entries age by one turn, a
//! turn's updates (re)set theirs, anything at zero drops.

use confab_config::Config;
use confab_dialogue::{ContextBag, TurnRequest, TurnResponse};
use std::collections::HashMap;
use std::io::Write;

use super::{CommandStrategy, build_handler};

const HELP: &str = "Commands:
  topics             list the covered topics
  popular <n>        the n most popular topics
  speakers           count the speakers
  talks <topic>      walk the sessions about a topic
  next               the next session on that topic
  more               details on the current session
  who <topic>        who is speaking about a topic
  when               when that speaker's talk is scheduled";

/// Strategy for the interactive chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl CommandStrategy for ChatStrategy {
    type Input = ();

    async fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let handler = build_handler(&config)?;

        println!("=== Conference schedule assistant ===");
        println!("{HELP}");
        println!("Type 'exit', 'quit', or Ctrl+C to end the session.\n");

        // name → (turns left, parameters); the conversation's only memory.
        let mut contexts: HashMap<String, (u32, serde_json::Value)> = HashMap::new();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if matches!(input, "exit" | "quit" | "q") {
                break;
            }
            if input.is_empty() {
                continue;
            }

            let Some((intent, args)) = parse_command(input) else {
                println!("\n{HELP}\n");
                continue;
            };

            let mut context = ContextBag::new();
            for (name, (_, parameters)) in &contexts {
                context.insert(name, parameters.clone());
            }

            let response = handler
                .handle(TurnRequest {
                    intent,
                    args,
                    context,
                })
                .await;

            println!("\n{}\n", response.text);

            age_contexts(&mut contexts, &response);
        }

        Ok(())
    }
}

/// Map one typed command onto an intent name and its argument bag.
fn parse_command(input: &str) -> Option<(String, HashMap<String, String>)> {
    let mut words = input.split_whitespace();
    let head = words.next()?;
    let rest = words.collect::<Vec<_>>().join(" ");

    let (intent, arg) = match head {
        "topics" => ("topics.list", None),
        "popular" => ("topics.popular", Some("popular-topics-number")),
        "speakers" => ("speakers.count", None),
        "talks" => ("talks.by.topic", Some("topic-name")),
        "next" => ("talks.next", None),
        "more" => ("talks.more", None),
        "who" => ("speakers.by.topic", Some("topic")),
        "when" => ("talks.schedule", None),
        _ => return None,
    };

    let mut args = HashMap::new();
    if let Some(name) = arg {
        args.insert(name.to_string(), rest);
    }
    Some((intent.to_string(), args))
}

/// Apply the platform lifespan rule after one turn.
fn age_contexts(
    contexts: &mut HashMap<String, (u32, serde_json::Value)>,
    response: &TurnResponse,
) {
    for (turns_left, _) in contexts.values_mut() {
        *turns_left = turns_left.saturating_sub(1);
    }
    for update in &response.context_updates {
        contexts.insert(
            update.name.clone(),
            (update.lifespan, update.parameters.clone()),
        );
    }
    contexts.retain(|_, (turns_left, _)| *turns_left > 0);
}
