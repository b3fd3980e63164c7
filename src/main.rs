//! StyleMate REPL entry point.
//!
//! Wires the HTTP retrieval and vision boundaries into a single-session
//! pipeline and runs an interactive loop. Type `/image <path>` to attach an
//! image to the next message, `/quit` to exit.
//!
//! Responses are revealed with a typewriter effect: the presenter publishes
//! growing partial strings and only the new suffix is printed per tick.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use stylemate::config::load_config;
use stylemate::error::StyleMateError;
use stylemate::pipeline::Pipeline;
use stylemate::retrieval::{HttpQueryEngine, QueryEngine};
use stylemate::types::Submission;
use stylemate::vision::OpenAiVision;

#[tokio::main]
async fn main() {
    // Initialise structured logging — default level WARN to keep output clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Load configuration from .env / system environment.
    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Please check your .env file. See .env.example for required variables.");
            std::process::exit(1);
        }
    };

    println!("👗 StyleMate starting...");
    println!("   Retrieval: {}", config.retrieval_base_url);
    println!("   Vision:    {} ({})", config.openai_base_url, config.vision_model);

    let query_engine: Arc<dyn QueryEngine> =
        Arc::new(HttpQueryEngine::new(config.retrieval_base_url.clone()));
    let vision = Arc::new(OpenAiVision::new(&config));

    // The index lifecycle runs once, before the first query.
    if !query_engine.is_index_built().await {
        println!("   Building document index...");
        if let Err(e) = query_engine.build_or_load().await {
            eprintln!("Index build error: {}", e);
            std::process::exit(1);
        }
    }

    let mut pipeline = match Pipeline::new(config, query_engine, vision) {
        Ok(p) => {
            println!("✅ Ready");
            p
        }
        Err(e) => {
            eprintln!("Initialisation error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "💬 Hey, schön, dass du hier bist! Lust auf frische Outfit-Ideen? \
         Feel free to ask in English anytime! (/image <path>, /quit)\n"
    );

    let stdin = io::stdin();
    let mut attachments: Vec<PathBuf> = Vec::new();
    loop {
        print!("You: ");
        io::stdout().flush().unwrap_or_default();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = line.trim();
                if input.is_empty() && attachments.is_empty() {
                    continue;
                }
                if input == "/quit" || input == "/exit" {
                    break;
                }
                if let Some(path) = input.strip_prefix("/image ") {
                    attachments.push(PathBuf::from(path.trim()));
                    println!("   (attached — will be described with your next message)");
                    continue;
                }

                let submission = Submission {
                    text: input.to_string(),
                    attachments: std::mem::take(&mut attachments),
                };

                print!("\nStyleMate: ");
                io::stdout().flush().unwrap_or_default();

                // The presenter republishes the whole accumulated string;
                // print only the suffix that is new since the last tick.
                let mut printed = 0usize;
                let on_partial = move |partial: &str| {
                    print!("{}", &partial[printed..]);
                    printed = partial.len();
                    let _ = io::stdout().flush();
                };

                match pipeline.execute_turn(submission, on_partial).await {
                    Ok(_reply) => {
                        // Stream already printed everything; just end the line.
                        println!("\n");
                    }
                    Err(StyleMateError::InputValidation(msg)) => {
                        println!("\n⚠️  {}\n", msg);
                    }
                    Err(e) => {
                        // Terminal message — no retry, matching the boundary contract.
                        eprintln!("\n\n❌ Error: {}\n", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }

    println!("\n👋 Bis bald!");
}
