use std::io::Write;
use std::sync::Arc;

use clap::Parser;

use moodreel::cli::{self, Cli};
use moodreel::config::Config;
use moodreel::services::{EmotionDetector, KeywordSearch, MoodPipeline, OmdbCatalog, Recommender};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Initialization failed: {e}");
            eprintln!("Set OMDB_API_KEY in the environment or in a .env file.");
            std::process::exit(1);
        }
    };

    let detector = EmotionDetector::load(&config);
    let catalog = Arc::new(OmdbCatalog::from_config(&config));
    let source = Arc::new(KeywordSearch::new(catalog));
    let recommender = Recommender::new(source);
    let pipeline = MoodPipeline::new(detector, recommender);

    if !args.text.is_empty() {
        let text = args.text.join(" ");
        let recommendations = pipeline.run(&text, args.count).await;
        println!("{}", cli::render(&recommendations));
        return;
    }

    interactive(&pipeline, args.count).await;
}

/// Prompt loop: one recommendation cycle per line until an exit keyword
async fn interactive(pipeline: &MoodPipeline, count: usize) {
    println!("Describe your mood and get movie recommendations.");
    println!("Type 'quit', 'exit', 'bye' or 'q' to stop.\n");

    loop {
        print!("How are you feeling today? ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            println!("Please tell me how you're feeling.");
            continue;
        }
        if cli::is_exit_keyword(input) {
            println!("Happy watching!");
            break;
        }

        let recommendations = pipeline.run(input, count).await;
        println!("{}", cli::render(&recommendations));
    }
}
