use clap::Parser;

use crate::models::Recommendations;

/// Command-line interface for `moodreel`
#[derive(Debug, Parser)]
#[command(
    name = "moodreel",
    about = "Mood-based movie recommendations from the OMDb catalog"
)]
pub struct Cli {
    /// Mood description; when given, runs a single recommendation cycle and
    /// exits. Without it, an interactive prompt loop starts.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Number of movies to recommend
    #[arg(short = 'n', long, default_value_t = 3)]
    pub count: usize,
}

const EXIT_KEYWORDS: &[&str] = &["quit", "exit", "bye", "q"];

/// True when interactive input asks to leave the prompt loop
pub fn is_exit_keyword(input: &str) -> bool {
    EXIT_KEYWORDS.contains(&input.trim().to_lowercase().as_str())
}

/// Renders one recommendation cycle as plain text
pub fn render(recommendations: &Recommendations) -> String {
    let mut out = String::new();

    match &recommendations.raw_label {
        Some(raw_label) => out.push_str(&format!(
            "Detected emotion: {} (raw: {}, confidence {:.2} - {})\n",
            recommendations.emotion,
            raw_label,
            recommendations.confidence,
            recommendations.tier
        )),
        None => out.push_str(&format!(
            "Detected emotion: {} (confidence {:.2} - {})\n",
            recommendations.emotion, recommendations.confidence, recommendations.tier
        )),
    }

    if recommendations.low_confidence {
        out.push_str(
            "Note: confidence is low; try describing your mood with more specific words.\n",
        );
    }

    out.push_str(&format!(
        "Matching genres: {}\n",
        recommendations.genres.join(", ")
    ));

    if recommendations.is_empty() {
        out.push_str(
            "\nNo recommendations found for your current mood. \
             Try describing it differently, or check your connection.\n",
        );
        return out;
    }

    for (i, movie) in recommendations.movies.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} ({}) - Rating: {}/10\n   Genre: {}\n   Director: {}\n   Plot: {}\n   {}\n",
            i + 1,
            movie.title,
            movie.year,
            movie.rating,
            movie.genre,
            movie.director,
            movie.plot,
            movie.link
        ));
    }

    out
}
