/*!
 * Plain-text rendering of an analysis result for the terminal.
 */

use std::fmt::Write;

use crate::analysis::{AnalysisResult, ScoredPhrase, SentimentLabel};
use crate::app_config::ReportConfig;

const BAR_WIDTH: usize = 30;
const PHRASE_PREVIEW_CHARS: usize = 60;

fn marker(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "+",
        SentimentLabel::Neutral => "=",
        SentimentLabel::Negative => "-",
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PHRASE_PREVIEW_CHARS {
        let cut: String = text.chars().take(PHRASE_PREVIEW_CHARS - 3).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn phrase_row(index: usize, phrase: &ScoredPhrase) -> String {
    let score = match phrase.score {
        Some(score) => format!("{} ({:+.2})", phrase.sentiment, score.polarity),
        None => "neutral (unscored)".to_string(),
    };
    format!(
        "  {:>3}. [{}] {}\n       {} -> {}",
        index + 1,
        marker(phrase.sentiment),
        score,
        preview(&phrase.phrase.original),
        preview(&phrase.phrase.translated)
    )
}

/// Render the human-readable report
pub fn render_text_report(result: &AnalysisResult, config: &ReportConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sentiment:    {} (polarity {:+.3})", result.sentiment, result.polarity);
    let _ = writeln!(
        out,
        "Subjectivity: {} ({:.3})",
        result.subjectivity_level, result.subjectivity
    );

    if result.translated_text != result.original_text {
        let _ = writeln!(out, "\nTranslation:\n  {}", result.translated_text.trim());
    }

    let (pos, neu, neg) = result.sentiment_breakdown();
    let _ = writeln!(
        out,
        "\nPhrases ({} total: {} positive, {} neutral, {} negative)",
        result.phrases.len(),
        pos,
        neu,
        neg
    );
    for (index, phrase) in result.phrases.iter().take(config.max_phrases).enumerate() {
        let _ = writeln!(out, "{}", phrase_row(index, phrase));
    }
    if result.phrases.len() > config.max_phrases {
        let _ = writeln!(out, "  ... {} more", result.phrases.len() - config.max_phrases);
    }

    let top = result.frequencies.top(config.top_words);
    let _ = writeln!(out, "\nTop words ({} distinct)", result.frequencies.len());
    let max_count = top.first().map_or(1, |entry| entry.count.max(1));
    let width = top.iter().map(|entry| entry.word.chars().count()).max().unwrap_or(0);
    for entry in top {
        let bar_len = (entry.count * BAR_WIDTH).div_ceil(max_count);
        let padding = width - entry.word.chars().count();
        let _ = writeln!(
            out,
            "  {}{} {} {}",
            entry.word,
            " ".repeat(padding),
            "█".repeat(bar_len),
            entry.count
        );
    }

    if !result.diagnostics.is_empty() {
        let _ = writeln!(out, "\nNotes:");
        for diagnostic in &result.diagnostics {
            let _ = writeln!(out, "  ! {}", diagnostic);
        }
    }

    out
}
