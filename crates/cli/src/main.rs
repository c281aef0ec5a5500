//! CLI tool for extracting and analyzing text from PDF files.

use anyhow::{Context, Result};
use clap::Parser;
use pdfnlp_analysis::{CooccurrenceExtractor, LexicalRecognizer, LexiconScorer, RuleSegmenter};
use pdfnlp_core::{AnalysisSession, TextNormalizer};
use pdfnlp_docx::writer_for;
use pdfnlp_pdf::LopdfExtractor;
use std::path::PathBuf;

/// Extract text from a PDF and run NLP analyses on it.
#[derive(Parser, Debug)]
#[command(name = "pdfnlp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PDF file
    input: PathBuf,

    /// Print the normalized extracted text
    #[arg(short, long)]
    text: bool,

    /// Print a summary (the first five sentences)
    #[arg(long)]
    summary: bool,

    /// Print named entities
    #[arg(long)]
    entities: bool,

    /// Print the top keywords with relevance scores
    #[arg(long)]
    keywords: bool,

    /// Print sentiment scores
    #[arg(long)]
    sentiment: bool,

    /// Speak the beginning of the text aloud
    #[cfg(feature = "speech")]
    #[arg(long)]
    speak: bool,

    /// Save the normalized text to this path (.txt or .docx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn speak_requested(&self) -> bool {
        #[cfg(feature = "speech")]
        {
            self.speak
        }
        #[cfg(not(feature = "speech"))]
        {
            false
        }
    }

    /// With no analysis or output flags, printing the text is the default.
    fn show_text(&self) -> bool {
        self.text
            || !(self.summary
                || self.entities
                || self.keywords
                || self.sentiment
                || self.speak_requested()
                || self.output.is_some())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mut session = AnalysisSession::new();
    session.select_file(&args.input);

    log::debug!("extracting {}", args.input.display());
    let outcome = session
        .extract(&LopdfExtractor::new(), &TextNormalizer::new())
        .with_context(|| format!("Failed to extract {}", args.input.display()))?;

    if args.verbose {
        eprintln!(
            "{}: {} of {} pages with text, {} characters",
            outcome.filename, outcome.pages_with_text, outcome.page_count, outcome.characters
        );
    }

    if args.show_text() {
        println!("{}", session.text()?);
    }

    if args.summary {
        println!("--- SUMMARY ---");
        println!("{}", session.summarize(&RuleSegmenter::new())?);
    }

    if args.entities {
        println!("--- NAMED ENTITIES ---");
        for entity in session.entities(&LexicalRecognizer::new())? {
            println!("{} ({})", entity.text, entity.label.as_str());
        }
    }

    if args.keywords {
        println!("--- KEYWORDS ---");
        for keyword in session.keywords(&CooccurrenceExtractor::new())? {
            println!("{} ({:.2})", keyword.phrase, keyword.score);
        }
    }

    if args.sentiment {
        let score = session.sentiment(&LexiconScorer::new())?;
        println!(
            "Sentiment: negative={:.3} neutral={:.3} positive={:.3} compound={:.4}",
            score.negative, score.neutral, score.positive, score.compound
        );
    }

    #[cfg(feature = "speech")]
    if args.speak {
        let synthesizer = pdfnlp_analysis::EngineSynthesizer::new()?;
        session.speak(&synthesizer)?;
    }

    if let Some(output) = &args.output {
        session
            .save(writer_for(output).as_ref(), output)
            .with_context(|| format!("Failed to save to {}", output.display()))?;
        if args.verbose {
            eprintln!("Written to: {}", output.display());
        }
    }

    Ok(())
}
