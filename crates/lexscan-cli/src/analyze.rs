//! One-shot analysis from the terminal.

use std::io::{IsTerminal, Read};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};

use lexscan_core::{Analyzer, Category, Generator};

/// Analyze `words` (or stdin when empty) and print the result to stdout.
pub async fn run(
    analyzer: &Analyzer<Box<dyn Generator>>,
    category: Category,
    words: Vec<String>,
) -> Result<()> {
    let text = if words.is_empty() {
        read_stdin()?
    } else {
        words.join(" ")
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Running {}...", category));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let analysis = analyzer.analyze_with(&text, category).await;

    spinner.finish_and_clear();
    println!("{}", analysis.text);

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste legal text, then press Ctrl+D:");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .wrap_err("Failed to read legal text from stdin")?;
    Ok(text)
}
