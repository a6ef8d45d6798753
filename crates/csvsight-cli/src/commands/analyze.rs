//! Analyze command - run a CSV file through the analysis pipeline.

use std::path::PathBuf;

use colored::Colorize;
use csvsight::Csvsight;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    mock_llm: bool,
    model: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        file.display().to_string().white()
    );

    let provider = super::build_provider(mock_llm, model)?;
    let csvsight = Csvsight::new().with_shared_provider(provider);

    let report = csvsight.analyze_file(&file)?;

    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  rows    {}", report.metadata.row_count);
        println!("  columns {}", report.metadata.column_count);
        println!("  size    {} bytes", report.metadata.size_bytes);
        println!("  hash    {}", report.metadata.hash);
        println!();
    }

    println!(
        "{} {}",
        "Chart:".green().bold(),
        report.result.chart_type.label().white()
    );
    println!(
        "  {} labels, {} dataset(s)",
        report.result.chart_config.labels.len(),
        report.result.chart_config.datasets.len()
    );
    println!();
    println!("{}", "Summary:".green().bold());
    println!("{}", report.result.summary);

    if let Some(output) = output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&output, json)?;
        println!();
        println!(
            "{} {}",
            "Report written to".cyan(),
            output.display().to_string().white()
        );
    }

    Ok(())
}
