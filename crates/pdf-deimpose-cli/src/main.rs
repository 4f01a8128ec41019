use anyhow::Result;
use clap::Parser;
use pdf_deimpose::DeimposeOptions;
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(
    name = "deimpose",
    about = "Split scanned booklet PDFs back into reading order",
    version
)]
struct Cli {
    /// Folder containing the scanned booklet PDFs
    #[arg(default_value = "./documents")]
    documents: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let cli = Cli::parse();
    let options = DeimposeOptions::default();

    let summary = pdf_deimpose::process_folder(&cli.documents, &options).await?;

    if summary.documents_found == 0 {
        println!("No PDF documents found in {}", cli.documents.display());
        return Ok(());
    }

    for output in &summary.generated {
        println!("Processed → {}", output.display());
    }
    for failure in &summary.failed {
        eprintln!("Failed    {} ({})", failure.input.display(), failure.reason);
    }
    println!(
        "{} of {} documents processed",
        summary.generated.len(),
        summary.documents_found
    );

    Ok(())
}
