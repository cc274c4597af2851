use crate::Cli;
use crate::view::SummaryListView;
use crate::writer;
use anyhow::{Context, Result, bail};
use rfptally_engine::summarize_proposal;
use rfptally_ingest::{find_proposal_files, load_proposal};
use rfptally_types::Alpha;
use std::path::PathBuf;

pub fn handle(cli: Cli) -> Result<()> {
    let mut files = cli.files.clone();
    if let Some(dir) = &cli.dir {
        let found = find_proposal_files(dir)
            .with_context(|| format!("failed to scan {}", dir.display()))?;
        files.extend(found);
    }
    if files.is_empty() {
        bail!("no proposal files given (pass paths or --dir)");
    }

    let mut summaries = Vec::new();
    for path in &files {
        let proposal = match load_proposal(path) {
            Ok(proposal) => proposal,
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", path.display(), e);
                continue;
            }
        };
        let alpha = proposal
            .total_price
            .and_then(|price| Alpha::from_target_price(cli.target_price, price));
        summaries.push(summarize_proposal(&proposal, alpha.as_ref()));
    }

    if summaries.is_empty() {
        bail!("none of the {} proposal file(s) could be read", files.len());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", SummaryListView::new(&summaries, cli.target_price));
    }

    if !cli.no_csv {
        let out = cli
            .out
            .clone()
            .unwrap_or_else(|| default_csv_path(cli.target_price));
        writer::write_summary_csv(&out, &summaries, cli.target_price)
            .with_context(|| format!("failed to write {}", out.display()))?;
        println!("Wrote {} row(s) to {}", summaries.len(), out.display());
    }

    Ok(())
}

/// Default CSV name embeds the target price with '.' folded to 'p'
/// (1.7 -> summary_tp1p7.csv).
fn default_csv_path(target_price: f64) -> PathBuf {
    PathBuf::from(format!(
        "summary_tp{}.csv",
        target_price.to_string().replace('.', "p")
    ))
}
