//! `linkwatch normalize` command - print canonical keys
//!
//! Works offline; no store is opened.

use crate::cli::{Cli, OutputFormat};
use linkwatch_core::canonical::normalize;
use linkwatch_core::error::Result;

/// Execute the normalize command
pub fn execute(cli: &Cli, urls: &[String]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = urls
                .iter()
                .map(|url| {
                    serde_json::json!({
                        "url": url,
                        "canonical": normalize(url),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for url in urls {
                println!("{}", normalize(url));
            }
        }
    }
    Ok(())
}
