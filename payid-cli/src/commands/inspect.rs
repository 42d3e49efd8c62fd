//! Inspect command - show a host's WebFinger links without following delegation

use anyhow::{Context, Result};
use payid_lib::discovery::{select_link, webfinger_url};
use payid_lib::Link;

use super::Settings;
use crate::ui;

#[tracing::instrument(skip(settings))]
pub async fn run(input: &str, json: bool, settings: &Settings, verbose: bool) -> Result<()> {
    let payid = super::parse_payid(input)?;
    let url = webfinger_url(&payid)?;
    let resolver = settings.resolver()?;

    if verbose && !json {
        ui::info(&format!("Querying: {}", url));
    }

    let spinner = if json {
        indicatif::ProgressBar::hidden()
    } else {
        ui::spinner("Fetching resource descriptor...")
    };
    let result = resolver.fetch_descriptor(&url).await;
    spinner.finish_and_clear();

    let descriptor = result.with_context(|| format!("Failed to fetch descriptor for {}", payid))?;

    if json {
        ui::json(&serde_json::to_value(&descriptor)?);
        return Ok(());
    }

    ui::header(&format!("Links for {}", payid));
    if descriptor.links.is_empty() {
        ui::info("No links published");
    }
    for (index, link) in descriptor.links.iter().enumerate() {
        ui::separator();
        print_link(index, link);
    }
    ui::separator();

    match select_link(&descriptor) {
        Ok(selected) if selected.is_discovery() => {
            ui::info(&format!(
                "Host delegates discovery to {}",
                selected.href.as_deref().unwrap_or("(missing href)")
            ));
        }
        Ok(selected) => match selected.target() {
            Ok(target) => ui::success(&format!("Selected PayID link: {}", target)),
            Err(e) => ui::warning(&format!("Selected PayID link is unusable: {}", e)),
        },
        Err(e) => ui::warning(&e.to_string()),
    }

    Ok(())
}

fn print_link(index: usize, link: &Link) {
    ui::key_value("#", &index.to_string());
    ui::key_value("rel", &link.relation);
    if let Some(href) = &link.href {
        ui::key_value("href", href);
    }
    if let Some(template) = &link.template {
        ui::key_value("template", template);
    }
}
