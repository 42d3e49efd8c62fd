//! Resolve command - run full discovery for a PayID

use anyhow::{Context, Result};
use serde::Serialize;

use super::Settings;
use crate::ui;

#[derive(Serialize)]
struct Resolution {
    payid: String,
    url: String,
}

#[tracing::instrument(skip(settings))]
pub async fn run(input: &str, json: bool, settings: &Settings, verbose: bool) -> Result<()> {
    let payid = super::parse_payid(input)?;
    let resolver = settings.resolver()?;

    if verbose && !json {
        ui::info(&format!(
            "Discovery hop limit: {}",
            settings.resolver.max_discovery_hops
        ));
        ui::info(&format!("Timeout: {}s", settings.http.timeout_secs));
    }
    tracing::debug!(payid = %payid, "resolving");

    let spinner = if json {
        indicatif::ProgressBar::hidden()
    } else {
        ui::spinner(&format!("Resolving {}...", payid))
    };
    let result = resolver.resolve(&payid).await;
    spinner.finish_and_clear();

    let url = result.with_context(|| format!("Failed to resolve {}", payid))?;

    if json {
        let resolution = Resolution {
            payid: payid.to_string(),
            url: url.to_string(),
        };
        ui::json(&serde_json::to_value(&resolution)?);
    } else {
        ui::success(&format!("Resolved {}", payid));
        ui::key_value("URL", url.as_str());
    }

    Ok(())
}
