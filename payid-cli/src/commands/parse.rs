//! Parse command - split a PayID and show where discovery starts

use anyhow::Result;
use payid_lib::discovery::webfinger_url;

use crate::ui;

pub fn run(input: &str, json: bool) -> Result<()> {
    let payid = super::parse_payid(input)?;
    let url = webfinger_url(&payid)?;

    if json {
        ui::json(&serde_json::json!({
            "payid": payid.to_string(),
            "account": payid.account(),
            "host": payid.host(),
            "webfinger_url": url.as_str(),
        }));
        return Ok(());
    }

    ui::header("PayID");
    ui::key_value("PayID", &payid.to_string());
    ui::key_value("Account", payid.account());
    ui::key_value("Host", payid.host());
    ui::key_value("WebFinger", url.as_str());

    Ok(())
}
