use std::fmt::Write as _;

use anyhow::{Result, bail};
use vrfyscan_lib::{ScanResult, ScanStatus};

#[cfg(feature = "with-serde")]
use serde::Serialize;

pub fn check_format(format: &str) -> Result<()> {
    match format {
        "human" => Ok(()),
        "json" if cfg!(feature = "with-serde") => Ok(()),
        "json" => bail!("format=json requires the 'with-serde' feature"),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

pub fn render(result: &ScanResult, format: &str) -> Result<String> {
    check_format(format)?;
    match format {
        "human" => Ok(render_human(result)),
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                let mut json = serde_json::to_string_pretty(&ReportPayload::from(result))?;
                json.push('\n');
                Ok(json)
            }
            #[cfg(not(feature = "with-serde"))]
            {
                bail!("format=json requires the 'with-serde' feature")
            }
        }
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

pub fn render_human(result: &ScanResult) -> String {
    let mut out = String::new();
    if let ScanStatus::Aborted(reason) = result.status {
        let _ = writeln!(out, "[!] Scan aborted: {reason}");
    }
    if result.confirmed.is_empty() {
        out.push_str("[!] No valid usernames found.\n");
    } else {
        out.push_str("[+] Valid usernames:\n");
        for user in &result.confirmed {
            let _ = writeln!(out, "  - {user}");
        }
    }
    out
}

#[cfg(feature = "with-serde")]
#[derive(Serialize)]
struct ReportPayload<'a> {
    status: &'a ScanStatus,
    confirmed: &'a [String],
}

#[cfg(feature = "with-serde")]
impl<'a> From<&'a ScanResult> for ReportPayload<'a> {
    fn from(result: &'a ScanResult) -> Self {
        Self {
            status: &result.status,
            confirmed: &result.confirmed,
        }
    }
}
