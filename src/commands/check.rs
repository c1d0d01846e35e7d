use crate::commands::context::NoticeContext;
use crate::error::Result;
use crate::notice::{self, ExternalLinks, NoticeBar};
use crate::ui as output;
use crate::utils::update_check::VersionInfo;
use serde::Serialize;

#[derive(Debug)]
pub struct CheckOptions {
    pub json: bool,
    pub no_delay: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    #[serde(flatten)]
    info: &'a VersionInfo,
    suppressed: bool,
    show_notice: bool,
}

pub fn run(ctx: &NoticeContext, options: CheckOptions) -> Result<()> {
    let info = ctx.resolver(!options.no_delay).spawn().wait();

    let bar = NoticeBar::new(
        info,
        ctx.tracker(),
        ExternalLinks::default(),
        ctx.settings.releases_url(),
    );
    let view = bar.view();

    if options.json {
        let report = CheckReport {
            info: bar.info(),
            suppressed: bar.is_suppressed(),
            show_notice: view.is_some(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match view {
        Some(view) => {
            output::separator();
            for line in notice::render(&view) {
                println!("{}", line);
            }
            output::separator();
        }
        None => output::verbose(&format!(
            "notice hidden: {}",
            hidden_reason(bar.info(), bar.is_suppressed())
        )),
    }

    Ok(())
}

fn hidden_reason(info: &VersionInfo, suppressed: bool) -> String {
    if let Some(err) = &info.error {
        return format!("check failed ({})", err);
    }
    if info.local_version.is_none() {
        return "no local version".to_string();
    }
    if info.latest_version.is_none() {
        return "no latest release".to_string();
    }
    if !info.update_available {
        return "up to date".to_string();
    }
    if suppressed {
        return "dismissed by user".to_string();
    }
    "still loading".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_flat_camel_case() {
        let info = VersionInfo {
            local_version: Some("2.7.5".into()),
            latest_version: Some("2.8.0".into()),
            update_available: true,
            is_loading: false,
            error: None,
        };
        let report = CheckReport {
            info: &info,
            suppressed: false,
            show_notice: true,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["localVersion"], "2.7.5");
        assert_eq!(value["updateAvailable"], true);
        assert_eq!(value["error"], serde_json::Value::Null);
        assert_eq!(value["showNotice"], true);
    }

    #[test]
    fn hidden_reason_prefers_errors() {
        let info = VersionInfo::no_information().failed("Failed to fetch latest version");
        assert!(hidden_reason(&info, true).starts_with("check failed"));
        assert_eq!(
            hidden_reason(&VersionInfo::no_information(), false),
            "no local version"
        );
    }
}
