use crate::commands::context::NoticeContext;
use crate::config::LocalSourceKind;
use crate::error::Result;
use crate::project_identity;
use crate::ui as output;
use crate::utils::update_check::PackageJsonAccessor;
use colored::Colorize;

pub fn run(ctx: &NoticeContext) -> Result<()> {
    output::header(&format!("{} client", project_identity::DISPLAY_NAME));

    if ctx.settings.local_source() == LocalSourceKind::InstallPath {
        match ctx.install_path() {
            Some(path) => {
                output::keyval("Install path", &path.display().to_string());
                let installed = PackageJsonAccessor::manifest_path(&path).exists();
                output::keyval(
                    "Client installed",
                    if installed { "yes" } else { "no" },
                );
            }
            None => {
                output::keyval("Install path", "(not set)");
                output::info(&format!(
                    "Set it with '{}'",
                    project_identity::cli_with("path set <PATH>")
                ));
            }
        }
    }

    let info = ctx.resolver(false).check();
    let tracker = ctx.tracker();

    output::keyval("Local version", info.local_version.as_deref().unwrap_or("-"));
    output::keyval(
        "Latest version",
        info.latest_version.as_deref().unwrap_or("-"),
    );
    output::keyval(
        "Dismissed version",
        tracker.dismissed_version().as_deref().unwrap_or("-"),
    );

    if let Some(err) = &info.error {
        output::warning(err);
    } else if info.update_available {
        output::warning(&format!(
            "Client update available: {} -> {}",
            info.local_version.as_deref().unwrap_or("?"),
            info.latest_version.as_deref().unwrap_or("?").green()
        ));
    } else if let Some(local) = &info.local_version {
        output::success(&format!("Client is up to date (version {})", local));
    }

    Ok(())
}
