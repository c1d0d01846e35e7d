use crate::error::{NoticeError, Result};
use std::process::Command;

/// Build the command that hands a URL to the desktop's default handler.
///
/// - Linux/BSD: `xdg-open <url>`
/// - macOS: `open <url>`
/// - Windows: `cmd /C start "" <url>`
pub fn build_open_url_command(url: &str) -> Result<Command> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(NoticeError::OpenLinkError {
            url: url.to_string(),
            reason: "only http(s) links can be opened".to_string(),
        });
    }

    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        return Ok(cmd);
    }

    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg("start").arg("").arg(url);
        return Ok(cmd);
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        Ok(cmd)
    }
}
