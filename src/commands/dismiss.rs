use crate::commands::context::NoticeContext;
use crate::error::{NoticeError, Result};
use crate::ui as output;

#[derive(Debug)]
pub struct DismissOptions {
    pub version: Option<String>,
    pub reset: bool,
}

pub fn run(ctx: &NoticeContext, options: DismissOptions) -> Result<()> {
    let mut tracker = ctx.tracker();

    if options.reset {
        tracker.clear()?;
        output::success("Dismissal cleared; the notice will show again");
        return Ok(());
    }

    let version = match options.version {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        Some(_) => return Err(NoticeError::Other("Version cannot be empty".to_string())),
        None => latest_version(ctx)?,
    };

    tracker.dismiss(&version)?;
    output::success(&format!("Update notice for {} dismissed", version));
    Ok(())
}

fn latest_version(ctx: &NoticeContext) -> Result<String> {
    ctx.latest_release()?.ok_or_else(|| {
        NoticeError::Other("No latest release to dismiss. Pass a version explicitly.".to_string())
    })
}
