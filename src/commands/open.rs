use crate::commands::context::NoticeContext;
use crate::error::Result;
use crate::notice::{ExternalLinks, LinkOpener};
use crate::ui as output;

pub fn run(ctx: &NoticeContext) -> Result<()> {
    let url = ctx.settings.releases_url();
    ExternalLinks::default().open_external(url)?;
    output::success(&format!("Opened {}", url));
    Ok(())
}
