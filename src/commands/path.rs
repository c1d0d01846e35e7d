use crate::commands::context::NoticeContext;
use crate::error::{NoticeError, Result};
use crate::project_identity;
use crate::ui as output;
use crate::utils::paths;
use crate::utils::update_check::PackageJsonAccessor;
use std::path::PathBuf;

#[derive(Debug)]
pub enum PathAction {
    Set(PathBuf),
    Show,
    Clear,
}

pub fn run(ctx: &NoticeContext, action: PathAction) -> Result<()> {
    match action {
        PathAction::Set(path) => {
            let path = paths::expand_home(&path)?;
            if !path.is_dir() {
                return Err(NoticeError::PathError(format!(
                    "Not a directory: {}",
                    path.display()
                )));
            }
            let path = path.canonicalize().map_err(|e| NoticeError::IoError {
                path: path.clone(),
                source: e,
            })?;

            let value = path.to_str().ok_or_else(|| {
                NoticeError::PathError(format!("Path is not valid UTF-8: {}", path.display()))
            })?;
            ctx.store.set(project_identity::INSTALL_PATH_KEY, value)?;
            output::success(&format!("Install path set to {}", path.display()));

            if !PackageJsonAccessor::manifest_path(&path).exists() {
                output::warning(&format!(
                    "No {} client found under {}",
                    project_identity::DISPLAY_NAME,
                    path.display()
                ));
            }
        }
        PathAction::Show => match ctx.install_path() {
            Some(path) => println!("{}", path.display()),
            None => output::info("Install path is not set"),
        },
        PathAction::Clear => {
            ctx.store.remove(project_identity::INSTALL_PATH_KEY)?;
            output::success("Install path cleared");
        }
    }
    Ok(())
}
