pub mod edit;
pub mod export;
pub mod init;
pub mod preview;
pub mod show;

pub use edit::{
    add, move_block, remove, reset, save, set, template, AddArgs, MoveArgs, RemoveArgs, SetArgs,
    TemplateArgs,
};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};
pub use show::show;

use crate::config::Config;
use pagex_common::FileStorage;
use pagex_editor::EditSession;

/// Session over the storage directory named by the config in `cwd`
pub(crate) fn open_session(cwd: &str) -> anyhow::Result<EditSession<FileStorage>> {
    let config = Config::load(cwd)?;
    let storage = FileStorage::new(config.get_storage_dir(cwd));
    Ok(EditSession::load(storage))
}
