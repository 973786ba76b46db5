pub mod generate;
pub mod tag;

/// Command results carry the payload plus the process exit code.
pub type CmdResult<T> = deckhand::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}
