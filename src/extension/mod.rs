//! Extensions registered with the hosting runtime.
//!
//! An extension is loaded once per project through a [`LoadContext`] and then receives
//! block calls by opcode through [`Extension::run_block`].

pub use self::camera::CameraControls;
pub use self::hello::HelloWorld;

use crate::argument::{BlockArg, BlockValue};

mod camera;
mod hello;

/// What the host grants an extension at load time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadContext {
    /// Whether the extension runs with direct access to the runtime.
    pub unsandboxed: bool,
}

impl LoadContext {
    /// A context granting direct runtime access.
    pub fn unsandboxed() -> Self {
        LoadContext { unsandboxed: true }
    }

    /// A context confining the extension to a sandbox.
    pub fn sandboxed() -> Self {
        LoadContext { unsandboxed: false }
    }
}

/// Errors raised while loading an extension or dispatching a block to it.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ExtensionError {
    /// The extension needs direct runtime access and was loaded in a sandbox.
    #[error("{message}")]
    Sandboxed {
        /// The refusing extension's own load error.
        message: &'static str,
    },
    /// The host called an opcode the extension does not define.
    #[error("extension `{extension}` has no block `{opcode}`")]
    UnknownOpcode {
        /// Id of the called extension.
        extension: &'static str,
        /// The opcode that was called.
        opcode: String,
    },
    /// The host called a block without one of its arguments.
    #[error("block `{opcode}` is missing its `{argument}` argument")]
    MissingArgument {
        /// The called opcode.
        opcode: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },
}

/// Trait implemented by every extension.
pub trait Extension {
    /// The unique id the extension registers under.
    fn id(&self) -> &'static str;

    /// The human-readable extension name.
    fn name(&self) -> &'static str;

    /// Runs the block `opcode` with positional arguments.
    ///
    /// # Returns
    /// The reported value for reporters, `None` for commands.
    fn run_block(
        &mut self,
        opcode: &str,
        args: &[BlockArg],
    ) -> Result<Option<BlockValue>, ExtensionError>;
}

/// Fetches the positional argument `index`, named `argument` in error messages.
fn positional<'a>(
    args: &'a [BlockArg],
    index: usize,
    opcode: &'static str,
    argument: &'static str,
) -> Result<&'a BlockArg, ExtensionError> {
    args.get(index)
        .ok_or(ExtensionError::MissingArgument { opcode, argument })
}
