use crate::argument::{BlockArg, BlockValue};
use crate::extension::{Extension, ExtensionError, LoadContext};

/// An extension with a single reporter answering a constant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HelloWorld {
    _private: (),
}

impl HelloWorld {
    /// The id this extension registers under.
    pub const ID: &'static str = "helloworldunsandboxed";
    /// The extension name.
    pub const NAME: &'static str = "Unsandboxed Hello World";

    /// Loads the extension. Fails when `ctx` is sandboxed.
    pub fn load(ctx: &LoadContext) -> Result<HelloWorld, ExtensionError> {
        if !ctx.unsandboxed {
            return Err(ExtensionError::Sandboxed {
                message: "tween must run unsandboxed",
            });
        }

        log::info!("Loaded extension {}.", Self::ID);
        Ok(HelloWorld { _private: () })
    }

    /// The `hello` reporter.
    pub fn hello(&self) -> &'static str {
        "World!"
    }
}

impl Extension for HelloWorld {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run_block(
        &mut self,
        opcode: &str,
        _args: &[BlockArg],
    ) -> Result<Option<BlockValue>, ExtensionError> {
        match opcode {
            "hello" => Ok(Some(BlockValue::Text(self.hello().to_string()))),
            _ => Err(ExtensionError::UnknownOpcode {
                extension: Self::ID,
                opcode: opcode.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_to_load_sandboxed() {
        let err = HelloWorld::load(&LoadContext::sandboxed()).unwrap_err();
        assert_eq!(
            err,
            ExtensionError::Sandboxed {
                message: "tween must run unsandboxed"
            }
        );
        assert_eq!(err.to_string(), "tween must run unsandboxed");
    }

    #[test]
    fn hello_reports_world() {
        let mut ext = HelloWorld::load(&LoadContext::unsandboxed()).unwrap();
        assert_eq!(ext.id(), "helloworldunsandboxed");
        assert_eq!(ext.name(), "Unsandboxed Hello World");
        assert_eq!(
            ext.run_block("hello", &[]).unwrap(),
            Some(BlockValue::Text("World!".to_string()))
        );
    }

    #[test]
    fn unknown_opcode_is_an_error() {
        let mut ext = HelloWorld::load(&LoadContext::unsandboxed()).unwrap();
        assert!(matches!(
            ext.run_block("goodbye", &[]),
            Err(ExtensionError::UnknownOpcode { .. })
        ));
    }
}
