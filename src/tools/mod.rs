//! # Tools Module
//!
//! The fixed catalog of tools exposed to the agent host, and the machinery that
//! turns a `tools/call` request into exactly one [`InvocationResult`].
//!
//! - [`registry`] - tool definitions and the read-only catalog
//! - [`schema`] - declarative input schemas and argument validation
//! - [`args`] - typed argument sets, one per tool
//! - [`dispatcher`] - lookup, validation, execution and result wrapping
//!
//! [`InvocationResult`]: crate::mcp::protocol::InvocationResult

// Declares a closed set of string-valued variants with its wire names.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const NAMES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod args;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod schema;

pub use dispatcher::Dispatcher;
pub use error::ToolError;
pub use registry::{ToolDefinition, ToolName, ToolRegistry};
