//! Mind-map archive parsing module.

pub mod archive;
mod options;
mod xmind_parser;

pub use options::{ParseOptions, DEFAULT_ENTRY_SUFFIX};
pub use xmind_parser::{decode_content, decode_reader, XmindParser};
