//! Declaration extraction - turns Go source into function descriptors
//!
//! The extractor walks a source root in a stable order, parses every `.go`
//! file and emits one [`FunctionDescriptor`] per top-level function or method
//! declaration. Any unreadable or malformed file aborts extraction with a
//! [`ParseError`]; a partial descriptor list is never returned.

pub mod errors;
pub mod extractor;
pub mod go_source;
pub mod types;

pub use errors::*;
pub use extractor::{discover_sources, extract_file, extract_path, extract_source};
pub use types::*;
