//! LENS Inspector Session
//!
//! The in-process boundary between the engine and the diagram
//! collaborator:
//! - `ElementRef` - a capability handle for reading element identity and
//!   native attributes without holding the collaborator's object model
//! - `DiagramPort` - the outbound interface for mirroring writes and
//!   reading persisted extension values
//! - `InspectorSession` - selection lifecycle glue over one PropertyStore
//! - extension import/export of the persisted per-kind text encoding

mod error;
mod extension;
mod port;
mod session;

pub use error::{SessionError, SessionResult};
pub use extension::{export_extension, import_extension, ExtensionEntry};
pub use port::{DiagramPort, ElementRef};
pub use session::InspectorSession;
