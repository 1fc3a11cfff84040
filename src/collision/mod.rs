pub mod contact;
pub mod dispatch;
pub mod generators;
pub mod overlap;

// Re-export key types
pub use contact::Contact;
pub use dispatch::{ContactFn, DispatchTable};
