// Composition root for the credit application system.
//
// Responsibilities:
// - Instantiate the in-memory repository adapters.
// - Wire repositories into the use case handlers.
// - Expose the HTTP router consumed by `main`.

pub mod http;
pub mod state;
