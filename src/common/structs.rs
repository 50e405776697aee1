/// Message carrying error used while booting.
pub mod custom_error;

/// Deadline and cancellation carried through every data access call.
pub mod request_context;
