//! Trace-log forwarding and callback redirection.
//!
//! [`forwarder`] renders and emits lines through a [`TraceLogLibrary`];
//! [`CallbackRedirector`] swaps the library's log sink for an external
//! callback by registering a [`Trampoline`].

pub mod callback_slot;
pub mod forwarder;
pub mod library;
pub mod message_buffer;
pub mod native_callback;
pub mod recording_library;
pub mod redirector;
pub mod trampoline;

pub use callback_slot::CallbackSlot;
pub use library::TraceLogLibrary;
pub use message_buffer::{MESSAGE_CAPACITY, MessageBuffer};
pub use native_callback::{NativeCallback, NativeLogCallback};
pub use recording_library::RecordingLibrary;
pub use redirector::CallbackRedirector;
pub use trampoline::{Delivery, Trampoline};
