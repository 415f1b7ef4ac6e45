//! Chat domain module.
//!
//! - `message`: transcript entries (`Author`, `ChatMessage`, `MessageId`)
//! - `transcript`: append-only history (`Transcript`)
//! - `state`: send state machine and visibility (`ChatState`)
//! - `endpoint`: remote reply port (`ChatEndpoint`)
//! - `surface`: presentation port (`ChatSurface`)

mod endpoint;
mod message;
mod state;
mod surface;
mod transcript;

pub use endpoint::ChatEndpoint;
pub use message::{Author, ChatMessage, MessageId};
pub use state::{
    ChatPhase, ChatState, DEGRADED_REPLY, OutboundMessage, PLACEHOLDER_TEXT, Resolution,
    SubmitOutcome,
};
pub use surface::ChatSurface;
pub use transcript::Transcript;
