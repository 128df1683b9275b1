//! Watson Assistant v2: sessions and conversational messages.

mod service;
mod types;


pub use service::{AssistantService, AssistantServiceImpl};
pub use types::{
    MessageContext, MessageContextGlobal, MessageContextSystem, MessageInput, MessageInputOptions,
    MessageOutput, MessageRequest, MessageResponse, ResponseGeneric, ResponseOption,
    ResponseOptionValue, RuntimeEntity, RuntimeIntent, SessionResponse,
};
