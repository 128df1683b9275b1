//! Watson Dialog v1.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::{DialogService, DialogServiceImpl};
pub use types::{
    ConversationResponse, DialogContent, DialogFileFormat, DialogId, DialogList, DialogSummary,
    NameValue, Profile,
};
