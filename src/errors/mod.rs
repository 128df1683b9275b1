mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, ConfigurationError, SerializationError, TransportError, ValidationError,
};
pub use error::{ErrorMetadata, ServiceError, WatsonError, WatsonResult};
pub use mapping::{ErrorMapper, ExtractedMessage};
