//! Model codec layer: JSON mapping helpers and the polymorphic scalar types
//! shared across services.

pub mod codec;
pub mod date_format;
mod option_value;
mod range;

pub use codec::DecodeError;
pub use option_value::{OptionValue, OptionValueKind, OPTION_VALUE_DECODE_PRIORITY};
pub use range::Range;
