//! Price observation record
//!
//! The value type handed from a price producer to a consumer, plus its
//! JSON wire form.

mod codec;
mod types;

pub use codec::{from_json, read_json_lines, to_json, to_json_pretty, write_json_lines, CodecError};
pub use types::PriceObservation;
