mod html;
mod structs;
mod utils;

pub use html::RawHtml;
pub use structs::*;
pub use utils::{escape_attribute, to_hyphen_case};
