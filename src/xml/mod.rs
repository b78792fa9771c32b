//! XML parsing for scene files written in a FrameXML subset.

mod parse;
mod types;

pub use parse::{parse_xml, parse_xml_file};
pub use types::*;
