//! XML parsing functions.

use std::path::Path;

use super::types::UiXml;

/// Parse a UI XML document from a string.
pub fn parse_xml(xml: &str) -> Result<UiXml, quick_xml::DeError> {
    quick_xml::de::from_str(xml)
}

/// Parse a UI XML file from disk.
pub fn parse_xml_file(path: &Path) -> crate::Result<UiXml> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_xml(&contents)?)
}
