//! XML type definitions for the FrameXML subset scenes are written in.

use serde::Deserialize;

/// Root element of a UI XML file.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename = "Ui")]
pub struct UiXml {
    #[serde(rename = "$value", default)]
    pub elements: Vec<XmlElement>,
}

/// Elements that can appear directly under `<Ui>`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum XmlElement {
    Frame(FrameXml),
    Button(FrameXml),
    CheckButton(FrameXml),
    EditBox(FrameXml),
    ScrollFrame(FrameXml),
    Slider(FrameXml),
    StatusBar(FrameXml),
    GameTooltip(FrameXml),
    Script(ScriptXml),
    #[serde(other)]
    Unknown,
}

impl XmlElement {
    /// The frame definition and its widget type name, for frame-like elements.
    pub fn as_frame(&self) -> Option<(&'static str, &FrameXml)> {
        match self {
            Self::Frame(f) => Some(("Frame", f)),
            Self::Button(f) => Some(("Button", f)),
            Self::CheckButton(f) => Some(("CheckButton", f)),
            Self::EditBox(f) => Some(("EditBox", f)),
            Self::ScrollFrame(f) => Some(("ScrollFrame", f)),
            Self::Slider(f) => Some(("Slider", f)),
            Self::StatusBar(f) => Some(("StatusBar", f)),
            Self::GameTooltip(f) => Some(("GameTooltip", f)),
            Self::Script(_) | Self::Unknown => None,
        }
    }
}

/// Frame-like elements inside a `<Frames>` container.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum FrameElement {
    Frame(FrameXml),
    Button(FrameXml),
    CheckButton(FrameXml),
    EditBox(FrameXml),
    ScrollFrame(FrameXml),
    Slider(FrameXml),
    StatusBar(FrameXml),
    GameTooltip(FrameXml),
    #[serde(other)]
    Unknown,
}

impl FrameElement {
    pub fn as_frame(&self) -> Option<(&'static str, &FrameXml)> {
        match self {
            Self::Frame(f) => Some(("Frame", f)),
            Self::Button(f) => Some(("Button", f)),
            Self::CheckButton(f) => Some(("CheckButton", f)),
            Self::EditBox(f) => Some(("EditBox", f)),
            Self::ScrollFrame(f) => Some(("ScrollFrame", f)),
            Self::Slider(f) => Some(("Slider", f)),
            Self::StatusBar(f) => Some(("StatusBar", f)),
            Self::GameTooltip(f) => Some(("GameTooltip", f)),
            Self::Unknown => None,
        }
    }
}

/// Frame definition in XML.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FrameXml {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@parent")]
    pub parent: Option<String>,
    #[serde(rename = "@hidden")]
    pub hidden: Option<bool>,
    #[serde(rename = "@frameStrata")]
    pub frame_strata: Option<String>,
    #[serde(rename = "@frameLevel")]
    pub frame_level: Option<i32>,
    #[serde(rename = "@setAllPoints")]
    pub set_all_points: Option<bool>,
    #[serde(rename = "@enableMouse")]
    pub enable_mouse: Option<bool>,

    // Child elements collected via $value to allow multiples
    #[serde(rename = "$value", default)]
    pub children: Vec<FrameChildElement>,
}

impl FrameXml {
    pub fn size(&self) -> Option<&SizeXml> {
        self.children.iter().find_map(|c| match c {
            FrameChildElement::Size(s) => Some(s),
            _ => None,
        })
    }

    pub fn anchors(&self) -> Option<&AnchorsXml> {
        self.children.iter().find_map(|c| match c {
            FrameChildElement::Anchors(a) => Some(a),
            _ => None,
        })
    }

    /// All Layers elements (there can be multiple).
    pub fn layers(&self) -> impl Iterator<Item = &LayersXml> {
        self.children.iter().filter_map(|c| match c {
            FrameChildElement::Layers(l) => Some(l),
            _ => None,
        })
    }

    /// All Frames containers, in document order.
    pub fn frames(&self) -> impl Iterator<Item = &FramesXml> {
        self.children.iter().filter_map(|c| match c {
            FrameChildElement::Frames(f) => Some(f),
            _ => None,
        })
    }
}

/// Children of a frame element.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum FrameChildElement {
    Size(SizeXml),
    Anchors(AnchorsXml),
    Layers(LayersXml),
    Frames(FramesXml),
    #[serde(other)]
    Unknown,
}

/// Size definition, either as attributes or a nested `AbsDimension`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SizeXml {
    #[serde(rename = "@x")]
    pub x: Option<f32>,
    #[serde(rename = "@y")]
    pub y: Option<f32>,
    #[serde(rename = "AbsDimension")]
    pub abs_dimension: Option<AbsDimensionXml>,
}

impl SizeXml {
    /// Width and height, with attributes taking priority over `AbsDimension`.
    pub fn dimensions(&self) -> (Option<f32>, Option<f32>) {
        let abs = self.abs_dimension.as_ref();
        (
            self.x.or_else(|| abs.and_then(|d| d.x)),
            self.y.or_else(|| abs.and_then(|d| d.y)),
        )
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AbsDimensionXml {
    #[serde(rename = "@x")]
    pub x: Option<f32>,
    #[serde(rename = "@y")]
    pub y: Option<f32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AnchorsXml {
    #[serde(rename = "Anchor", default)]
    pub anchors: Vec<AnchorXml>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnchorXml {
    #[serde(rename = "@point")]
    pub point: String,
    #[serde(rename = "@relativeTo")]
    pub relative_to: Option<String>,
    #[serde(rename = "@relativePoint")]
    pub relative_point: Option<String>,
    #[serde(rename = "@x")]
    pub x: Option<f32>,
    #[serde(rename = "@y")]
    pub y: Option<f32>,
    #[serde(rename = "Offset")]
    pub offset: Option<OffsetXml>,
}

impl AnchorXml {
    /// Offset with attributes taking priority over `Offset/AbsDimension`.
    pub fn offset(&self) -> (f32, f32) {
        let abs = self.offset.as_ref().and_then(|o| o.abs_dimension.as_ref());
        (
            self.x.or_else(|| abs.and_then(|d| d.x)).unwrap_or(0.0),
            self.y.or_else(|| abs.and_then(|d| d.y)).unwrap_or(0.0),
        )
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct OffsetXml {
    #[serde(rename = "AbsDimension")]
    pub abs_dimension: Option<AbsDimensionXml>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LayersXml {
    #[serde(rename = "Layer", default)]
    pub layers: Vec<LayerXml>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LayerXml {
    #[serde(rename = "@level")]
    pub level: Option<String>,
    #[serde(rename = "$value", default)]
    pub elements: Vec<LayerElement>,
}

/// Elements that can appear inside a Layer.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum LayerElement {
    Texture(TextureXml),
    FontString(FontStringXml),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TextureXml {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@file")]
    pub file: Option<String>,
    #[serde(rename = "@hidden")]
    pub hidden: Option<bool>,
    #[serde(rename = "@setAllPoints")]
    pub set_all_points: Option<bool>,
    #[serde(rename = "Size")]
    pub size: Option<SizeXml>,
    #[serde(rename = "Anchors")]
    pub anchors: Option<AnchorsXml>,
    #[serde(rename = "Color")]
    pub color: Option<ColorXml>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct FontStringXml {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@text")]
    pub text: Option<String>,
    #[serde(rename = "@hidden")]
    pub hidden: Option<bool>,
    #[serde(rename = "@setAllPoints")]
    pub set_all_points: Option<bool>,
    #[serde(rename = "Size")]
    pub size: Option<SizeXml>,
    #[serde(rename = "Anchors")]
    pub anchors: Option<AnchorsXml>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ColorXml {
    #[serde(rename = "@r")]
    pub r: Option<f32>,
    #[serde(rename = "@g")]
    pub g: Option<f32>,
    #[serde(rename = "@b")]
    pub b: Option<f32>,
    #[serde(rename = "@a")]
    pub a: Option<f32>,
}

/// Child frames container.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FramesXml {
    #[serde(rename = "$value", default)]
    pub elements: Vec<FrameElement>,
}

/// Lua file include, resolved relative to the XML file.
#[derive(Debug, Deserialize, Clone)]
pub struct ScriptXml {
    #[serde(rename = "@file")]
    pub file: String,
}
