use catweb_core::HexColor;

/// Page-level metadata and backdrop.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub background_color: HexColor,
    pub page_title: String,
    /// Decal id of the page icon.
    pub icon: u64,
    pub search_description: String,
    /// Decal id of the page thumbnail.
    pub thumbnail: u64,
}
