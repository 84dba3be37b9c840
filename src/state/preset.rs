/// Fixed resize targets offered in the size picker
///
/// The table is static for the lifetime of the process. The UI only ever
/// offers these entries, so a lookup by label cannot miss in practice.
use std::fmt;

/// A named target size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Label shown to the user (e.g., "HD (1280 x 720)")
    pub label: &'static str,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
}

impl Preset {
    const fn new(label: &'static str, width: u32, height: u32) -> Self {
        Self { label, width, height }
    }

    /// All presets in presentation order; the first one is the default
    pub const ALL: [Preset; 7] = [
        Preset::new("Full HD (1920 x 1080)", 1920, 1080),
        Preset::new("HD (1280 x 720)", 1280, 720),
        Preset::new("XGA (1024 x 768)", 1024, 768),
        Preset::new("Instagram Square (1080 x 1080)", 1080, 1080),
        Preset::new("SVGA (800 x 600)", 800, 600),
        Preset::new("VGA (640 x 480)", 640, 480),
        Preset::new("Icon (256 x 256)", 256, 256),
    ];

    /// Look up a preset by its label
    pub fn from_label(label: &str) -> Option<Preset> {
        Self::ALL.iter().copied().find(|preset| preset.label == label)
    }

    /// Target size as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
