use crate::label::Label;

/// A display name and an RGB color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub name: String,
    pub rgb: (u8, u8, u8),
}

impl Swatch {
    pub fn new(name: &str, rgb: (u8, u8, u8)) -> Self {
        Self {
            name: String::from(name),
            rgb,
        }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

/// Maps each label to how it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette([Swatch; 3]);

impl Palette {
    pub fn new(r0: Swatch, r1: Swatch, r2: Swatch) -> Self {
        Self([r0, r1, r2])
    }

    pub fn swatch(&self, label: Label) -> &Swatch {
        &self.0[label.index()]
    }

    pub fn name(&self, label: Label) -> &str {
        &self.swatch(label).name
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            Swatch::new("red", (255, 0, 0)),
            Swatch::new("green", (0, 255, 0)),
            Swatch::new("blue", (0, 0, 255)),
        )
    }
}
