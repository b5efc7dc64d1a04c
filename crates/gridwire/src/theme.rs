use eframe::egui::Color32;

use crate::wire::{BuildingKind, Material};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub board: Color32,
    pub grid_line: Color32,
    pub goal: Color32,
    pub goal_glyph: Color32,
    pub wire_pending: Color32,
    pub wire_connected: Color32,
    pub solar: Color32,
    pub windmill: Color32,
    pub water: Color32,
    pub building_glyph: Color32,
    pub eligible_ring: Color32,
    pub hud_text: Color32,
    pub toast_background: Color32,
    pub toast_text: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            board: Color32::from_rgb(0x2A, 0x2A, 0x2E),
            grid_line: Color32::from_rgb(0x3C, 0x3C, 0x42),
            goal: Color32::from_rgb(0xE8, 0xA8, 0x38),
            goal_glyph: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            wire_pending: Color32::from_rgb(0x8A, 0x8A, 0x93),
            wire_connected: Color32::from_rgb(0x5C, 0xDB, 0x95),
            solar: Color32::from_rgb(0x5C, 0xB8, 0xFF),
            windmill: Color32::from_rgb(0xC0, 0x7E, 0xF1),
            water: Color32::from_rgb(0x4E, 0xD4, 0xD4),
            building_glyph: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            eligible_ring: Color32::from_rgb(0xF0, 0xF0, 0xF0),
            hud_text: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            toast_background: Color32::from_rgb(0x3C, 0x3C, 0x42),
            toast_text: Color32::WHITE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            board: Color32::from_rgb(0xF2, 0xF2, 0xF5),
            grid_line: Color32::from_rgb(0xD5, 0xD5, 0xDC),
            goal: Color32::from_rgb(0xB8, 0x7B, 0x0A),
            goal_glyph: Color32::WHITE,
            wire_pending: Color32::from_rgb(0x9A, 0x9A, 0xA2),
            wire_connected: Color32::from_rgb(0x1E, 0x8A, 0x5A),
            solar: Color32::from_rgb(0x1A, 0x6B, 0xB5),
            windmill: Color32::from_rgb(0x7B, 0x3F, 0xA0),
            water: Color32::from_rgb(0x18, 0x8A, 0x8D),
            building_glyph: Color32::WHITE,
            eligible_ring: Color32::from_rgb(0x16, 0x21, 0x3E),
            hud_text: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            toast_background: Color32::from_rgb(0x16, 0x21, 0x3E),
            toast_text: Color32::WHITE,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn building_color(&self, kind: BuildingKind) -> Color32 {
        match kind {
            BuildingKind::Solar => self.solar,
            BuildingKind::Windmill => self.windmill,
            BuildingKind::Water => self.water,
        }
    }

    pub fn wire_color(&self, material: Material) -> Color32 {
        match material {
            Material::Pending => self.wire_pending,
            Material::Connected => self.wire_connected,
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}
