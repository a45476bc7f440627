//! Name, color theme and accessory

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_NAME, NAME_MAX_CHARS};

/// Color palette offered by the customization menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorTheme {
    #[default]
    ClassicYellow,
    ElectricBlue,
    ForestGreen,
    SunsetOrange,
    RoyalPurple,
    RosePink,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 6] = [
        ColorTheme::ClassicYellow,
        ColorTheme::ElectricBlue,
        ColorTheme::ForestGreen,
        ColorTheme::SunsetOrange,
        ColorTheme::RoyalPurple,
        ColorTheme::RosePink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::ClassicYellow => "Classic Yellow",
            ColorTheme::ElectricBlue => "Electric Blue",
            ColorTheme::ForestGreen => "Forest Green",
            ColorTheme::SunsetOrange => "Sunset Orange",
            ColorTheme::RoyalPurple => "Royal Purple",
            ColorTheme::RosePink => "Rose Pink",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            ColorTheme::ClassicYellow => "#FFCB05",
            ColorTheme::ElectricBlue => "#2196F3",
            ColorTheme::ForestGreen => "#4CAF50",
            ColorTheme::SunsetOrange => "#FF9800",
            ColorTheme::RoyalPurple => "#9C27B0",
            ColorTheme::RosePink => "#E91E63",
        }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(hex))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accessory {
    #[default]
    None,
    Hat,
    Bow,
    Glasses,
}

impl Accessory {
    pub const ALL: [Accessory; 4] = [
        Accessory::None,
        Accessory::Hat,
        Accessory::Bow,
        Accessory::Glasses,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Accessory::None => "None",
            Accessory::Hat => "Cool Hat",
            Accessory::Bow => "Cute Bow",
            Accessory::Glasses => "Smart Glasses",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Accessory::None => "none",
            Accessory::Hat => "hat",
            Accessory::Bow => "bow",
            Accessory::Glasses => "glasses",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Accessory::None),
            "hat" => Some(Accessory::Hat),
            "bow" => Some(Accessory::Bow),
            "glasses" => Some(Accessory::Glasses),
            _ => None,
        }
    }
}

/// How the pet presents itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub color: ColorTheme,
    pub accessory: Accessory,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            color: ColorTheme::default(),
            accessory: Accessory::default(),
        }
    }
}

impl Identity {
    /// Prefill for the customization menu
    pub fn customization(&self) -> Customization {
        Customization {
            name: self.name.clone(),
            color: self.color,
            accessory: self.accessory,
        }
    }

    /// Replace everything at once
    pub fn apply(&mut self, custom: Customization) {
        *self = Self {
            name: sanitize_name(&custom.name),
            color: custom.color,
            accessory: custom.accessory,
        };
    }
}

/// Form contents submitted by the customization menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    pub name: String,
    pub color: ColorTheme,
    pub accessory: Accessory,
}

/// Trim, cap to the name length limit, and fall back to the default name
pub fn sanitize_name(raw: &str) -> String {
    let capped: String = raw.trim().chars().take(NAME_MAX_CHARS).collect();
    let capped = capped.trim_end();
    if capped.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        capped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fallback() {
        assert_eq!(sanitize_name(""), "Pikachu");
        assert_eq!(sanitize_name("   "), "Pikachu");
        assert_eq!(sanitize_name("  Sparky "), "Sparky");
    }

    #[test]
    fn test_name_is_capped() {
        let name = sanitize_name("Supercalifragilistic");
        assert_eq!(name.chars().count(), 15);
        assert_eq!(name, "Supercalifragil");

        // Multi-byte characters count as one each
        let name = sanitize_name(&"ö".repeat(20));
        assert_eq!(name.chars().count(), 15);
    }

    #[test]
    fn test_apply_replaces_all_fields() {
        let mut identity = Identity::default();
        identity.apply(Customization {
            name: "Bolt".to_string(),
            color: ColorTheme::RoyalPurple,
            accessory: Accessory::Glasses,
        });
        assert_eq!(identity.name, "Bolt");
        assert_eq!(identity.color.hex(), "#9C27B0");
        assert_eq!(identity.accessory, Accessory::Glasses);
    }

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(ColorTheme::from_hex("#ffcb05"), Some(ColorTheme::ClassicYellow));
        assert_eq!(ColorTheme::from_hex("#000000"), None);
        assert_eq!(Accessory::from_str("Hat"), Some(Accessory::Hat));
        assert_eq!(Accessory::from_str("cape"), None);
    }
}
