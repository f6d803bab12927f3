//! Table des sept catégories de modes et de leurs codes autorisés

use serde::{Serialize, Serializer};
use std::fmt;

/// Catégorie de mode encodée dans le suffixe d'un jeton de démarrage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ModeCategory {
    /// `M0` - mode de sortie du périphérique
    DeviceOutput,

    /// `M1` - tir hors écran
    OffscreenFiring,

    /// `M2` - pédale
    PedalMapping,

    /// `M3` - correction du ratio d'aspect
    AspectRatio,

    /// `M6` - rumble seul
    RumbleOnly,

    /// `M8` - tir automatique
    AutoFire,

    /// `MD` - affichage OLED
    Display,
}

/// Option d'une catégorie : code court et description affichée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeOption {
    pub code: &'static str,
    pub description: &'static str,
}

const DEVICE_OUTPUT: &[ModeOption] = &[
    ModeOption { code: "0", description: "Mouse & Keyboard" },
    ModeOption { code: "1", description: "Gamepad, w/ Camera mapped to Right Stick" },
    ModeOption { code: "1L", description: "Maps Camera to Left Stick instead (OpenFIRE exclusive)" },
    ModeOption { code: "2", description: "'Hybrid'" },
];

const OFFSCREEN_FIRING: &[ModeOption] = &[
    ModeOption { code: "0", description: "Disabled (not used in OpenFIRE)" },
    ModeOption { code: "1", description: "Fire in bottom-left corner (not used in OpenFIRE)" },
    ModeOption {
        code: "2",
        description: "Offscreen Button Mode enabled (i.e. offscreen trigger pulls generates a Right Click instead of a Left Click)",
    },
    ModeOption {
        code: "3",
        description: "Normal shot (always on when Offscreen Button Mode isn't set in OpenFIRE)",
    },
];

const PEDAL_MAPPING: &[ModeOption] = &[
    ModeOption { code: "0", description: "Separate Button (as mapped)" },
    ModeOption { code: "1", description: "As Right Mouse" },
    ModeOption { code: "2", description: "As Middle Mouse (OpenFIRE exclusive)" },
];

const ASPECT_RATIO: &[ModeOption] = &[
    ModeOption { code: "0", description: "Fullscreen" },
    ModeOption { code: "1", description: "4:3 Correction" },
];

const RUMBLE_ONLY: &[ModeOption] = &[
    ModeOption { code: "0", description: "Disabled (Solenoid allowed)" },
    ModeOption { code: "1", description: "Enabled (Solenoid disabled, Rumble enabled)" },
];

const AUTO_FIRE: &[ModeOption] = &[
    ModeOption { code: "0", description: "Disabled (sustained fire is kept enabled in OpenFIRE)" },
    ModeOption { code: "1", description: "Auto fire on (enables Burst Fire in OpenFIRE)" },
    ModeOption { code: "2", description: "Auto fire always on rapid fire" },
];

const DISPLAY: &[ModeOption] = &[
    ModeOption { code: "1", description: "Life Only" },
    ModeOption { code: "2", description: "Ammo Only" },
    ModeOption { code: "3", description: "Life & Ammo Splitscreen" },
    ModeOption { code: "3B", description: "Life Bar (Life Glyphs otherwise)" },
];

impl ModeCategory {
    /// Toutes les catégories, dans l'ordre canonique d'émission
    pub const ALL: [ModeCategory; 7] = [
        ModeCategory::DeviceOutput,
        ModeCategory::OffscreenFiring,
        ModeCategory::PedalMapping,
        ModeCategory::AspectRatio,
        ModeCategory::RumbleOnly,
        ModeCategory::AutoFire,
        ModeCategory::Display,
    ];

    /// Position dans l'ordre canonique
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chiffre ou lettre suivant le `M` dans le jeton
    pub fn tag(self) -> char {
        match self {
            ModeCategory::DeviceOutput => '0',
            ModeCategory::OffscreenFiring => '1',
            ModeCategory::PedalMapping => '2',
            ModeCategory::AspectRatio => '3',
            ModeCategory::RumbleOnly => '6',
            ModeCategory::AutoFire => '8',
            ModeCategory::Display => 'D',
        }
    }

    /// Nom affiché dans l'éditeur
    pub fn title(self) -> &'static str {
        match self {
            ModeCategory::DeviceOutput => "Device Output Mode",
            ModeCategory::OffscreenFiring => "Offscreen Firing Mode",
            ModeCategory::PedalMapping => "Pedal Mapping",
            ModeCategory::AspectRatio => "Aspect Ratio Correction",
            ModeCategory::RumbleOnly => "Rumble Only Mode",
            ModeCategory::AutoFire => "Auto Fire Mode",
            ModeCategory::Display => "Display Mode",
        }
    }

    /// Nom court accepté en ligne de commande
    pub fn short_name(self) -> &'static str {
        match self {
            ModeCategory::DeviceOutput => "device",
            ModeCategory::OffscreenFiring => "offscreen",
            ModeCategory::PedalMapping => "pedal",
            ModeCategory::AspectRatio => "aspect",
            ModeCategory::RumbleOnly => "rumble",
            ModeCategory::AutoFire => "autofire",
            ModeCategory::Display => "display",
        }
    }

    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.short_name().eq_ignore_ascii_case(name))
    }

    /// Options autorisées pour cette catégorie
    pub fn options(self) -> &'static [ModeOption] {
        match self {
            ModeCategory::DeviceOutput => DEVICE_OUTPUT,
            ModeCategory::OffscreenFiring => OFFSCREEN_FIRING,
            ModeCategory::PedalMapping => PEDAL_MAPPING,
            ModeCategory::AspectRatio => ASPECT_RATIO,
            ModeCategory::RumbleOnly => RUMBLE_ONLY,
            ModeCategory::AutoFire => AUTO_FIRE,
            ModeCategory::Display => DISPLAY,
        }
    }

    /// Valide un code court (`"1L"`, `"3B"`...) pour cette catégorie
    pub fn code(self, value: &str) -> Option<ModeCode> {
        self.options()
            .iter()
            .find(|o| o.code == value)
            .map(|option| ModeCode { category: self, option })
    }

    /// Accepte soit le code court, soit le jeton complet (`M0x1L`)
    pub fn parse(self, text: &str) -> Option<ModeCode> {
        let text = text.trim();
        let prefix = format!("M{}x", self.tag());
        match text.strip_prefix(prefix.as_str()) {
            Some(code) => self.code(code),
            None => self.code(text),
        }
    }
}

impl fmt::Display for ModeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Code validé d'une catégorie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCode {
    category: ModeCategory,
    option: &'static ModeOption,
}

impl ModeCode {
    pub fn category(&self) -> ModeCategory {
        self.category
    }

    /// Code court, ex. `"1L"`
    pub fn code(&self) -> &'static str {
        self.option.code
    }

    /// Jeton complet, ex. `"M0x1L"`
    pub fn token(&self) -> String {
        format!("M{}x{}", self.category.tag(), self.option.code)
    }

    /// Libellé de liste déroulante, ex. `"M3x1 - 4:3 Correction"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.token(), self.option.description)
    }
}

impl fmt::Display for ModeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl Serialize for ModeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_and_tags() {
        let tags: String = ModeCategory::ALL.iter().map(|c| c.tag()).collect();
        assert_eq!(tags, "012368D");
        for (i, category) in ModeCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_code_validation() {
        assert!(ModeCategory::DeviceOutput.code("1L").is_some());
        assert!(ModeCategory::Display.code("3B").is_some());
        assert!(ModeCategory::Display.code("0").is_none());
        assert!(ModeCategory::AspectRatio.code("2").is_none());
        assert!(ModeCategory::PedalMapping.code("1L").is_none());
    }

    #[test]
    fn test_parse_accepts_full_token() {
        let code = ModeCategory::DeviceOutput.parse("M0x1L").unwrap();
        assert_eq!(code.code(), "1L");
        assert_eq!(code.token(), "M0x1L");
        assert!(ModeCategory::Display.parse("MDx3B").is_some());
        assert!(ModeCategory::Display.parse("M0x1").is_none());
    }

    #[test]
    fn test_label() {
        let code = ModeCategory::AspectRatio.code("1").unwrap();
        assert_eq!(code.label(), "M3x1 - 4:3 Correction");
    }
}
