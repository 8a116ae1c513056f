use std::fmt;
use std::str::FromStr;

use serde::de::Error;

/// 8-bit sRGB color with optional alpha that serializes to a string like
/// `"#ff00ff"` or `"#ff00ff80"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
    /// Alpha component, if one was specified.
    pub alpha: Option<u8>,
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))?;
        if let Some(a) = self.alpha {
            write!(f, "{}", hex::encode([a]))?;
        }
        Ok(())
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        color_from_hex_str(s)
    }
}
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Constructs an opaque color with no explicit alpha.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: None,
        }
    }

    /// Returns the alpha component, which is fully opaque if unspecified.
    pub fn alpha_or_opaque(self) -> u8 {
        self.alpha.unwrap_or(u8::MAX)
    }

    /// Returns the 24-bit RGB value packed as `0xRRGGBB`.
    pub fn to_u24(self) -> u32 {
        let [r, g, b] = self.rgb;
        u32::from_be_bytes([0, r, g, b])
    }
}

/// Deserializes a color from a hex string like `#ff00ff`, `#f0f`, or
/// `#ff00ff80`.
fn color_from_hex_str(s: &str) -> Result<Rgb, hex::FromHexError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    let mut rgb = [0_u8; 3];
    match s.len() {
        3 => {
            let s = &s.chars().flat_map(|c| [c, c]).collect::<String>();
            hex::decode_to_slice(s, &mut rgb)?;
            Ok(Rgb { rgb, alpha: None })
        }
        8 => {
            let mut rgba = [0_u8; 4];
            hex::decode_to_slice(s, &mut rgba)?;
            let [r, g, b, a] = rgba;
            Ok(Rgb {
                rgb: [r, g, b],
                alpha: Some(a),
            })
        }
        _ => {
            hex::decode_to_slice(s, &mut rgb)?;
            Ok(Rgb { rgb, alpha: None })
        }
    }
}
