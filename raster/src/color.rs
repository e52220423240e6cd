use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::{FromStr};
use std::collections::{HashMap};

lazy_static! {
    /// CSS-style colour names accepted by the parser
    static ref NAMED_COLORS: HashMap<&'static str, u32> = {
        let mut names = HashMap::new();

        names.insert("black",   0x000000);
        names.insert("white",   0xffffff);
        names.insert("red",     0xff0000);
        names.insert("green",   0x008000);
        names.insert("lime",    0x00ff00);
        names.insert("blue",    0x0000ff);
        names.insert("yellow",  0xffff00);
        names.insert("cyan",    0x00ffff);
        names.insert("magenta", 0xff00ff);
        names.insert("orange",  0xffa500);
        names.insert("purple",  0x800080);
        names.insert("brown",   0xa52a2a);
        names.insert("gray",    0x808080);
        names.insert("grey",    0x808080);

        names
    };
}

///
/// The canonical identity of a colour, as used to address sublayers
///
/// Every colour specification a caller can supply (`#fff`, `#FFFFFF`,
/// `rgb(255, 255, 255)`, `white`) passes through `ColorKey::parse` exactly once,
/// so two spellings of the same colour always produce the same key and can never
/// address two different sublayers.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct ColorKey(u32);

///
/// A straight-alpha RGBA pixel value
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

///
/// Error indicating that a colour specification could not be understood
///
#[derive(Clone, PartialEq, Debug)]
pub struct ColorParseError(pub String);

impl ColorKey {
    pub const BLACK: ColorKey = ColorKey(0x000000);
    pub const WHITE: ColorKey = ColorKey(0xffffff);

    ///
    /// Creates a colour key from its three channels
    ///
    pub const fn from_channels(r: u8, g: u8, b: u8) -> ColorKey {
        ColorKey(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    ///
    /// The canonicalization entry point: parses any supported colour spelling
    ///
    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` (the alpha is
    /// not part of the identity and is discarded) and a small set of colour names.
    /// Case and surrounding whitespace are ignored.
    ///
    pub fn parse(spec: &str) -> Result<ColorKey, ColorParseError> {
        let spec = spec.trim().to_ascii_lowercase();

        if let Some(hex) = spec.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| ColorParseError(spec.clone()));
        }

        if let Some(args) = spec.strip_prefix("rgba").or_else(|| spec.strip_prefix("rgb")) {
            return Self::parse_rgb_args(args).ok_or_else(|| ColorParseError(spec.clone()));
        }

        if let Some(packed) = NAMED_COLORS.get(spec.as_str()) {
            return Ok(ColorKey(*packed));
        }

        Err(ColorParseError(spec))
    }

    ///
    /// Parses the digits of a `#rgb` or `#rrggbb` spelling
    ///
    fn parse_hex(hex: &str) -> Option<ColorKey> {
        match hex.len() {
            3 => {
                let packed = u32::from_str_radix(hex, 16).ok()?;
                let (r, g, b) = ((packed >> 8) & 0xf, (packed >> 4) & 0xf, packed & 0xf);

                // Shorthand digits double up: #abc is #aabbcc
                Some(ColorKey((r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)))
            }

            6 => u32::from_str_radix(hex, 16).ok().map(ColorKey),

            _ => None
        }
    }

    ///
    /// Parses the `(r, g, b)` or `(r, g, b, a)` argument list of a functional spelling
    ///
    fn parse_rgb_args(args: &str) -> Option<ColorKey> {
        let args        = args.trim().strip_prefix('(')?.strip_suffix(')')?;
        let channels    = args.split(',').map(|c| c.trim()).collect::<Vec<_>>();

        if channels.len() != 3 && channels.len() != 4 {
            return None;
        }

        let r = u8::from_str(channels[0]).ok()?;
        let g = u8::from_str(channels[1]).ok()?;
        let b = u8::from_str(channels[2]).ok()?;

        // A fourth argument must at least parse as a number, but plays no part in the key
        if channels.len() == 4 {
            f64::from_str(channels[3]).ok()?;
        }

        Some(ColorKey::from_channels(r, g, b))
    }

    ///
    /// The three channels of this colour
    ///
    pub fn channels(&self) -> (u8, u8, u8) {
        (((self.0 >> 16) & 0xff) as u8, ((self.0 >> 8) & 0xff) as u8, (self.0 & 0xff) as u8)
    }

    ///
    /// This colour as a pixel value with the specified alpha
    ///
    pub fn to_rgba(&self, alpha: u8) -> Rgba {
        let (r, g, b) = self.channels();

        Rgba { r, g, b, a: alpha }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    ///
    /// The colour key that identifies this pixel's colour
    ///
    pub fn key(&self) -> ColorKey {
        ColorKey::from_channels(self.r, self.g, self.b)
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' is not a recognised colour", self.0)
    }
}

impl std::error::Error for ColorParseError { }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_hex_matches_full_hex() {
        assert!(ColorKey::parse("#fff").unwrap() == ColorKey::parse("#ffffff").unwrap());
        assert!(ColorKey::parse("#a3c").unwrap() == ColorKey::parse("#aa33cc").unwrap());
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert!(ColorKey::parse("  #FFFFFF ").unwrap() == ColorKey::WHITE);
        assert!(ColorKey::parse("RGB(255, 0, 0)").unwrap() == ColorKey::from_channels(255, 0, 0));
    }

    #[test]
    fn functional_spelling_matches_hex() {
        assert!(ColorKey::parse("rgb(255,255,255)").unwrap() == ColorKey::parse("#FFFFFF").unwrap());
        assert!(ColorKey::parse("rgba(0, 128, 255, 0.5)").unwrap() == ColorKey::parse("#0080ff").unwrap());
    }

    #[test]
    fn named_colors_resolve() {
        assert!(ColorKey::parse("white").unwrap() == ColorKey::WHITE);
        assert!(ColorKey::parse("Black").unwrap() == ColorKey::BLACK);
    }

    #[test]
    fn malformed_specs_are_rejected() {
        assert!(ColorKey::parse("#ggg").is_err());
        assert!(ColorKey::parse("#12345").is_err());
        assert!(ColorKey::parse("rgb(1,2)").is_err());
        assert!(ColorKey::parse("rgb(256, 0, 0)").is_err());
        assert!(ColorKey::parse("chartreuse-ish").is_err());
    }

    #[test]
    fn display_is_canonical_lowercase() {
        assert!(ColorKey::parse("#AB12EF").unwrap().to_string() == "#ab12ef");
        assert!(ColorKey::parse(&ColorKey::BLACK.to_string()).unwrap() == ColorKey::BLACK);
    }

    #[test]
    fn rgba_round_trips_through_key() {
        let key = ColorKey::from_channels(12, 34, 56);

        assert!(key.to_rgba(255).key() == key);
        assert!(key.to_rgba(0).a == 0);
    }
}
