use crate::regions::ShapeSignature;

use rand::rngs::StdRng;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::ops::Range;
use tracing::trace;

/// Channel values handed out to new shapes. Keeps colours away from
/// near-black and near-white.
const CHANNEL_RANGE: Range<u8> = 50..250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn opaque(self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 255,
        }
    }

    fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random_range(CHANNEL_RANGE),
            g: rng.random_range(CHANNEL_RANGE),
            b: rng.random_range(CHANNEL_RANGE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Colour registry keyed by shape signature.
///
/// A signature gets a random colour the first time it is looked up and keeps
/// it for the lifetime of the palette. Entries are never evicted.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: FxHashMap<ShapeSignature, Rgb>,
    rng: StdRng,
}

impl Palette {
    pub fn new(rng: StdRng) -> Self {
        Self {
            colors: FxHashMap::default(),
            rng,
        }
    }

    pub fn color_for(&mut self, signature: &ShapeSignature) -> Rgb {
        if let Some(&color) = self.colors.get(signature) {
            return color;
        }

        let color = Rgb::random(&mut self.rng);
        trace!(%signature, ?color, "new shape");

        self.colors.insert(signature.clone(), color);
        color
    }

    #[cfg(test)]
    pub fn contains(&self, signature: &ShapeSignature) -> bool {
        self.colors.contains_key(signature)
    }

    /// Number of distinct shapes seen so far.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
