//! The closed set of kernel variants the benchmark can run.

use std::fmt;
use std::str::FromStr;

use crate::blocked::tiled_ijk::matmul_tiled_ijk;
use crate::blocked::tiled_ikj::matmul_tiled_ikj;
use crate::error::Error;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::matrix::naive_ikj::matmul_naive_ikj;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// i-j-k, no blocking.
    Naive,
    /// i-k-j, no blocking.
    NaiveInterchanged,
    /// ii-jj-kk blocks, i-j-k inside.
    Tiled,
    /// ii-kk-jj blocks, i-k-j inside.
    TiledInterchanged,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Naive,
        Variant::NaiveInterchanged,
        Variant::Tiled,
        Variant::TiledInterchanged,
    ];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Naive => "naive",
            Variant::NaiveInterchanged => "naive-interchanged",
            Variant::Tiled => "tiled",
            Variant::TiledInterchanged => "tiled-interchanged",
        }
    }

    /// Human-readable label for report tables.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Naive => "Naive (i-j-k)",
            Variant::NaiveInterchanged => "Naive (i-k-j)",
            Variant::Tiled => "Tiled (i-j-k)",
            Variant::TiledInterchanged => "Tiled (i-k-j)",
        }
    }

    pub fn is_tiled(self) -> bool {
        matches!(self, Variant::Tiled | Variant::TiledInterchanged)
    }

    /// Run this variant: C += A * B on `n × n` row-major slices.
    ///
    /// `tile_size` is ignored by the unblocked variants.
    ///
    /// # Panics
    ///
    /// Panics on the same preconditions as the underlying kernel.
    #[inline]
    pub fn run(self, a: &[f64], b: &[f64], c: &mut [f64], n: usize, tile_size: usize) {
        match self {
            Variant::Naive => matmul_naive_ijk(a, b, c, n),
            Variant::NaiveInterchanged => matmul_naive_ikj(a, b, c, n),
            Variant::Tiled => matmul_tiled_ijk(a, b, c, n, tile_size),
            Variant::TiledInterchanged => matmul_tiled_ikj(a, b, c, n, tile_size),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>().unwrap(), v);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "Tiled-Interchanged".parse::<Variant>().unwrap(),
            Variant::TiledInterchanged
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(matches!(
            "blas".parse::<Variant>(),
            Err(Error::UnknownVariant(name)) if name == "blas"
        ));
    }

    #[test]
    fn only_tiled_variants_use_tiles() {
        assert!(!Variant::Naive.is_tiled());
        assert!(!Variant::NaiveInterchanged.is_tiled());
        assert!(Variant::Tiled.is_tiled());
        assert!(Variant::TiledInterchanged.is_tiled());
    }
}
