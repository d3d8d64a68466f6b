//! File-name tagging for `.dat` sources.
//!
//! Per-security files are named `gp<market><code>.dat`, e.g. `gpsz000009.dat`.
//! The tag is metadata only: decoding never depends on it, and files with
//! other names still decode. The code also places a file in a
//! [`SecurityCategory`] according to each exchange's code ranges.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error_handling::FileNameError;

/// Prefix shared by all per-security data files.
pub const FILE_PREFIX: &str = "gp";
/// Extension of per-security data files.
pub const FILE_EXTENSION: &str = "dat";

/// Exchange a data file belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Market {
    /// Shenzhen
    Sz,
    /// Shanghai
    Sh,
    /// Beijing
    Bj,
}

/// Kind of security a code belongs to, by exchange code range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SecurityCategory {
    /// A shares
    Ashare,
    /// B shares
    Bshare,
    /// Exchange-traded funds
    Etf,
    /// Listed open-ended funds
    Lof,
    /// Convertible bonds
    Kzz,
    /// Real estate investment trusts
    Reits,
    /// Other funds
    Fund,
    /// Bonds
    Bond,
    /// Exchange indices
    Index,
    /// Market-wide statistics (Shanghai `999xxx`)
    Mkt,
    /// TDX sector indices (Shanghai `880xxx`/`881xxx`)
    Tdx,
    /// Delisted or legacy-system stocks and Beijing `92xxxx`/`88xxxx` stocks
    Stock,
    /// Tender offers and buybacks
    Yysg,
    /// Employee stock options
    #[strum(serialize = "option")]
    #[serde(rename = "option")]
    StockOption,
    /// Preferred shares
    Yxg,
    /// Non-numeric code or a range with no known meaning
    Unknown,
}

impl SecurityCategory {
    /// Classifies `code` on `market`.
    pub fn classify(market: Market, code: &str) -> Self {
        let Ok(n) = code.parse::<u64>() else {
            return Self::Unknown;
        };
        let sec = n / 1000;
        match market {
            Market::Sh => match n / 100_000 {
                9 if sec == 999 => Self::Mkt,
                9 => Self::Bshare,
                6 => Self::Ashare,
                5 => match sec {
                    508 => Self::Reits,
                    506 => Self::Lof,
                    511 | 517 | 520 | 551 | 588 | 589 => Self::Etf,
                    _ => Self::Fund,
                },
                0 if sec == 0 => Self::Index,
                0 => Self::Bond,
                _ => match sec {
                    100 | 110 | 111 | 113 | 118 | 126 | 181 | 190 | 191 | 193 | 195 => Self::Kzz,
                    880 | 881 => Self::Tdx,
                    _ => Self::Bond,
                },
            },
            Market::Sz => match sec {
                0..=4 | 300..=309 => Self::Ashare,
                123 | 127 | 128 => Self::Kzz,
                150 | 151 | 184 => Self::Fund,
                158 | 159 => Self::Etf,
                160..=179 => Self::Lof,
                180 => Self::Reits,
                200..=209 => Self::Bshare,
                970.. => Self::Index,
                _ => Self::Bond,
            },
            Market::Bj => match sec {
                810 => Self::Kzz,
                899 => Self::Index,
                840 | 841 => Self::Yysg,
                850 => Self::StockOption,
                400 | 420 => Self::Stock,
                820 => Self::Yxg,
                _ if matches!(n / 10_000, 88 | 92) => Self::Stock,
                _ => Self::Unknown,
            },
        }
    }
}

/// Market and security code parsed from a data file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatFileTag {
    /// Exchange
    pub market: Market,
    /// Security code, e.g. `000009`
    pub code: String,
}

impl DatFileTag {
    /// Tags a path by its file name, or returns `None` when the name does not
    /// follow the `gp<market><code>.dat` convention.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.parse().ok())
    }

    /// Security category implied by the code.
    pub fn category(&self) -> SecurityCategory {
        SecurityCategory::classify(self.market, &self.code)
    }
}

impl FromStr for DatFileTag {
    type Err = FileNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let unrecognized = || FileNameError::Unrecognized(name.to_string());

        let stem = name
            .strip_suffix(FILE_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .ok_or_else(unrecognized)?;
        let rest = stem.strip_prefix(FILE_PREFIX).ok_or_else(unrecognized)?;
        if rest.len() < 2 || !rest.is_char_boundary(2) {
            return Err(unrecognized());
        }
        let (market, code) = rest.split_at(2);
        let market = Market::from_str(market).map_err(|_| unrecognized())?;
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(unrecognized());
        }

        Ok(Self {
            market,
            code: code.to_string(),
        })
    }
}

impl fmt::Display for DatFileTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.market, self.code)
    }
}
