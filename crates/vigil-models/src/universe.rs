//! The monitored asset universe.
//!
//! An ordered table of categories. Each category resolves to concrete asset
//! codes either dynamically (a vendor sector id expanded at run time) or
//! statically (a literal code list). Dispatch is over the [`Resolution`] enum,
//! never a type-flag string.

use serde::{Deserialize, Serialize};

/// How a category's member codes are obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Resolution {
    /// Expand a vendor sector id into (code, name) constituents as of the
    /// run date.
    Sector { sector_id: String },
    /// Fixed literal code list; display names are looked up best-effort.
    Direct { codes: Vec<String> },
}

/// One monitored category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseEntry {
    /// Stable machine key, e.g. `ashare_index`.
    pub key: String,
    /// Human-readable name used in reports.
    pub display_name: String,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// Ordered collection of categories; iteration order is definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetUniverse {
    entries: Vec<UniverseEntry>,
}

impl AssetUniverse {
    pub fn new(entries: Vec<UniverseEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[UniverseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &UniverseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The six built-in categories: SW level-3 industries (sector-resolved),
    /// A-share indices, China bond indices, ETFs, commodity futures and
    /// global indices (literal code lists).
    pub fn builtin() -> Self {
        fn direct(key: &str, display_name: &str, codes: &[&str]) -> UniverseEntry {
            UniverseEntry {
                key: key.to_string(),
                display_name: display_name.to_string(),
                resolution: Resolution::Direct {
                    codes: codes.iter().map(|c| c.to_string()).collect(),
                },
            }
        }

        Self::new(vec![
            UniverseEntry {
                key: "sw3_industry".to_string(),
                display_name: "SW Level-3 Industries".to_string(),
                resolution: Resolution::Sector {
                    sector_id: "a39901011i000000".to_string(),
                },
            },
            direct(
                "ashare_index",
                "A-Share Indices",
                &[
                    "000300.SH",
                    "000905.SH",
                    "000016.SH",
                    "000852.SH",
                    "000001.SH",
                    "399001.SZ",
                    "399006.SZ",
                    "000688.SH",
                    "883985.WI",
                ],
            ),
            direct(
                "china_bond",
                "China Bond Indices",
                &[
                    "CBA00101.CS",
                    "CBA00301.CS",
                    "CBA00401.CS",
                    "CBA00501.CS",
                    "CBA00601.CS",
                ],
            ),
            direct(
                "etf",
                "Major ETFs",
                &[
                    "510300.SH",
                    "510500.SH",
                    "510050.SH",
                    "159915.SZ",
                    "588000.SH",
                    "512480.SH",
                    "515030.SH",
                    "512760.SH",
                ],
            ),
            direct(
                "commodity",
                "Commodity Futures",
                &[
                    "AU00.SHF",
                    "AG00.SHF",
                    "CU00.SHF",
                    "AL00.SHF",
                    "ZN00.SHF",
                    "RB00.SHF",
                    "SC00.INE",
                    "TA00.CZC",
                ],
            ),
            direct(
                "global_index",
                "Global Indices",
                &[
                    "SPX.GI",
                    "IXIC.GI",
                    "DJI.GI",
                    "VIX.GI",
                    "HSI.HI",
                    "N225.GI",
                    "KS11.GI",
                    "GDAXI.GI",
                    "FTSE.GI",
                ],
            ),
        ])
    }
}

impl<'a> IntoIterator for &'a AssetUniverse {
    type Item = &'a UniverseEntry;
    type IntoIter = std::slice::Iter<'a, UniverseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_six_ordered_categories() {
        let universe = AssetUniverse::builtin();
        let keys: Vec<&str> = universe.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "sw3_industry",
                "ashare_index",
                "china_bond",
                "etf",
                "commodity",
                "global_index"
            ]
        );
    }

    #[test]
    fn test_builtin_single_sector_category() {
        let universe = AssetUniverse::builtin();
        let sectors: Vec<&UniverseEntry> = universe
            .iter()
            .filter(|e| matches!(e.resolution, Resolution::Sector { .. }))
            .collect();
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].key, "sw3_industry");
    }

    #[test]
    fn test_resolution_toml_tagged() {
        let toml_src = r#"
            [[category]]
            key = "etf"
            display_name = "Major ETFs"
            mode = "direct"
            codes = ["510300.SH", "510500.SH"]

            [[category]]
            key = "sw3_industry"
            display_name = "SW Level-3 Industries"
            mode = "sector"
            sector_id = "a39901011i000000"
        "#;

        #[derive(Deserialize)]
        struct Doc {
            category: Vec<UniverseEntry>,
        }

        let doc: Doc = toml::from_str(toml_src).unwrap();
        assert_eq!(doc.category.len(), 2);
        assert_eq!(
            doc.category[0].resolution,
            Resolution::Direct {
                codes: vec!["510300.SH".to_string(), "510500.SH".to_string()]
            }
        );
        assert!(matches!(
            doc.category[1].resolution,
            Resolution::Sector { ref sector_id } if sector_id == "a39901011i000000"
        ));
    }

    #[test]
    fn test_universe_json_round_trip() {
        let universe = AssetUniverse::builtin();
        let json = serde_json::to_string(&universe).unwrap();
        let back: AssetUniverse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, universe);
    }
}
