use serde::Deserialize;

/// One CSV row as it appears on disk. Headers follow the published
/// open-data export, so the Rust-side names are mapped explicitly.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "nama_kabupaten_kota")]
    pub region: String,
    #[serde(rename = "tahun")]
    pub year: i32,
    #[serde(rename = "jumlah_penderita_dm")]
    pub cases: u64,
}

/// Case-count boundaries for deriving a [`Category`].
///
/// Kept as an explicit value rather than literals inside the classifier so
/// config and tests can vary them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Counts at or above this are at least `Sedang`.
    pub medium: u64,
    /// Counts at or above this are `Tinggi`.
    pub high: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            medium: 50_000,
            high: 100_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Rendah,
    Sedang,
    Tinggi,
}

impl Category {
    /// Total function of the case count: every count maps to exactly one
    /// category, boundary values land on the upper tier.
    pub fn classify(cases: u64, thresholds: &Thresholds) -> Self {
        if cases < thresholds.medium {
            Category::Rendah
        } else if cases < thresholds.high {
            Category::Sedang
        } else {
            Category::Tinggi
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Rendah => "Rendah",
            Category::Sedang => "Sedang",
            Category::Tinggi => "Tinggi",
        }
    }

    /// All labels in fixed display order; pie colors are assigned in this
    /// order.
    pub const ALL: [Category; 3] = [Category::Rendah, Category::Sedang, Category::Tinggi];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct CaseRecord {
    pub region: String,
    pub year: i32,
    pub cases: u64,
    pub category: Category,
}

/// The full in-memory table, loaded once at startup and read-only
/// afterwards. Row order is file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<CaseRecord>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// One ranked row for the latest year (bar chart and summary table).
#[derive(Debug, Clone)]
pub struct RegionTotal {
    pub region: String,
    pub cases: u64,
    pub category: Category,
}

/// One point of the per-year trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTotal {
    pub year: i32,
    pub cases: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries() {
        let t = Thresholds::default();
        assert_eq!(Category::classify(0, &t), Category::Rendah);
        assert_eq!(Category::classify(49_999, &t), Category::Rendah);
        assert_eq!(Category::classify(50_000, &t), Category::Sedang);
        assert_eq!(Category::classify(99_999, &t), Category::Sedang);
        assert_eq!(Category::classify(100_000, &t), Category::Tinggi);
        assert_eq!(Category::classify(u64::MAX, &t), Category::Tinggi);
    }

    #[test]
    fn category_respects_custom_thresholds() {
        let t = Thresholds { medium: 10, high: 20 };
        assert_eq!(Category::classify(9, &t), Category::Rendah);
        assert_eq!(Category::classify(10, &t), Category::Sedang);
        assert_eq!(Category::classify(19, &t), Category::Sedang);
        assert_eq!(Category::classify(20, &t), Category::Tinggi);
    }

    #[test]
    fn labels_match_display() {
        for cat in Category::ALL {
            assert_eq!(cat.label(), cat.to_string());
        }
    }
}
