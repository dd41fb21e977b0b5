use std::collections::{BTreeMap, HashSet};

use crate::models::{CaseRecord, Category, Dataset, RegionTotal, YearTotal};

/// Case count summed over every row of the table.
pub fn grand_total(dataset: &Dataset) -> u64 {
    dataset.records.iter().map(|r| r.cases).sum()
}

pub fn distinct_regions(dataset: &Dataset) -> usize {
    dataset
        .records
        .iter()
        .map(|r| r.region.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Numeric maximum over the year column; `None` only for an empty table.
pub fn latest_year(dataset: &Dataset) -> Option<i32> {
    dataset.records.iter().map(|r| r.year).max()
}

/// All rows of the given year, in file order.
pub fn latest_year_rows(dataset: &Dataset, year: i32) -> Vec<&CaseRecord> {
    dataset.records.iter().filter(|r| r.year == year).collect()
}

/// The `n` largest rows by case count, descending. The sort is stable, so
/// rows with equal counts keep their file order.
pub fn top_n(rows: &[&CaseRecord], n: usize) -> Vec<RegionTotal> {
    let mut ranked: Vec<&CaseRecord> = rows.to_vec();
    ranked.sort_by(|a, b| b.cases.cmp(&a.cases));
    ranked.truncate(n);
    ranked
        .into_iter()
        .map(|r| RegionTotal {
            region: r.region.clone(),
            cases: r.cases,
            category: r.category,
        })
        .collect()
}

/// Grand total per distinct year, ordered by year.
pub fn totals_per_year(dataset: &Dataset) -> Vec<YearTotal> {
    let mut totals: BTreeMap<i32, u64> = BTreeMap::new();
    for record in &dataset.records {
        *totals.entry(record.year).or_insert(0) += record.cases;
    }
    totals
        .into_iter()
        .map(|(year, cases)| YearTotal { year, cases })
        .collect()
}

/// Row count per category label, in label order, omitting absent labels.
pub fn category_distribution(rows: &[&CaseRecord]) -> Vec<(Category, u64)> {
    Category::ALL
        .iter()
        .filter_map(|&cat| {
            let count = rows.iter().filter(|r| r.category == cat).count() as u64;
            (count > 0).then_some((cat, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Thresholds;

    fn record(region: &str, year: i32, cases: u64) -> CaseRecord {
        CaseRecord {
            region: region.into(),
            year,
            cases,
            category: Category::classify(cases, &Thresholds::default()),
        }
    }

    fn sample() -> Dataset {
        Dataset {
            records: vec![
                record("RegionA", 2018, 40_000),
                record("RegionB", 2018, 120_000),
                record("RegionA", 2019, 60_000),
                record("RegionB", 2019, 110_000),
            ],
        }
    }

    #[test]
    fn worked_example_holds() {
        let dataset = sample();
        assert_eq!(latest_year(&dataset), Some(2019));
        assert_eq!(
            totals_per_year(&dataset),
            vec![
                YearTotal { year: 2018, cases: 160_000 },
                YearTotal { year: 2019, cases: 170_000 },
            ]
        );

        let latest = latest_year_rows(&dataset, 2019);
        assert_eq!(
            category_distribution(&latest),
            vec![(Category::Sedang, 1), (Category::Tinggi, 1)]
        );

        let ranked = top_n(&latest, 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].region, "RegionB");
        assert_eq!(ranked[0].cases, 110_000);
        assert_eq!(ranked[0].category, Category::Tinggi);
        assert_eq!(ranked[1].region, "RegionA");
        assert_eq!(ranked[1].category, Category::Sedang);
    }

    #[test]
    fn latest_year_totals_are_consistent() {
        let dataset = sample();
        let year = latest_year(&dataset).unwrap();
        let rows = latest_year_rows(&dataset, year);
        let per_region: u64 = rows.iter().map(|r| r.cases).sum();
        let per_year = totals_per_year(&dataset)
            .into_iter()
            .find(|t| t.year == year)
            .unwrap();
        assert_eq!(per_region, per_year.cases);
    }

    #[test]
    fn top_n_truncates_and_sorts_descending() {
        let records: Vec<CaseRecord> = (0..25)
            .map(|i| record(&format!("R{i}"), 2020, 1_000 * (i as u64 + 1)))
            .collect();
        let dataset = Dataset { records };
        let rows = latest_year_rows(&dataset, 2020);
        let ranked = top_n(&rows, 10);
        assert_eq!(ranked.len(), 10);
        assert!(ranked.windows(2).all(|w| w[0].cases >= w[1].cases));
        assert_eq!(ranked[0].region, "R24");
    }

    #[test]
    fn ties_keep_file_order() {
        let dataset = Dataset {
            records: vec![
                record("First", 2020, 70_000),
                record("Second", 2020, 70_000),
                record("Third", 2020, 90_000),
            ],
        };
        let rows = latest_year_rows(&dataset, 2020);
        let ranked = top_n(&rows, 10);
        assert_eq!(ranked[0].region, "Third");
        assert_eq!(ranked[1].region, "First");
        assert_eq!(ranked[2].region, "Second");
    }

    #[test]
    fn distinct_regions_and_grand_total() {
        let dataset = sample();
        assert_eq!(distinct_regions(&dataset), 2);
        assert_eq!(grand_total(&dataset), 330_000);
    }

    #[test]
    fn empty_dataset_yields_nothing() {
        let dataset = Dataset::default();
        assert_eq!(latest_year(&dataset), None);
        assert_eq!(grand_total(&dataset), 0);
        assert!(totals_per_year(&dataset).is_empty());
    }
}
