use crate::sample::SampleTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatedValue<T> {
    pub value: T,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean_score: f64,
    pub total_incidents: u64,
    pub mean_activity: f64,
    pub record_count: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub best_score: Option<DatedValue<f64>>,
    pub lowest_incidents: Option<DatedValue<u32>>,
}

impl Summary {
    pub fn from_table(table: &SampleTable) -> Self {
        let rows = table.rows();
        if rows.is_empty() {
            return Self::default();
        }
        let n = rows.len() as f64;

        let mut best: Option<DatedValue<f64>> = None;
        let mut lowest: Option<DatedValue<u32>> = None;
        for row in rows {
            if best.as_ref().map_or(true, |b| row.ergonomic_score > b.value) {
                best = Some(DatedValue {
                    value: row.ergonomic_score,
                    date: row.date,
                });
            }
            if lowest.as_ref().map_or(true, |l| row.posture_incidents < l.value) {
                lowest = Some(DatedValue {
                    value: row.posture_incidents,
                    date: row.date,
                });
            }
        }

        Self {
            mean_score: rows.iter().map(|r| r.ergonomic_score).sum::<f64>() / n,
            total_incidents: rows.iter().map(|r| u64::from(r.posture_incidents)).sum(),
            mean_activity: rows.iter().map(|r| r.activity_level).sum::<f64>() / n,
            record_count: rows.len(),
            date_range: rows.first().zip(rows.last()).map(|(a, b)| (a.date, b.date)),
            best_score: best,
            lowest_incidents: lowest,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardTone {
    Primary,
    Danger,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub tone: CardTone,
}

pub fn summary_cards(summary: &Summary) -> Vec<SummaryCard> {
    let caption = match summary.record_count {
        1 => "Last 1 day".to_string(),
        n => format!("Last {n} days"),
    };
    vec![
        SummaryCard {
            title: "Avg Ergonomic Score".into(),
            value: format!("{:.1}", summary.mean_score),
            caption: caption.clone(),
            tone: CardTone::Primary,
        },
        SummaryCard {
            title: "Total Incidents".into(),
            value: summary.total_incidents.to_string(),
            caption: caption.clone(),
            tone: CardTone::Danger,
        },
        SummaryCard {
            title: "Avg Activity".into(),
            value: format!("{:.1}%", summary.mean_activity),
            caption,
            tone: CardTone::Success,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleRow;
    use chrono::Datelike;

    fn row(day: u32, score: f64, incidents: u32, activity: f64) -> SampleRow {
        SampleRow {
            date: NaiveDate::from_ymd_opt(2025, 1, day).expect("date"),
            ergonomic_score: score,
            posture_incidents: incidents,
            activity_level: activity,
        }
    }

    #[test]
    fn aggregates_match_hand_computed_values() {
        let table = SampleTable::from_rows(vec![
            row(1, 70.0, 4, 50.0),
            row(2, 80.0, 2, 60.0),
            row(3, 90.0, 6, 70.0),
        ]);
        let s = Summary::from_table(&table);
        assert!((s.mean_score - 80.0).abs() < 1e-9);
        assert_eq!(s.total_incidents, 12);
        assert!((s.mean_activity - 60.0).abs() < 1e-9);
        assert_eq!(s.record_count, 3);
        assert_eq!(s.best_score.as_ref().map(|b| b.date.to_string()), Some("2025-01-03".into()));
        assert_eq!(s.lowest_incidents.as_ref().map(|l| l.value), Some(2));
    }

    #[test]
    fn ties_keep_earliest_date() {
        let table = SampleTable::from_rows(vec![
            row(1, 88.0, 1, 50.0),
            row(2, 88.0, 1, 50.0),
        ]);
        let s = Summary::from_table(&table);
        assert_eq!(s.best_score.map(|b| b.date.day0()), Some(0));
        assert_eq!(s.lowest_incidents.map(|l| l.date.day0()), Some(0));
    }

    #[test]
    fn empty_table_yields_zeroes() {
        let s = Summary::from_table(&SampleTable::from_rows(Vec::new()));
        assert_eq!(s, Summary::default());
        assert!(s.date_range.is_none());
    }

    #[test]
    fn recomputation_is_identical() {
        let table = SampleTable::generate();
        assert_eq!(Summary::from_table(&table), Summary::from_table(&table));
    }

    #[test]
    fn cards_format_values() {
        let table = SampleTable::from_rows(vec![row(1, 72.24, 3, 64.0)]);
        let cards = summary_cards(&Summary::from_table(&table));
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].value, "72.2");
        assert_eq!(cards[1].value, "3");
        assert_eq!(cards[2].value, "64.0%");
        assert_eq!(cards[2].caption, "Last 1 day");
    }

    #[test]
    fn caption_pluralizes_day_count() {
        let rows = (1..=30).map(|d| row(d, 70.0, 1, 50.0)).collect();
        let cards = summary_cards(&Summary::from_table(&SampleTable::from_rows(rows)));
        assert!(cards.iter().all(|c| c.caption == "Last 30 days"));
    }
}
