use crate::figures::Figures;
use crate::sample::SampleTable;
use crate::summary::{summary_cards, Summary, SummaryCard};
use crate::videos::{select_video, video_options, VideoCatalog, VideoOption, VideoPanel};
use serde::{Deserialize, Serialize};

pub const TITLE: &str = "Ergo-dash Dashboard";
pub const SUBTITLE: &str = "Ergonomic Assessment and Video Analysis Dashboard";
pub const FOOTER: &str = "Ergo-dash © 2025 - Ergonomic Assessment Dashboard";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub date_range: String,
    pub total_records: usize,
    pub best_score: String,
    pub best_score_date: String,
    pub lowest_incidents: String,
    pub lowest_incidents_date: String,
}

impl DataSummary {
    fn from_summary(summary: &Summary) -> Self {
        let fmt_date = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();
        Self {
            date_range: summary
                .date_range
                .map(|(a, b)| format!("{} to {}", fmt_date(a), fmt_date(b)))
                .unwrap_or_else(|| "n/a".into()),
            total_records: summary.record_count,
            best_score: summary
                .best_score
                .as_ref()
                .map(|b| format!("{:.1}", b.value))
                .unwrap_or_else(|| "n/a".into()),
            best_score_date: summary
                .best_score
                .as_ref()
                .map(|b| fmt_date(b.date))
                .unwrap_or_default(),
            lowest_incidents: summary
                .lowest_incidents
                .as_ref()
                .map(|l| l.value.to_string())
                .unwrap_or_else(|| "n/a".into()),
            lowest_incidents_date: summary
                .lowest_incidents
                .as_ref()
                .map(|l| fmt_date(l.date))
                .unwrap_or_default(),
        }
    }
}

/// Everything the page renders. Built once at startup and shared read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub header: Header,
    pub video_options: Vec<VideoOption>,
    pub selected_video: VideoPanel,
    pub cards: Vec<SummaryCard>,
    pub figures: Figures,
    pub data_summary: DataSummary,
    pub footer: String,
}

impl Dashboard {
    pub fn compose(table: &SampleTable, catalog: &VideoCatalog) -> Self {
        let summary = Summary::from_table(table);
        Self {
            header: Header {
                title: TITLE.into(),
                subtitle: SUBTITLE.into(),
            },
            video_options: video_options(catalog),
            selected_video: select_video(catalog, 0),
            cards: summary_cards(&summary),
            figures: Figures::from_table(table),
            data_summary: DataSummary::from_summary(&summary),
            footer: FOOTER.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleRow;
    use chrono::NaiveDate;

    #[test]
    fn data_summary_formats_dates() {
        let rows = (1..=3)
            .map(|d| SampleRow {
                date: NaiveDate::from_ymd_opt(2025, 1, d).expect("date"),
                ergonomic_score: 60.0 + d as f64,
                posture_incidents: 5 - d,
                activity_level: 50.0,
            })
            .collect();
        let dash = Dashboard::compose(&SampleTable::from_rows(rows), &VideoCatalog::sample().expect("catalog"));
        let ds = &dash.data_summary;
        assert_eq!(ds.date_range, "2025-01-01 to 2025-01-03");
        assert_eq!(ds.total_records, 3);
        assert_eq!(ds.best_score, "63.0");
        assert_eq!(ds.best_score_date, "2025-01-03");
        assert_eq!(ds.lowest_incidents, "2");
        assert_eq!(ds.lowest_incidents_date, "2025-01-03");
    }

    #[test]
    fn empty_table_composes_placeholders() {
        let dash = Dashboard::compose(&SampleTable::from_rows(Vec::new()), &VideoCatalog::sample().expect("catalog"));
        assert_eq!(dash.data_summary.date_range, "n/a");
        assert_eq!(dash.cards[1].value, "0");
    }
}
