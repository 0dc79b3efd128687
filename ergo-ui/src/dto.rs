use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardDto {
    pub header: HeaderDto,
    pub video_options: Vec<VideoOptionDto>,
    pub selected_video: VideoPanelDto,
    pub cards: Vec<SummaryCardDto>,
    pub figures: FiguresDto,
    pub data_summary: DataSummaryDto,
    pub footer: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeaderDto {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoOptionDto {
    pub index: usize,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPanelDto {
    pub index: Option<usize>,
    pub name: String,
    pub url: String,
    pub description: String,
    pub available: bool,
    pub fallback: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryCardDto {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub tone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataSummaryDto {
    pub date_range: String,
    pub total_records: usize,
    pub best_score: String,
    pub best_score_date: String,
    pub lowest_incidents: String,
    pub lowest_incidents_date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FiguresDto {
    pub score_trend: LineFigureDto,
    pub incidents: BarFigureDto,
    pub activity_gauge: GaugeFigureDto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointDto {
    pub date: String,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AxesDto {
    pub x_label: String,
    pub y_label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineFigureDto {
    pub title: String,
    pub color: String,
    pub axes: AxesDto,
    pub points: Vec<PointDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarFigureDto {
    pub title: String,
    pub color: String,
    pub axes: AxesDto,
    pub bars: Vec<PointDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GaugeStepDto {
    pub from: f64,
    pub to: f64,
    pub color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GaugeFigureDto {
    pub title: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub delta_reference: f64,
    pub delta: f64,
    pub bar_color: String,
    pub steps: Vec<GaugeStepDto>,
    pub threshold: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_panel_shape() {
        let raw = r#"{"index":1,"name":"n","url":"/videos/a.mp4","description":"d","available":false,"fallback":false}"#;
        let panel: VideoPanelDto = serde_json::from_str(raw).expect("decode");
        assert_eq!(panel.index, Some(1));
        assert!(!panel.available);
    }

    #[test]
    fn card_tone_arrives_as_variant_name() {
        let raw = r#"{"title":"Total Incidents","value":"12","caption":"Last 30 days","tone":"Danger"}"#;
        let card: SummaryCardDto = serde_json::from_str(raw).expect("decode");
        assert_eq!(card.tone, "Danger");
    }
}
