use chrono::NaiveDate;
use ergo_core::summary::Summary;
use ergo_core::{select_video, Dashboard, SampleParams, SampleTable, VideoCatalog};

fn thirty_days() -> SampleTable {
    let end = NaiveDate::from_ymd_opt(2025, 1, 30).expect("date");
    SampleTable::generate_seeded(SampleParams::new(30, end).expect("params"), Some(2025))
}

#[test]
fn initial_dashboard_shows_first_video_and_table_figures() {
    let table = thirty_days();
    let catalog = VideoCatalog::sample().expect("catalog");
    assert_eq!(catalog.len(), 3);

    let dash = Dashboard::compose(&table, &catalog);
    assert_eq!(dash.selected_video.index, Some(0));
    assert_eq!(dash.selected_video.name, catalog.entries()[0].name);
    assert_eq!(dash.video_options.len(), 3);

    assert_eq!(dash.figures.score_trend.points.len(), table.len());
    assert_eq!(dash.figures.incidents.bars.len(), table.len());
    assert_eq!(
        dash.figures.activity_gauge.value,
        table.latest().expect("row").activity_level
    );

    let summary = Summary::from_table(&table);
    assert_eq!(dash.cards[0].value, format!("{:.1}", summary.mean_score));
    assert_eq!(dash.cards[1].value, summary.total_incidents.to_string());
    assert_eq!(dash.cards[2].value, format!("{:.1}%", summary.mean_activity));
}

#[test]
fn selecting_second_video_reads_from_the_catalog() {
    let table = thirty_days();
    let catalog = VideoCatalog::sample().expect("catalog");
    let initial = Dashboard::compose(&table, &catalog);

    let panel = select_video(&catalog, 1);
    let second = &catalog.entries()[1];
    assert_eq!(panel.index, Some(1));
    assert_eq!(panel.name, second.name);
    assert_eq!(panel.url, second.url);
    assert_eq!(panel.description, second.description);
    assert!(!panel.fallback);

    assert_eq!(Dashboard::compose(&table, &catalog), initial);
}

#[test]
fn unknown_selection_falls_back_to_first_video() {
    let catalog = VideoCatalog::sample().expect("catalog");
    let panel = select_video(&catalog, 42);
    assert!(panel.fallback);
    assert_eq!(panel.index, Some(0));
    assert_eq!(panel.name, catalog.entries()[0].name);
}

#[test]
fn dashboard_serializes_for_the_browser() {
    let dash = Dashboard::compose(&thirty_days(), &VideoCatalog::sample().expect("catalog"));
    let json = serde_json::to_value(&dash).expect("serialize");
    assert_eq!(json["header"]["title"], "Ergo-dash Dashboard");
    assert_eq!(json["figures"]["score_trend"]["points"][0]["date"], "2025-01-01");
    assert_eq!(json["selected_video"]["index"], 0);
}
