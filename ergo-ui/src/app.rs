use crate::bridge;
use crate::charts::{BarChart, Gauge, LineChart};
use crate::dto::{DashboardDto, DataSummaryDto, SummaryCardDto, VideoOptionDto, VideoPanelDto};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

fn tone_class(tone: &str) -> &'static str {
    match tone {
        "Danger" => "text-danger",
        "Success" => "text-success",
        _ => "text-primary",
    }
}

/// What a finished `/api/videos/:index` fetch does to the page.
#[derive(Debug, PartialEq)]
enum VideoUpdate {
    Show(VideoPanelDto),
    Failed(String),
    /// The user picked another video while this one was in flight.
    Stale,
}

fn video_update(
    selected: usize,
    requested: usize,
    result: Result<VideoPanelDto, String>,
) -> VideoUpdate {
    if selected != requested {
        return VideoUpdate::Stale;
    }
    match result {
        Ok(panel) => VideoUpdate::Show(panel),
        Err(e) => VideoUpdate::Failed(format!("video: {e}")),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let dashboard = create_rw_signal(None::<DashboardDto>);
    let selected = create_rw_signal(0usize);
    let video = create_rw_signal(VideoPanelDto::default());
    let error = create_rw_signal(None::<String>);

    spawn_local(async move {
        match bridge::fetch_dashboard().await {
            Ok(d) => {
                video.set(d.selected_video.clone());
                selected.set(d.selected_video.index.unwrap_or(0));
                dashboard.set(Some(d));
                error.set(None);
            }
            Err(e) => {
                log::error!("failed to load dashboard: {e}");
                error.set(Some(format!("Failed to load dashboard\n{e}")));
            }
        }
    });

    let load_video = move |index: usize| {
        spawn_local(async move {
            let result = bridge::fetch_video(index).await;
            match video_update(selected.get_untracked(), index, result) {
                VideoUpdate::Show(panel) => {
                    if panel.fallback {
                        log::warn!("video {index} unknown, server fell back to entry 0");
                    }
                    video.set(panel);
                    error.set(None);
                }
                VideoUpdate::Failed(message) => error.set(Some(message)),
                VideoUpdate::Stale => log::debug!("dropping stale response for video {index}"),
            }
        });
    };

    view! {
      <div class="container">
        {move || dashboard.get().map(|d| view! {
          <header class="header">
            <h1 class="text-primary">{d.header.title.clone()}</h1>
            <p class="text-muted">{d.header.subtitle.clone()}</p>
          </header>

          <div class="row">
            <VideoLibrary
              options=d.video_options.clone()
              selected=selected
              video=video
              on_select=load_video
            />
            <SummaryCards cards=d.cards.clone() />
          </div>

          <div class="row">
            <section class="panel"><LineChart figure=d.figures.score_trend.clone() /></section>
            <section class="panel"><BarChart figure=d.figures.incidents.clone() /></section>
          </div>

          <div class="row">
            <section class="panel"><Gauge figure=d.figures.activity_gauge.clone() /></section>
            <DataSummaryCard summary=d.data_summary.clone() />
          </div>

          <footer class="footer">
            <hr />
            <p class="text-muted">{d.footer.clone()}</p>
          </footer>
        })}

        <Show
          when=move || dashboard.get().is_none() && error.get().is_none()
          fallback=|| ()
        >
          <div class="loading">"Loading dashboard…"</div>
        </Show>

        <Show
          when=move || error.get().is_some()
          fallback=|| ()
        >
          <pre class="error">{move || error.get().unwrap_or_default()}</pre>
        </Show>
      </div>
    }
}

#[component]
fn VideoLibrary<F>(
    options: Vec<VideoOptionDto>,
    selected: RwSignal<usize>,
    video: RwSignal<VideoPanelDto>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(usize) + Copy + 'static,
{
    view! {
      <section class="panel">
        <h3>"Video Library"</h3>
        <select
          class="video-selector"
          prop:value=move || selected.get().to_string()
          on:change=move |ev| {
            if let Ok(index) = event_target_value(&ev).parse::<usize>() {
              selected.set(index);
              on_select(index);
            }
          }
        >
          {options
            .into_iter()
            .map(|o| view! { <option value=o.index.to_string()>{o.label}</option> })
            .collect_view()}
        </select>

        <div class="text-muted video-description">
          <Show when=move || !video.get().description.is_empty() fallback=|| ()>
            <p><strong>"Description: "</strong>{move || video.get().description}</p>
          </Show>
        </div>

        <Show
          when=move || video.get().available && !video.get().url.is_empty()
          fallback=move || view! {
            <div class="video-placeholder">
              {move || format!("Video \"{}\" is not available", video.get().name)}
            </div>
          }
        >
          <video
            class="video-player"
            controls=true
            src=move || video.get().url
          ></video>
        </Show>
      </section>
    }
}

#[component]
fn SummaryCards(cards: Vec<SummaryCardDto>) -> impl IntoView {
    view! {
      <section class="panel">
        <h3>"Statistics Summary"</h3>
        {cards
          .into_iter()
          .map(|c| view! {
            <div class="card">
              <h5 class="card-title">{c.title}</h5>
              <h2 class=tone_class(&c.tone)>{c.value}</h2>
              <p class="text-muted">{c.caption}</p>
            </div>
          })
          .collect_view()}
      </section>
    }
}

#[component]
fn DataSummaryCard(summary: DataSummaryDto) -> impl IntoView {
    view! {
      <section class="panel card">
        <h5 class="card-title">"Data Summary"</h5>
        <div><strong>"Date Range: "</strong>{summary.date_range}</div>
        <div><strong>"Total Records: "</strong>{summary.total_records}</div>
        <div>
          <strong>"Best Score: "</strong>{summary.best_score}
          <span class="text-muted">{format!(" (on {})", summary.best_score_date)}</span>
        </div>
        <div>
          <strong>"Lowest Incidents: "</strong>{summary.lowest_incidents}
          <span class="text-muted">{format!(" (on {})", summary.lowest_incidents_date)}</span>
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_maps_to_bootstrap_like_classes() {
        assert_eq!(tone_class("Primary"), "text-primary");
        assert_eq!(tone_class("Danger"), "text-danger");
        assert_eq!(tone_class("Success"), "text-success");
        assert_eq!(tone_class("unknown"), "text-primary");
    }

    fn panel(index: usize) -> VideoPanelDto {
        VideoPanelDto {
            index: Some(index),
            name: format!("video {index}"),
            available: true,
            ..VideoPanelDto::default()
        }
    }

    #[test]
    fn out_of_order_response_is_dropped() {
        // user picked 1 then 2; the response for 1 lands last
        assert_eq!(video_update(2, 1, Ok(panel(1))), VideoUpdate::Stale);
        assert_eq!(video_update(2, 1, Err("timeout".into())), VideoUpdate::Stale);
        assert_eq!(video_update(2, 2, Ok(panel(2))), VideoUpdate::Show(panel(2)));
    }

    #[test]
    fn current_failure_is_reported() {
        assert_eq!(
            video_update(1, 1, Err("/api/videos/1 returned 500".into())),
            VideoUpdate::Failed("video: /api/videos/1 returned 500".into())
        );
    }
}
