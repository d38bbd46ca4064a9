use log::error;
use shared::WinsOverTimeDto;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::dashboard::fetch_wins_over_time;
use crate::components::chart::{ChartData, ChartRenderer, ChartSeries, XyPoint};
use crate::components::fetch_state::FetchState;

#[derive(Properties, PartialEq)]
pub struct WinsOverTimeProps {
    pub base_url: AttrValue,
}

/// Groups the flat point list into one series per driver.
///
/// Series order is the order in which driver names first appear in the
/// input; points within a series keep their input order. The backend sends
/// points sorted by year, so no client-side re-sort happens here.
pub fn group_by_driver(points: &[WinsOverTimeDto]) -> Vec<ChartSeries> {
    let mut series: Vec<ChartSeries> = Vec::new();
    let mut index_by_driver: HashMap<String, usize> = HashMap::new();

    for point in points {
        let idx = match index_by_driver.get(&point.driver_name) {
            Some(&idx) => idx,
            None => {
                index_by_driver.insert(point.driver_name.clone(), series.len());
                series.push(ChartSeries {
                    name: point.driver_name.clone(),
                    points: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[idx].points.push(XyPoint {
            x: point.year as f64,
            y: point.wins as f64,
        });
    }

    series
}

/// Builds the multi-line chart payload from the grouped series.
pub fn wins_over_time_chart(points: &[WinsOverTimeDto]) -> ChartData {
    ChartData::MultiLine {
        title: "Driver Wins Over Time".to_string(),
        x_axis: "Year".to_string(),
        y_axis: "Number of Wins".to_string(),
        series: group_by_driver(points),
    }
}

/// Per-driver win counts over the years, one line-with-markers series per
/// driver. Renders nothing until data arrives or when the input is empty.
#[function_component(WinsOverTimeWidget)]
pub fn wins_over_time_widget(props: &WinsOverTimeProps) -> Html {
    let wins = use_state(|| FetchState::<Vec<WinsOverTimeDto>>::NotLoaded);

    {
        let wins = wins.clone();
        let base_url = props.base_url.clone();

        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let guard = cancelled.clone();

            spawn_local(async move {
                let result = fetch_wins_over_time(&base_url).await;
                if guard.get() {
                    return;
                }
                match result {
                    Ok(points) => wins.set(FetchState::Loaded(points)),
                    Err(e) => {
                        error!("Failed to fetch wins over time: {}", e);
                        wins.set(FetchState::Failed(e));
                    }
                }
            });

            move || cancelled.set(true)
        });
    }

    match wins.loaded() {
        Some(points) if !points.is_empty() => html! {
            <ChartRenderer
                chart={wins_over_time_chart(points)}
                chart_id={"wins-over-time"}
                width={Some(800)}
                height={Some(500)}
            />
        },
        _ => html! {},
    }
}
