use log::error;
use shared::ConstructorWinsDto;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::dashboard::fetch_top_constructors;
use crate::components::chart::{ChartData, ChartRenderer, DataPoint};
use crate::components::fetch_state::FetchState;

#[derive(Properties, PartialEq)]
pub struct TopConstructorsProps {
    pub base_url: AttrValue,
}

/// Builds the bar chart payload: x = constructor names in response order,
/// y = win counts, one uniformly colored series.
pub fn constructor_bar_chart(rows: &[ConstructorWinsDto]) -> ChartData {
    ChartData::Bar {
        title: "Top Constructors by Wins".to_string(),
        points: rows
            .iter()
            .map(|row| DataPoint {
                label: row.constructor_name.clone(),
                value: row.number_of_wins as f64,
            })
            .collect(),
    }
}

/// Constructor win totals as a vertical bar chart. Ordering and truncation
/// are entirely the backend's responsibility.
#[function_component(TopConstructorsWidget)]
pub fn top_constructors_widget(props: &TopConstructorsProps) -> Html {
    let constructors = use_state(|| FetchState::<Vec<ConstructorWinsDto>>::NotLoaded);

    {
        let constructors = constructors.clone();
        let base_url = props.base_url.clone();

        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let guard = cancelled.clone();

            spawn_local(async move {
                let result = fetch_top_constructors(&base_url).await;
                if guard.get() {
                    return;
                }
                match result {
                    Ok(rows) => constructors.set(FetchState::Loaded(rows)),
                    Err(e) => {
                        error!("Failed to fetch constructor wins: {}", e);
                        constructors.set(FetchState::Failed(e));
                    }
                }
            });

            move || cancelled.set(true)
        });
    }

    match constructors.loaded() {
        Some(rows) if !rows.is_empty() => html! {
            <ChartRenderer
                chart={constructor_bar_chart(rows)}
                chart_id={"top-constructors"}
                width={Some(800)}
                height={Some(500)}
            />
        },
        _ => html! {},
    }
}
