use log::error;
use shared::DriverRankingDto;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::dashboard::fetch_top_drivers;
use crate::components::fetch_state::FetchState;

#[derive(Properties, PartialEq)]
pub struct TopDriversProps {
    pub base_url: AttrValue,
}

/// Ranked driver table. Fetches once on mount and renders the rows exactly
/// as the backend ordered them; nothing is shown until the fetch resolves.
#[function_component(TopDriversWidget)]
pub fn top_drivers_widget(props: &TopDriversProps) -> Html {
    let drivers = use_state(|| FetchState::<Vec<DriverRankingDto>>::NotLoaded);

    {
        let drivers = drivers.clone();
        let base_url = props.base_url.clone();

        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let guard = cancelled.clone();

            spawn_local(async move {
                let result = fetch_top_drivers(&base_url).await;
                if guard.get() {
                    // Widget unmounted while the request was in flight
                    return;
                }
                match result {
                    Ok(rows) => drivers.set(FetchState::Loaded(rows)),
                    Err(e) => {
                        error!("Failed to fetch top drivers: {}", e);
                        drivers.set(FetchState::Failed(e));
                    }
                }
            });

            move || cancelled.set(true)
        });
    }

    match drivers.loaded() {
        Some(rows) => html! {
            <div class="overflow-x-auto rounded-lg border border-gray-200">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Id"}</th>
                            <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Full name"}</th>
                            <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Nationality"}</th>
                            <th class="px-3 py-2 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Number of wins"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {rows.iter().map(|driver| html! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-3 py-2 text-sm text-gray-900">{driver.id}</td>
                                <td class="px-3 py-2 text-sm font-medium text-gray-900">{driver.full_name.clone()}</td>
                                <td class="px-3 py-2 text-sm text-gray-900">{driver.nationality.clone()}</td>
                                <td class="px-3 py-2 text-sm text-right text-gray-900">{driver.number_of_wins}</td>
                            </tr>
                        }).collect::<Html>()}
                    </tbody>
                </table>
            </div>
        },
        None => html! {},
    }
}
