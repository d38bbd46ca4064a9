use yew::prelude::*;

use crate::components::dashboard::top_constructors::TopConstructorsWidget;
use crate::components::dashboard::top_drivers::TopDriversWidget;
use crate::components::dashboard::wins_over_time::WinsOverTimeWidget;
use crate::config::Config;

/// Static composition of the three dashboard widgets. Each widget fetches
/// and renders independently; the page carries no data flow of its own.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let base_url = Config::api_base_url();

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="bg-white rounded-xl shadow-mobile-soft p-6 border border-gray-100">
                    <h1 class="text-3xl font-bold text-gray-900 mb-6">{"F1 Dashboard"}</h1>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <h2 class="text-xl font-semibold text-gray-900 mb-2 text-left">{"Top Drivers by Wins"}</h2>
                            <TopDriversWidget base_url={base_url.clone()} />
                        </div>
                        <div>
                            <TopConstructorsWidget base_url={base_url.clone()} />
                        </div>
                        <div class="sm:col-span-2">
                            <WinsOverTimeWidget base_url={base_url} />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
