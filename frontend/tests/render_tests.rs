#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use frontend::components::chart::{chart_html, ChartData, DataPoint};

#[wasm_bindgen_test]
fn bar_chart_markup_generates_in_browser() {
    let chart = ChartData::Bar {
        title: "Top Constructors by Wins".to_string(),
        points: vec![DataPoint {
            label: "Ferrari".to_string(),
            value: 243.0,
        }],
    };

    let markup = chart_html(&chart, 800, 500).unwrap();
    assert!(markup.contains("<svg"));
    assert!(markup.contains("Ferrari"));
}

#[wasm_bindgen_test]
fn empty_chart_renders_nothing_in_browser() {
    let chart = ChartData::Bar {
        title: "Top Constructors by Wins".to_string(),
        points: vec![],
    };
    assert!(chart_html(&chart, 800, 500).is_none());
}
