#[cfg(test)]
mod tests {
    use crate::api::api_url;
    use crate::config::Config;

    #[test]
    fn api_url_with_empty_base_stays_relative() {
        assert_eq!(
            api_url("", "/dashboard/top_teams_by_wins"),
            "/dashboard/top_teams_by_wins"
        );
    }

    #[test]
    fn api_url_joins_absolute_base() {
        assert_eq!(
            api_url("http://localhost:8000", "/dashboard/wins_over_time"),
            "http://localhost:8000/dashboard/wins_over_time"
        );
        // Trailing slash on the base does not produce a double slash
        assert_eq!(
            api_url("http://localhost:8000/", "/dashboard/wins_over_time"),
            "http://localhost:8000/dashboard/wins_over_time"
        );
    }

    #[test]
    fn top_drivers_url_carries_the_range_hint() {
        let url = format!(
            "{}?range=[0,9]",
            api_url("", "/dashboard/top_drivers_by_wins")
        );
        assert_eq!(url, "/dashboard/top_drivers_by_wins?range=[0,9]");
    }

    #[test]
    fn default_base_url_is_relative() {
        assert_eq!(Config::api_base_url(), "");
    }

    #[test]
    fn unmount_flag_suppresses_late_state_updates() {
        use std::cell::Cell;
        use std::rc::Rc;

        // Mirrors the widget effect: the cleanup closure flips the flag, and
        // a resolution arriving afterwards is discarded.
        let cancelled = Rc::new(Cell::new(false));
        let guard = cancelled.clone();

        let applied = Cell::new(0usize);
        let apply_if_mounted = |rows: usize| {
            if !guard.get() {
                applied.set(rows);
            }
        };

        apply_if_mounted(10);
        assert_eq!(applied.get(), 10);

        cancelled.set(true);
        apply_if_mounted(99);
        assert_eq!(applied.get(), 10);
    }
}
