pub mod chart;
pub mod dashboard {
    pub mod top_constructors;
    pub mod top_drivers;
    pub mod wins_over_time;
}
pub mod fetch_state;
