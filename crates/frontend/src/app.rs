use crate::dashboards::SalesStatisticsDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesStatisticsDashboard />
    }
}
