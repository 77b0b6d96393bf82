use crate::dashboards::d410_sales_statistics::state::PeriodOption;
use crate::shared::icons::icon;
use contracts::enums::ReportPeriod;
use leptos::prelude::*;

/// Dropdown button switching the chart period
#[component]
pub fn PeriodPicker(
    /// Label of the active period
    #[prop(into)]
    label: Signal<&'static str>,
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    options: Signal<Vec<PeriodOption>>,
    on_toggle: Callback<()>,
    on_select: Callback<ReportPeriod>,
) -> impl IntoView {
    view! {
        <div class="time-period-selector">
            <button class="period-dropdown-btn" on:click=move |_| on_toggle.run(())>
                {icon("calendar")}
                <span>{move || label.get()}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <div class="period-dropdown">
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let class = if option.active {
                                    "period-option active"
                                } else {
                                    "period-option"
                                };
                                view! {
                                    <button class=class on:click=move |_| on_select.run(option.period)>
                                        {option.label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
