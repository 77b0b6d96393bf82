use crate::dashboards::d410_sales_statistics::api::HttpStatisticsSource;
use crate::dashboards::d410_sales_statistics::controller::{
    DashboardController, LoadState, Notifier,
};
use crate::dashboards::d410_sales_statistics::view_model::{
    ChartDataset, ChartKind, Kpi, PeriodSummary, RankedProduct, ViewModel,
};
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::{load_config, DashboardConfig};
use contracts::enums::ReportPeriod;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::period_picker::PeriodPicker;

/// Shows load failures in the banner above the dashboard
struct BannerNotifier {
    message: RwSignal<Option<String>>,
}

impl Notifier for BannerNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        self.message.set(Some(format!("{}: {}", title, message)));
    }
}

/// Sales statistics dashboard component
#[component]
pub fn SalesStatisticsDashboard() -> impl IntoView {
    let config = load_config()
        .map(|config| config.dashboard)
        .unwrap_or_else(|e| {
            log::error!("Failed to parse dashboard config: {}", e);
            DashboardConfig::default()
        });

    let error_msg = RwSignal::new(None::<String>);
    // Bumped whenever controller state changes, the controller itself is not reactive
    let revision = RwSignal::new(0_u64);

    let controller = StoredValue::new_local(DashboardController::new(
        HttpStatisticsSource::new(&config.statistics_path),
        BannerNotifier { message: error_msg },
        &config,
    ));

    let refresh = move || revision.update(|r| *r += 1);

    let reload = move || {
        error_msg.set(None);
        let load = controller.with_value(|c| c.load());
        refresh();
        spawn_local(async move {
            load.await;
            refresh();
        });
    };

    // Load on mount
    reload();

    let load_state = move || {
        revision.get();
        controller.with_value(|c| c.state())
    };

    let view_model = Memo::new(move |_| {
        revision.get();
        controller.with_value(|c| c.view_model())
    });

    let on_toggle = Callback::new(move |_: ()| {
        controller.with_value(|c| c.toggle_picker());
        refresh();
    });

    let on_select = Callback::new(move |period: ReportPeriod| {
        controller.with_value(|c| c.select_period(period));
        refresh();
    });

    let picker_label = Signal::derive(move || {
        revision.get();
        controller.with_value(|c| c.period_label())
    });
    let picker_open = Signal::derive(move || {
        revision.get();
        controller.with_value(|c| c.selection().picker_open)
    });
    let picker_options = Signal::derive(move || {
        revision.get();
        controller.with_value(|c| c.period_options())
    });

    view! {
        <div id="d410_sales_statistics--dashboard" data-page-category="dashboard" class="page page--dashboard">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Dashboard"</h1>
                    <p class="page__subtitle">"Biznes ko'rsatkichlari va statistika"</p>
                </div>
                <button
                    class="button button--secondary"
                    on:click=move |_| reload()
                    disabled=move || load_state() == LoadState::Loading
                >
                    "Yangilash"
                </button>
            </div>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error" style="margin-bottom: var(--spacing-md);">
                    {msg}
                </div>
            })}

            {move || {
                if load_state() == LoadState::Loading {
                    // No stale figures next to the loading indicator
                    view! {
                        <div class="d410-loading">
                            <span>"Yuklanmoqda..."</span>
                        </div>
                    }.into_any()
                } else {
                    let vm: ViewModel = view_model.get();
                    view! {
                        <div class="page__content">
                            {kpi_grid(vm.main_kpis)}
                            {kpi_grid(vm.business_kpis)}
                            <div class="period-stats">
                                {vm.period_summaries.into_iter().map(period_card).collect_view()}
                            </div>
                            <div class="charts-section">
                                <div class="charts-header">
                                    <h2 class="charts-title">"Sotuvlar tahlili"</h2>
                                    <PeriodPicker
                                        label=picker_label
                                        open=picker_open
                                        options=picker_options
                                        on_toggle=on_toggle
                                        on_select=on_select
                                    />
                                </div>
                                <div class="charts-grid">
                                    {vm.charts.into_iter().map(|dataset| view! { <ChartPanel dataset=dataset /> }).collect_view()}
                                </div>
                            </div>
                            <TopProducts
                                products=vm.top_products
                                empty_message=vm.top_products_empty_message
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

fn kpi_grid(kpis: Vec<Kpi>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            {kpis.into_iter().map(|kpi| view! {
                <StatCard
                    label=kpi.label.to_string()
                    icon_name=kpi.icon.to_string()
                    value=kpi.value
                    status=kpi.status
                    change=kpi.change
                />
            }).collect_view()}
        </div>
    }
}

fn period_card(summary: PeriodSummary) -> impl IntoView {
    view! {
        <div class="period-card">
            <h2 class="period-title">{summary.title}</h2>
            <div class="period-amount">{summary.revenue}</div>
            <p class="period-sales">{summary.sales_caption}</p>
            <div class="period-profit">"Foyda: " {summary.profit}</div>
            <div class="period-margin">"Foyda foizi: " {summary.profit_margin}</div>
        </div>
    }
}

/// Horizontal bar chart, bars scaled to the largest absolute value
#[component]
fn ChartPanel(dataset: ChartDataset) -> impl IntoView {
    let max = dataset
        .points
        .iter()
        .map(|p| p.value.abs())
        .fold(0.0_f64, f64::max);
    let bar_class = match dataset.kind {
        ChartKind::Revenue => "chart__bar chart__bar--revenue",
        ChartKind::Profit => "chart__bar chart__bar--profit",
    };

    let body = if dataset.points.is_empty() {
        view! { <div class="chart__empty">"Ma'lumot yo'q"</div> }.into_any()
    } else {
        dataset
            .points
            .into_iter()
            .map(|point| {
                let width = if max > 0.0 {
                    point.value.abs() / max * 100.0
                } else {
                    0.0
                };
                let class = if point.value < 0.0 {
                    format!("{} chart__bar--negative", bar_class)
                } else {
                    bar_class.to_string()
                };
                view! {
                    <div class="chart__row" title=point.value.to_string()>
                        <span class="chart__label">{point.label}</span>
                        <div class=class style=format!("width: {:.1}%;", width)></div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="chart">
            <h3 class="chart__title">{dataset.title}</h3>
            {body}
        </div>
    }
}

#[component]
fn TopProducts(
    products: Vec<RankedProduct>,
    empty_message: Option<&'static str>,
) -> impl IntoView {
    let body = match empty_message {
        Some(message) => view! {
            <div class="top-products__empty">
                <p>{message}</p>
            </div>
        }
        .into_any(),
        None => products
            .into_iter()
            .map(|product| {
                view! {
                    <div class="product-item">
                        <div class="product-info">
                            <div class="product-rank">{product.rank}</div>
                            <div class="product-details">
                                <h4>{product.name}</h4>
                                <p>"Sotilgan: " {product.units_sold} " ta"</p>
                            </div>
                        </div>
                        <div class="product-stats">
                            <div class="product-revenue">{product.revenue}</div>
                            <div class="product-profit">"Foyda: " {product.profit}</div>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="top-products">
            <h2 class="top-products-title">"Eng ko'p sotilgan mahsulotlar"</h2>
            {body}
        </div>
    }
}
