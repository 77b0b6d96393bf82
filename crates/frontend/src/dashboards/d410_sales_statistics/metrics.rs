//! Derived figures of the sales statistics dashboard
//!
//! Everything here is a pure function of a snapshot (and the period
//! selection). Absent parts of the snapshot count as zero or empty, so none
//! of these functions can fail.

use contracts::dashboards::d410_sales_statistics::{
    BusinessTotals, ChartPoint, PeriodFigures, StatisticsSnapshot, TopProductEntry,
};
use contracts::enums::ReportPeriod;
use contracts::shared::indicators::{IndicatorChange, IndicatorId, IndicatorStatus, Trend};

use super::state::PeriodSelection;
use super::view_model::{
    ChartDataset, ChartKind, ChartValue, Kpi, PeriodSummary, RankedProduct, ViewModel,
};
use crate::shared::number_format::{format_percent, round_to_tenth, NumberLocale};

/// Shown in place of a value the formatter rejected
pub const VALUE_PLACEHOLDER: &str = "\u{2014}";

pub const TOP_PRODUCTS_EMPTY_MESSAGE: &str = "Hozircha sotuvlar ma'lumoti yo'q";

/// Changes within this band (in percent) are shown as flat
const TREND_DEAD_BAND: f64 = 0.5;

/// Profit as a percentage of revenue, rounded to one decimal.
///
/// Zero revenue yields exactly `0` instead of NaN or infinity.
pub fn profit_margin(revenue: f64, profit: f64) -> f64 {
    if revenue == 0.0 {
        return 0.0;
    }
    round_to_tenth(profit / revenue * 100.0)
}

/// Relative change of `current` against `previous`, `None` without a base
pub fn change_between(current: f64, previous: f64) -> Option<IndicatorChange> {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }

    let percent = round_to_tenth((current - previous) / previous.abs() * 100.0);
    let trend = if percent > TREND_DEAD_BAND {
        Trend::Up
    } else if percent < -TREND_DEAD_BAND {
        Trend::Down
    } else {
        Trend::Flat
    };

    Some(IndicatorChange { percent, trend })
}

/// Today's cards: revenue, profit, sales count and profit margin
pub fn build_main_kpis(
    today: &PeriodFigures,
    previous: Option<&PeriodFigures>,
    locale: &NumberLocale,
) -> Vec<Kpi> {
    let margin = profit_margin(today.revenue, today.profit);
    let previous_margin = previous.map(|p| profit_margin(p.revenue, p.profit));

    vec![
        Kpi {
            id: IndicatorId::new("revenue_today"),
            label: "Bugungi daromad",
            icon: "revenue",
            value: display_currency(locale, today.revenue),
            status: IndicatorStatus::Neutral,
            change: previous.and_then(|p| change_between(today.revenue, p.revenue)),
        },
        Kpi {
            id: IndicatorId::new("profit_today"),
            label: "Bugungi foyda",
            icon: "profit",
            value: display_currency(locale, today.profit),
            status: status_by_sign(today.profit),
            change: previous.and_then(|p| change_between(today.profit, p.profit)),
        },
        Kpi {
            id: IndicatorId::new("sales_today"),
            label: "Bugungi sotuvlar",
            icon: "sales",
            value: locale.format_integer(today.sales_count),
            status: IndicatorStatus::Neutral,
            change: previous
                .and_then(|p| change_between(today.sales_count as f64, p.sales_count as f64)),
        },
        Kpi {
            id: IndicatorId::new("profit_margin_today"),
            label: "Foyda foizi",
            icon: "margin",
            value: display_percent(margin),
            status: status_by_sign(margin),
            change: previous_margin.and_then(|p| change_between(margin, p)),
        },
    ]
}

/// Business cards: customers, products, low stock and suppliers
pub fn build_business_kpis(
    totals: &BusinessTotals,
    low_stock_count: u64,
    locale: &NumberLocale,
) -> Vec<Kpi> {
    let low_stock_status = if low_stock_count > 0 {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Neutral
    };

    vec![
        count_kpi(
            "customers_total",
            "Jami mijozlar",
            "customers",
            totals.customers,
            locale,
        ),
        count_kpi(
            "products_total",
            "Jami mahsulotlar",
            "products",
            totals.products,
            locale,
        ),
        Kpi {
            status: low_stock_status,
            ..count_kpi(
                "low_stock_products",
                "Kam qolgan mahsulotlar",
                "low_stock",
                low_stock_count,
                locale,
            )
        },
        count_kpi(
            "suppliers_total",
            "Yetkazib beruvchilar",
            "suppliers",
            totals.suppliers,
            locale,
        ),
    ]
}

fn count_kpi(
    id: &str,
    label: &'static str,
    icon: &'static str,
    count: u64,
    locale: &NumberLocale,
) -> Kpi {
    Kpi {
        id: IndicatorId::new(id),
        label,
        icon,
        value: locale.format_integer(count),
        status: IndicatorStatus::Neutral,
        change: None,
    }
}

/// Summary block of one reporting window
pub fn build_period_summary(
    period: ReportPeriod,
    figures: &PeriodFigures,
    locale: &NumberLocale,
) -> PeriodSummary {
    PeriodSummary {
        period,
        title: format!("{} statistika", period.display_name()),
        revenue: display_currency(locale, figures.revenue),
        sales_caption: format!("{} ta sotuv", locale.format_integer(figures.sales_count)),
        profit: display_currency(locale, figures.profit),
        profit_margin: display_percent(profit_margin(figures.revenue, figures.profit)),
    }
}

/// Chart series of the given period, `Monthly` when unset.
///
/// Empty when there is no snapshot yet.
pub fn select_chart_series(
    snapshot: Option<&StatisticsSnapshot>,
    period: Option<ReportPeriod>,
) -> &[ChartPoint] {
    let period = period.unwrap_or_default();
    snapshot
        .map(|s| s.charts.series(period))
        .unwrap_or(&[])
}

/// Revenue and profit datasets of the selected period
pub fn build_chart_datasets(
    snapshot: Option<&StatisticsSnapshot>,
    period: ReportPeriod,
) -> Vec<ChartDataset> {
    let series = select_chart_series(snapshot, Some(period));
    let label = period.display_name();

    let project = |kind: ChartKind, title: String| ChartDataset {
        kind,
        title,
        points: series
            .iter()
            .map(|point| ChartValue {
                label: point.label.clone(),
                value: match kind {
                    ChartKind::Revenue => point.revenue,
                    ChartKind::Profit => point.profit,
                },
            })
            .collect(),
    };

    vec![
        project(ChartKind::Revenue, format!("{} sotuvlar", label)),
        project(ChartKind::Profit, format!("{} foyda", label)),
    ]
}

/// Best sellers with a 1-based rank taken from the position in `entries`.
///
/// The producer already ranked the list; it is never re-sorted here.
pub fn ranked_top_products(
    entries: &[TopProductEntry],
    locale: &NumberLocale,
) -> Vec<RankedProduct> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| RankedProduct {
            rank: index + 1,
            name: entry.name.clone(),
            units_sold: entry.total_sold,
            revenue: display_currency(locale, entry.total_revenue),
            profit: display_currency(locale, entry.total_profit.unwrap_or(0.0)),
        })
        .collect()
}

/// Whole dashboard for `snapshot`; no snapshot gives the zeroed model
pub fn build_view_model(
    snapshot: Option<&StatisticsSnapshot>,
    selection: &PeriodSelection,
    locale: &NumberLocale,
) -> ViewModel {
    let empty = StatisticsSnapshot::default();
    let stats = snapshot.unwrap_or(&empty);

    let top_products = ranked_top_products(&stats.top_products, locale);
    let top_products_empty_message = if top_products.is_empty() {
        Some(TOP_PRODUCTS_EMPTY_MESSAGE)
    } else {
        None
    };

    ViewModel {
        period: selection.period,
        main_kpis: build_main_kpis(&stats.today, stats.yesterday.as_ref(), locale),
        business_kpis: build_business_kpis(&stats.totals, stats.low_stock_products, locale),
        period_summaries: vec![
            build_period_summary(ReportPeriod::Weekly, &stats.week, locale),
            build_period_summary(ReportPeriod::Monthly, &stats.month, locale),
            build_period_summary(ReportPeriod::Yearly, &stats.year, locale),
        ],
        charts: build_chart_datasets(snapshot, selection.period),
        top_products,
        top_products_empty_message,
    }
}

fn status_by_sign(value: f64) -> IndicatorStatus {
    if value > 0.0 {
        IndicatorStatus::Good
    } else if value < 0.0 {
        IndicatorStatus::Bad
    } else {
        IndicatorStatus::Neutral
    }
}

fn display_currency(locale: &NumberLocale, amount: f64) -> String {
    locale.format_currency(amount).unwrap_or_else(|e| {
        log::error!("Dashboard format error: {}", e);
        VALUE_PLACEHOLDER.to_string()
    })
}

fn display_percent(value: f64) -> String {
    format_percent(value).unwrap_or_else(|e| {
        log::error!("Dashboard format error: {}", e);
        VALUE_PLACEHOLDER.to_string()
    })
}
