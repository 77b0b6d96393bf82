use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorChange, IndicatorStatus, Trend};
use leptos::prelude::*;

/// Text of a change badge, e.g. `↑12.5%`
pub fn change_text(change: &IndicatorChange) -> String {
    let arrow = match change.trend {
        Trend::Up => "\u{2191}",
        Trend::Down => "\u{2193}",
        Trend::Flat => "",
    };
    format!("{}{:.1}%", arrow, change.percent.abs())
}

#[component]
pub fn StatCard(
    /// Label displayed below the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Already formatted value
    value: String,
    /// Visual status
    status: IndicatorStatus,
    /// Change relative to the previous period, hidden when `None`
    change: Option<IndicatorChange>,
) -> impl IntoView {
    let status_class = match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let change_view = change.map(|change| {
        let cls = match change.trend {
            Trend::Up => "stat-card__change stat-card__change--up",
            Trend::Down => "stat-card__change stat-card__change--down",
            Trend::Flat => "stat-card__change stat-card__change--flat",
        };
        view! { <span class=cls>{change_text(&change)}</span> }
    });

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">
                    {value}
                    {change_view}
                </div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_text() {
        let up = IndicatorChange {
            percent: 12.5,
            trend: Trend::Up,
        };
        assert_eq!(change_text(&up), "\u{2191}12.5%");

        let down = IndicatorChange {
            percent: -2.1,
            trend: Trend::Down,
        };
        assert_eq!(change_text(&down), "\u{2193}2.1%");

        let flat = IndicatorChange {
            percent: 0.2,
            trend: Trend::Flat,
        };
        assert_eq!(change_text(&flat), "0.2%");
    }
}
