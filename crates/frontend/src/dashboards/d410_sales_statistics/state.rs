use contracts::enums::ReportPeriod;

/// Active reporting window plus the open/closed state of its picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodSelection {
    pub period: ReportPeriod,
    pub picker_open: bool,
}

/// One entry of the period picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodOption {
    pub period: ReportPeriod,
    pub label: &'static str,
    pub active: bool,
}

/// Period picker state machine, one per dashboard session.
///
/// Starts at `(Monthly, closed)`. Selecting a period always closes the
/// picker; toggling never changes the period.
#[derive(Debug, Clone, Default)]
pub struct PeriodSelector {
    selection: PeriodSelection,
}

impl PeriodSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> PeriodSelection {
        self.selection
    }

    pub fn toggle_picker(&mut self) {
        self.selection.picker_open = !self.selection.picker_open;
    }

    pub fn select_period(&mut self, period: ReportPeriod) {
        self.selection = PeriodSelection {
            period,
            picker_open: false,
        };
    }

    /// Label of the active period, shown on the picker button
    pub fn label(&self) -> &'static str {
        self.selection.period.display_name()
    }

    pub fn options(&self) -> Vec<PeriodOption> {
        ReportPeriod::all()
            .into_iter()
            .map(|period| PeriodOption {
                period,
                label: period.display_name(),
                active: period == self.selection.period,
            })
            .collect()
    }
}
