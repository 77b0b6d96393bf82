//! Loading and view state of the sales statistics dashboard

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use contracts::dashboards::d410_sales_statistics::StatisticsSnapshot;
use contracts::enums::ReportPeriod;
use futures::future::{self, Either, FutureExt, LocalBoxFuture, Shared};

use super::error::DataSourceError;
use super::metrics::build_view_model;
use super::state::{PeriodOption, PeriodSelection, PeriodSelector};
use super::view_model::ViewModel;
use crate::shared::config::DashboardConfig;
use crate::shared::number_format::NumberLocale;

/// Title of the notification raised when loading fails
pub const LOAD_ERROR_TITLE: &str = "Dashboard ma'lumotlarini yuklashda xatolik";

/// Anything that can produce a statistics snapshot
#[async_trait(?Send)]
pub trait StatisticsSource {
    async fn get_statistics(&self) -> Result<StatisticsSnapshot, DataSourceError>;
}

/// User facing failure signal (toast, banner, ...)
pub trait Notifier {
    fn notify_error(&self, title: &str, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// `load()` was never called
    Idle,
    Loading,
    Ready,
    Errored,
}

type InFlight = Shared<LocalBoxFuture<'static, LoadState>>;

struct Inner {
    source: Box<dyn StatisticsSource>,
    notifier: Box<dyn Notifier>,
    load_timeout: Duration,
    locale: NumberLocale,
    state: Cell<LoadState>,
    snapshot: RefCell<Option<Rc<StatisticsSnapshot>>>,
    selector: RefCell<PeriodSelector>,
    in_flight: RefCell<Option<InFlight>>,
}

/// Owns the snapshot and the period selection of one dashboard session.
///
/// Cloning is cheap and every clone shares the same session.
#[derive(Clone)]
pub struct DashboardController {
    inner: Rc<Inner>,
}

impl DashboardController {
    pub fn new(
        source: impl StatisticsSource + 'static,
        notifier: impl Notifier + 'static,
        config: &DashboardConfig,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                source: Box::new(source),
                notifier: Box::new(notifier),
                load_timeout: config.load_timeout(),
                locale: config.number_locale(),
                state: Cell::new(LoadState::Idle),
                snapshot: RefCell::new(None),
                selector: RefCell::new(PeriodSelector::new()),
                in_flight: RefCell::new(None),
            }),
        }
    }

    /// Fetch a fresh snapshot.
    ///
    /// The state switches to `Loading` as soon as this is called, before the
    /// returned future is first polled. Failures end in `Errored` and a
    /// notification, they are never returned. A call made while another load
    /// is in flight joins that load instead of issuing a second request.
    pub fn load(&self) -> impl Future<Output = LoadState> + 'static {
        let pending = self.inner.in_flight.borrow().clone();
        match pending {
            Some(request) => {
                log::debug!("Statistics load already in flight, joining it");
                request
            }
            None => {
                let inner = Rc::clone(&self.inner);
                let request = async move { inner.fetch().await }.boxed_local().shared();
                *self.inner.in_flight.borrow_mut() = Some(request.clone());
                self.inner.state.set(LoadState::Loading);
                request
            }
        }
    }

    pub fn state(&self) -> LoadState {
        self.inner.state.get()
    }

    /// Last successfully loaded snapshot, kept across failed reloads
    pub fn snapshot(&self) -> Option<Rc<StatisticsSnapshot>> {
        self.inner.snapshot.borrow().clone()
    }

    /// Zeroed model until the first snapshot arrives
    pub fn view_model(&self) -> ViewModel {
        let snapshot = self.snapshot();
        let selection = self.selection();
        build_view_model(snapshot.as_deref(), &selection, &self.inner.locale)
    }

    pub fn selection(&self) -> PeriodSelection {
        self.inner.selector.borrow().selection()
    }

    pub fn period_label(&self) -> &'static str {
        self.inner.selector.borrow().label()
    }

    pub fn period_options(&self) -> Vec<PeriodOption> {
        self.inner.selector.borrow().options()
    }

    pub fn toggle_picker(&self) {
        self.inner.selector.borrow_mut().toggle_picker();
    }

    pub fn select_period(&self, period: ReportPeriod) {
        log::debug!("Dashboard period selected: {}", period);
        self.inner.selector.borrow_mut().select_period(period);
    }
}

impl Inner {
    async fn fetch(&self) -> LoadState {
        let result = with_timeout(self.source.get_statistics(), self.load_timeout).await;

        let state = match result {
            Ok(snapshot) => {
                log::info!(
                    "Dashboard statistics loaded: {} top products",
                    snapshot.top_products.len()
                );
                *self.snapshot.borrow_mut() = Some(Rc::new(snapshot));
                LoadState::Ready
            }
            Err(err) => {
                log::error!("Dashboard error: {}", err);
                self.notifier.notify_error(LOAD_ERROR_TITLE, &err.to_string());
                LoadState::Errored
            }
        };

        self.state.set(state);
        self.in_flight.borrow_mut().take();
        state
    }
}

async fn with_timeout<F>(
    request: F,
    limit: Duration,
) -> Result<StatisticsSnapshot, DataSourceError>
where
    F: Future<Output = Result<StatisticsSnapshot, DataSourceError>>,
{
    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(sleep(limit));

    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(DataSourceError::Timeout(limit)),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;
    use contracts::dashboards::d410_sales_statistics::{PeriodFigures, TopProductEntry};

    struct FakeSource {
        calls: Rc<Cell<usize>>,
        result: Result<StatisticsSnapshot, DataSourceError>,
        delay: Duration,
    }

    impl FakeSource {
        fn new(result: Result<StatisticsSnapshot, DataSourceError>) -> Self {
            Self {
                calls: Rc::new(Cell::new(0)),
                result,
                delay: Duration::ZERO,
            }
        }
    }

    #[async_trait(?Send)]
    impl StatisticsSource for FakeSource {
        async fn get_statistics(&self) -> Result<StatisticsSnapshot, DataSourceError> {
            self.calls.set(self.calls.get() + 1);
            if self.delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(self.delay).await;
            }
            self.result.clone()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        messages: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_error(&self, title: &str, message: &str) {
            self.messages
                .borrow_mut()
                .push((title.to_string(), message.to_string()));
        }
    }

    fn config() -> DashboardConfig {
        load_config().unwrap().dashboard
    }

    fn snapshot() -> StatisticsSnapshot {
        StatisticsSnapshot {
            today: PeriodFigures {
                revenue: 1_000_000.0,
                profit: 250_000.0,
                sales_count: 12,
            },
            top_products: vec![TopProductEntry {
                name: "A".into(),
                total_sold: 5,
                total_revenue: 500.0,
                total_profit: None,
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_view_model_before_load_is_zeroed() {
        let controller = DashboardController::new(
            FakeSource::new(Ok(snapshot())),
            RecordingNotifier::default(),
            &config(),
        );

        assert_eq!(controller.state(), LoadState::Idle);
        assert!(controller.snapshot().is_none());
        let vm = controller.view_model();
        assert_eq!(vm.main_kpis[0].value, "0 so'm");
        assert!(vm.top_products.is_empty());
    }

    #[tokio::test]
    async fn test_load_success() {
        let notifier = RecordingNotifier::default();
        let controller =
            DashboardController::new(FakeSource::new(Ok(snapshot())), notifier.clone(), &config());

        assert_eq!(controller.load().await, LoadState::Ready);
        assert_eq!(controller.state(), LoadState::Ready);

        let vm = controller.view_model();
        assert_eq!(vm.main_kpis[3].value, "25.0%");
        assert_eq!(vm.main_kpis[0].value, "1\u{a0}000\u{a0}000 so'm");
        assert_eq!(vm.top_products[0].profit, "0 so'm");
        assert!(notifier.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_notifies_once() {
        let notifier = RecordingNotifier::default();
        let controller = DashboardController::new(
            FakeSource::new(Err(DataSourceError::Http(500))),
            notifier.clone(),
            &config(),
        );

        assert_eq!(controller.load().await, LoadState::Errored);
        assert!(controller.snapshot().is_none());
        assert_eq!(controller.view_model().main_kpis.len(), 4);

        let messages = notifier.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, LOAD_ERROR_TITLE);
        assert_eq!(messages[0].1, "HTTP error: 500");
    }

    #[tokio::test]
    async fn test_concurrent_loads_are_coalesced() {
        let source = FakeSource::new(Ok(snapshot()));
        let calls = Rc::clone(&source.calls);
        let controller = DashboardController::new(source, RecordingNotifier::default(), &config());

        let (first, second) = futures::join!(controller.load(), controller.load());
        assert_eq!(first, LoadState::Ready);
        assert_eq!(second, LoadState::Ready);
        assert_eq!(calls.get(), 1);

        // a later load is a new request
        controller.load().await;
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_state_is_loading_while_in_flight() {
        let controller = DashboardController::new(
            FakeSource::new(Ok(snapshot())),
            RecordingNotifier::default(),
            &config(),
        );

        let pending = controller.load();
        assert_eq!(controller.state(), LoadState::Loading);
        assert!(controller.snapshot().is_none());

        assert_eq!(pending.await, LoadState::Ready);
        assert_eq!(controller.state(), LoadState::Ready);
    }

    #[tokio::test]
    async fn test_coalesced_failure_notifies_once() {
        let source = FakeSource::new(Err(DataSourceError::Http(503)));
        let calls = Rc::clone(&source.calls);
        let notifier = RecordingNotifier::default();
        let controller = DashboardController::new(source, notifier.clone(), &config());

        let (first, second) = futures::join!(controller.load(), controller.load());
        assert_eq!(first, LoadState::Errored);
        assert_eq!(second, LoadState::Errored);
        assert_eq!(calls.get(), 1);
        assert_eq!(notifier.messages.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_load_timeout_is_a_failure() {
        let mut source = FakeSource::new(Ok(snapshot()));
        source.delay = Duration::from_secs(30);
        let notifier = RecordingNotifier::default();
        let mut config = config();
        config.load_timeout_ms = 20;
        let controller = DashboardController::new(source, notifier.clone(), &config);

        assert_eq!(controller.load().await, LoadState::Errored);
        let messages = notifier.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.contains("timed out"));
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_snapshot() {
        struct FlakySource {
            calls: Cell<usize>,
        }

        #[async_trait(?Send)]
        impl StatisticsSource for FlakySource {
            async fn get_statistics(&self) -> Result<StatisticsSnapshot, DataSourceError> {
                self.calls.set(self.calls.get() + 1);
                if self.calls.get() == 1 {
                    Ok(snapshot())
                } else {
                    Err(DataSourceError::Transport("connection reset".into()))
                }
            }
        }

        let controller = DashboardController::new(
            FlakySource {
                calls: Cell::new(0),
            },
            RecordingNotifier::default(),
            &config(),
        );

        assert_eq!(controller.load().await, LoadState::Ready);
        assert_eq!(controller.load().await, LoadState::Errored);
        assert_eq!(controller.state(), LoadState::Errored);
        assert!(controller.snapshot().is_some());
    }

    #[tokio::test]
    async fn test_period_selection_drives_charts() {
        let controller = DashboardController::new(
            FakeSource::new(Ok(snapshot())),
            RecordingNotifier::default(),
            &config(),
        );

        controller.select_period(ReportPeriod::Yearly);
        controller.toggle_picker();
        assert!(controller.selection().picker_open);
        controller.select_period(ReportPeriod::Weekly);

        assert_eq!(
            controller.selection(),
            PeriodSelection {
                period: ReportPeriod::Weekly,
                picker_open: false,
            }
        );
        assert_eq!(controller.period_label(), "Haftalik");
        assert_eq!(controller.view_model().charts[0].title, "Haftalik sotuvlar");
    }
}
