use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::application::{
    history_presenter::HistoryPresenter, theme_controller::ThemeController,
    use_cases::fetch_recent_draws,
};
use crate::config::AppConfig;
use crate::domain::{
    errors::UiResult,
    logging::{LogComponent, TimeProvider, get_logger},
    lottery::{
        DrawNumber, DrawRecordSource, GenerationHistory, LatestDrawLocator, NumberSet,
        RandomSetGenerator,
    },
    surface::{Control, RenderSurface, UiEventSource},
    theme::{PreferenceStore, Theme},
};

pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Per-page-load state: the fetch-once latch and the resolved newest draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub draws_requested: bool,
    pub latest_draw: Option<DrawNumber>,
}

/// Wires user events to generation, history, theme and the one-time draw lookup
pub struct AppController<S, C, P, U> {
    config: AppConfig,
    source: S,
    clock: C,
    surface: U,
    theme: ThemeController<P>,
    presenter: HistoryPresenter,
    generator: RandomSetGenerator,
    rng: RefCell<SmallRng>,
    history: RefCell<GenerationHistory>,
    session: RefCell<SessionState>,
}

impl<S, C, P, U> AppController<S, C, P, U>
where
    S: DrawRecordSource,
    C: TimeProvider,
    P: PreferenceStore,
    U: RenderSurface,
{
    pub fn new(
        config: AppConfig,
        source: S,
        clock: C,
        store: P,
        surface: U,
        rng: SmallRng,
    ) -> Self {
        get_logger().info(LogComponent::Application("AppController"), "Creating app controller");

        let theme = ThemeController::new(
            store,
            config.theme_storage_key.clone(),
            config.elements.theme_toggle.clone(),
        );
        Self {
            presenter: HistoryPresenter::new(config.elements.clone()),
            history: RefCell::new(GenerationHistory::new(config.history_capacity)),
            config,
            source,
            clock,
            surface,
            theme,
            generator: RandomSetGenerator::new(),
            rng: RefCell::new(rng),
            session: RefCell::new(SessionState::default()),
        }
    }

    /// Apply the persisted theme to the page.
    pub fn start(&self) -> UiResult<()> {
        self.theme.apply(&self.surface, self.theme.current())
    }

    /// Generate a set, record it and redraw the number regions.
    pub fn generate_numbers(&self) -> NumberSet {
        let set = self.generator.generate(&mut *self.rng.borrow_mut());
        self.history.borrow_mut().record(set.clone());

        get_logger()
            .info(LogComponent::Application("AppController"), &format!("🎲 Generated {set}"));

        let history = self.history.borrow();
        let rendered = self
            .presenter
            .render_current(&self.surface, &set)
            .and_then(|_| self.presenter.render_history(&self.surface, &history));
        self.log_ui_failure(rendered);
        set
    }

    /// Full generate-button behaviour, including the first-click draw lookup.
    pub async fn handle_generate(&self) -> NumberSet {
        let set = self.generate_numbers();
        if self.claim_draw_lookup() {
            self.load_recent_draws().await;
        }
        set
    }

    /// Flip the latch; `true` only for the first caller of the session.
    pub fn claim_draw_lookup(&self) -> bool {
        let mut session = self.session.borrow_mut();
        if session.draws_requested {
            return false;
        }
        session.draws_requested = true;
        true
    }

    /// Locate the newest draw (once per session) and render the recent ones.
    pub async fn load_recent_draws(&self) {
        self.log_ui_failure(self.presenter.render_draws_loading(&self.surface));

        let known = self.session.borrow().latest_draw;
        let latest = match known {
            Some(latest) => latest,
            None => {
                let locator =
                    LatestDrawLocator::new(&self.source, &self.clock, self.config.locator);
                let latest = locator.locate().await;
                self.session.borrow_mut().latest_draw = Some(latest);
                latest
            }
        };

        let records = fetch_recent_draws(&self.source, latest, self.config.recent_draw_count).await;
        self.log_ui_failure(self.presenter.render_draws(&self.surface, &records));
    }

    pub fn toggle_theme(&self) -> Theme {
        self.theme.toggle(&self.surface)
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn history(&self) -> Vec<NumberSet> {
        self.history.borrow().iter().cloned().collect()
    }

    pub fn session(&self) -> SessionState {
        self.session.borrow().clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn preferences(&self) -> &P {
        self.theme.store()
    }

    fn log_ui_failure(&self, result: UiResult<()>) {
        if let Err(e) = result {
            get_logger().warn(
                LogComponent::Application("AppController"),
                &format!("⚠️ Display update failed: {e}"),
            );
        }
    }
}

impl<S, C, P, U> AppController<S, C, P, U>
where
    S: DrawRecordSource + 'static,
    C: TimeProvider + 'static,
    P: PreferenceStore + 'static,
    U: RenderSurface + 'static,
{
    /// Attach the two controls. `spawn` runs the async generate handler.
    pub fn register_handlers<E, F>(app: &Rc<Self>, events: &mut E, spawn: F) -> UiResult<()>
    where
        E: UiEventSource,
        F: Fn(LocalTask) + 'static,
    {
        let generate_app = Rc::clone(app);
        events.on(
            Control::Generate,
            Box::new(move || {
                let app = Rc::clone(&generate_app);
                spawn(Box::pin(async move {
                    app.handle_generate().await;
                }));
            }),
        )?;

        let theme_app = Rc::clone(app);
        events.on(
            Control::ToggleTheme,
            Box::new(move || {
                theme_app.toggle_theme();
            }),
        )?;

        get_logger().info(LogComponent::Application("AppController"), "✅ Controls wired");
        Ok(())
    }
}
