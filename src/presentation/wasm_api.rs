use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Promise, Uint8Array};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use crate::application::AppController;
use crate::config::AppConfig;
use crate::domain::{
    errors::{AppError, ConfigurationError},
    logging::{LogComponent, get_logger},
    lottery::{NumberSet, RandomSetGenerator},
    theme::PreferenceStore,
};
use crate::infrastructure::{
    BrowserTimeProvider, DomEventSource, DomSurface, InMemoryPreferenceStore,
    LocalStoragePreferences, LottoApiClient,
};

type BrowserController =
    AppController<LottoApiClient, BrowserTimeProvider, Box<dyn PreferenceStore>, DomSurface>;

fn to_js(err: impl Into<AppError>) -> JsValue {
    JsValue::from_str(&err.into().to_string())
}

fn set_to_js(set: &NumberSet) -> Uint8Array {
    Uint8Array::from(set.values().as_slice())
}

/// JS entry point: `const app = new LottoApp(config); app.mount();`
#[wasm_bindgen]
pub struct LottoApp {
    controller: Rc<BrowserController>,
    events: Option<DomEventSource>,
}

#[wasm_bindgen]
impl LottoApp {
    /// `config` may be `undefined` or a partial `AppConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LottoApp, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            AppConfig::default()
        } else {
            let config: AppConfig = config
                .into_serde()
                .map_err(|e| to_js(ConfigurationError::Malformed(e.to_string())))?;
            config.validate().map_err(to_js)?;
            config
        };

        let store: Box<dyn PreferenceStore> = if LocalStoragePreferences::is_available() {
            Box::new(LocalStoragePreferences::new())
        } else {
            get_logger().warn(
                LogComponent::Presentation("LottoApp"),
                "⚠️ localStorage unavailable, theme will not persist",
            );
            Box::new(InMemoryPreferenceStore::new())
        };

        let rng = SmallRng::try_from_os_rng()
            .map_err(|e| JsValue::from_str(&format!("No entropy source: {e}")))?;
        let surface = DomSurface::new().map_err(to_js)?;

        let controller = AppController::new(
            config.clone(),
            LottoApiClient::new(config.draw_api_base_url.clone()),
            BrowserTimeProvider::new(),
            store,
            surface,
            rng,
        );

        Ok(Self { controller: Rc::new(controller), events: None })
    }

    /// Apply the stored theme and wire the generate and theme buttons.
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.events.is_some() {
            return Ok(());
        }

        if let Err(e) = self.controller.start() {
            get_logger().warn(
                LogComponent::Presentation("LottoApp"),
                &format!("⚠️ Theme not applied: {e}"),
            );
        }

        let surface = self.controller.surface().clone();
        let ids = self.controller.config().elements.clone();
        let mut events = DomEventSource::new(surface, ids);
        AppController::register_handlers(&self.controller, &mut events, |task| spawn_local(task))
            .map_err(to_js)?;
        self.events = Some(events);

        get_logger().info(LogComponent::Presentation("LottoApp"), "🚀 Lotto helper mounted");
        Ok(())
    }

    /// Same as clicking the generate button; resolves to the new numbers.
    pub fn generate(&self) -> Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move {
            let set = controller.handle_generate().await;
            Ok(set_to_js(&set).into())
        })
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> String {
        self.controller.toggle_theme().to_string()
    }

    pub fn theme(&self) -> String {
        self.controller.theme().to_string()
    }

    /// Recent sets, newest first.
    pub fn history(&self) -> Array {
        self.controller.history().iter().map(set_to_js).collect()
    }

    /// Newest draw found this session, if the lookup has finished.
    #[wasm_bindgen(js_name = latestDraw)]
    pub fn latest_draw(&self) -> Option<u32> {
        self.controller.session().latest_draw.map(|draw| draw.value())
    }
}

/// Stateless helper: one fresh set, ascending.
#[wasm_bindgen(js_name = generateNumbers)]
pub fn generate_numbers() -> Result<Vec<u8>, JsValue> {
    let mut rng = SmallRng::try_from_os_rng()
        .map_err(|e| JsValue::from_str(&format!("No entropy source: {e}")))?;
    Ok(RandomSetGenerator::new().generate(&mut rng).values())
}
