#![allow(dead_code)]

use lotto_helper_wasm::application::AppController;
use lotto_helper_wasm::config::AppConfig;
use lotto_helper_wasm::domain::{
    errors::UiResult,
    logging::TimeProvider,
    lottery::{
        DEFAULT_EPOCH_MS, DEFAULT_PERIOD_MS, DrawNumber, DrawRecord, DrawRecordSource, LottoNumber,
        NumberSet,
    },
    surface::{Control, ElementSpec, RenderSurface, UiEventSource},
};
use lotto_helper_wasm::infrastructure::InMemoryPreferenceStore;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

/// Draw service that knows a fixed set of draw numbers and logs every probe
#[derive(Default)]
pub struct ScriptedDrawSource {
    present: BTreeSet<u32>,
    probes: RefCell<Vec<u32>>,
}

impl ScriptedDrawSource {
    pub fn with_draws(present: impl IntoIterator<Item = u32>) -> Self {
        Self { present: present.into_iter().collect(), probes: RefCell::new(Vec::new()) }
    }

    pub fn up_to(latest: u32) -> Self {
        Self::with_draws(1..=latest)
    }

    pub fn probes(&self) -> Vec<u32> {
        self.probes.borrow().clone()
    }
}

pub fn sample_record(number: u32) -> DrawRecord {
    DrawRecord::new(
        DrawNumber::new(number).unwrap(),
        format!("draw-{number}"),
        NumberSet::new(&[1, 12, 23, 34, 40, 45]).unwrap(),
        LottoNumber::new(7).unwrap(),
    )
}

impl DrawRecordSource for ScriptedDrawSource {
    async fn fetch_draw(&self, number: DrawNumber) -> Option<DrawRecord> {
        self.probes.borrow_mut().push(number.value());
        self.present.contains(&number.value()).then(|| sample_record(number.value()))
    }
}

/// Clock pinned so the calendar estimate lands on a chosen draw
pub struct FixedClock(pub u64);

impl FixedClock {
    pub fn estimating(draw: u32) -> Self {
        Self(DEFAULT_EPOCH_MS + (draw as u64 - 1) * DEFAULT_PERIOD_MS)
    }
}

impl TimeProvider for FixedClock {
    fn current_timestamp(&self) -> u64 {
        self.0
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        timestamp.to_string()
    }
}

/// In-memory page: regions are created on first use
#[derive(Default)]
pub struct FakeSurface {
    children: RefCell<HashMap<String, Vec<ElementSpec>>>,
    texts: RefCell<HashMap<String, String>>,
    root_data: RefCell<HashMap<String, String>>,
    visible: RefCell<HashMap<String, bool>>,
    pub writes: Cell<usize>,
}

fn render_spec(spec: &ElementSpec) -> String {
    let mut out = spec.tag.to_string();
    for class in &spec.classes {
        out.push('.');
        out.push_str(class);
    }
    if let Some(text) = &spec.text {
        out.push_str(&format!("{{{text}}}"));
    }
    if !spec.children.is_empty() {
        let inner: Vec<String> = spec.children.iter().map(render_spec).collect();
        out.push_str(&format!("[{}]", inner.join(" ")));
    }
    out
}

impl FakeSurface {
    /// One line per child element of `id`.
    pub fn dump(&self, id: &str) -> String {
        self.children
            .borrow()
            .get(id)
            .map(|children| children.iter().map(render_spec).collect::<Vec<_>>().join("\n"))
            .unwrap_or_default()
    }

    pub fn children_of(&self, id: &str) -> Vec<ElementSpec> {
        self.children.borrow().get(id).cloned().unwrap_or_default()
    }

    pub fn text_of(&self, id: &str) -> Option<String> {
        self.texts.borrow().get(id).cloned()
    }

    pub fn root_data(&self, key: &str) -> Option<String> {
        self.root_data.borrow().get(key).cloned()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.borrow().get(id).copied().unwrap_or(false)
    }

    fn touch(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

impl RenderSurface for FakeSurface {
    fn set_text(&self, id: &str, text: &str) -> UiResult<()> {
        self.touch();
        self.texts.borrow_mut().insert(id.to_string(), text.to_string());
        Ok(())
    }

    fn clear_children(&self, id: &str) -> UiResult<()> {
        self.touch();
        self.children.borrow_mut().insert(id.to_string(), Vec::new());
        Ok(())
    }

    fn append_child(&self, parent_id: &str, element: &ElementSpec) -> UiResult<()> {
        self.touch();
        self.children
            .borrow_mut()
            .entry(parent_id.to_string())
            .or_default()
            .push(element.clone());
        Ok(())
    }

    fn set_root_data(&self, key: &str, value: &str) -> UiResult<()> {
        self.touch();
        self.root_data.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_visible(&self, id: &str, visible: bool) -> UiResult<()> {
        self.touch();
        self.visible.borrow_mut().insert(id.to_string(), visible);
        Ok(())
    }
}

/// Handlers kept by control so tests can "click"
#[derive(Default)]
pub struct FakeEventSource {
    handlers: HashMap<Control, Box<dyn FnMut()>>,
}

impl FakeEventSource {
    pub fn click(&mut self, control: Control) {
        let handler = self.handlers.get_mut(&control).expect("control wired");
        handler();
    }

    pub fn is_wired(&self, control: Control) -> bool {
        self.handlers.contains_key(&control)
    }
}

impl UiEventSource for FakeEventSource {
    fn on(&mut self, control: Control, handler: Box<dyn FnMut()>) -> UiResult<()> {
        self.handlers.insert(control, handler);
        Ok(())
    }
}

pub type TestController =
    AppController<ScriptedDrawSource, FixedClock, InMemoryPreferenceStore, FakeSurface>;

pub fn controller(source: ScriptedDrawSource, estimate: u32) -> TestController {
    controller_with_store(source, estimate, InMemoryPreferenceStore::new())
}

pub fn controller_with_store(
    source: ScriptedDrawSource,
    estimate: u32,
    store: InMemoryPreferenceStore,
) -> TestController {
    AppController::new(
        AppConfig::default(),
        source,
        FixedClock::estimating(estimate),
        store,
        FakeSurface::default(),
        SmallRng::seed_from_u64(2024),
    )
}
