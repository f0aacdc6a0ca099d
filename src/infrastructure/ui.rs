use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::ElementIds;
use crate::domain::{
    errors::{UiError, UiResult},
    logging::LogComponent,
    surface::{Control, ElementSpec, RenderSurface, UiEventSource},
};

/// `RenderSurface` over the live document
#[derive(Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new() -> UiResult<Self> {
        let document = web_sys::window()
            .ok_or_else(|| UiError::BrowserApi("Window not available".into()))?
            .document()
            .ok_or_else(|| UiError::BrowserApi("Document not available".into()))?;
        Ok(Self { document })
    }

    fn element(&self, id: &str) -> UiResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| UiError::ElementNotFound(id.to_string()))
    }

    fn build(&self, spec: &ElementSpec) -> UiResult<Element> {
        let element = self
            .document
            .create_element(spec.tag)
            .map_err(|e| UiError::BrowserApi(format!("createElement failed: {e:?}")))?;
        if !spec.classes.is_empty() {
            element.set_class_name(&spec.classes.join(" "));
        }
        if let Some(text) = &spec.text {
            element.set_text_content(Some(text));
        }
        for child in &spec.children {
            let child = self.build(child)?;
            element
                .append_child(&child)
                .map_err(|e| UiError::BrowserApi(format!("appendChild failed: {e:?}")))?;
        }
        Ok(element)
    }
}

impl RenderSurface for DomSurface {
    fn set_text(&self, id: &str, text: &str) -> UiResult<()> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn clear_children(&self, id: &str) -> UiResult<()> {
        self.element(id)?.set_inner_html("");
        Ok(())
    }

    fn append_child(&self, parent_id: &str, element: &ElementSpec) -> UiResult<()> {
        let parent = self.element(parent_id)?;
        let child = self.build(element)?;
        parent
            .append_child(&child)
            .map(|_| ())
            .map_err(|e| UiError::BrowserApi(format!("appendChild failed: {e:?}")))
    }

    fn set_root_data(&self, key: &str, value: &str) -> UiResult<()> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| UiError::BrowserApi("documentElement not available".into()))?;
        root.set_attribute(&format!("data-{key}"), value)
            .map_err(|e| UiError::BrowserApi(format!("setAttribute failed: {e:?}")))
    }

    fn set_visible(&self, id: &str, visible: bool) -> UiResult<()> {
        let element: HtmlElement = self
            .element(id)?
            .dyn_into()
            .map_err(|_| UiError::BrowserApi(format!("'{id}' is not an HTML element")))?;
        let display = if visible { "block" } else { "none" };
        element
            .style()
            .set_property("display", display)
            .map_err(|e| UiError::BrowserApi(format!("style.display failed: {e:?}")))
    }
}

/// Click listeners on the configured buttons; dropped listeners unregister.
pub struct DomEventSource {
    surface: DomSurface,
    ids: ElementIds,
    listeners: Vec<EventListener>,
}

impl DomEventSource {
    pub fn new(surface: DomSurface, ids: ElementIds) -> Self {
        Self { surface, ids, listeners: Vec::new() }
    }

    /// Keep the listeners alive for the lifetime of the page.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

impl UiEventSource for DomEventSource {
    fn on(&mut self, control: Control, mut handler: Box<dyn FnMut()>) -> UiResult<()> {
        let id = match control {
            Control::Generate => &self.ids.generate_button,
            Control::ToggleTheme => &self.ids.theme_toggle,
        };
        let target = self.surface.element(id)?;

        crate::log_debug!(LogComponent::Infrastructure("DomEvents"), "Wiring {control:?} to #{id}");
        self.listeners.push(EventListener::new(&target, "click", move |_| handler()));
        Ok(())
    }
}
