//! Ports to the page: what the application may do to the display and which
//! user events it can listen for.

use crate::domain::errors::UiResult;

/// Detached element description appended under a region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, ..Self::default() }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

/// The rendering surface. Regions are addressed by element id.
pub trait RenderSurface {
    fn set_text(&self, id: &str, text: &str) -> UiResult<()>;
    fn clear_children(&self, id: &str) -> UiResult<()>;
    fn append_child(&self, parent_id: &str, element: &ElementSpec) -> UiResult<()>;
    /// `data-{key}` on the document root
    fn set_root_data(&self, key: &str, value: &str) -> UiResult<()>;
    fn set_visible(&self, id: &str, visible: bool) -> UiResult<()>;
}

/// User-facing triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Generate,
    ToggleTheme,
}

/// Registration point for user events
pub trait UiEventSource {
    fn on(&mut self, control: Control, handler: Box<dyn FnMut()>) -> UiResult<()>;
}
