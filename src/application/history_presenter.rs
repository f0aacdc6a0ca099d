use crate::config::ElementIds;
use crate::domain::{
    errors::UiResult,
    lottery::{DrawRecord, GenerationHistory, LottoNumber, NumberSet},
    surface::{ElementSpec, RenderSurface},
};

pub const DRAWS_LOADING_MESSAGE: &str = "Loading past draws…";
pub const DRAWS_UNAVAILABLE_MESSAGE: &str = "Past draws are unavailable right now.";

/// Renders generated sets and fetched draws.
///
/// Every `render_*` call clears its region first, so repeating a call with the
/// same input leaves the page unchanged.
#[derive(Debug, Clone)]
pub struct HistoryPresenter {
    ids: ElementIds,
}

impl HistoryPresenter {
    pub fn new(ids: ElementIds) -> Self {
        Self { ids }
    }

    pub fn render_current<U: RenderSurface>(&self, surface: &U, set: &NumberSet) -> UiResult<()> {
        surface.clear_children(&self.ids.current_numbers)?;
        for number in set.numbers() {
            surface.append_child(&self.ids.current_numbers, &ball(*number))?;
        }
        Ok(())
    }

    pub fn render_history<U: RenderSurface>(
        &self,
        surface: &U,
        history: &GenerationHistory,
    ) -> UiResult<()> {
        surface.clear_children(&self.ids.history_list)?;
        for set in history.iter() {
            surface.append_child(&self.ids.history_list, &history_entry(set))?;
        }
        Ok(())
    }

    pub fn render_draws_loading<U: RenderSurface>(&self, surface: &U) -> UiResult<()> {
        self.reset_draws(surface)?;
        surface.append_child(
            &self.ids.draw_list,
            &ElementSpec::new("p").class("draw-loading").text(DRAWS_LOADING_MESSAGE),
        )
    }

    pub fn render_draws<U: RenderSurface>(
        &self,
        surface: &U,
        records: &[DrawRecord],
    ) -> UiResult<()> {
        self.reset_draws(surface)?;
        if records.is_empty() {
            return surface.append_child(
                &self.ids.draw_list,
                &ElementSpec::new("p").class("draw-empty").text(DRAWS_UNAVAILABLE_MESSAGE),
            );
        }
        for record in records {
            surface.append_child(&self.ids.draw_list, &draw_entry(record))?;
        }
        Ok(())
    }

    fn reset_draws<U: RenderSurface>(&self, surface: &U) -> UiResult<()> {
        surface.set_visible(&self.ids.draw_section, true)?;
        surface.clear_children(&self.ids.draw_list)
    }
}

fn ball(number: LottoNumber) -> ElementSpec {
    ElementSpec::new("span")
        .class("lottery-number")
        .class(number.band().as_ref())
        .text(number.to_string())
}

fn history_entry(set: &NumberSet) -> ElementSpec {
    ElementSpec::new("div")
        .class("history-entry")
        .children(set.numbers().iter().copied().map(ball))
}

fn draw_entry(record: &DrawRecord) -> ElementSpec {
    ElementSpec::new("div")
        .class("draw-record")
        .child(
            ElementSpec::new("div")
                .class("draw-title")
                .text(format!("Draw {} ({})", record.number, record.date)),
        )
        .children(record.winning.numbers().iter().copied().map(ball))
        .child(ElementSpec::new("span").class("bonus-separator").text("+"))
        .child(ball(record.bonus).class("bonus"))
}
