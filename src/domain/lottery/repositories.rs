use super::{DrawNumber, DrawRecord};

/// Point lookup of a single historical draw.
///
/// `None` means "no record": the draw does not exist yet, the network failed,
/// or the response was unusable. Callers cannot tell these apart because the
/// remote service answers all of them the same way.
#[allow(async_fn_in_trait)]
pub trait DrawRecordSource {
    async fn fetch_draw(&self, number: DrawNumber) -> Option<DrawRecord>;
}

impl<T: DrawRecordSource> DrawRecordSource for &T {
    async fn fetch_draw(&self, number: DrawNumber) -> Option<DrawRecord> {
        (**self).fetch_draw(number).await
    }
}
