use crate::Generation;

/// Identifies one content binding: the item set it was issued for and the real index bound.
///
/// Hand the ticket back through `PagingController::on_content_ready` once the content has
/// loaded. Tickets from a replaced item set are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindTicket {
    pub generation: Generation,
    pub index: usize,
}

/// Fills a page with content for an item (e.g. starts an image download).
///
/// Binding may complete asynchronously. Returning `None` means nothing could be bound; the
/// controller treats that as "no content" and never reports it as an error.
pub trait ContentBinder<T> {
    type Handle;

    fn bind(&mut self, ticket: BindTicket, item: &T) -> Option<Self::Handle>;
}
