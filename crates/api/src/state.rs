//! Shared application state.

use std::sync::Arc;

use catalog::{ItemRepository, ItemService};
use printing::{InMemoryOrderRepository, PrintDispatcher, PrinterSink};

use crate::images::ImageStore;

/// Printer handle shared by every request.
pub type SharedPrinter = Arc<dyn PrinterSink>;

/// Shared application state accessible from all handlers.
pub struct AppState<R: ItemRepository> {
    pub item_service: ItemService<R>,
    pub orders: InMemoryOrderRepository,
    pub dispatcher: PrintDispatcher<R, SharedPrinter>,
    pub images: ImageStore,
}
