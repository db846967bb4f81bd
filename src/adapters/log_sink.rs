//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  A UI adapter would implement the same trait and
//! route `Status` to its status line and `Warning` to a toast.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::compose::Composition;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink {
    /// Last status text, kept for the simulator's `status` command.
    last_status: Option<String>,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Status(text) => {
                info!("STATUS | {}", text);
                self.last_status = Some(text.to_string());
            }
            AppEvent::Warning(w) => {
                warn!("TOAST  | {}", w);
            }
            AppEvent::SessionChanged { from, to } => {
                info!("STATE  | {} -> {}", from.name(), to.name());
            }
            AppEvent::Composed(Composition::Blank) => {
                info!("FRAME  | blank");
            }
            AppEvent::Composed(Composition::Displayed(plan)) => {
                info!("FRAME  | zones={:?} mode={:?}", plan.zones(), plan.mode());
            }
        }
    }
}
