//! Styling hook for the printed transcript.
//!
//! The core writers own the layout. Front ends that want colour implement
//! [`TranscriptStyle`] and only decorate the fixed lines.

use crate::receipt::ReceiptStatus;

/// Decorates the fixed lines of the transcript. Defaults leave text unchanged.
pub trait TranscriptStyle {
    fn banner(&self, text: &str) -> String {
        text.to_string()
    }

    fn menu_header(&self, text: &str) -> String {
        text.to_string()
    }

    fn selected_header(&self, text: &str) -> String {
        text.to_string()
    }

    fn total(&self, text: &str, _status: ReceiptStatus) -> String {
        text.to_string()
    }
}

/// No decoration at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl TranscriptStyle for PlainStyle {}
