//! Wallet address copy
//!
//! Two paths:
//! - **Clipboard**: the asynchronous clipboard write, when the platform has one
//! - **Fallback**: a hidden temporary text input, selected and copied with the
//!   legacy copy command
//!
//! The temporary input is owned by a guard and removed on every exit path.
//! Failures end in an error toast and are never returned to the caller.

use futures::future::LocalBoxFuture;

use crate::error::{PageError, PageResult};
use crate::notify::{Notifier, COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE};

/// Asynchronous clipboard write capability.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, PageResult<()>>;
}

/// Host for the temporary input used by the legacy copy path.
pub trait TemporaryInputHost {
    type Handle;

    /// Insert a hidden, focusable input holding `text`.
    fn insert_hidden(&self, text: &str) -> PageResult<Self::Handle>;

    /// Focus and select the input, then run the legacy copy command.
    fn select_and_copy(&self, input: &Self::Handle) -> PageResult<()>;

    fn remove(&self, input: Self::Handle);
}

/// Which path placed the text on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Clipboard,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    Failed,
}

struct TemporaryInput<'a, H: TemporaryInputHost> {
    host: &'a H,
    handle: Option<H::Handle>,
}

impl<'a, H: TemporaryInputHost> TemporaryInput<'a, H> {
    fn insert(host: &'a H, text: &str) -> PageResult<Self> {
        let handle = host.insert_hidden(text)?;
        Ok(Self {
            host,
            handle: Some(handle),
        })
    }

    fn copy(&self) -> PageResult<()> {
        match &self.handle {
            Some(handle) => self.host.select_and_copy(handle),
            None => Err(PageError::CopyCommand("temporary input already removed".to_string())),
        }
    }
}

impl<H: TemporaryInputHost> Drop for TemporaryInput<'_, H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.remove(handle);
        }
    }
}

/// Copy `text` through a temporary hidden input.
pub fn fallback_copy<H: TemporaryInputHost>(host: &H, text: &str) -> PageResult<()> {
    let input = TemporaryInput::insert(host, text)?;
    input.copy()
}

/// Copy the displayed wallet address and report the result with a toast.
///
/// `raw` is the address as shown on the page; surrounding whitespace is
/// trimmed before copying.
pub async fn copy_address<H: TemporaryInputHost>(
    raw: &str,
    primary: Option<&dyn ClipboardWriter>,
    fallback: &H,
    notifier: &Notifier,
) -> CopyOutcome {
    let address = raw.trim();

    let result = if address.is_empty() {
        Err(PageError::CopyCommand("wallet address is empty".to_string()))
    } else {
        match primary {
            Some(clipboard) => clipboard
                .write_text(address)
                .await
                .map(|_| CopyPath::Clipboard),
            None => fallback_copy(fallback, address).map(|_| CopyPath::Fallback),
        }
    };

    match result {
        Ok(path) => {
            tracing::debug!(?path, "Wallet address copied");
            notifier.success(COPY_SUCCESS_MESSAGE);
            CopyOutcome::Copied(path)
        }
        Err(e) => {
            tracing::error!("Failed to copy: {}", e);
            notifier.error(COPY_FAILURE_MESSAGE);
            CopyOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeDocument {
        inputs: RefCell<Vec<u32>>,
        next_id: Cell<u32>,
        refuse_copy: bool,
        copied: RefCell<Option<String>>,
        values: RefCell<Vec<(u32, String)>>,
    }

    impl TemporaryInputHost for FakeDocument {
        type Handle = u32;

        fn insert_hidden(&self, text: &str) -> PageResult<u32> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.inputs.borrow_mut().push(id);
            self.values.borrow_mut().push((id, text.to_string()));
            Ok(id)
        }

        fn select_and_copy(&self, input: &u32) -> PageResult<()> {
            assert!(self.inputs.borrow().contains(input));
            if self.refuse_copy {
                return Err(PageError::CopyCommand("refused".to_string()));
            }
            let values = self.values.borrow();
            let value = values.iter().find(|(id, _)| id == input).map(|(_, v)| v.clone());
            *self.copied.borrow_mut() = value;
            Ok(())
        }

        fn remove(&self, input: u32) {
            self.inputs.borrow_mut().retain(|id| *id != input);
        }
    }

    #[test]
    fn test_fallback_removes_input_on_success() {
        let doc = FakeDocument::default();
        fallback_copy(&doc, "0xABC").unwrap();
        assert!(doc.inputs.borrow().is_empty());
        assert_eq!(doc.copied.borrow().as_deref(), Some("0xABC"));
    }

    #[test]
    fn test_fallback_removes_input_on_failure() {
        let doc = FakeDocument {
            refuse_copy: true,
            ..Default::default()
        };
        let result = fallback_copy(&doc, "0xABC");
        assert!(matches!(result, Err(PageError::CopyCommand(_))));
        assert!(doc.inputs.borrow().is_empty());
    }
}
