//! Copy-wallet button.

use std::rc::Rc;

use fundpage_core::clipboard::{copy_address, ClipboardWriter, TemporaryInputHost};
use fundpage_core::{Notifier, PageError, PageRegions, PageResult};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo::utils::{document, window};
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Clipboard, HtmlDocument, HtmlTextAreaElement};

use crate::dom::{self, js_error_text};

/// `navigator.clipboard`
#[derive(Clone)]
pub struct NavigatorClipboard {
    clipboard: Clipboard,
}

impl NavigatorClipboard {
    /// The async clipboard, when this browser (and context) exposes one.
    pub fn detect() -> Option<Self> {
        let navigator = window().navigator();
        let has_clipboard =
            Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
        if !has_clipboard {
            return None;
        }
        let clipboard = navigator.clipboard();
        if clipboard.is_undefined() || clipboard.is_null() {
            return None;
        }
        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText")).ok()?;
        write_text.is_function().then_some(Self { clipboard })
    }
}

impl ClipboardWriter for NavigatorClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, PageResult<()>> {
        let promise = self.clipboard.write_text(text);
        async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PageError::Clipboard(js_error_text(&e)))
        }
        .boxed_local()
    }
}

/// Temporary `<textarea>` on `document.body` for `execCommand("copy")`
pub struct BodyTextArea;

impl TemporaryInputHost for BodyTextArea {
    type Handle = HtmlTextAreaElement;

    fn insert_hidden(&self, text: &str) -> PageResult<HtmlTextAreaElement> {
        let doc = document();
        let body = doc
            .body()
            .ok_or_else(|| PageError::MissingRegion("body".to_string()))?;
        let textarea = doc
            .create_element("textarea")
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().map_err(JsValue::from))
            .map_err(|e| PageError::CopyCommand(js_error_text(&e)))?;
        textarea.set_value(text);

        // Fixed at the top-left so selecting it does not scroll the page
        let style = textarea.style();
        for (name, value) in [("top", "0"), ("left", "0"), ("position", "fixed"), ("opacity", "0")] {
            let _ = style.set_property(name, value);
        }

        body.append_child(&textarea)
            .map_err(|e| PageError::CopyCommand(js_error_text(&e)))?;
        Ok(textarea)
    }

    fn select_and_copy(&self, input: &HtmlTextAreaElement) -> PageResult<()> {
        let _ = input.focus();
        input.select();

        let doc: HtmlDocument = document().unchecked_into();
        match doc.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(PageError::CopyCommand("copy command refused".to_string())),
            Err(e) => Err(PageError::CopyCommand(js_error_text(&e))),
        }
    }

    fn remove(&self, input: HtmlTextAreaElement) {
        input.remove();
    }
}

/// Wire the copy button to the wallet address region.
pub fn init(regions: &PageRegions, wallet_address: Option<&str>, notifier: Rc<Notifier>) -> PageResult<()> {
    let button = dom::by_id(&regions.copy_button);
    let wallet = dom::by_id(&regions.wallet_address);
    let (Some(button), Some(wallet)) = (button, wallet) else {
        return Err(PageError::MissingRegion("wallet elements".to_string()));
    };

    if let Some(address) = wallet_address {
        wallet.set_text_content(Some(address));
    }

    dom::listen(&button, "click", move |_| {
        let raw = wallet.text_content().unwrap_or_default();
        let notifier = notifier.clone();
        spawn_local(async move {
            let primary = NavigatorClipboard::detect();
            copy_address(
                &raw,
                primary.as_ref().map(|c| c as &dyn ClipboardWriter),
                &BodyTextArea,
                &notifier,
            )
            .await;
        });
    });
    Ok(())
}
