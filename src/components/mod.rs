//! Page components.
//!
//! Each module binds one fundpage-core component to the document.

mod clipboard;
mod fade;
mod faq;
mod page;
mod progress;
mod scroll;
mod toast;

pub use page::FundraiserPage;
