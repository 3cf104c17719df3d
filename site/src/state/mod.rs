//! Component-local interaction state.
//!
//! Both machines are plain values with transition functions; the Leptos
//! components hold one instance each inside a signal, so state never leaks
//! between component instances.

mod disclosure;
mod lead;

pub use disclosure::{Disclosure, NavEvent};
pub use lead::{FieldError, LeadForm, LeadStatus, Notice, NoticeTone, SubmitOutcome, is_valid_email};
