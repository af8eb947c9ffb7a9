//! # Page Model
//!
//! The GUI page as the sync client sees it: elements addressed by CSS class,
//! forms addressed by id, and a body that can be replaced wholesale.
//!
//! [`Page`] is the seam the renderer writes through; [`Document`] is the
//! in-memory implementation used by the binary and by tests.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::error::{AppError, Result};

/// CSS classes the server-rendered page uses for live values.
pub mod class {
    pub const BLOCK_HEIGHT: &str = "block_height";
    pub const STATUS: &str = "status";
    pub const BALANCE: &str = "balance";
    pub const CONFIRMED: &str = "confirmed";
    pub const UNCONFIRMED: &str = "unconfirmed";
    pub const SPF_FUNDS: &str = "spf_funds";
    pub const CLAIM_BALANCE: &str = "claim_balance";
    pub const DOWNLOADER_PROGRESS: &str = "downloader-progress";
}

/// Ids of the forms whose submission moves the page on after onboarding.
pub mod form {
    pub const REFRESH_SCANNER: &str = "refreshScanner";
    pub const REFRESH_DOWNLOADER: &str = "refreshDownloader";
}

/// A page shared between the poll loops (guard reads) and the app (writes).
pub type SharedPage = Arc<RwLock<dyn Page>>;

/// Operations the sync client performs on the GUI page.
pub trait Page: Send + Sync {
    /// Path of the page's URL, e.g. `/gui/initializeSeed`.
    fn path(&self) -> &str;

    /// True if at least one element carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Replace the text of every element carrying `class`; returns how many changed.
    fn set_text(&mut self, class: &str, text: &str) -> usize;

    /// Replace the full class list of every element carrying `class`.
    fn set_class_name(&mut self, class: &str, class_name: &str) -> usize;

    /// Submit the form with the given id.
    fn submit_form(&mut self, id: &str) -> Result<()>;

    /// Replace the whole body; every previous element and form is gone afterwards.
    fn replace_body(&mut self, html: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Space separated class list, as in the `class` attribute
    pub class_name: String,
    pub text: String,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub id: String,
    pub submissions: u32,
}

/// In-memory page.
#[derive(Debug, Clone, Default)]
pub struct Document {
    path: String,
    elements: Vec<Element>,
    forms: Vec<Form>,
    body: Option<String>,
}

impl Document {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// The live elements of the wallet page as the daemon renders it before
    /// the first poll: placeholders for every value plus both redirect forms.
    pub fn dashboard(path: impl Into<String>) -> Self {
        Self::new(path)
            .with_element(class::BLOCK_HEIGHT, "?")
            .with_element("status yellow", "Synchronizing")
            .with_element(class::BALANCE, "")
            .with_element(class::CONFIRMED, "?")
            .with_element(class::UNCONFIRMED, "?")
            .with_element(class::SPF_FUNDS, "?")
            .with_element(class::CLAIM_BALANCE, "?")
            .with_element(class::DOWNLOADER_PROGRESS, "0%")
            .with_form(form::REFRESH_SCANNER)
            .with_form(form::REFRESH_DOWNLOADER)
    }

    pub fn with_element(mut self, class_name: &str, text: &str) -> Self {
        self.push_element(class_name, text);
        self
    }

    pub fn with_form(mut self, id: &str) -> Self {
        self.forms.push(Form {
            id: id.to_string(),
            submissions: 0,
        });
        self
    }

    pub fn push_element(&mut self, class_name: &str, text: &str) {
        self.elements.push(Element {
            class_name: class_name.to_string(),
            text: text.to_string(),
        });
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Texts of the elements carrying `class`, in document order.
    pub fn texts<'a>(&'a self, class: &'a str) -> Vec<&'a str> {
        self.matching(class).map(|e| e.text.as_str()).collect()
    }

    /// Class lists of the elements carrying `class`, in document order.
    pub fn class_names<'a>(&'a self, class: &'a str) -> Vec<&'a str> {
        self.matching(class).map(|e| e.class_name.as_str()).collect()
    }

    /// How often the form `id` was submitted; 0 when there is no such form.
    pub fn submissions(&self, id: &str) -> u32 {
        self.forms
            .iter()
            .find(|f| f.id == id)
            .map_or(0, |f| f.submissions)
    }

    /// Replacement body, if the body was replaced.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn matching<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |e| e.has_class(class))
    }
}

impl Page for Document {
    fn path(&self) -> &str {
        &self.path
    }

    fn has_class(&self, class: &str) -> bool {
        self.elements.iter().any(|e| e.has_class(class))
    }

    fn set_text(&mut self, class: &str, text: &str) -> usize {
        let mut changed = 0;
        for element in self.elements.iter_mut().filter(|e| e.has_class(class)) {
            if element.text != text {
                element.text = text.to_string();
                changed += 1;
            }
        }
        changed
    }

    fn set_class_name(&mut self, class: &str, class_name: &str) -> usize {
        let mut changed = 0;
        for element in self.elements.iter_mut().filter(|e| e.has_class(class)) {
            if element.class_name != class_name {
                element.class_name = class_name.to_string();
                changed += 1;
            }
        }
        changed
    }

    fn submit_form(&mut self, id: &str) -> Result<()> {
        let form = self
            .forms
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::Page(format!("form #{} not found", id)))?;
        form.submissions += 1;
        Ok(())
    }

    fn replace_body(&mut self, html: &str) {
        self.elements.clear();
        self.forms.clear();
        self.body = Some(html.to_string());
    }
}
