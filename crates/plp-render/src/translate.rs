//! Translation lookup for user-facing strings.

use std::borrow::Cow;
use std::collections::HashMap;

use plp_core::RenderResult;

/// Translates a source message into the shopper's language.
pub trait Translate {
    /// Return the translation of `msg`, or `msg` itself when unknown.
    fn translate<'a>(&'a self, msg: &'a str) -> Cow<'a, str>;
}

/// Leaves every message untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate<'a>(&'a self, msg: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msg)
    }
}

/// Message catalog for one language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of `source -> translation`.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { messages })
    }

    /// Add a translation.
    pub fn with(mut self, source: impl Into<String>, translation: impl Into<String>) -> Self {
        self.messages.insert(source.into(), translation.into());
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for Catalog {
    fn translate<'a>(&'a self, msg: &'a str) -> Cow<'a, str> {
        match self.messages.get(msg) {
            Some(t) if !t.is_empty() => Cow::Borrowed(t.as_str()),
            _ => Cow::Borrowed(msg),
        }
    }
}

impl<T: Translate + ?Sized> Translate for &T {
    fn translate<'a>(&'a self, msg: &'a str) -> Cow<'a, str> {
        (**self).translate(msg)
    }
}
