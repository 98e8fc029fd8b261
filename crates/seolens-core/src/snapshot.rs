//! Structural page snapshot
//!
//! The plain-text facts the scoring engine consumes. Absence is always the
//! empty string or the empty list, never an optional, so downstream logic
//! never branches on nullability.

use serde::{Deserialize, Serialize};

/// Plain structural facts extracted from one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Contents of the `<title>` element
    pub title: String,

    /// Contents of the description meta tag
    pub meta_description: String,

    /// H1 heading texts, in document order
    pub h1s: Vec<String>,

    /// H2 heading texts, in document order
    pub h2s: Vec<String>,

    /// Paragraph texts, in document order, whitespace-collapsed
    pub paragraphs: Vec<String>,

    /// Images, in document order
    pub images: Vec<ImageRef>,
}

/// One image reference on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}
