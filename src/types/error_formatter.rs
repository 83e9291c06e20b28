//! Error chain formatting utilities.
//!
//! Rendering is a thin consumer of the chain walk: every node becomes one item
//! (a [`Failure`] node renders its message, or the function that created it,
//! plus its code; a foreign error renders its own `Display`), and an
//! [`ErrorFormatter`] joins the items.

use core::fmt::{self, Display};

use crate::chain::{Chain, Node};
use crate::types::Failure;

/// Trait for customizing error chain formatting.
pub trait ErrorFormatter {
    fn format_item(&self, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        chain.map(|item| self.format_item(item)).collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub context_prefix: Option<String>,
    pub context_suffix: Option<String>,
    pub root_prefix: Option<String>,
    pub root_suffix: Option<String>,
    pub multiline: bool,
    pub indent: String,
    pub show_code: bool,
    pub cascade: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            context_prefix: None,
            context_suffix: None,
            root_prefix: None,
            root_suffix: None,
            multiline: false,
            indent: "  ".into(),
            show_code: true,
            cascade: false,
        }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            context_prefix: Some("├─ ".into()),
            root_prefix: Some("└─ ".into()),
            multiline: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), multiline: true, cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn no_code() -> Self {
        Self { show_code: false, ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, item: &dyn Display) -> String {
        let mut result = String::new();
        if let Some(prefix) = &self.context_prefix {
            result.push_str(prefix);
        }
        result.push_str(&item.to_string());
        if let Some(suffix) = &self.context_suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        let items: Vec<_> = chain.collect();
        if items.is_empty() {
            return String::new();
        }

        let item_count = items.len();
        let mut result = String::with_capacity(item_count * 32);

        if self.multiline && self.context_prefix.is_some() {
            result.push_str("┌ ");
            result.push_str(&items[0].to_string());

            for item in items.iter().take(item_count.saturating_sub(1)).skip(1) {
                result.push_str(&self.separator);
                if let Some(prefix) = &self.context_prefix {
                    result.push_str(prefix);
                }
                result.push_str(&item.to_string());
            }

            if item_count > 1 {
                result.push_str(&self.separator);
                let prefix = self.root_prefix.as_ref().or(self.context_prefix.as_ref());
                if let Some(p) = prefix {
                    result.push_str(p);
                }
                result.push_str(&items[item_count - 1].to_string());
            }
        } else if self.cascade {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    result.push_str(&self.separator);
                    for _ in 0..i {
                        result.push_str(&self.indent);
                    }
                }
                result.push_str(&item.to_string());
            }
        } else {
            let last_idx = item_count - 1;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    result.push_str(&self.separator);
                }

                let is_last = i == last_idx;
                let prefix = if is_last {
                    self.root_prefix.as_ref().or(self.context_prefix.as_ref())
                } else {
                    self.context_prefix.as_ref()
                };
                if let Some(p) = prefix {
                    result.push_str(p);
                }

                result.push_str(&item.to_string());

                let suffix = if is_last {
                    self.root_suffix.as_ref().or(self.context_suffix.as_ref())
                } else {
                    self.context_suffix.as_ref()
                };
                if let Some(s) = suffix {
                    result.push_str(s);
                }
            }
        }
        result
    }
}

/// One rendered chain item.
pub(crate) struct NodeLabel<'a> {
    node: Node<'a>,
    show_code: bool,
}

impl<'a> NodeLabel<'a> {
    pub(crate) fn new(node: Node<'a>, show_code: bool) -> Self {
        Self { node, show_code }
    }
}

impl Display for NodeLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failure = match self.node {
            Node::Foreign(err) => return Display::fmt(err, f),
            Node::Failure(failure) => failure,
        };

        match (failure.message(), failure.call_stack().head_frame()) {
            (Some(message), _) => f.write_str(message)?,
            (None, Some(frame)) => f.write_str(frame.func())?,
            (None, None) => f.write_str("<unknown>")?,
        }

        if self.show_code {
            if let Some(code) = failure.code() {
                write!(f, " (code: {})", code)?;
            }
        }
        Ok(())
    }
}

/// Builder for customizing chain display output.
pub struct ChainFormatBuilder<'a> {
    pub(crate) failure: &'a Failure,
    pub(crate) config: ErrorFormatConfig,
    pub(crate) reverse: bool,
}

impl<'a> ChainFormatBuilder<'a> {
    pub fn new(failure: &'a Failure) -> Self {
        Self { failure, config: ErrorFormatConfig::default(), reverse: false }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// If true, renders the cause first and the outermost node last.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn cascade(mut self, enabled: bool) -> Self {
        self.config.cascade = enabled;
        if enabled {
            self.config.multiline = true;
            if self.config.separator == " -> " {
                self.config.separator = "\n".into();
            }
        }
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = ErrorFormatConfig::cascaded();
        self
    }
}

impl Display for ChainFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels: Vec<NodeLabel<'_>> = Chain::new(self.failure)
            .map(|node| NodeLabel::new(node, self.config.show_code))
            .collect();
        if self.reverse {
            labels.reverse();
        }

        let items = labels.iter().map(|label| label as &dyn Display);
        f.write_str(&self.config.format_chain(items))
    }
}
