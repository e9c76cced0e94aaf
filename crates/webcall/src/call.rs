//! Builder for web service request targets.
//!
//! This module encapsulates replacing path placeholders and appending query
//! parameters when assembling an HTTP request target, so callers never
//! concatenate and encode URL pieces by hand.

use std::collections::BTreeMap;

use tracing::debug;
use url::Url;

use crate::encode::{path_encode, query_encode};
use crate::error::{ArgumentKind, Error, Result};

/// Builder for a single web service call target.
///
/// Instantiate with a path template containing `{name}` placeholders, then
/// register path values and query values. [`WebCall::web_command`] returns
/// the full encoded target to execute. Query parameters appear in the order
/// they were registered.
///
/// Registering a name twice is an error rather than an overwrite, and every
/// placeholder must be resolved before rendering succeeds.
///
/// # Examples
///
/// ```
/// use webcall::WebCall;
///
/// let mut call = WebCall::new("/base/{alpha}/next/{bravo}");
/// call.set_path_value("alpha", "a")?;
/// call.set_path_value("bravo", "b")?;
/// call.set_query_value("charlie", "c")?;
/// call.set_query_value("delta", "d")?;
///
/// assert_eq!(call.web_command()?, "/base/a/next/b?charlie=c&delta=d");
/// # Ok::<(), webcall::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct WebCall {
    template: String,
    path_values: BTreeMap<String, String>,
    query_values: Vec<(String, String)>,
}

impl WebCall {
    /// Create a builder for the given path template.
    ///
    /// The template may contain zero or more `{name}` placeholders. No
    /// validation happens here; a malformed placeholder simply never
    /// matches a registration.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            path_values: BTreeMap::new(),
            query_values: Vec::new(),
        }
    }

    /// Return the path template this builder was created with.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Register a substitution for the `{name}` placeholder.
    ///
    /// The value is path-encoded before storage, so spaces render as `%20`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchPathElement`] if `{name}` does not occur in
    /// the template, and [`Error::DuplicateArgument`] if `name` was already
    /// registered. Either way the builder is left unchanged.
    pub fn set_path_value(&mut self, name: &str, value: &str) -> Result<()> {
        let wrapped = wrap_element(name);
        if !self.template.contains(&wrapped) {
            return Err(Error::NoSuchPathElement {
                name: name.to_string(),
                template: self.template.clone(),
            });
        }
        if let Some(existing) = self.path_values.get(name) {
            return Err(Error::DuplicateArgument {
                kind: ArgumentKind::Path,
                name: name.to_string(),
                new_value: value.to_string(),
                existing_value: existing.clone(),
            });
        }
        self.path_values
            .insert(name.to_string(), path_encode(value));
        Ok(())
    }

    /// Append a query parameter.
    ///
    /// The value is query-encoded before storage, so spaces render as `+`.
    /// Parameters keep their registration order in the rendered output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateArgument`] if `name` was already
    /// registered as a query parameter; the builder is left unchanged.
    pub fn set_query_value(&mut self, name: &str, value: &str) -> Result<()> {
        if let Some((_, existing)) = self.query_values.iter().find(|(key, _)| key == name) {
            return Err(Error::DuplicateArgument {
                kind: ArgumentKind::Query,
                name: name.to_string(),
                new_value: value.to_string(),
                existing_value: existing.clone(),
            });
        }
        self.query_values
            .push((name.to_string(), query_encode(value)));
        Ok(())
    }

    /// Render the full encoded request target.
    ///
    /// Applies every registered path substitution to the template, then
    /// appends the query parameters in registration order. Rendering does
    /// not consume or mutate the builder and repeated calls return the same
    /// string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompletePath`] if any `{` or `}` remains after
    /// substitution. A literal brace in the template trips this check too;
    /// there is no way to tell it apart from a forgotten placeholder.
    pub fn web_command(&self) -> Result<String> {
        let mut call_path = self.template.clone();
        for (name, encoded) in &self.path_values {
            call_path = call_path.replace(&wrap_element(name), encoded);
        }
        if call_path.contains('{') || call_path.contains('}') {
            return Err(Error::IncompletePath(call_path));
        }

        let mut divider = '?';
        for (key, encoded) in &self.query_values {
            call_path.push(divider);
            call_path.push_str(key);
            call_path.push('=');
            call_path.push_str(encoded);
            divider = '&';
        }
        debug!(template = %self.template, command = %call_path, "rendered web command");
        Ok(call_path)
    }

    /// Render the request target and join it against an absolute base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if `base` is not an absolute URL,
    /// plus any error [`WebCall::web_command`] can return.
    pub fn web_command_url(&self, base: impl AsRef<str>) -> Result<Url> {
        let base = Url::parse(base.as_ref())?;
        Ok(base.join(&self.web_command()?)?)
    }
}

fn wrap_element(name: &str) -> String {
    format!("{{{name}}}")
}
