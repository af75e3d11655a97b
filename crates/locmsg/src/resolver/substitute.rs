//! Placeholder substitution for resolved templates.

use std::borrow::Cow;

use crate::parser::{Placeholder, Segment, Selector, parse_template};
use crate::resolver::{MessageResolver, ResolveError};
use crate::types::Value;

impl MessageResolver {
    /// Substitutes the placeholders of `template`.
    ///
    /// `{{<index>}}` takes `args[index]` and `{{n}}` takes `amount`. A
    /// placeholder with a formatter suffix passes its value through the named
    /// formatter, with this resolver as the context. A placeholder whose value
    /// is not available (index past the end of `args`, or `n` without an
    /// amount) is copied to the output unchanged, once its formatter name, if
    /// any, has been found in the bundle.
    ///
    /// A missing formatter, or a formatter error, is reported through the
    /// error reporting mode: inline in `Message` mode, so the rest of the
    /// template still renders, or as `Err` in `Exception` mode. Formatter
    /// names are checked even when the placeholder has no value.
    ///
    /// # Example
    ///
    /// ```
    /// use locmsg::{Bundle, Locale, MessageResolver, args};
    ///
    /// let resolver = MessageResolver::new(Locale::new("en").unwrap(), Bundle::new());
    /// let text = resolver
    ///     .format_message("{{n}} mails for {{0}}", &args!["John"], Some(2))
    ///     .unwrap();
    /// assert_eq!(text, "2 mails for John");
    /// ```
    pub fn format_message(
        &self,
        template: &str,
        args: &[Value],
        amount: Option<i64>,
    ) -> Result<String, ResolveError> {
        let parsed = parse_template(template);
        let mut output = String::with_capacity(template.len());
        for segment in &parsed.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let rendered = self.render_placeholder(placeholder, args, amount)?;
                    output.push_str(&rendered);
                }
            }
        }
        Ok(output)
    }

    fn render_placeholder(
        &self,
        placeholder: &Placeholder,
        args: &[Value],
        amount: Option<i64>,
    ) -> Result<String, ResolveError> {
        let formatter = match &placeholder.formatter {
            Some(name) => match self.bundle().formatter(name) {
                Some(formatter) => Some(formatter),
                None => return self.report(ResolveError::MissingFormatter { name: name.clone() }),
            },
            None => None,
        };

        let value: Option<Cow<'_, Value>> = match placeholder.selector {
            Selector::Amount => amount.map(|amount| Cow::Owned(Value::Number(amount))),
            Selector::Index(index) => args.get(index).map(Cow::Borrowed),
        };
        let Some(value) = value else {
            return Ok(placeholder.source.clone());
        };

        match formatter {
            Some(formatter) => formatter(&value, self).or_else(|error| self.report(error)),
            None => Ok(value.to_string()),
        }
    }
}
