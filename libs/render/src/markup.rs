use std::{collections::HashMap, fmt};

/// Escapes text for both element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML that is already safe to embed. The only ways to build one are escaping text or
/// assembling elements, so interpolated strings can't leak raw markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Markup(String::new())
    }

    pub fn text(text: &str) -> Self {
        Markup(escape(text))
    }

    /// For compiled-in template files and stylesheets only.
    pub(crate) fn trusted(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape(text));
    }

    pub fn newline(&mut self) {
        self.0.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for m in iter {
            out.push(m);
        }
        out
    }
}

impl From<Element> for Markup {
    fn from(el: Element) -> Self {
        el.into_markup()
    }
}

pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    // None renders a void element like <img />
    children: Option<Markup>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            attrs: Vec::new(),
            children: Some(Markup::new()),
        }
    }

    pub fn void(tag: &'static str) -> Self {
        Element {
            tag,
            attrs: Vec::new(),
            children: None,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.attrs.push((name, escape(value.as_ref())));
        self
    }

    pub fn attr_if(self, cond: bool, name: &'static str, value: impl AsRef<str>) -> Self {
        if cond {
            self.attr(name, value)
        } else {
            self
        }
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn text(self, text: &str) -> Self {
        self.child(Markup::text(text))
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        if let Some(children) = self.children.as_mut() {
            children.push(child.into());
        }
        self
    }

    pub fn into_markup(self) -> Markup {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            html.push_str(&format!(" {}=\"{}\"", name, value));
        }
        match self.children {
            Some(children) => {
                html.push('>');
                html.push_str(children.as_str());
                html.push_str(&format!("</{}>", self.tag));
            }
            None => html.push_str(" />"),
        }
        Markup(html)
    }
}

/// A template file with `<%= key %>` slots, filled in a single pass so substituted
/// values are never scanned for further slots.
pub struct Template<'a> {
    src: &'a str,
    slots: HashMap<&'static str, Markup>,
}

impl<'a> Template<'a> {
    pub fn new(src: &'a str) -> Self {
        Template {
            src,
            slots: HashMap::new(),
        }
    }

    pub fn text(self, key: &'static str, value: &str) -> Self {
        self.markup(key, Markup::text(value))
    }

    pub fn markup(mut self, key: &'static str, value: impl Into<Markup>) -> Self {
        self.slots.insert(key, value.into());
        self
    }

    pub fn render(&self) -> Markup {
        let mut out = String::with_capacity(self.src.len());
        let mut rest = self.src;
        while let Some(start) = rest.find("<%=") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 3..];
            match after.find("%>") {
                Some(end) => {
                    let key = after[..end].trim();
                    match self.slots.get(key) {
                        Some(value) => out.push_str(value.as_str()),
                        None => log::warn!("template slot `{}` was never filled", key),
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        Markup(out)
    }
}
