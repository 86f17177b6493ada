use crate::component::{Component, normalize};
use crate::qualifier;

/// Builds the component tree. Every `-` and every switch between digits and
/// letters opens a sequence nested inside the current one, and nothing is
/// ever appended to an outer sequence afterwards, so the open sequences form
/// a simple stack.
struct TreeBuilder {
    open: Vec<Vec<Component>>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            open: vec![Vec::with_capacity(10)],
        }
    }

    fn push(&mut self, component: Component) {
        if let Some(current) = self.open.last_mut() {
            current.push(component);
        }
    }

    fn descend(&mut self) {
        self.open.push(Vec::new());
    }

    /// Closes every open sequence into its parent and returns the root.
    fn finish(mut self) -> Vec<Component> {
        let mut inner = self.open.pop().unwrap_or_default();
        while let Some(mut parent) = self.open.pop() {
            parent.push(Component::Segment(inner));
            inner = parent;
        }
        inner
    }
}

fn classify(token: &str, digit_follows: bool) -> Component {
    match token.parse::<u64>() {
        Ok(n) => Component::Number(n),
        Err(_) => Component::Qualifier(qualifier::resolve(token, digit_follows)),
    }
}

/// Splits a version string into its normalized component tree.
pub(crate) fn tokenize(raw: &str) -> Vec<Component> {
    let buf = raw.trim().to_lowercase();
    let mut builder = TreeBuilder::new();
    let mut start = 0;
    let mut in_digits = false;

    for (idx, ch) in buf.char_indices() {
        match ch {
            '.' | '-' => {
                if idx == start {
                    builder.push(Component::Number(0));
                } else {
                    builder.push(classify(&buf[start..idx], false));
                }
                start = idx + 1;
                if ch == '-' {
                    builder.descend();
                }
            }
            c if c.is_ascii_digit() => {
                if !in_digits && idx > start {
                    builder.push(classify(&buf[start..idx], true));
                    builder.descend();
                    start = idx;
                }
                in_digits = true;
            }
            _ => {
                if in_digits && idx > start {
                    builder.push(classify(&buf[start..idx], false));
                    builder.descend();
                    start = idx;
                }
                in_digits = false;
            }
        }
    }
    if buf.len() > start {
        builder.push(classify(&buf[start..], false));
    }

    let mut items = builder.finish();
    normalize(&mut items);
    items
}
