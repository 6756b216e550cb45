//! Statement combinator.
//!
//! An [`Expr`] describes "append some text to a sink" without doing it.
//! Exprs compose with [`Expr::then`] (associative, with [`Expr::empty`] as
//! identity) and run exactly once, at [`Expr::render`].
//!
//! ```text
//! Expr::empty().create(..).match_(..).relate(..)   // builds, writes nothing
//!     .render()                                    // single pass → String
//! ```

use std::fmt;
use std::sync::Arc;

use super::render::{RenderConfig, Sink};

type Writer = dyn Fn(&mut Sink) + Send + Sync;

enum Node {
    Write(Box<Writer>),
    Seq(Expr, Expr),
}

// Unlinks sequences iteratively; a long chain would otherwise drop recursively.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Arc<Node>> = Vec::new();
        if let Node::Seq(first, second) = self {
            pending.extend(first.node.take());
            pending.extend(second.node.take());
        }
        while let Some(shared) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(shared) {
                if let Node::Seq(first, second) = &mut node {
                    pending.extend(first.node.take());
                    pending.extend(second.node.take());
                }
            }
        }
    }
}

/// Composable, immutable description of clause text.
#[derive(Clone, Default)]
pub struct Expr {
    node: Option<Arc<Node>>,
}

impl Expr {
    /// The identity: appends nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Lift a custom sink writer.
    pub fn from_fn(write: impl Fn(&mut Sink) + Send + Sync + 'static) -> Self {
        Self { node: Some(Arc::new(Node::Write(Box::new(write)))) }
    }

    /// A clause on its own line.
    pub fn line(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::from_fn(move |sink| {
            sink.begin_clause();
            sink.push_str(&text);
        })
    }

    /// Text appended to the current line.
    pub fn fragment(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::from_fn(move |sink| sink.push_str(&text))
    }

    /// `self`'s output followed by `next`'s.
    pub fn then(self, next: Expr) -> Self {
        match (self.node, next.node) {
            (None, node) | (node, None) => Self { node },
            (Some(a), Some(b)) => Self {
                node: Some(Arc::new(Node::Seq(Self { node: Some(a) }, Self { node: Some(b) }))),
            },
        }
    }

    /// Free-function form of [`Expr::then`].
    pub fn sequence(first: Expr, second: Expr) -> Self {
        first.then(second)
    }

    /// Sequence `body(item)` for every item, in iteration order.
    ///
    /// Bodies are evaluated now; only their text waits for render.
    /// `items` must be finite.
    pub fn for_each<I, F>(items: I, body: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Expr,
    {
        items.into_iter().map(body).collect()
    }

    /// Repeat `body` while `predicate` holds, checked before each pass.
    ///
    /// Both run at render time. Termination is up to the caller: a predicate
    /// that never turns false renders forever.
    pub fn repeat_while<P, B>(predicate: P, body: B) -> Self
    where
        P: Fn() -> bool + Send + Sync + 'static,
        B: Fn() -> Expr + Send + Sync + 'static,
    {
        Self::from_fn(move |sink| {
            while predicate() {
                body().write_to(sink);
            }
        })
    }

    /// Run this expression against `sink`.
    ///
    /// Walks the composition tree with an explicit stack so long clause
    /// chains cannot exhaust the call stack.
    pub fn write_to(&self, sink: &mut Sink) {
        let mut stack: Vec<&Node> = Vec::new();
        stack.extend(self.node.as_deref());
        while let Some(node) = stack.pop() {
            match node {
                Node::Write(write) => write(sink),
                Node::Seq(first, second) => {
                    stack.extend(second.node.as_deref());
                    stack.extend(first.node.as_deref());
                }
            }
        }
    }

    /// Render with default options.
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Render into a fresh sink.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        let mut sink = Sink::new(config);
        self.write_to(&mut sink);
        let clauses = sink.clauses();
        let text = sink.finish();
        tracing::debug!(clauses, bytes = text.len(), "rendered query");
        text
    }
}

impl FromIterator<Expr> for Expr {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        iter.into_iter().fold(Expr::empty(), Expr::then)
    }
}

impl std::iter::Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Self {
        iter.collect()
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Expr(empty)")
        } else {
            f.write_str("Expr(..)")
        }
    }
}
