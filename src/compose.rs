//! Function composition and handler stacks.
//!
//! [`pipe!`](crate::pipe) and [`compose!`](crate::compose) chain closures of
//! different types at compile time; [`pipe_all`] and [`compose_all`] do the
//! same for a runtime list of same-typed functions. [`Stack`] is a
//! middleware chain where each handler may answer or defer to the next one.

use crate::error::SeqError;

/// Chain functions left to right: `pipe!(f, g)(x) == g(f(x))`.
///
/// ```
/// use seqflow::pipe;
///
/// let shout = pipe!(
///     |s: String| s.trim().to_string(),
///     |s: String| s.to_uppercase(),
///     |s: String| s + "!",
/// );
/// assert_eq!(shout("  hi ".to_string()), "HI!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($f:expr $(,)?) => { $f };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let first = $f;
        let rest = $crate::pipe!($($rest),+);
        move |x| rest(first(x))
    }};
}

/// Chain functions right to left: `compose!(f, g)(x) == f(g(x))`.
///
/// ```
/// use seqflow::compose;
///
/// let f = compose!(|n: i32| n * 2, |n: i32| n + 1);
/// assert_eq!(f(3), 8);
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => { $f };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let last = $f;
        let rest = $crate::compose!($($rest),+);
        move |x| last(rest(x))
    }};
}

/// Apply `fns` in order. An empty list is the identity.
pub fn pipe_all<T, F>(fns: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |x| fns.iter().fold(x, |acc, f| f(acc))
}

/// Apply `fns` in reverse order. An empty list is the identity.
pub fn compose_all<T, F>(fns: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |x| fns.iter().rev().fold(x, |acc, f| f(acc))
}

type Handler<A, R> = Box<dyn for<'n> Fn(A, Next<'n, A, R>) -> anyhow::Result<R>>;
type Terminal<A, R> = Box<dyn Fn(A) -> anyhow::Result<R>>;

/// The rest of a [`Stack`], handed to each handler.
pub struct Next<'s, A, R> {
    handlers: &'s [Handler<A, R>],
    last: Option<&'s Terminal<A, R>>,
}

impl<A, R> Next<'_, A, R> {
    /// Defer to the next handler, or to the terminal handler when none is left.
    ///
    /// # Errors
    /// Whatever the handler that answers returns, or [`SeqError::NoHandler`]
    /// when the stack has no terminal handler.
    pub fn run(self, arg: A) -> anyhow::Result<R> {
        match self.handlers.split_last() {
            Some((handler, rest)) => handler(
                arg,
                Next {
                    handlers: rest,
                    last: self.last,
                },
            ),
            None => match self.last {
                Some(last) => last(arg),
                None => Err(SeqError::NoHandler.into()),
            },
        }
    }
}

/// A handler chain. The most recently pushed handler runs first.
///
/// ```
/// use seqflow::compose::Stack;
///
/// let mut stack = Stack::<i32, String>::new();
/// stack.push(|n: i32, next| if n < 0 { Ok("negative".to_string()) } else { next.run(n) });
/// stack.push(|n: i32, next| if n == 0 { Ok("zero".to_string()) } else { next.run(n) });
///
/// assert_eq!(stack.run(0)?, "zero");
/// assert_eq!(stack.run(-3)?, "negative");
/// assert!(stack.run(5).is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Stack<A, R> {
    handlers: Vec<Handler<A, R>>,
    last: Option<Terminal<A, R>>,
}

impl<A, R> Default for Stack<A, R> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            last: None,
        }
    }
}

impl<A, R> Stack<A, R> {
    /// An empty stack whose terminal handler fails with [`SeqError::NoHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the terminal handler, reached when every handler defers.
    #[must_use]
    pub fn with_last<F>(mut self, last: F) -> Self
    where
        F: Fn(A) -> anyhow::Result<R> + 'static,
    {
        self.last = Some(Box::new(last));
        self
    }

    /// Push a handler on top of the stack.
    pub fn push<F>(&mut self, handler: F) -> &mut Self
    where
        F: for<'n> Fn(A, Next<'n, A, R>) -> anyhow::Result<R> + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Number of pushed handlers, not counting the terminal one.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers have been pushed.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run `arg` through the stack.
    ///
    /// # Errors
    /// The error of the handler that answered, or [`SeqError::NoHandler`] when
    /// every handler deferred and no terminal handler is set.
    pub fn run(&self, arg: A) -> anyhow::Result<R> {
        Next {
            handlers: &self.handlers,
            last: self.last.as_ref(),
        }
        .run(arg)
    }
}
