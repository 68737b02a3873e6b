//! Combinators over several upstream sequences.
//!
//! - [`zip`] / [`zip2`]..[`zip5`] -- lockstep rounds, one pull per source
//! - [`chain`] -- concatenation in argument order
//! - [`product`] -- cartesian cross join in lexicographic order
//! - [`Sequence::difference_with`] -- exclusion by comparator
//!
//! Sources are always pulled left to right, so output order depends only on
//! argument order.

use crate::config::Limits;
use crate::error::Result;
use crate::Sequence;

// ---- zip ----

/// N-ary lockstep state: every round pulls each source once, in order.
#[derive(Clone, Debug)]
pub struct ZipOp<I> {
    sources: Vec<I>,
    round: usize,
    done: bool,
}

impl<K, V, I> Iterator for ZipOp<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (usize, Vec<V>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut tuple = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.next() {
                Some((_, v)) => tuple.push(v),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
        let round = self.round;
        self.round += 1;
        Some((round, tuple))
    }
}

/// Zip any number of same-typed sequences into rounds of values.
///
/// A round is emitted only if every source produced a value; the first
/// exhausted source ends the whole sequence. Zero sources yield nothing.
/// Keys are discarded; rounds are keyed by their index.
///
/// ```
/// use seqflow::*;
///
/// let out = zip(vec![from_vec(vec![1, 2, 3]), from_vec(vec![10, 20])]).to_vec();
/// assert_eq!(out, vec![vec![1, 10], vec![2, 20]]);
/// ```
pub fn zip<K, V, I, S>(sources: S) -> Sequence<ZipOp<I>>
where
    S: IntoIterator<Item = Sequence<I>>,
    I: Iterator<Item = (K, V)>,
{
    let sources: Vec<I> = sources.into_iter().map(Sequence::into_inner).collect();
    let done = sources.is_empty();
    Sequence::new(ZipOp {
        sources,
        round: 0,
        done,
    })
}

macro_rules! zip_arity {
    ($n:literal => $($src:ident: $I:ident<$K:ident, $V:ident>),+) => {
        paste::paste! {
            #[doc = concat!("Lockstep state over ", stringify!($n), " sources of distinct value types.")]
            #[derive(Clone, Debug)]
            pub struct [<Zip $n Op>]<$($I),+> {
                $($src: $I,)+
                round: usize,
                done: bool,
            }

            impl<$($I, $K, $V),+> Iterator for [<Zip $n Op>]<$($I),+>
            where
                $($I: Iterator<Item = ($K, $V)>,)+
            {
                type Item = (usize, ($($V,)+));

                fn next(&mut self) -> Option<Self::Item> {
                    if self.done {
                        return None;
                    }
                    $(
                        let Some((_, $src)) = self.$src.next() else {
                            self.done = true;
                            return None;
                        };
                    )+
                    let round = self.round;
                    self.round += 1;
                    Some((round, ($($src,)+)))
                }
            }

            #[doc = concat!("Zip ", stringify!($n), " sequences into tuples; stops at the shortest.")]
            pub fn [<zip $n>]<$($I, $K, $V),+>($($src: Sequence<$I>),+) -> Sequence<[<Zip $n Op>]<$($I),+>>
            where
                $($I: Iterator<Item = ($K, $V)>,)+
            {
                Sequence::new([<Zip $n Op>] {
                    $($src: $src.iter,)+
                    round: 0,
                    done: false,
                })
            }
        }
    };
}

zip_arity!(2 => a: A<KA, VA>, b: B<KB, VB>);
zip_arity!(3 => a: A<KA, VA>, b: B<KB, VB>, c: C<KC, VC>);
zip_arity!(4 => a: A<KA, VA>, b: B<KB, VB>, c: C<KC, VC>, d: D<KD, VD>);
zip_arity!(5 => a: A<KA, VA>, b: B<KB, VB>, c: C<KC, VC>, d: D<KD, VD>, e: E<KE, VE>);

// ---- chain ----

/// Concatenation state: drains `sources[current]` before moving on.
#[derive(Clone, Debug)]
pub struct ChainOp<I> {
    sources: Vec<I>,
    current: usize,
}

impl<I: Iterator> Iterator for ChainOp<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(source) = self.sources.get_mut(self.current) {
            if let Some(item) = source.next() {
                return Some(item);
            }
            self.current += 1;
        }
        None
    }
}

/// Concatenate sequences in argument order, keeping every key and value.
///
/// Use [`Sequence::boxed`] to chain sequences built from different operators.
pub fn chain<I, S>(sources: S) -> Sequence<ChainOp<I>>
where
    S: IntoIterator<Item = Sequence<I>>,
    I: Iterator,
{
    Sequence::new(ChainOp {
        sources: sources.into_iter().map(Sequence::into_inner).collect(),
        current: 0,
    })
}

// ---- product ----

/// Cartesian product state.
///
/// The first source is pulled lazily; the others are buffered once and walked
/// with an odometer of indices, rightmost fastest.
#[derive(Clone, Debug)]
pub struct ProductOp<I, V> {
    head: Option<I>,
    rest: Vec<Vec<V>>,
    current: Option<V>,
    odometer: Vec<usize>,
    round: usize,
    done: bool,
}

impl<I, V> ProductOp<I, V> {
    /// Step the odometer; `false` once it wraps around.
    fn advance(&mut self) -> bool {
        for (slot, buffer) in self.odometer.iter_mut().zip(&self.rest).rev() {
            *slot += 1;
            if *slot < buffer.len() {
                return true;
            }
            *slot = 0;
        }
        false
    }
}

impl<K, V, I> Iterator for ProductOp<I, V>
where
    I: Iterator<Item = (K, V)>,
    V: Clone,
{
    type Item = (usize, Vec<V>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let head = match self.current.take() {
            Some(v) => v,
            None => match self.head.as_mut().and_then(Iterator::next) {
                Some((_, v)) => v,
                None => {
                    self.done = true;
                    return None;
                }
            },
        };
        let mut tuple = Vec::with_capacity(self.rest.len() + 1);
        tuple.push(head.clone());
        tuple.extend(
            self.rest
                .iter()
                .zip(&self.odometer)
                .map(|(buffer, &i)| buffer[i].clone()),
        );
        if self.advance() {
            self.current = Some(head);
        }
        let round = self.round;
        self.round += 1;
        Some((round, tuple))
    }
}

/// Cartesian product of same-typed sequences, with the default [`Limits`].
///
/// # Errors
/// See [`product_with_limits`].
pub fn product<K, V, I, S>(sources: S) -> Result<Sequence<ProductOp<I, V>>>
where
    S: IntoIterator<Item = Sequence<I>>,
    I: Iterator<Item = (K, V)>,
{
    product_with_limits(sources, &Limits::default())
}

/// Cartesian product of same-typed sequences.
///
/// Each output tuple lists one value per source in argument order; tuples come
/// out in lexicographic order with the last source varying fastest. Zero
/// sources yield nothing, one source yields singleton tuples.
///
/// The first source is pulled lazily and exactly once. Every other source is
/// drained into a buffer here, before the first pull, because it is replayed
/// for each value of the first. If any of them is empty the product is empty
/// and the first source is never pulled.
///
/// # Errors
/// [`SeqError::BufferLimit`](crate::SeqError::BufferLimit) when a buffered
/// source exceeds `limits.max_buffered`.
///
/// # Example
/// ```
/// use seqflow::*;
///
/// let out = product(vec![from_vec(vec!["1", "2"]), from_vec(vec!["a", "b"])])?.to_vec();
/// assert_eq!(out, vec![vec!["1", "a"], vec!["1", "b"], vec!["2", "a"], vec!["2", "b"]]);
/// # Ok::<(), SeqError>(())
/// ```
pub fn product_with_limits<K, V, I, S>(sources: S, limits: &Limits) -> Result<Sequence<ProductOp<I, V>>>
where
    S: IntoIterator<Item = Sequence<I>>,
    I: Iterator<Item = (K, V)>,
{
    let mut sources = sources.into_iter();
    let head = sources.next().map(Sequence::into_inner);
    let rest = sources
        .map(|s| limits.buffer("product source", s.iter.map(|(_, v)| v)))
        .collect::<Result<Vec<_>>>()?;
    let done = head.is_none() || rest.iter().any(Vec::is_empty);
    Ok(Sequence::new(ProductOp {
        head,
        odometer: vec![0; rest.len()],
        rest,
        current: None,
        round: 0,
        done,
    }))
}

// ---- difference ----

/// Exclusion state: `others` is the buffered right-hand side.
#[derive(Clone, Debug)]
pub struct DifferenceWithOp<I, W, F> {
    iter: I,
    others: Vec<W>,
    cmp: F,
}

impl<K, V, W, I, F> Iterator for DifferenceWithOp<I, W, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(&V, &W) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (k, v) = self.iter.next()?;
            let cmp = &mut self.cmp;
            if !self.others.iter().any(|w| cmp(&v, w)) {
                return Some((k, v));
            }
        }
    }
}

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Append `other` after this sequence.
    pub fn chain_with<J>(self, other: Sequence<J>) -> Sequence<std::iter::Chain<I, J>>
    where
        J: Iterator<Item = (K, V)>,
    {
        Sequence::new(self.iter.chain(other.iter))
    }

    /// Zip with another sequence into value tuples; the method form of [`zip2`].
    pub fn zip_with<J, KB, W>(self, other: Sequence<J>) -> Sequence<Zip2Op<I, J>>
    where
        J: Iterator<Item = (KB, W)>,
    {
        zip2(self, other)
    }

    /// Keep the values for which no element of `other` satisfies
    /// `cmp(value, other_value)`, with the default [`Limits`].
    ///
    /// # Errors
    /// See [`difference_with_limits`](Sequence::difference_with_limits).
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let out = from_vec(vec![1, 2, 3, 4])
    ///     .difference_with(|a, b| a == b, from_vec(vec![2, 4]))?
    ///     .collect::<Vec<_>>();
    /// assert_eq!(out, vec![(0, 1), (2, 3)]);
    /// # Ok::<(), SeqError>(())
    /// ```
    pub fn difference_with<J, KB, W, F>(
        self,
        cmp: F,
        other: Sequence<J>,
    ) -> Result<Sequence<DifferenceWithOp<I, W, F>>>
    where
        J: Iterator<Item = (KB, W)>,
        F: FnMut(&V, &W) -> bool,
    {
        self.difference_with_limits(cmp, other, &Limits::default())
    }

    /// Keep the values for which no element of `other` satisfies `cmp`.
    ///
    /// `other` is buffered once, here, and rescanned for every value pulled
    /// from `self`, so the cost is O(|self| x |other|). Keys of `self` are kept.
    ///
    /// # Errors
    /// [`SeqError::BufferLimit`](crate::SeqError::BufferLimit) when `other`
    /// exceeds `limits.max_buffered`.
    pub fn difference_with_limits<J, KB, W, F>(
        self,
        cmp: F,
        other: Sequence<J>,
        limits: &Limits,
    ) -> Result<Sequence<DifferenceWithOp<I, W, F>>>
    where
        J: Iterator<Item = (KB, W)>,
        F: FnMut(&V, &W) -> bool,
    {
        let others = limits.buffer("difference exclusion set", other.iter.map(|(_, w)| w))?;
        Ok(Sequence::new(DifferenceWithOp {
            iter: self.iter,
            others,
            cmp,
        }))
    }
}
