//! Bag algorithms over slices, parameterised by an equality predicate.
//!
//! Nothing here knows about datatypes or function ids. Members are compared
//! pairwise, so every operation is quadratic in the bag sizes.

/// Returns the single member, or the member count when it is not exactly one.
pub fn one_and_only<T>(items: &[T]) -> Result<&T, usize> {
	match items {
		[only] => Ok(only),
		_ => Err(items.len()),
	}
}

pub fn bag_size<T>(items: &[T]) -> usize {
	items.len()
}

pub fn is_in<T>(probe: &T, items: &[T], eq: impl Fn(&T, &T) -> bool) -> bool {
	items.iter().any(|item| eq(probe, item))
}

/// Distinct members of `items` with their multiplicities, first occurrence
/// as representative.
///
/// Every member lands in some group, so a value the predicate does not
/// consider equal to itself (a double NaN) still counts once.
fn groups<'a, T>(items: &'a [T], eq: &impl Fn(&T, &T) -> bool) -> Vec<(&'a T, usize)> {
	let mut out: Vec<(&T, usize)> = Vec::new();
	for item in items {
		match out.iter_mut().find(|(rep, _)| eq(rep, item)) {
			Some((_, n)) => *n += 1,
			None => out.push((item, 1)),
		}
	}
	out
}

/// Multiplicity of `probe` among `groups`.
fn count_in<T>(probe: &T, groups: &[(&T, usize)], eq: &impl Fn(&T, &T) -> bool) -> usize {
	groups
		.iter()
		.filter(|(rep, _)| eq(probe, rep))
		.map(|&(_, n)| n)
		.sum()
}

/// Multiset intersection: each distinct member with `min(count_a, count_b)`.
///
/// Representatives are taken from `a`.
pub fn intersection<'a, T>(a: &'a [T], b: &'a [T], eq: impl Fn(&T, &T) -> bool) -> Vec<(&'a T, usize)> {
	let b = groups(b, &eq);
	groups(a, &eq)
		.into_iter()
		.filter_map(|(item, n)| {
			let n = n.min(count_in(item, &b, &eq));
			(n > 0).then_some((item, n))
		})
		.collect()
}

/// Multiset union: each distinct member with `max(count_a, count_b)`.
///
/// Representatives are taken from `a` first, then from members only `b` has.
pub fn union<'a, T>(a: &'a [T], b: &'a [T], eq: impl Fn(&T, &T) -> bool) -> Vec<(&'a T, usize)> {
	let a = groups(a, &eq);
	let b = groups(b, &eq);
	let only_b = b
		.iter()
		.filter(|&&(item, _)| count_in(item, &a, &eq) == 0)
		.copied();
	a.iter()
		.map(|&(item, n)| (item, n.max(count_in(item, &b, &eq))))
		.chain(only_b)
		.collect()
}

pub fn at_least_one_member_of<T>(a: &[T], b: &[T], eq: impl Fn(&T, &T) -> bool) -> bool {
	a.iter().any(|item| is_in(item, b, &eq))
}

/// True if every distinct member of `a` occurs in `b`. Ignores multiplicity.
pub fn subset<T>(a: &[T], b: &[T], eq: impl Fn(&T, &T) -> bool) -> bool {
	a.iter().all(|item| is_in(item, b, &eq))
}

pub fn set_equals<T>(a: &[T], b: &[T], eq: impl Fn(&T, &T) -> bool) -> bool {
	subset(a, b, &eq) && subset(b, a, &eq)
}
