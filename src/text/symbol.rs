use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lookup
{
	NotFound,
	Found(i64),
}

impl Lookup
{
	pub fn exists(&self) -> bool
	{
		match self
		{
			Self::NotFound => false,
			Self::Found(..) => true,
		}
	}
	
	pub fn value(&self) -> Option<i64>
	{
		match self
		{
			&Self::Found(v) => Some(v),
			Self::NotFound => None,
		}
	}
}

/// Named offsets an expression may refer to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Symbols(HashMap<String, i64>);

impl Symbols
{
	pub fn new() -> Self
	{
		Self(HashMap::new())
	}
	
	pub fn get(&self, name: &str) -> Lookup
	{
		match self.0.get(name)
		{
			None => Lookup::NotFound,
			Some(&v) => Lookup::Found(v),
		}
	}
	
	/// Returns the previous value if `name` was already defined.
	pub fn define(&mut self, name: impl Into<String>, value: i64) -> Option<i64>
	{
		self.0.insert(name.into(), value)
	}
	
	pub fn len(&self) -> usize
	{
		self.0.len()
	}
	
	pub fn is_empty(&self) -> bool
	{
		self.0.is_empty()
	}
}

impl FromIterator<(String, i64)> for Symbols
{
	fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self
	{
		Self(iter.into_iter().collect())
	}
}

impl Extend<(String, i64)> for Symbols
{
	fn extend<I: IntoIterator<Item = (String, i64)>>(&mut self, iter: I)
	{
		self.0.extend(iter)
	}
}
