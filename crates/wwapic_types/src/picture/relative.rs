//! Values written either as a literal or relative to a base.
//!
//! A token starting with `+` or `-` is an offset from the entity currently
//! being defined (the trigger part, the picture itself); anything else is
//! an absolute number.

use serde::Serialize;

/// Sign of a relative offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sign {
	/// `+N`
	Plus,
	/// `-N`
	Minus,
}

impl Sign {
	fn factor(self) -> i32 {
		match self {
			Self::Plus => 1,
			Self::Minus => -1,
		}
	}
}

/// Absolute number or signed offset from a base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelativeValue {
	/// Literal value
	Absolute(i32),
	/// Offset applied to the base
	Offset {
		/// Direction of the offset
		sign: Sign,
		/// Magnitude of the offset
		amount: i32,
	},
}

impl RelativeValue {
	/// Zero offset, i.e. "same as the base"
	pub const SAME: Self = Self::Offset {
		sign: Sign::Plus,
		amount: 0,
	};

	/// Resolves the value against `base`
	///
	/// # Examples
	///
	/// ```
	/// use wwapic_types::picture::{RelativeValue, Sign};
	///
	/// assert_eq!(RelativeValue::Absolute(3).resolve(7), 3);
	/// let offset = RelativeValue::Offset { sign: Sign::Plus, amount: 5 };
	/// assert_eq!(offset.resolve(7), 12);
	/// ```
	pub fn resolve(&self, base: i32) -> i32 {
		match *self {
			Self::Absolute(value) => value,
			Self::Offset {
				sign,
				amount,
			} => base.saturating_add(sign.factor().saturating_mul(amount)),
		}
	}

	/// Returns `true` for offsets
	pub fn is_relative(&self) -> bool {
		matches!(self, Self::Offset { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve() {
		assert_eq!(RelativeValue::Absolute(-4).resolve(100), -4);
		assert_eq!(
			RelativeValue::Offset {
				sign: Sign::Minus,
				amount: 3
			}
			.resolve(10),
			7
		);
		assert_eq!(RelativeValue::SAME.resolve(42), 42);
	}

	#[test]
	fn test_resolve_saturates() {
		let offset = RelativeValue::Offset {
			sign: Sign::Plus,
			amount: i32::MAX,
		};
		assert_eq!(offset.resolve(10), i32::MAX);
	}
}
