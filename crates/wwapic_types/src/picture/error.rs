//! Error types for picture configuration and storage.

use thiserror::Error;

/// Errors that can occur while configuring pictures or accessing the picture store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PictureError {
	/// Line does not have the `name=value` shape
	#[error("Not a property line: {line:?}")]
	Parse {
		/// The offending line
		line: String,
	},

	/// Token is present but cannot be coerced into the requested type
	#[error("Invalid value for `{property}` at index {index}: {token:?} is not {expected}")]
	InvalidValue {
		/// Property or animation name of the line
		property: String,
		/// Token index within the line
		index: usize,
		/// Raw token text
		token: String,
		/// Human readable description of the expected type
		expected: &'static str,
	},

	/// Required token is absent
	#[error("Missing value for `{property}` at index {index}")]
	MissingValue {
		/// Property or animation name of the line
		property: String,
		/// Token index within the line
		index: usize,
	},

	/// Quoted string token is not wrapped in quotes on both ends
	#[error("Value for `{property}` at index {index} must be wrapped in double quotes: {token:?}")]
	Trim {
		/// Property or animation name of the line
		property: String,
		/// Token index within the line
		index: usize,
		/// Raw token text
		token: String,
	},

	/// Coerced value violates a domain constraint
	#[error("Invalid `{property}`: {reason}")]
	Validation {
		/// Property or animation name of the line
		property: String,
		/// What constraint was violated
		reason: String,
	},

	/// Picture store index outside the store capacity
	#[error("Picture id {id} out of range (capacity: {capacity})")]
	IndexOutOfRange {
		/// Requested picture id
		id: usize,
		/// Capacity of the store
		capacity: usize,
	},

	/// Line name is not a known property
	#[error("Unknown property: {0}")]
	UnknownProperty(String),

	/// Line name looks like an animation but is not a known one
	#[error("Unknown animation: {0}")]
	UnknownAnimation(String),
}

impl PictureError {
	/// Shorthand for a [`PictureError::Validation`] error
	pub fn validation(property: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::Validation {
			property: property.into(),
			reason: reason.into(),
		}
	}

	/// Returns `true` for errors raised by a malformed line shape
	pub fn is_parse_error(&self) -> bool {
		matches!(self, Self::Parse { .. })
	}

	/// Returns `true` for token coercion errors
	pub fn is_value_error(&self) -> bool {
		matches!(
			self,
			Self::InvalidValue { .. } | Self::MissingValue { .. } | Self::Trim { .. }
		)
	}

	/// Returns `true` for domain constraint violations
	pub fn is_validation_error(&self) -> bool {
		matches!(self, Self::Validation { .. })
	}
}
