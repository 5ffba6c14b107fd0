//! Tokenizer and typed accessors for one `name=v1,v2,...` line.
//!
//! Every accessor takes a token index and returns `Ok(None)` when the index
//! is past the end of the token list. That "unset" result is what callers use
//! to fall back to defaults. A token that is present but cannot be coerced is
//! always an error and is never replaced by a fallback.

use std::sync::LazyLock;

use regex::Regex;

use super::{
	error::PictureError,
	relative::{RelativeValue, Sign},
	types::PartsType,
};

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("line pattern is a valid regex")
});

static TOKEN_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#""[^"]*"|[^,]+"#).expect("token pattern is a valid regex"));

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("float pattern is a valid regex")
});

/// One parsed property line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyLine {
	name: String,
	tokens: Vec<String>,
}

impl PropertyLine {
	/// Splits a line into its name and raw tokens
	///
	/// # Examples
	///
	/// ```
	/// use wwapic_types::picture::PropertyLine;
	///
	/// let line = PropertyLine::parse(r#"text="a,b",1"#).unwrap();
	/// assert_eq!(line.name(), "text");
	/// assert_eq!(line.tokens(), &[r#""a,b""#, "1"]);
	/// ```
	pub fn parse(line: &str) -> Result<Self, PictureError> {
		let trimmed = line.trim_end_matches(['\r', '\n']);
		let Some(captures) = LINE_PATTERN.captures(trimmed) else {
			return Err(PictureError::Parse {
				line: line.to_string(),
			});
		};

		let name = captures[1].to_string();
		let tokens =
			TOKEN_PATTERN.find_iter(&captures[2]).map(|m| m.as_str().to_string()).collect();

		Ok(Self {
			name,
			tokens,
		})
	}

	/// Property or animation name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Raw tokens
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Number of tokens
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Returns `true` when the value part was empty
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Raw token at `index`
	pub fn token(&self, index: usize) -> Option<&str> {
		self.tokens.get(index).map(String::as_str)
	}

	fn invalid(&self, index: usize, token: &str, expected: &'static str) -> PictureError {
		PictureError::InvalidValue {
			property: self.name.clone(),
			index,
			token: token.to_string(),
			expected,
		}
	}

	fn missing(&self, index: usize) -> PictureError {
		PictureError::MissingValue {
			property: self.name.clone(),
			index,
		}
	}

	/// Integer with `parseInt` semantics
	pub fn int(&self, index: usize) -> Result<Option<i32>, PictureError> {
		let Some(token) = self.token(index) else {
			return Ok(None);
		};
		parse_int_prefix(token)
			.map(Some)
			.ok_or_else(|| self.invalid(index, token, "an integer"))
	}

	/// Integer, `fallback` when unset
	pub fn int_or(&self, index: usize, fallback: i32) -> Result<i32, PictureError> {
		Ok(self.int(index)?.unwrap_or(fallback))
	}

	/// Integer that must be present
	pub fn require_int(&self, index: usize) -> Result<i32, PictureError> {
		self.int(index)?.ok_or_else(|| self.missing(index))
	}

	/// Real number with `parseFloat` semantics
	pub fn float(&self, index: usize) -> Result<Option<f64>, PictureError> {
		let Some(token) = self.token(index) else {
			return Ok(None);
		};
		parse_float_prefix(token)
			.map(Some)
			.ok_or_else(|| self.invalid(index, token, "a number"))
	}

	/// Real number, `fallback` when unset
	pub fn float_or(&self, index: usize, fallback: f64) -> Result<f64, PictureError> {
		Ok(self.float(index)?.unwrap_or(fallback))
	}

	/// Real number that must be present
	pub fn require_float(&self, index: usize) -> Result<f64, PictureError> {
		self.float(index)?.ok_or_else(|| self.missing(index))
	}

	/// Boolean written as `0` or `1`
	pub fn bool(&self, index: usize) -> Result<Option<bool>, PictureError> {
		let Some(token) = self.token(index) else {
			return Ok(None);
		};
		match token.trim() {
			"0" => Ok(Some(false)),
			"1" => Ok(Some(true)),
			_ => Err(self.invalid(index, token, "0 or 1")),
		}
	}

	/// Boolean, `fallback` when unset
	pub fn bool_or(&self, index: usize, fallback: bool) -> Result<bool, PictureError> {
		Ok(self.bool(index)?.unwrap_or(fallback))
	}

	/// String token, stripped of its surrounding quotes when `quoted` is set
	pub fn string(&self, index: usize, quoted: bool) -> Result<Option<String>, PictureError> {
		let Some(token) = self.token(index) else {
			return Ok(None);
		};
		if !quoted {
			return Ok(Some(token.to_string()));
		}
		match token.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
			Some(inner) => Ok(Some(inner.to_string())),
			None => Err(PictureError::Trim {
				property: self.name.clone(),
				index,
				token: token.to_string(),
			}),
		}
	}

	/// Quoted string, `fallback` when unset
	pub fn string_or(&self, index: usize, fallback: &str) -> Result<String, PictureError> {
		Ok(self.string(index, true)?.unwrap_or_else(|| fallback.to_string()))
	}

	/// Quoted string that must be present
	pub fn require_string(&self, index: usize) -> Result<String, PictureError> {
		self.string(index, true)?.ok_or_else(|| self.missing(index))
	}

	/// Absolute number or `+N`/`-N` offset
	pub fn relative(&self, index: usize) -> Result<Option<RelativeValue>, PictureError> {
		let Some(token) = self.token(index) else {
			return Ok(None);
		};
		let trimmed = token.trim_start();
		let (sign, digits) = if let Some(rest) = trimmed.strip_prefix('+') {
			(Some(Sign::Plus), rest)
		} else if let Some(rest) = trimmed.strip_prefix('-') {
			(Some(Sign::Minus), rest)
		} else {
			(None, trimmed)
		};

		// the sign was consumed above, a second one is not a number
		if digits.starts_with(['+', '-']) {
			return Err(self.invalid(index, token, "a number or a +/- offset"));
		}
		let Some(amount) = parse_int_prefix(digits) else {
			return Err(self.invalid(index, token, "a number or a +/- offset"));
		};

		Ok(Some(match sign {
			Some(sign) => RelativeValue::Offset {
				sign,
				amount,
			},
			None => RelativeValue::Absolute(amount),
		}))
	}

	/// Relative value, `fallback` when unset
	pub fn relative_or(
		&self,
		index: usize,
		fallback: RelativeValue,
	) -> Result<RelativeValue, PictureError> {
		Ok(self.relative(index)?.unwrap_or(fallback))
	}

	/// Relative value that must be present
	pub fn require_relative(&self, index: usize) -> Result<RelativeValue, PictureError> {
		self.relative(index)?.ok_or_else(|| self.missing(index))
	}

	/// Part layer written as a boolean (`1` = map, `0` = object)
	pub fn parts_type(&self, index: usize) -> Result<Option<PartsType>, PictureError> {
		Ok(self.bool(index)?.map(PartsType::from_bool))
	}
}

/// Leading integer of `text`, ignoring anything after the digits
///
/// Returns `None` when there is no digit prefix. Values beyond the `i32`
/// range saturate.
fn parse_int_prefix(text: &str) -> Option<i32> {
	let text = text.trim_start();
	let (negative, rest) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};

	let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
	if digit_count == 0 {
		return None;
	}

	let magnitude = rest[..digit_count]
		.bytes()
		.fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
	let value = if negative { -magnitude } else { magnitude };

	Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Longest numeric prefix of `text` as a real number
fn parse_float_prefix(text: &str) -> Option<f64> {
	let text = text.trim_start();
	let found = FLOAT_PREFIX.find(text)?;
	found.as_str().parse::<f64>().ok()
}
