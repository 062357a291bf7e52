use std::{
  char::{ToLowercase, ToUppercase},
  collections::HashSet,
  iter::Peekable,
  sync::LazyLock,
};

use any_ascii::any_ascii;
use inflections::Inflect;
use proc_macro2::{Ident, Span};
use regex::Regex;

pub(crate) static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let",
    "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type",
    "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen",
  ]
  .into_iter()
  .collect()
});

/// Keywords that cannot be written as raw identifiers.
static NON_RAW_KEYWORDS: LazyLock<HashSet<&str>> =
  LazyLock::new(|| ["self", "Self", "super", "crate"].into_iter().collect());

static RESERVED_PASCAL_CASE: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "Box", "Clone", "Copy", "Default", "Display", "Send", "Sync", "Type", "Vec", "Option", "Result", "String",
    "HashMap", "AsciiSet", "Serialize", "Deserialize", "Service", "ClientError", "UriBuilder", "UnboundPathParameter",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Transliterates to ASCII, replaces invalid characters with underscores, collapses
/// consecutive underscores, and trims any leading or trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Strips a namespace or package qualifier, keeping the segment after the last `.`.
///
/// `main.User` becomes `User`; a name without a qualifier is returned unchanged.
pub(crate) fn strip_namespace(name: &str) -> &str {
  name.rsplit_once('.').map_or(name, |(_, last)| last)
}

/// Makes a lowercase or snake-case identifier usable in Rust source.
fn escape_value_identifier(mut ident: String, fallback: &str) -> String {
  if ident.is_empty() {
    return fallback.to_string();
  }

  if NON_RAW_KEYWORDS.contains(ident.as_str()) {
    ident.push('_');
    return ident;
  }

  if FORBIDDEN_IDENTIFIERS.contains(ident.as_str()) {
    return format!("r#{ident}");
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Converts a description parameter name into a method argument name.
///
/// The name is lower-cased and every character that cannot appear in an
/// identifier (hyphens, dots, spaces) becomes `_`: `user-id` becomes `user_id`.
pub(crate) fn to_parameter_name(name: &str) -> String {
  let ident: String = any_ascii(name)
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
    .collect();
  escape_value_identifier(ident, "param")
}

/// Converts an operation nickname into a method name, keeping its case.
pub(crate) fn to_method_name(nickname: &str) -> String {
  let ident: String = any_ascii(nickname)
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
    .collect();
  escape_value_identifier(ident, "operation")
}

/// Converts a package name into a module name.
pub(crate) fn to_module_name(name: &str) -> String {
  escape_value_identifier(sanitize(name).to_snake_case(), "client")
}

/// Converts a string into a valid Rust field name (`snake_case`).
///
/// # Rules:
/// 1. If the string starts with `-`, it's stripped and "negative_" is prepended to the result.
/// 2. Sanitizes the base string.
/// 3. Converts to `snake_case`.
/// 4. `self`, `super` and `crate` get a trailing underscore.
/// 5. If the result is a keyword, it gets a raw identifier prefix (`r#`).
/// 6. If the result starts with a digit, it's prefixed with `_`.
/// 7. If the result is empty, it becomes `field`.
pub(crate) fn to_rust_field_name(name: &str) -> String {
  let (has_leading_minus, name_without_minus) = if let Some(stripped) = name.strip_prefix('-') {
    (true, stripped)
  } else {
    (false, name)
  };

  let mut ident = sanitize(name_without_minus).to_snake_case();

  if !ident.is_empty() && has_leading_minus {
    ident = format!("negative_{ident}");
  }

  escape_value_identifier(ident, "field")
}

/// Converts a string into a valid Rust type name (`PascalCase`).
///
/// # Rules:
/// 1. If the input already has mixed case (both upper and lowercase, no separators), preserve capitalization.
/// 2. Otherwise, sanitizes the base string and converts to `PascalCase` using capitalize_words.
/// 3. If the result collides with a prelude or generated name (e.g., `Vec`, `Service`), it gets a `Model` suffix.
/// 4. If the result starts with a digit, it's prefixed with `T`.
/// 5. If the result is empty, it becomes `Unnamed`.
pub(crate) fn to_rust_type_name(name: &str) -> String {
  let has_separators = name.contains(['-', '_', '.', ' ']);
  let has_upper = name.chars().any(|c| c.is_ascii_uppercase());
  let has_lower = name.chars().any(|c| c.is_ascii_lowercase());
  let appears_mixed_case = !has_separators && has_upper && has_lower;

  let ascii = any_ascii(name);
  let mut ident: String = if appears_mixed_case {
    let cleaned: String = ascii.chars().filter(char::is_ascii_alphanumeric).collect();
    let mut chars = cleaned.chars();
    match chars.next() {
      None => String::new(),
      Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
  } else {
    ascii
      .chars()
      .capitalize_words_with_boundaries()
      .filter(char::is_ascii_alphanumeric)
      .collect()
  };

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if ident == "Self" || RESERVED_PASCAL_CASE.contains(ident.as_str()) {
    ident.push_str("Model");
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, 'T');
  }

  ident
}

/// Builds an identifier token, honoring the `r#` raw prefix produced by the naming functions.
pub(crate) fn ident(name: &str) -> Ident {
  match name.strip_prefix("r#") {
    Some(raw) => Ident::new_raw(raw, Span::call_site()),
    None => Ident::new(name, Span::call_site()),
  }
}

/// An extension trait for char iterators to add word capitalization.
pub trait CapitalizeWordsExt: Iterator<Item = char> {
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized;
}

impl<I> CapitalizeWordsExt for I
where
  I: Iterator<Item = char>,
{
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized,
  {
    CapitalizeWordsWithBoundaries {
      iter: self.peekable(),
      capitalize_next: true,
      prev_was_lower: false,
      pending_upper: None,
      pending_lower: None,
    }
  }
}

pub struct CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  iter: Peekable<I>,
  capitalize_next: bool,
  prev_was_lower: bool,
  pending_upper: Option<ToUppercase>,
  pending_lower: Option<ToLowercase>,
}

impl<I> Iterator for CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  type Item = char;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if let Some(ref mut upper_iter) = self.pending_upper {
      if let Some(c) = upper_iter.next() {
        return Some(c);
      }
      self.pending_upper = None;
    }

    if let Some(ref mut lower_iter) = self.pending_lower {
      if let Some(c) = lower_iter.next() {
        return Some(c);
      }
      self.pending_lower = None;
    }

    let c = self.iter.next()?;

    if !c.is_ascii_alphanumeric() {
      self.capitalize_next = self.iter.peek().is_some_and(char::is_ascii_alphanumeric);
      self.prev_was_lower = false;
      return Some(c);
    }

    let is_lower = c.is_ascii_lowercase();
    let is_upper = c.is_ascii_uppercase();

    let should_capitalize = self.capitalize_next
      || (self.prev_was_lower && is_upper)
      || (is_upper && self.iter.peek().is_some_and(char::is_ascii_lowercase));

    self.prev_was_lower = is_lower;
    self.capitalize_next = false;

    let mut pending = if should_capitalize {
      PendingCase::Upper(c.to_uppercase())
    } else {
      PendingCase::Lower(c.to_lowercase())
    };
    let first = pending.next();
    match pending {
      PendingCase::Upper(rest) => self.pending_upper = Some(rest),
      PendingCase::Lower(rest) => self.pending_lower = Some(rest),
    }
    first
  }
}

enum PendingCase {
  Upper(ToUppercase),
  Lower(ToLowercase),
}

impl PendingCase {
  fn next(&mut self) -> Option<char> {
    match self {
      Self::Upper(iter) => iter.next(),
      Self::Lower(iter) => iter.next(),
    }
  }
}
