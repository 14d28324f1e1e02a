//! Text-object options and the `:set` syntax that changes them.
//!
//! Argument objects (`ia`, `aa`) are delimited by configurable character
//! sets so they can follow the conventions of the language being edited.
//! Options are changed with Vim's `:set` syntax.
//!
//! # Supported syntax
//!
//! | Syntax           | Effect                        |
//! |------------------|-------------------------------|
//! | `:set option?`   | Query current value           |
//! | `:set option`    | Query current value           |
//! | `:set option=s`  | Assign a character list       |
//! | `:set`           | Show changed options          |
//! | `:set all`       | Show all options              |
//!
//! Every option holds characters, so the boolean forms (`:set nooption`,
//! `:set option!`) parse but are rejected when applied.
//!
//! # Option names
//!
//! Both full names and abbreviations are accepted:
//!
//! | Full name  | Abbrev | Type      | Default |
//! |------------|--------|-----------|---------|
//! | `argopen`  | `ao`   | char list | `([`    |
//! | `argclose` | `ac`   | char list | `)]`    |
//! | `argsep`   | `asep` | char list | `,`     |
//!
//! `argopen` and `argclose` must hold the same number of characters.

use thiserror::Error;

/// A parsed `:set` directive.
///
/// Produced by [`parse_set`] from the arguments to `:set`. [`Options::apply`]
/// interprets these to read or modify option values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `:set nooption`, `:set option!`, or a bare name that is not an
    /// option: boolean syntax, which no option accepts.
    Boolean(String),

    /// `:set option?`: query the current value.
    Query(String),

    /// `:set option=value`: assign a value.
    Assign(String, String),

    /// `:set` with no arguments: show changed options.
    ShowChanged,

    /// `:set all`: show all options.
    ShowAll,
}

/// Errors from applying a `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The option name is not recognized.
    #[error("unknown option: {0}")]
    Unknown(String),

    /// `no`/`!` used on an option that holds characters.
    #[error("not a boolean option: {0}")]
    NotBoolean(String),

    /// A character list was assigned an empty value.
    #[error("option needs at least one character: {0}")]
    Empty(String),

    /// The opening and closing delimiter lists differ in length.
    #[error("argopen \"{open}\" and argclose \"{close}\" must have the same length")]
    Unbalanced {
        /// The `argopen` value.
        open: String,
        /// The `argclose` value.
        close: String,
    },
}

/// Maps a full option name or abbreviation to the full name.
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
    match name {
        "argopen" | "ao" => Some("argopen"),
        "argclose" | "ac" => Some("argclose"),
        "argsep" | "asep" => Some("argsep"),
        _ => None,
    }
}

/// Returns `true` if `name` is a known option (full name or abbreviation).
#[must_use]
pub fn is_known_option(name: &str) -> bool {
    canonical_name(name).is_some()
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Delimiter sets used by the argument text objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Characters that open an argument list.
    pub arg_open: Vec<char>,
    /// Characters that close an argument list.
    pub arg_close: Vec<char>,
    /// Characters that separate arguments.
    pub arg_separators: Vec<char>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            arg_open: vec!['(', '['],
            arg_close: vec![')', ']'],
            arg_separators: vec![','],
        }
    }
}

impl Options {
    #[inline]
    #[must_use]
    pub fn is_arg_open(&self, ch: char) -> bool {
        self.arg_open.contains(&ch)
    }

    #[inline]
    #[must_use]
    pub fn is_arg_close(&self, ch: char) -> bool {
        self.arg_close.contains(&ch)
    }

    #[inline]
    #[must_use]
    pub fn is_arg_separator(&self, ch: char) -> bool {
        self.arg_separators.contains(&ch)
    }

    /// The value of an option as `:set` shows it (`argopen=([`).
    ///
    /// # Errors
    ///
    /// [`OptionError::Unknown`] for an unrecognized name.
    pub fn show(&self, name: &str) -> Result<String, OptionError> {
        let full = canonical_name(name).ok_or_else(|| OptionError::Unknown(name.to_string()))?;
        let value: String = self.list(full).iter().collect();
        Ok(format!("{full}={value}"))
    }

    /// Apply one directive. Returns the lines a query or listing displays.
    ///
    /// The delimiter lists are not checked against each other here, since a
    /// change usually takes two directives; [`Options::apply_set`] checks the
    /// result of a whole `:set` line.
    ///
    /// # Errors
    ///
    /// Unknown names, boolean syntax on a character list, and empty values.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Vec<String>, OptionError> {
        match directive {
            SetDirective::Boolean(name) => {
                if is_known_option(name) {
                    Err(OptionError::NotBoolean(name.clone()))
                } else {
                    Err(OptionError::Unknown(name.clone()))
                }
            }
            SetDirective::Query(name) => Ok(vec![self.show(name)?]),
            SetDirective::Assign(name, value) => {
                let full =
                    canonical_name(name).ok_or_else(|| OptionError::Unknown(name.clone()))?;
                let chars: Vec<char> = value.chars().filter(|ch| !ch.is_whitespace()).collect();
                if chars.is_empty() {
                    return Err(OptionError::Empty(full.to_string()));
                }
                tracing::debug!(option = full, %value, "option set");
                *self.list_mut(full) = chars;
                Ok(Vec::new())
            }
            SetDirective::ShowChanged => {
                let defaults = Self::default();
                Ok(ALL_OPTIONS
                    .iter()
                    .filter(|name| self.list(name) != defaults.list(name))
                    .filter_map(|name| self.show(name).ok())
                    .collect())
            }
            SetDirective::ShowAll => Ok(ALL_OPTIONS
                .iter()
                .filter_map(|name| self.show(name).ok())
                .collect()),
        }
    }

    /// Parse and apply a whole `:set` argument string.
    ///
    /// Either every directive is applied or none is.
    ///
    /// # Errors
    ///
    /// The first directive error, or [`OptionError::Unbalanced`] when the
    /// resulting delimiter lists differ in length.
    pub fn apply_set(&mut self, args: &str) -> Result<Vec<String>, OptionError> {
        let mut next = self.clone();
        let mut lines = Vec::new();
        for directive in parse_set(args) {
            lines.extend(next.apply(&directive)?);
        }
        if next.arg_open.len() != next.arg_close.len() {
            return Err(OptionError::Unbalanced {
                open: next.arg_open.iter().collect(),
                close: next.arg_close.iter().collect(),
            });
        }
        *self = next;
        Ok(lines)
    }

    fn list(&self, full_name: &str) -> &[char] {
        match full_name {
            "argopen" => &self.arg_open,
            "argclose" => &self.arg_close,
            _ => &self.arg_separators,
        }
    }

    fn list_mut(&mut self, full_name: &str) -> &mut Vec<char> {
        match full_name {
            "argopen" => &mut self.arg_open,
            "argclose" => &mut self.arg_close,
            _ => &mut self.arg_separators,
        }
    }
}

const ALL_OPTIONS: [&str; 3] = ["argopen", "argclose", "argsep"];

// ---------------------------------------------------------------------------
// `:set` parsing
// ---------------------------------------------------------------------------

/// Parse the full `:set` arguments string into directives.
///
/// Multiple space-separated arguments are supported (e.g., `:set ao=({ ac=)}`).
/// An empty argument string produces [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single `:set` argument into a directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }

    // Assignment: option=value
    if let Some(eq_pos) = arg.find('=') {
        let name = &arg[..eq_pos];
        let value = &arg[eq_pos + 1..];
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    // Query: option?
    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }

    // Toggle: option!
    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Boolean(name.to_string());
    }

    // Bare option name = query its value (Vim behavior for non-booleans).
    if is_known_option(arg) {
        return SetDirective::Query(arg.to_string());
    }

    // Negation: nooption, only when the remainder is a known option, so an
    // unknown name starting with "no" is reported whole.
    if let Some(name) = arg.strip_prefix("no") {
        if is_known_option(name) {
            return SetDirective::Boolean(name.to_string());
        }
    }

    SetDirective::Boolean(arg.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
