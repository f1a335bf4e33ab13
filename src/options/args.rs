use std::collections::BTreeMap;

/// Prefix marking a token as an option name.
pub const OPTION_MARKER: &str = "--";

/// A single option value after coercion.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// The value token parsed as a finite number.
    Number(f64),
    /// Any other value token, kept verbatim.
    Text(String),
    /// Option given without a value.
    Flag,
}

impl OptionValue {
    /// Coerce a raw value token: numbers become [`OptionValue::Number`], everything else text.
    pub fn coerce(token: &str) -> Self {
        match token.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && !token.trim().is_empty() => Self::Number(n),
            _ => Self::Text(token.to_string()),
        }
    }

    /// Truthiness used for boolean switches such as `--help`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag => true,
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

/// Flat command line tokens split into an input path and named options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedArgs {
    options: BTreeMap<String, OptionValue>,
}

impl ParsedArgs {
    /// Look up an option by name (without the `--` marker).
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Input path: the first bare token, or an explicit `--input`.
    pub fn input(&self) -> Option<&OptionValue> {
        self.get("input")
    }

    /// Whether `--help` was requested.
    pub fn wants_help(&self) -> bool {
        self.get("help").is_some_and(OptionValue::is_truthy)
    }
}

/// Split a flat token list (program name excluded) into a [`ParsedArgs`].
///
/// `--name value` pairs become options, `--name` followed by nothing or by another option is a
/// flag, and the first bare token is taken as the input path. Later bare tokens are ignored.
/// Never fails: interpreting the values is left to [`crate::RunConfig::resolve`].
pub fn parse_args<I, S>(tokens: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<S> = tokens.into_iter().collect();
    let mut options = BTreeMap::new();

    let mut i = 0;
    while i < tokens.len() {
        let token: &str = tokens[i].as_ref();
        if let Some(name) = token.strip_prefix(OPTION_MARKER) {
            let next: Option<&str> = tokens.get(i + 1).map(|s| s.as_ref());
            match next {
                Some(next) if !next.starts_with(OPTION_MARKER) => {
                    options.insert(name.to_string(), OptionValue::coerce(next));
                    i += 1;
                }
                _ => {
                    options.insert(name.to_string(), OptionValue::Flag);
                }
            }
        } else if !options.contains_key("input") {
            options.insert("input".to_string(), OptionValue::Text(token.to_string()));
        }
        i += 1;
    }

    ParsedArgs { options }
}

#[cfg(test)]
#[path = "../../tests/unit/options/args.rs"]
mod tests;
