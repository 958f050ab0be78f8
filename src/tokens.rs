//! Token classification: flags, their adjacent values, and positionals.

use std::collections::HashMap;
use tracing::trace;

/// Marks the end of flags; everything after it is positional.
pub const END_OF_FLAGS: &str = "--";

/// A token is flag-like if it starts with one or two dashes.
pub fn is_flag_like(token: &str) -> bool {
    token.starts_with('-')
}

/// Tokens following the first `--`, or all of them when there is none.
pub fn strip_end_of_flags(args: &[String]) -> (&[String], bool) {
    match args.iter().position(|a| a == END_OF_FLAGS) {
        Some(idx) => (&args[idx + 1..], true),
        None => (args, false),
    }
}

/// Result of classifying one token list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Flag token (with dashes) to the value token that followed it
    pub values: HashMap<String, String>,
    /// Flag token to its index in the input
    pub positions: HashMap<String, usize>,
    /// Unconsumed tokens, in input order
    pub positionals: Vec<String>,
    /// Input index of each positional token
    pub positional_indices: Vec<usize>,
}

impl Classification {
    /// The value recorded for a flag, if one followed it.
    pub fn value(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    /// Whether the flag appeared at all, with or without a value.
    pub fn is_present(&self, flag: &str) -> bool {
        self.positions.contains_key(flag)
    }

    /// The earliest positional token and its input index.
    pub fn first_positional(&self) -> Option<(usize, &str)> {
        self.positionals
            .first()
            .zip(self.positional_indices.first())
            .map(|(token, idx)| (*idx, token.as_str()))
    }
}

/// Classify tokens in a single forward pass.
///
/// A bare token directly after a flag-like token is that flag's value. A flag
/// followed by another flag, or by nothing, is a boolean flag. When a flag
/// repeats, its last value and last position win.
pub fn classify(args: &[String]) -> Classification {
    let mut classification = Classification::default();
    let mut consumed = vec![false; args.len()];

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if is_flag_like(arg) {
            classification.positions.insert(arg.clone(), i);
            consumed[i] = true;
            if let Some(next) = args.get(i + 1).filter(|next| !is_flag_like(next)) {
                classification.values.insert(arg.clone(), next.clone());
                consumed[i + 1] = true;
                i += 1;
            }
        }
        i += 1;
    }

    for (idx, arg) in args.iter().enumerate() {
        if !consumed[idx] {
            classification.positionals.push(arg.clone());
            classification.positional_indices.push(idx);
        }
    }

    trace!(
        flags = classification.positions.len(),
        positionals = classification.positionals.len(),
        "classified tokens"
    );
    classification
}

/// Classify tokens that follow `--`: every one of them is positional.
pub fn classify_literal(args: &[String]) -> Classification {
    Classification {
        positionals: args.to_vec(),
        positional_indices: (0..args.len()).collect(),
        ..Classification::default()
    }
}
