//! Replay house transitions given as text.
//!
//! Each line is a transition name followed by whitespace-separated arguments,
//! e.g. `ADD_BLOCK WALL` or `UPDATE_BLOCK_PROPS @1 label=Front`. Ids are
//! random, so `@N` stands for the id of the N-th placed block (1-based) at
//! the time the line is applied.

use tutor_model::{ModelError, Result};
use tutor_store::{HouseAction, HouseState, Store};

/// Parse one transition line against the current state.
pub fn parse_line(line: &str, state: &HouseState) -> Result<HouseAction> {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Err(ModelError::MalformedTransition {
            transition: String::new(),
            reason: "empty transition".to_string(),
        });
    };

    let args = tokens
        .map(|token| resolve_reference(token, state))
        .collect::<Result<Vec<_>>>()?;
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    HouseAction::parse(name, &args)
}

/// Replace an `@N` token with the id of the N-th block.
fn resolve_reference(token: &str, state: &HouseState) -> Result<String> {
    let Some(position) = token.strip_prefix('@') else {
        return Ok(token.to_string());
    };
    position
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| state.blocks().get(index))
        .map(|block| block.id().to_string())
        .ok_or_else(|| ModelError::InvalidBlockId(token.to_string()))
}

/// Apply every line in order to a fresh house store.
///
/// Stops at the first line that does not parse.
pub fn replay<I, L>(lines: I) -> Result<Store<HouseState>>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut store = Store::<HouseState>::default();
    for line in lines {
        let action = parse_line(line.as_ref(), store.state())?;
        store.dispatch(action);
    }
    Ok(store)
}
