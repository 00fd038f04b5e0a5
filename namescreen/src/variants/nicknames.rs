//! Static nickname lookup table.
//!
//! Covers the common English given-name hypocorisms; both directions are
//! derivable (formal -> nicknames, nickname -> formal) so screening a
//! target entered under either form still widens recall.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Formal first name -> common nicknames.
pub static NICKNAMES: &[(&str, &[&str])] = &[
    ("james", &["jim", "jimmy"]),
    ("william", &["bill", "billy", "will"]),
    ("robert", &["bob", "bobby", "rob", "robbie"]),
    ("michael", &["mike", "mickey"]),
    ("john", &["jack", "johnny"]),
    ("richard", &["rick", "ricky", "dick"]),
    ("joseph", &["joe", "joey"]),
    ("thomas", &["tom", "tommy"]),
    ("charles", &["charlie", "chuck"]),
    ("elizabeth", &["liz", "beth", "betty"]),
    ("margaret", &["maggie", "peggy", "meg"]),
    ("katherine", &["kate", "katie", "kathy"]),
];

lazy_static! {
    static ref FORMAL_TO_NICKS: HashMap<&'static str, &'static [&'static str]> =
        NICKNAMES.iter().copied().collect();
    static ref NICK_TO_FORMAL: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        for (formal, nicks) in NICKNAMES {
            for nick in *nicks {
                map.insert(*nick, *formal);
            }
        }
        map
    };
}

/// All known substitutions for a lowercased first name: its nicknames if it
/// is a formal name, or the formal name (plus sibling nicknames) if it is
/// itself a nickname.
pub fn substitutions(first: &str) -> Vec<&'static str> {
    let mut out = Vec::new();

    if let Some(nicks) = FORMAL_TO_NICKS.get(first) {
        out.extend(nicks.iter().copied());
    }

    if let Some(formal) = NICK_TO_FORMAL.get(first) {
        out.push(*formal);
        if let Some(siblings) = FORMAL_TO_NICKS.get(formal) {
            out.extend(siblings.iter().copied().filter(|n| *n != first));
        }
    }

    out
}
