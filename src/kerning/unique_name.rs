//! Collision-free group names

use std::collections::HashSet;
use tracing::trace;

/// Return `candidate`, or `candidate` followed by the smallest positive
/// decimal counter, whichever is first absent from `taken`.
///
/// Every counter value yields a distinct trial name, so at most
/// `taken.len() + 1` names are tried.
pub fn make_unique(candidate: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(candidate) {
        return candidate.to_string();
    }

    let mut counter: usize = 1;
    loop {
        let trial = format!("{candidate}{counter}");
        if !taken.contains(&trial) {
            trace!("Group name {:?} is taken, using {:?}", candidate, trial);
            return trial;
        }
        counter += 1;
    }
}
