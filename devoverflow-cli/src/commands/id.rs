//! Id command - generate short random identifiers

use anyhow::Result;

use devoverflow_core::generate_id;

use crate::output;

pub fn run(count: usize, json: bool) -> Result<()> {
    let ids: Vec<String> = (0..count).map(|_| generate_id()).collect();

    if json {
        return output::json(ids);
    }

    for id in &ids {
        println!("{}", id);
    }
    Ok(())
}
