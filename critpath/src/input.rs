//! Line-oriented task definition reader.
//!
//! One task per line: `<id> <duration> [dep ...]`. Dependencies may be
//! separated by whitespace or commas. Blank lines and lines starting with
//! `#` are skipped.

use std::io::BufRead;

use anyhow::{bail, Context, Result};

use crate::models::TaskDef;

/// Read task definitions until end of input.
pub fn read_defs<R: BufRead>(reader: R) -> Result<Vec<TaskDef>> {
    let mut defs = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading task definitions, line {}", number + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let id = match tokens.next() {
            Some(id) => id,
            None => continue,
        };
        let Some(duration_token) = tokens.next() else {
            bail!("line {}: task {:?} is missing a duration", number + 1, id);
        };
        let duration: i64 = duration_token.parse().with_context(|| {
            format!(
                "line {}: task {:?} has unreadable duration {:?}",
                number + 1,
                id,
                duration_token
            )
        })?;

        let deps = tokens
            .flat_map(|token| token.split(','))
            .filter(|dep| !dep.is_empty())
            .map(str::to_string);

        defs.push(TaskDef::new(id, duration).after(deps));
    }

    Ok(defs)
}
