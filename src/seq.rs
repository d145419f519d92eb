/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseSeqError
{
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("invalid integer {token:?}")]
    ParseInt
    {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Unbalanced bracket")]
    UnbalancedBracket,
}

/// Parses integers separated by commas and/or whitespace, e.g. `1 2 3`,
/// `1,2,3` or `[1, 2, 3]`.
pub fn parse_list(text: &str) -> Result<Vec<i64>, ParseSeqError>
{
    let text = text.trim();

    let text = match (text.starts_with('['), text.ends_with(']'))
    {
        (true, true) if text.len() >= 2 => &text[1 .. text.len()-1],
        (false, false) => text,
        _ => return Err(ParseSeqError::UnbalancedBracket),
    };

    let mut result = vec![];

    for token in text.split(|c: char| c == ',' || c.is_whitespace())
    {
        if token.is_empty() {
            continue; }

        let value = token.parse::<i64>().map_err(|source| ParseSeqError::ParseInt {
            token: token.to_string(),
            source,
        })?;

        result.push(value);
    }

    Ok(result)
}

/// Reads a sequence spread over any number of lines. Blank lines and lines
/// starting with `;` are skipped.
pub fn read_seq<R>(read: &mut R) -> Result<Vec<i64>, ParseSeqError>
    where R: BufRead
{
    let mut result = vec![];

    for line in read.lines()
    {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with(';') {
            continue; }

        result.extend(parse_list(line)?);
    }

    Ok(result)
}

pub fn format_list(seq: &[i64]) -> String
{
    format!("{:?}", seq)
}
