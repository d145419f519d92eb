/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use sortmerge::error::{MergeError, Side};
use sortmerge::{merge, seq, util};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "sortmerge", setting = AppSettings::AllowNegativeNumbers)]
struct Opt {
    /// Sequence A, e.g. "1,2,3" (a file path with --files). A list starting
    /// with a negative number needs brackets ("[-3,1]") or a preceding "--"
    #[structopt(name = "a")]
    a: String,

    /// Sequence B, same format as A
    #[structopt(name = "b")]
    b: String,

    /// Number of meaningful elements in A; when omitted all of A is used
    /// and room for B is appended
    #[structopt(short, long)]
    m: Option<i64>,

    /// Number of elements of B to merge [default: length of B]
    #[structopt(short, long)]
    n: Option<i64>,

    /// Read A and B from files instead of inline lists
    #[structopt(long)]
    files: bool,

    /// Fail if either input is not sorted
    #[structopt(long)]
    check_sorted: bool,

    /// Cross-check the result against an allocating merge
    #[structopt(long)]
    verify: bool,
}

fn load(arg: &str, files: bool) -> Result<Vec<i64>> {
    use std::fs::File;
    use std::io::BufReader;

    if files {
        let file = File::open(arg).with_context(|| format!("can't open {}", arg))?;
        seq::read_seq(&mut BufReader::new(file)).with_context(|| format!("can't read {}", arg))
    } else {
        seq::parse_list(arg).with_context(|| format!("can't parse {:?}", arg))
    }
}

// resolves the counts, growing A when it was given without placeholder slots
fn prepare(
    mut a: Vec<i64>,
    m: Option<i64>,
    b_len: usize,
    n: Option<i64>,
) -> Result<(Vec<i64>, usize, usize)> {
    let pad = m.is_none();

    let (m, n) = merge::counts_from_signed(
        m.unwrap_or(a.len() as i64),
        n.unwrap_or(b_len as i64),
    )?;

    // bounds on b come first so a bogus -n can't drive the allocation
    if n > b_len {
        return Err(MergeError::SourceTooShort {
            len: b_len,
            required: n,
        }
        .into());
    }

    if pad {
        a.resize(a.len() + n, 0);
    }

    Ok((a, m, n))
}

fn run(opt: &Opt) -> Result<Vec<i64>> {
    let a = load(&opt.a, opt.files)?;
    let b = load(&opt.b, opt.files)?;

    let (mut a, m, n) = prepare(a, opt.m, b.len(), opt.n)?;

    merge::check_bounds(a.len(), m, b.len(), n)?;

    if opt.check_sorted {
        util::check_sorted(&a[..m], Side::A)?;
        util::check_sorted(&b[..n], Side::B)?;
    } else if util::first_unsorted(&a[..m]).is_some() || util::first_unsorted(&b[..n]).is_some() {
        warn!("input is not sorted, result will not be either");
    }

    let expected = if opt.verify {
        Some(util::sorted_merge(&a[..m], &b[..n]))
    } else {
        None
    };

    merge::merge_into(&mut a, m, &b, n)?;
    a.truncate(m + n);

    info!("merged {} + {} element(s)", m, n);

    if let Some(expected) = expected {
        if a != expected {
            bail!(
                "in-place merge {} disagrees with reference merge {}",
                seq::format_list(&a),
                seq::format_list(&expected)
            );
        }
    }

    Ok(a)
}

fn main() -> Result<()> {
    env_logger::builder().format_timestamp(None).init();

    let opt = Opt::from_args();
    let merged = run(&opt)?;

    println!("{}", seq::format_list(&merged));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(args: &[&str]) -> Opt {
        let mut argv = vec!["sortmerge"];
        argv.extend_from_slice(args);
        Opt::from_iter(argv)
    }

    #[test]
    fn explicit_counts() {
        let merged = run(&opt(&["1,2,3,0,0,0", "2,5,6", "-m", "3", "-n", "3"])).unwrap();
        assert_eq!(merged, vec![1, 2, 2, 3, 5, 6]);
    }

    #[test]
    fn pads_destination_when_m_is_omitted() {
        let merged = run(&opt(&["[4, 5, 6]", "[4, 4, 6]", "--verify"])).unwrap();
        assert_eq!(merged, vec![4, 4, 4, 5, 6, 6]);
    }

    #[test]
    fn empty_sides() {
        assert_eq!(run(&opt(&["1", "[]"])).unwrap(), vec![1]);
        assert_eq!(run(&opt(&["[]", "1"])).unwrap(), vec![1]);
    }

    #[test]
    fn negative_count_is_reported() {
        let err = run(&opt(&["1,0", "2", "-m", "-1"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MergeError>(),
            Some(&MergeError::NegativeCount {
                which: Side::A,
                value: -1
            })
        );
    }

    #[test]
    fn missing_room_is_reported() {
        let err = run(&opt(&["1,2", "3", "-m", "2"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MergeError>(),
            Some(&MergeError::DestinationTooShort {
                len: 2,
                required: 3
            })
        );
    }

    #[test]
    fn oversized_source_count_is_reported() {
        let err = run(&opt(&["1", "2", "-n", "4611686018427387904"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MergeError>(),
            Some(&MergeError::SourceTooShort {
                len: 1,
                required: 4611686018427387904
            })
        );

        let err = run(&opt(&["1,0,0", "2", "-m", "1", "-n", "2"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MergeError>(),
            Some(&MergeError::SourceTooShort {
                len: 1,
                required: 2
            })
        );
    }

    #[test]
    fn partial_source_is_padded_for() {
        let merged = run(&opt(&["1,4", "2,3,9", "-n", "2", "--verify"])).unwrap();
        assert_eq!(merged, vec![1, 2, 3, 4]);
    }

    #[test]
    fn verify_catches_unsorted_input() {
        // backward merge leaves [3, 1, 2], the forward merge gives [2, 3, 1]
        let err = run(&opt(&["3,1", "2", "--verify"])).unwrap_err();
        assert!(err.to_string().contains("disagrees with reference merge"));
    }

    #[test]
    fn bracketed_negative_list() {
        let merged = run(&opt(&["[-3,1]", "-2"])).unwrap();
        assert_eq!(merged, vec![-3, -2, 1]);
    }

    #[test]
    fn unsorted_input_is_rejected_on_request() {
        let err = run(&opt(&["3,1", "2", "--check-sorted"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MergeError>(),
            Some(&MergeError::Unsorted {
                which: Side::A,
                index: 1
            })
        );
    }

    #[test]
    fn reads_files() {
        use std::io::Write;

        let dir = std::env::temp_dir();
        let a_path = dir.join(format!("sortmerge-a-{}.txt", std::process::id()));
        let b_path = dir.join(format!("sortmerge-b-{}.txt", std::process::id()));

        writeln!(std::fs::File::create(&a_path).unwrap(), "; a\n1 3\n5").unwrap();
        writeln!(std::fs::File::create(&b_path).unwrap(), "2\n4").unwrap();

        let merged = run(&opt(&[
            a_path.to_str().unwrap(),
            b_path.to_str().unwrap(),
            "--files",
        ]))
        .unwrap();

        std::fs::remove_file(&a_path).unwrap();
        std::fs::remove_file(&b_path).unwrap();

        assert_eq!(merged, vec![1, 2, 3, 4, 5]);
    }
}
