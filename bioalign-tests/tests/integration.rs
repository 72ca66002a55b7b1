use std::fs;

use anyhow::Result;
use lib_bioalign::{AlignmentMode, score::Score};
use util::{read_alignment, run_in_repo_root, temporary_file};

mod util;

#[test]
fn test_align_global_default_scoring() -> Result<()> {
    let output = temporary_file("global.toml");
    run_in_repo_root(&format!(
        "align -q atcg -s ATCGATCG -o {}",
        output.display()
    ))?;

    let alignment = read_alignment(&output)?;
    assert_eq!(alignment.mode, AlignmentMode::Global);
    assert_eq!(alignment.aligned_query, "ATCG----");
    assert_eq!(alignment.aligned_subject, "ATCGATCG");
    assert_eq!(alignment.score, Score::new(-4.0));
    Ok(())
}

#[test]
fn test_align_local_numeric_mode() -> Result<()> {
    let output = temporary_file("local.toml");
    run_in_repo_root(&format!(
        "align -q GATTACA -s XXGATTACAYY -m 2 -o {}",
        output.display()
    ))?;

    let alignment = read_alignment(&output)?;
    assert_eq!(alignment.mode, AlignmentMode::Local);
    assert_eq!(alignment.aligned_query, "..GATTACA..");
    assert_eq!(alignment.aligned_subject, "XXGATTACAYY");
    assert_eq!(alignment.score, Score::new(14.0));
    assert_eq!(alignment.subject_range, 2..9);
    Ok(())
}

#[test]
fn test_align_scoring_file() -> Result<()> {
    let output = temporary_file("affine.toml");
    run_in_repo_root(&format!(
        "align -q ACGT -s AT -c test_files/affine_scoring.txt -o {}",
        output.display()
    ))?;

    let alignment = read_alignment(&output)?;
    assert_eq!(alignment.aligned_query, "ACGT");
    assert_eq!(alignment.aligned_subject, "A--T");
    assert_eq!(alignment.score, Score::new(-2.0));
    Ok(())
}

#[test]
fn test_align_score_overrides() -> Result<()> {
    let output = temporary_file("overrides.toml");
    run_in_repo_root(&format!(
        "align -q ACGT -s AT -c test_files/affine_scoring.txt --match-score 1 --gap-extend-score -2 -o {}",
        output.display()
    ))?;

    // 2 * 1 - 5 - 2
    let alignment = read_alignment(&output)?;
    assert_eq!(alignment.score, Score::new(-5.0));
    Ok(())
}

#[test]
fn test_align_keep_case() -> Result<()> {
    let output = temporary_file("case.toml");
    run_in_repo_root(&format!(
        "align -q acgt -s ACGT --keep-case -o {}",
        output.display()
    ))?;

    let alignment = read_alignment(&output)?;
    assert_eq!(alignment.aligned_query, "acgt");
    assert_eq!(alignment.score, Score::new(-12.0));
    Ok(())
}

#[test]
fn test_align_rejects_invalid_input() {
    assert!(run_in_repo_root("align -q A -s A -m 3").is_err());
    assert!(run_in_repo_root("align -q A -s A -c test_files/broken_scoring.txt").is_err());
    assert!(run_in_repo_root("align -q A -s A -c test_files/missing_scoring.txt").is_err());
    assert!(run_in_repo_root("align -q A -s A --gap-open-score inf").is_err());
}

#[test]
fn test_show() -> Result<()> {
    let alignment = temporary_file("show.toml");
    let rendered = temporary_file("show.txt");
    run_in_repo_root(&format!(
        "align -q GATTACA -s XXGATTACAYY -m local -o {}",
        alignment.display()
    ))?;
    run_in_repo_root(&format!(
        "show -i {} -o {}",
        alignment.display(),
        rendered.display()
    ))?;

    assert_eq!(
        fs::read_to_string(&rendered)?,
        concat!(
            "    1 ..GATTACA. .\n",
            "        ┃┃┃┃┃┃┃\n",
            "    1 XXGATTACAY Y\n",
            "\n",
        )
    );
    Ok(())
}

#[test]
fn test_show_hide_sequences() -> Result<()> {
    let alignment = temporary_file("hidden.toml");
    let rendered = temporary_file("hidden.txt");
    run_in_repo_root(&format!(
        "align -q ACGTACGT -s ACGAACGT -o {}",
        alignment.display()
    ))?;
    run_in_repo_root(&format!(
        "show -i {} -o {} --hide-sequences --spacing 4 -w 4",
        alignment.display(),
        rendered.display()
    ))?;

    assert_eq!(
        fs::read_to_string(&rendered)?,
        "    1 ┃┃┃•\n\n    5 ┃┃┃┃\n\n"
    );
    Ok(())
}

#[test]
fn test_show_rejects_zero_width() -> Result<()> {
    let alignment = temporary_file("zero.toml");
    run_in_repo_root(&format!("align -q A -s A -o {}", alignment.display()))?;
    assert!(run_in_repo_root(&format!("show -i {} -w 0", alignment.display())).is_err());
    Ok(())
}
