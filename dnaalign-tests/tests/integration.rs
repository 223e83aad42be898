use anyhow::Result;
use util::{output_file, read_output, run_in_repo_root};

mod util;

fn string<'table>(table: &'table toml::Table, key: &str) -> &'table str {
    table[key].as_str().unwrap()
}

#[test]
fn test_align_global_sample_cfg() -> Result<()> {
    let output = output_file("global_sample_cfg");
    run_in_repo_root(&format!(
        "dnaalign -p repo:test_files/gattaca.txt -c repo:sample_config -o {}",
        output.display()
    ))?;

    let output = read_output(&output)?;
    assert_eq!(output["score"].as_integer(), Some(-1));
    assert_eq!(string(&output, "aligned1"), "GATTACA");
    assert_eq!(string(&output, "aligned2"), "GCATGCU");
    assert_eq!(string(&output, "cigar"), "1M2S1M1S1M1S");
    Ok(())
}

#[test]
fn test_align_local_sample_cfg() -> Result<()> {
    let output = output_file("local_sample_cfg");
    run_in_repo_root(&format!(
        "dnaalign -m local -p repo:test_files/gattaca.txt -c repo:sample_config -o {}",
        output.display()
    ))?;

    let output = read_output(&output)?;
    assert_eq!(output["score"].as_integer(), Some(2));
    assert_eq!(string(&output, "aligned1"), "G-AT");
    assert_eq!(string(&output, "aligned2"), "GCAT");

    let seq2_range = output["seq2_range"].as_table().unwrap();
    assert_eq!(seq2_range["start"].as_integer(), Some(0));
    assert_eq!(seq2_range["end"].as_integer(), Some(4));
    Ok(())
}

#[test]
fn test_align_gap_law() -> Result<()> {
    let output = output_file("gap_law");
    run_in_repo_root(&format!(
        "dnaalign -a dna -p repo:test_files/gap_law.txt -c repo:test_files/gap_law_config -o {}",
        output.display()
    ))?;

    let output = read_output(&output)?;
    assert_eq!(output["score"].as_integer(), Some(-3));
    assert_eq!(string(&output, "aligned1"), "AAAAA");
    assert_eq!(string(&output, "aligned2"), "---AA");
    assert_eq!(string(&output, "cigar"), "3D2M");
    Ok(())
}

#[test]
fn test_align_command_line_scoring() -> Result<()> {
    let output = output_file("command_line_scoring");
    run_in_repo_root(&format!(
        "dnaalign -p repo:test_files/gap_law.txt --mismatch-penalty 10 -o {}",
        output.display()
    ))?;

    let output = read_output(&output)?;
    assert_eq!(output["score"].as_integer(), Some(-3));
    Ok(())
}

#[test]
fn test_align_inline_and_dna_alphabet() -> Result<()> {
    let output = output_file("inline_dna_alphabet");
    run_in_repo_root(&format!(
        "dnaalign -a dna --seq1 acgtacgt --seq2 ACGTTACGT -o {}",
        output.display()
    ))?;

    let output = read_output(&output)?;
    assert_eq!(output["score"].as_integer(), Some(5));
    assert_eq!(string(&output, "aligned1"), "ACG-TACGT");
    assert_eq!(string(&output, "cigar"), "3M1I5M");
    Ok(())
}

#[test]
fn test_align_crlf_pair_file() -> Result<()> {
    let output = output_file("crlf_pair_file");
    run_in_repo_root(&format!(
        "dnaalign -a dna-n -p repo:test_files/lower_case_crlf.txt -o {}",
        output.display()
    ))?;

    let output = read_output(&output)?;
    assert_eq!(output["score"].as_integer(), Some(5));
    assert_eq!(string(&output, "aligned2"), "ACGTTACGT");
    Ok(())
}

#[test]
fn test_align_local_without_common_symbols() -> Result<()> {
    let output = output_file("local_without_common_symbols");
    run_in_repo_root(&format!(
        "dnaalign -m local -p repo:test_files/no_common_symbols.txt -o {}",
        output.display()
    ))?;

    let output = read_output(&output)?;
    assert_eq!(output["score"].as_integer(), Some(0));
    assert_eq!(string(&output, "aligned1"), "");
    assert_eq!(string(&output, "aligned2"), "");
    assert_eq!(string(&output, "cigar"), "");
    Ok(())
}

#[test]
fn test_align_without_output_file() -> Result<()> {
    run_in_repo_root("dnaalign -m local --seq1 ACGT --seq2 TTACGTAA --match-reward 2")
}

#[test]
fn test_reject_three_lines() {
    assert!(run_in_repo_root("dnaalign -p repo:test_files/three_lines.txt").is_err());
}

#[test]
fn test_reject_missing_pair_file() {
    assert!(run_in_repo_root("dnaalign -p repo:test_files/does_not_exist.txt").is_err());
}

#[test]
fn test_reject_missing_input() {
    assert!(run_in_repo_root("dnaalign -m local").is_err());
}

#[test]
fn test_reject_foreign_characters() {
    assert!(run_in_repo_root("dnaalign -a rna -p repo:test_files/gattaca.txt").is_err());
}

#[test]
fn test_reject_invalid_scoring() {
    assert!(run_in_repo_root("dnaalign -p repo:test_files/gattaca.txt --match-reward=0").is_err());
    assert!(
        run_in_repo_root("dnaalign -p repo:test_files/gattaca.txt --gap-extend=-1").is_err()
    );
}

#[test]
fn test_reject_scoring_of_other_method() {
    assert!(
        run_in_repo_root("dnaalign -m local -p repo:test_files/gattaca.txt --gap-open 1").is_err()
    );
    assert!(run_in_repo_root("dnaalign -p repo:test_files/gattaca.txt --indel-penalty 1").is_err());
}

#[test]
fn test_reject_conflicting_input() {
    assert!(
        run_in_repo_root("dnaalign -p repo:test_files/gattaca.txt --seq1 A --seq2 C").is_err()
    );
}
