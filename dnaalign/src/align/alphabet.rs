use anyhow::{Result, anyhow};
use clap::ValueEnum;
use compact_genome::{
    implementation::{
        alphabets::{
            dna_alphabet::DnaAlphabet, dna_alphabet_or_n::DnaAlphabetOrN,
            dna_iupac_nucleic_acid_alphabet::DnaIupacNucleicAcidAlphabet,
            rna_alphabet::RnaAlphabet, rna_alphabet_or_n::RnaAlphabetOrN,
            rna_iupac_nucleic_acid_alphabet::RnaIupacNucleicAcidAlphabet,
        },
        vec_sequence::VectorGenome,
    },
    interface::{alphabet::Alphabet, sequence::OwnedGenomeSequence},
};
use log::debug;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum InputAlphabet {
    /// Any characters, compared case-sensitively.
    Any,
    Dna,
    DnaN,
    Rna,
    RnaN,
    DnaIupac,
    RnaIupac,
}

impl InputAlphabet {
    /// Converts the sequence to upper case and checks that all its characters belong to the alphabet.
    ///
    /// Sequences over [`InputAlphabet::Any`] are returned unchanged.
    pub fn prepare_sequence(&self, name: &str, sequence: String) -> Result<String> {
        match self {
            Self::Any => Ok(sequence),
            Self::Dna => check_sequence::<DnaAlphabet>(name, sequence),
            Self::DnaN => check_sequence::<DnaAlphabetOrN>(name, sequence),
            Self::Rna => check_sequence::<RnaAlphabet>(name, sequence),
            Self::RnaN => check_sequence::<RnaAlphabetOrN>(name, sequence),
            Self::DnaIupac => check_sequence::<DnaIupacNucleicAcidAlphabet>(name, sequence),
            Self::RnaIupac => check_sequence::<RnaIupacNucleicAcidAlphabet>(name, sequence),
        }
    }
}

fn check_sequence<AlphabetType: Alphabet>(name: &str, mut sequence: String) -> Result<String> {
    sequence.make_ascii_uppercase();
    VectorGenome::<AlphabetType>::from_slice_u8(sequence.as_bytes())
        .map_err(|error| anyhow!("{name} contains non-alphabet character: {error}"))?;
    debug!("{name} matches the alphabet");
    Ok(sequence)
}
