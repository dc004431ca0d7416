use genotype::{Allele, Genotype, PopulationTable, RawProfile};

pub fn allele(token: &str) -> Allele {
    token.parse().expect("invalid test allele")
}

pub fn genotype(a: &str, b: &str) -> Genotype {
    Genotype::new([allele(a), allele(b)])
}

pub fn raw_profile(loci: &[(&str, &[&str])]) -> RawProfile {
    loci.iter()
        .map(|(marker, alleles)| {
            ((*marker).to_string(), alleles.iter().map(|token| allele(token)).collect())
        })
        .collect()
}

/// A small frequency table, loosely modeled on published STR allele
/// frequencies for a handful of CODIS markers.
pub fn mock_population() -> PopulationTable {
    let mut table = PopulationTable::new();
    let entries = [
        ("CSF1PO", "13",   0.2),
        ("CSF1PO", "14",   0.3),
        ("CSF1PO", "15",   0.1),
        ("CSF1PO", "16",   0.05),
        ("TH01",   "6",    0.25),
        ("TH01",   "7",    0.2),
        ("TH01",   "9.3",  0.15),
        ("D21S11", "29",   0.2),
        ("D21S11", "30",   0.25),
        ("D21S11", "31.2", 0.1),
    ];
    for (marker, token, frequency) in entries {
        table.insert(marker, allele(token), frequency);
    }
    table
}
